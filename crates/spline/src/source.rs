//! Adapters for control points that live on external objects.
//!
//! A spline never holds on to its sources: positions are sampled once when
//! the spline is (re)configured.

use glam::Vec3;

/// Anything with a current world-space position.
pub trait PositionSource {
    fn world_position(&self) -> Vec3;
}

impl PositionSource for Vec3 {
    fn world_position(&self) -> Vec3 {
        *self
    }
}

impl PositionSource for [f32; 3] {
    fn world_position(&self) -> Vec3 {
        Vec3::from_array(*self)
    }
}

impl<T: PositionSource + ?Sized> PositionSource for &T {
    fn world_position(&self) -> Vec3 {
        (**self).world_position()
    }
}

/// Snapshot the current position of every source, in order.
pub fn sample_positions<S: PositionSource>(sources: &[S]) -> Vec<Vec3> {
    sources.iter().map(PositionSource::world_position).collect()
}
