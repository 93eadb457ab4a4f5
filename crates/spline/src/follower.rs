//! Fixed-timestep driver that moves a point along a spline at constant speed.

use glam::Vec3;

#[cfg(feature = "bevy")]
use bevy::prelude::Component;

use crate::spline::CatmullRomSpline;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy", derive(Component))]
pub struct SplineFollower {
    /// Travel fraction in `[0, 1)`
    pub t: f32,
    /// Fraction of the spline travelled per second
    pub speed: f32,
}

impl Default for SplineFollower {
    fn default() -> Self {
        Self { t: 0.0, speed: 0.01 }
    }
}

impl SplineFollower {
    pub fn new(speed: f32) -> Self {
        Self { t: 0.0, speed }
    }

    /// Advance by one timestep and return the new position.
    ///
    /// Restarts from the beginning once the end is reached.
    pub fn advance(&mut self, spline: &CatmullRomSpline, delta_seconds: f32) -> Vec3 {
        self.t += self.speed * delta_seconds;
        if self.t >= 1.0 {
            self.t = 0.0;
        }
        spline.position_at(self.t)
    }
}
