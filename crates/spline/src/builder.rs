//! Catmull-Rom spline builder.
//!
//! Derives Hermite tangents for every control-point segment and samples each
//! segment `resolution` times. Neighbouring segments share their boundary
//! control point: each segment stops one step short of `p1`, which is then
//! produced as the first sample of the next segment. The final segment uses a
//! slightly larger step so that its last sample lands exactly on `p1`.

use glam::Vec3;
use tracing::debug;

use crate::constants::TANGENT_SCALE;
use crate::hermite::{evaluate_position, evaluate_tangent, normal_from_tangent};
use crate::types::{ArcLengthTable, SplineGeometry, Tessellation};
use crate::validation::{SplineError, validate_build};

/// Endpoints and tangents of one Hermite segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentFrame {
    pub p0: Vec3,
    pub p1: Vec3,
    pub m0: Vec3,
    pub m1: Vec3,
}

/// Number of control-point segments the spline is made of.
pub fn segment_count(control_points: usize, closed_loop: bool) -> usize {
    if closed_loop {
        control_points
    } else {
        control_points.saturating_sub(1)
    }
}

/// Endpoints and Catmull-Rom tangents for the segment starting at `index`.
///
/// Open splines fall back to one-sided differences at both ends; closed
/// loops index the control points cyclically.
pub fn segment_frame(control_points: &[Vec3], index: usize, closed_loop: bool) -> SegmentFrame {
    let len = control_points.len();
    let last = len - 1;

    let p0 = control_points[index];
    let p1 = if closed_loop && index == last {
        control_points[0]
    } else {
        control_points[index + 1]
    };

    let previous = match (index, closed_loop) {
        (0, true) => control_points[last],
        (0, false) => p0,
        _ => control_points[index - 1],
    };
    let m0 = p1 - previous;

    // No point past p1 on the penultimate open control point
    let m1 = if !closed_loop && index == len - 2 {
        p1 - p0
    } else {
        control_points[(index + 2) % len] - p0
    };

    SegmentFrame {
        p0,
        p1,
        m0: m0 * TANGENT_SCALE,
        m1: m1 * TANGENT_SCALE,
    }
}

/// Parameter step between samples of segment `index`.
pub fn segment_step(resolution: usize, index: usize, segments: usize) -> f32 {
    if index + 1 == segments {
        1.0 / (resolution - 1) as f32
    } else {
        1.0 / resolution as f32
    }
}

/// Tessellate the spline through `control_points` and measure it.
///
/// Fails without producing any output when there are fewer than three
/// control points or the resolution is below two.
pub fn build(
    control_points: &[Vec3],
    resolution: usize,
    closed_loop: bool,
) -> Result<SplineGeometry, SplineError> {
    validate_build(control_points.len(), resolution)?;

    let segments = segment_count(control_points.len(), closed_loop);
    let mut tessellation = Tessellation::with_len(resolution * segments);

    for index in 0..segments {
        let SegmentFrame { p0, p1, m0, m1 } = segment_frame(control_points, index, closed_loop);
        let step = segment_step(resolution, index, segments);

        for sample in 0..resolution {
            let t = sample as f32 * step;
            let tangent = evaluate_tangent(p0, p1, m0, m1, t);
            let slot = index * resolution + sample;

            tessellation.positions[slot] = evaluate_position(p0, p1, m0, m1, t);
            tessellation.tangents[slot] = tangent;
            tessellation.normals[slot] = normal_from_tangent(tangent);
        }
    }

    let lengths = ArcLengthTable::from_positions(&tessellation.positions, closed_loop);

    debug!(
        "Built spline: {} control points, {} samples, closed={}, length={:.4}",
        control_points.len(),
        tessellation.len(),
        closed_loop,
        lengths.spline_length
    );

    Ok(SplineGeometry {
        tessellation,
        lengths,
    })
}
