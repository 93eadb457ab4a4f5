//! Shared configuration for spline building and preview
//!
//! This crate is the single source of truth for the settings that drive a
//! Catmull-Rom spline rebuild (resolution, loop flag) and the editor-side
//! preview toggles used by debug drawing.

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Default number of tessellated samples per control-point segment
pub const DEFAULT_RESOLUTION: usize = 2;

/// Smallest resolution a spline can be built with
pub const MIN_RESOLUTION: usize = 2;

/// Upper bound of the editor resolution slider. Not enforced by the builder.
pub const MAX_EDITOR_RESOLUTION: usize = 100;

/// Smallest number of control points a spline can be built from
pub const MIN_CONTROL_POINTS: usize = 3;

/// Upper bound of the normal/tangent extrusion sliders
pub const MAX_EXTRUSION: f32 = 3.0;

/// Settings that feed a spline rebuild
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct SplineConfig {
    /// Samples generated per control-point segment
    pub resolution: usize,
    /// Join the last control point back to the first
    pub closed_loop: bool,
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            closed_loop: false,
        }
    }
}

impl SplineConfig {
    /// Create a config with the given resolution and loop flag
    pub fn new(resolution: usize, closed_loop: bool) -> Self {
        Self {
            resolution,
            closed_loop,
        }
    }

    /// Clamp the resolution into the editor slider range
    pub fn clamped(self) -> Self {
        Self {
            resolution: self.resolution.clamp(MIN_RESOLUTION, MAX_EDITOR_RESOLUTION),
            ..self
        }
    }
}

/// Editor preview toggles, consumed by debug drawing only
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct PreviewConfig {
    /// Draw the tessellated polyline
    pub preview_spline: bool,
    /// Draw per-sample normals
    pub draw_normals: bool,
    /// Length multiplier for normal lines
    pub normal_extrusion: f32,
    /// Draw per-sample tangents
    pub draw_tangents: bool,
    /// Length multiplier for tangent lines
    pub tangent_extrusion: f32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            preview_spline: false,
            draw_normals: false,
            normal_extrusion: 0.0,
            draw_tangents: false,
            tangent_extrusion: 0.0,
        }
    }
}

impl PreviewConfig {
    /// Clamp extrusion lengths into the slider range
    pub fn clamped(self) -> Self {
        Self {
            normal_extrusion: self.normal_extrusion.clamp(0.0, MAX_EXTRUSION),
            tangent_extrusion: self.tangent_extrusion.clamp(0.0, MAX_EXTRUSION),
            ..self
        }
    }
}
