pub use spline_config::{MIN_CONTROL_POINTS, MIN_RESOLUTION};

use glam::Vec3;

/// Scale applied to neighbor differences to get Catmull-Rom tangents.
pub const TANGENT_SCALE: f32 = 0.5;

/// Normals are half unit length. Visual parity with existing scenes.
pub const NORMAL_SCALE: f32 = 0.5;

/// World up axis used to derive normals from tangents.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Segments shorter than this are treated as zero length during queries.
pub const MIN_SEGMENT_LENGTH: f32 = 1e-6;
