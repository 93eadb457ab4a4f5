//! Catmull-Rom spline tessellation and arc-length queries.
//!
//! A spline is built once per configuration change and queried many times:
//!
//! - [`hermite`] - Cubic Hermite position/tangent evaluation and normals
//! - [`builder`] - Catmull-Rom tangents, per-segment sampling, length table
//! - [`arc_length`] - Constant-speed position queries via guided search
//! - [`spline`] - [`CatmullRomSpline`], the owned, always-built instance
//! - [`source`] - Adapters for control points on external objects
//! - [`snapshot`] - Serializable record of a spline's public data
//! - [`debug_draw`] - Read-only line lists for previews
//! - [`follower`] - Fixed-timestep constant-speed driver
//!
//! Build and preview settings come from the `spline-config` crate.

pub mod arc_length;
pub mod builder;
pub mod constants;
pub mod debug_draw;
pub mod follower;
pub mod hermite;
pub mod snapshot;
pub mod source;
pub mod spline;
pub mod types;
pub mod validation;

pub use arc_length::SegmentHint;
pub use builder::{SegmentFrame, build};
pub use constants::*;
pub use debug_draw::{DebugLine, LineVertex};
pub use follower::SplineFollower;
pub use snapshot::SplineSnapshot;
pub use source::{PositionSource, sample_positions};
pub use spline::CatmullRomSpline;
pub use spline_config::{PreviewConfig, SplineConfig};
pub use types::*;
pub use validation::*;
