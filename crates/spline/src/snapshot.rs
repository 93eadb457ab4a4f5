//! Serializable record of a spline's public data.
//!
//! A snapshot stores the configuration together with the derived arrays so
//! tooling can persist or inspect a spline without rebuilding it. Loading a
//! snapshot always rebuilds from the stored configuration.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::spline::CatmullRomSpline;
use crate::validation::SplineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineSnapshot {
    pub control_points: Vec<Vec3>,
    pub resolution: usize,
    pub closed_loop: bool,
    pub positions: Vec<Vec3>,
    pub tangents: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub segment_length: Vec<f32>,
    pub segment_total_length: Vec<f32>,
    pub spline_length: f32,
}

impl CatmullRomSpline {
    /// Capture the current configuration and tessellation.
    pub fn snapshot(&self) -> SplineSnapshot {
        SplineSnapshot {
            control_points: self.control_points().to_vec(),
            resolution: self.resolution(),
            closed_loop: self.closed_loop(),
            positions: self.positions().to_vec(),
            tangents: self.tangents().to_vec(),
            normals: self.normals().to_vec(),
            segment_length: self.segment_length().to_vec(),
            segment_total_length: self.segment_total_length().to_vec(),
            spline_length: self.spline_length(),
        }
    }

    /// Rebuild a spline from a snapshot's configuration.
    ///
    /// The stored derived arrays are only compared, never trusted.
    pub fn from_snapshot(snapshot: &SplineSnapshot) -> Result<Self, SplineError> {
        let spline = Self::configure(
            snapshot.control_points.clone(),
            snapshot.resolution,
            snapshot.closed_loop,
        )?;

        if spline.positions() != snapshot.positions.as_slice() {
            warn!(
                "Snapshot tessellation is stale ({} stored samples, {} rebuilt)",
                snapshot.positions.len(),
                spline.positions().len()
            );
        }

        Ok(spline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 1.0, 0.0),
            Vec3::new(1.5, 0.0, 2.5),
        ]
    }

    #[test]
    fn test_snapshot_mirrors_spline() {
        let spline = CatmullRomSpline::configure(triangle(), 5, true).unwrap();
        let snapshot = spline.snapshot();

        assert_eq!(snapshot.control_points, triangle());
        assert_eq!(snapshot.positions.len(), 15);
        assert_eq!(snapshot.segment_length.len(), 15);
        assert_eq!(snapshot.spline_length, spline.spline_length());
    }

    #[test]
    fn test_snapshot_json_restores_spline() {
        let spline = CatmullRomSpline::configure(triangle(), 4, false).unwrap();
        let json = serde_json::to_string(&spline.snapshot()).unwrap();

        let parsed: SplineSnapshot = serde_json::from_str(&json).unwrap();
        let restored = CatmullRomSpline::from_snapshot(&parsed).unwrap();
        assert_eq!(restored.geometry(), spline.geometry());
    }

    #[test]
    fn test_stale_snapshot_is_rebuilt() {
        let spline = CatmullRomSpline::configure(triangle(), 4, false).unwrap();
        let mut snapshot = spline.snapshot();
        snapshot.positions.clear();
        snapshot.spline_length = 0.0;

        let restored = CatmullRomSpline::from_snapshot(&snapshot).unwrap();
        assert_eq!(restored.positions(), spline.positions());
    }

    #[test]
    fn test_invalid_snapshot_rejected() {
        let mut snapshot = CatmullRomSpline::configure(triangle(), 4, false)
            .unwrap()
            .snapshot();
        snapshot.resolution = 1;

        assert_eq!(
            CatmullRomSpline::from_snapshot(&snapshot).unwrap_err(),
            SplineError::InvalidResolution(1)
        );
    }
}
