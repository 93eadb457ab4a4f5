//! The spline instance handed to consumers.
//!
//! A [`CatmullRomSpline`] only exists in a built state: construction runs the
//! builder and fails on invalid input, and every reconfiguration rebuilds into
//! a fresh [`SplineGeometry`] before swapping it in. A failed rebuild leaves
//! the previous configuration and geometry untouched.

use glam::Vec3;
use spline_config::SplineConfig;
use tracing::debug;

#[cfg(feature = "bevy")]
use bevy::prelude::Component;

use crate::arc_length::{self, SegmentHint};
use crate::builder::build;
use crate::source::{PositionSource, sample_positions};
use crate::types::{SplineGeometry, SplineSample};
use crate::validation::SplineError;

/// Catmull-Rom spline through a fixed set of control points.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bevy", derive(Component))]
pub struct CatmullRomSpline {
    control_points: Vec<Vec3>,
    resolution: usize,
    closed_loop: bool,
    geometry: SplineGeometry,
    hint: SegmentHint,
}

impl CatmullRomSpline {
    /// Build a spline through `control_points`.
    pub fn configure(
        control_points: Vec<Vec3>,
        resolution: usize,
        closed_loop: bool,
    ) -> Result<Self, SplineError> {
        let geometry = build(&control_points, resolution, closed_loop)?;
        Ok(Self {
            control_points,
            resolution,
            closed_loop,
            geometry,
            hint: SegmentHint::default(),
        })
    }

    /// Build a spline through the current positions of `sources`.
    pub fn configure_from_sources<S: PositionSource>(
        sources: &[S],
        resolution: usize,
        closed_loop: bool,
    ) -> Result<Self, SplineError> {
        Self::configure(sample_positions(sources), resolution, closed_loop)
    }

    /// Build a spline using resolution and loop flag from `config`.
    pub fn from_config(
        control_points: Vec<Vec3>,
        config: &SplineConfig,
    ) -> Result<Self, SplineError> {
        Self::configure(control_points, config.resolution, config.closed_loop)
    }

    /// Replace the control points and rebuild.
    pub fn reconfigure_points(&mut self, control_points: Vec<Vec3>) -> Result<(), SplineError> {
        self.rebuild(control_points, self.resolution, self.closed_loop)
    }

    /// Replace the control points with the current positions of `sources`.
    pub fn reconfigure_point_sources<S: PositionSource>(
        &mut self,
        sources: &[S],
    ) -> Result<(), SplineError> {
        self.reconfigure_points(sample_positions(sources))
    }

    /// Change resolution and loop flag, then rebuild.
    pub fn reconfigure_resolution(
        &mut self,
        resolution: usize,
        closed_loop: bool,
    ) -> Result<(), SplineError> {
        let control_points = self.control_points.clone();
        self.rebuild(control_points, resolution, closed_loop)
    }

    /// Apply resolution and loop flag from `config`.
    pub fn apply_config(&mut self, config: &SplineConfig) -> Result<(), SplineError> {
        self.reconfigure_resolution(config.resolution, config.closed_loop)
    }

    fn rebuild(
        &mut self,
        control_points: Vec<Vec3>,
        resolution: usize,
        closed_loop: bool,
    ) -> Result<(), SplineError> {
        let geometry = build(&control_points, resolution, closed_loop)?;

        self.control_points = control_points;
        self.resolution = resolution;
        self.closed_loop = closed_loop;
        self.geometry = geometry;
        self.hint.set(0);

        debug!("Spline rebuilt with {} samples", self.geometry.tessellation.len());
        Ok(())
    }

    /// Point `t * spline_length` along the curve, `t` clamped to `[0, 1]`.
    pub fn position_at(&self, t: f32) -> Vec3 {
        arc_length::position_at(&self.geometry, &self.hint, t)
    }

    /// Position, tangent and normal `t * spline_length` along the curve.
    pub fn sample_at(&self, t: f32) -> SplineSample {
        arc_length::sample_at(&self.geometry, &self.hint, t)
    }

    /// Segment index of the most recent query.
    pub fn last_segment_hint(&self) -> usize {
        self.hint.get()
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.control_points
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn closed_loop(&self) -> bool {
        self.closed_loop
    }

    pub fn config(&self) -> SplineConfig {
        SplineConfig::new(self.resolution, self.closed_loop)
    }

    pub fn geometry(&self) -> &SplineGeometry {
        &self.geometry
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.geometry.tessellation.positions
    }

    pub fn tangents(&self) -> &[Vec3] {
        &self.geometry.tessellation.tangents
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.geometry.tessellation.normals
    }

    pub fn segment_length(&self) -> &[f32] {
        &self.geometry.lengths.segment_length
    }

    pub fn segment_total_length(&self) -> &[f32] {
        &self.geometry.lengths.segment_total_length
    }

    pub fn spline_length(&self) -> f32 {
        self.geometry.lengths.spline_length
    }
}
