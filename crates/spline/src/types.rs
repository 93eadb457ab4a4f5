//! Tessellated spline data.
//!
//! Both structures are produced together by [`crate::builder::build`] and are
//! only ever replaced as a pair.

use glam::Vec3;
use serde::Serialize;
use tracing::warn;

use crate::constants::MIN_SEGMENT_LENGTH;

/// Dense samples along the curve, in traversal order.
///
/// The three arrays always have the same length. Only the builder produces
/// these; persisted splines go through [`crate::SplineSnapshot`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tessellation {
    pub positions: Vec<Vec3>,
    /// Unit tangents (zero where the curve derivative vanished)
    pub tangents: Vec<Vec3>,
    /// Half-length normals derived from the tangents
    pub normals: Vec<Vec3>,
}

impl Tessellation {
    /// Allocate `count` zeroed samples.
    pub fn with_len(count: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; count],
            tangents: vec![Vec3::ZERO; count],
            normals: vec![Vec3::ZERO; count],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Cumulative arc-length table over a tessellation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArcLengthTable {
    /// Distance from sample `i` to sample `i + 1`. For closed loops the last
    /// entry is the wrap-around distance back to sample 0.
    pub segment_length: Vec<f32>,
    /// Distance travelled from sample 0 to sample `i`
    pub segment_total_length: Vec<f32>,
    /// Sum of every entry in `segment_length`
    pub spline_length: f32,
}

impl ArcLengthTable {
    /// Walk consecutive positions and accumulate their distances.
    pub fn from_positions(positions: &[Vec3], closed_loop: bool) -> Self {
        let count = positions.len();
        if count == 0 {
            return Self::default();
        }

        let segment_count = if closed_loop { count } else { count - 1 };
        let mut segment_length = Vec::with_capacity(segment_count);
        let mut segment_total_length = Vec::with_capacity(count);
        let mut spline_length = 0.0;

        segment_total_length.push(0.0);
        for pair in positions.windows(2) {
            let length = pair[0].distance(pair[1]);
            segment_length.push(length);
            spline_length += length;
            segment_total_length.push(spline_length);
        }

        if closed_loop {
            let wrap = positions[count - 1].distance(positions[0]);
            segment_length.push(wrap);
            spline_length += wrap;
        }

        let degenerate = segment_length
            .iter()
            .filter(|length| **length < MIN_SEGMENT_LENGTH)
            .count();
        if degenerate > 0 {
            warn!(
                "Arc-length table has {} zero-length segments out of {}",
                degenerate,
                segment_length.len()
            );
        }

        Self {
            segment_length,
            segment_total_length,
            spline_length,
        }
    }

    /// Number of entries in `segment_length`.
    pub fn segment_count(&self) -> usize {
        self.segment_length.len()
    }
}

/// A fully built spline: tessellation plus its arc-length table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SplineGeometry {
    pub tessellation: Tessellation,
    pub lengths: ArcLengthTable,
}

/// Result of an arc-length query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSample {
    pub position: Vec3,
    pub tangent: Vec3,
    pub normal: Vec3,
    /// Index of the sample the query started interpolating from
    pub segment: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_table() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 2.0, 0.0)];
        let table = ArcLengthTable::from_positions(&positions, false);

        assert_eq!(table.segment_length, vec![1.0, 2.0]);
        assert_eq!(table.segment_total_length, vec![0.0, 1.0, 3.0]);
        assert_eq!(table.spline_length, 3.0);
    }

    #[test]
    fn test_closed_table_has_wrap_entry() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y];
        let table = ArcLengthTable::from_positions(&positions, true);

        assert_eq!(table.segment_count(), 4);
        assert_eq!(table.segment_total_length.len(), 4);
        assert_eq!(table.segment_length[3], 1.0);
        assert_eq!(table.spline_length, 4.0);
    }

    #[test]
    fn test_empty_table() {
        let table = ArcLengthTable::from_positions(&[], true);
        assert_eq!(table, ArcLengthTable::default());
    }

    #[test]
    fn test_with_len_is_parallel() {
        let tessellation = Tessellation::with_len(6);
        assert_eq!(tessellation.len(), 6);
        assert_eq!(tessellation.tangents.len(), 6);
        assert_eq!(tessellation.normals.len(), 6);
        assert!(Tessellation::default().is_empty());
    }
}
