//! Arc-length queries over a built spline.
//!
//! A query maps a travel fraction `t` in `[0, 1]` to the point that lies
//! `t * spline_length` along the tessellated polyline. The search starts from
//! a uniform-speed guess and walks forward or backward through the cumulative
//! length table, so smoothly varying `t` (frame-to-frame animation) costs
//! O(1) amortized while an arbitrary jump is at worst O(N).

use std::sync::atomic::{AtomicUsize, Ordering};

use glam::Vec3;
use tracing::trace;

use crate::constants::MIN_SEGMENT_LENGTH;
use crate::hermite::normal_from_tangent;
use crate::types::{ArcLengthTable, SplineGeometry, SplineSample};

/// Most recent segment index returned by a query.
///
/// Only a hint for callers; stale values never affect results. Relaxed
/// atomics keep queries `&self` and let readers share a spline.
#[derive(Debug, Default)]
pub struct SegmentHint(AtomicUsize);

impl SegmentHint {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, segment: usize) {
        self.0.store(segment, Ordering::Relaxed);
    }
}

impl Clone for SegmentHint {
    fn clone(&self) -> Self {
        Self(AtomicUsize::new(self.get()))
    }
}

/// Pair of samples bracketing a target length, plus the blend between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SegmentSpan {
    pub start: usize,
    pub end: usize,
    pub local_t: f32,
}

/// Find the samples bracketing `t * spline_length`.
///
/// `t` must lie strictly inside `(0, 1)`; the query functions clamp before
/// calling this. A table that does not describe `sample_count` samples
/// resolves to the first sample.
pub(crate) fn locate_segment(
    lengths: &ArcLengthTable,
    sample_count: usize,
    t: f32,
) -> SegmentSpan {
    let segments = lengths.segment_count();
    let totals = &lengths.segment_total_length;
    let target = t * lengths.spline_length;

    if segments == 0 || segments > sample_count || totals.len() < segments {
        return SegmentSpan {
            start: 0,
            end: 0,
            local_t: 0.0,
        };
    }

    // Uniform-speed guess; real segment lengths vary
    let guess = ((t * segments as f32) as usize).min(segments - 1);

    let start = if totals[guess] < target {
        match (guess..segments).find(|&i| totals[i] > target) {
            // Step back onto the sample before the first one past the target,
            // resetting to segment 0 -> 1 if that would underflow
            Some(past) => past.checked_sub(1).unwrap_or(0),
            // Target lies on the final segment (the wrap segment for loops)
            None => segments - 1,
        }
    } else {
        (0..=guess)
            .rev()
            .find(|&i| totals[i] <= target)
            .unwrap_or(0)
    };

    // Only a closed loop's last sample wraps back to 0
    let end = (start + 1) % sample_count;

    let length = lengths.segment_length[start];
    let local_t = if length > MIN_SEGMENT_LENGTH {
        ((target - totals[start]) / length).clamp(0.0, 1.0)
    } else {
        0.0
    };

    trace!(
        "Arc-length query t={:.4}: guess={} start={} end={} local_t={:.4}",
        t, guess, start, end, local_t
    );

    SegmentSpan {
        start,
        end,
        local_t,
    }
}

/// Position at travel fraction `t`. Out-of-range `t` is clamped.
pub(crate) fn position_at(geometry: &SplineGeometry, hint: &SegmentHint, t: f32) -> Vec3 {
    let positions = &geometry.tessellation.positions;
    let (Some(first), Some(last)) = (positions.first(), positions.last()) else {
        return Vec3::ZERO;
    };

    if t.is_nan() || t <= 0.0 {
        return *first;
    }
    if t >= 1.0 || positions.len() == 1 {
        return *last;
    }

    let span = locate_segment(&geometry.lengths, positions.len(), t);
    hint.set(span.start);

    positions[span.start].lerp(positions[span.end], span.local_t)
}

/// Position, tangent and normal at travel fraction `t`.
///
/// The tangent is blended between the bracketing samples and renormalized;
/// the normal is derived from it the same way the builder derives normals.
pub(crate) fn sample_at(geometry: &SplineGeometry, hint: &SegmentHint, t: f32) -> SplineSample {
    let tessellation = &geometry.tessellation;
    let count = tessellation
        .len()
        .min(tessellation.tangents.len())
        .min(tessellation.normals.len());
    if count == 0 {
        return SplineSample {
            position: Vec3::ZERO,
            tangent: Vec3::ZERO,
            normal: Vec3::ZERO,
            segment: 0,
        };
    }

    let stored = |index: usize| SplineSample {
        position: tessellation.positions[index],
        tangent: tessellation.tangents[index],
        normal: tessellation.normals[index],
        segment: index,
    };

    if t.is_nan() || t <= 0.0 {
        return stored(0);
    }
    if t >= 1.0 || count == 1 {
        return stored(count - 1);
    }

    let span = locate_segment(&geometry.lengths, count, t);
    hint.set(span.start);

    let tangent = tessellation.tangents[span.start]
        .lerp(tessellation.tangents[span.end], span.local_t)
        .normalize_or_zero();

    SplineSample {
        position: tessellation.positions[span.start]
            .lerp(tessellation.positions[span.end], span.local_t),
        tangent,
        normal: normal_from_tangent(tangent),
        segment: span.start,
    }
}
