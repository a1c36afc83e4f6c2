//! Straight-line segmentation.
//!
//! A line is cut into equal pieces no longer than the configured maximum
//! segment length. Cartesian machines gain nothing from this, but machines
//! with rotational joints need short segments to stay close to the
//! straight path, so a generous segment length simply avoids the overhead.

use libm::ceil;

use super::milestone::{displacement, magnitude, Milestone};

/// Iterator over the milestones of one straight move.
///
/// Yields `segments` milestones: `segments - 1` interpolated points followed
/// by the exact target. A zero-length move yields nothing.
#[derive(Debug, Clone)]
pub struct LineSegments {
    start: [f64; 3],
    target: [f64; 3],
    delta: [f64; 3],
    rate: f64,
    distance: f64,
    segments: u32,
    // Wide enough to step past a saturated `segments`
    next: u64,
}

impl LineSegments {
    /// Plan the segmentation of a move from `start` to `target`.
    ///
    /// `max_segment_length` must be strictly positive; configuration
    /// validation guarantees this for values coming from a
    /// [`MachineConfig`](crate::config::MachineConfig).
    pub fn new(start: [f64; 3], target: [f64; 3], rate: f64, max_segment_length: f64) -> Self {
        let delta = displacement(&start, &target);
        let distance = magnitude(&delta);

        let segments = if distance == 0.0 {
            0
        } else {
            // `as` saturates, and a NaN distance still ends on the target
            (ceil(distance / max_segment_length) as u32).max(1)
        };

        Self {
            start,
            target,
            delta,
            rate,
            distance,
            segments,
            next: 1,
        }
    }

    /// Total length of the move in millimeters.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of milestones the move is cut into.
    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }
}

impl Iterator for LineSegments {
    type Item = Milestone;

    fn next(&mut self) -> Option<Milestone> {
        if self.next > u64::from(self.segments) {
            return None;
        }

        let i = self.next;
        self.next += 1;

        if i == u64::from(self.segments) {
            // The final point is the target itself, never an interpolation
            return Some(Milestone::new(self.target, self.rate));
        }

        let fraction = i as f64 / self.segments as f64;
        let mut point = self.start;
        for (axis, p) in point.iter_mut().enumerate() {
            *p += self.delta[axis] * fraction;
        }
        Some(Milestone::new(point, self.rate))
    }

    fn nth(&mut self, n: usize) -> Option<Milestone> {
        self.next = self.next.saturating_add(n as u64);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u64::from(self.segments) + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineSegments {}
