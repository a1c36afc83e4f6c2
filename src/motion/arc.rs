//! Circular and helical arc segmentation.
//!
//! The arc is traced by rotating the radius vector (center to tool) by a
//! fixed angle per segment. The rotation matrix uses the small-angle
//! approximation `cos(t) ~ 1 - t^2/2`, `sin(t) ~ t`, so no trigonometry is
//! evaluated per segment. The approximation and floating-point round-off
//! both drift, so every `correction_interval` segments the radius vector is
//! recomputed exactly from the initial offset with `cos`/`sin` of the true
//! cumulative angle. The final milestone is always the exact target.

use core::f64::consts::PI;

use libm::{atan2, cos, fabs, floor, hypot, sin};

use super::milestone::Milestone;
use super::plane::Plane;

/// Rotation sense of an arc, viewed with the perpendicular axis pointing at the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArcDirection {
    /// `G2`: negative angular travel.
    Clockwise,
    /// `G3`: positive angular travel.
    CounterClockwise,
}

/// Geometry of one arc move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcMove {
    /// Tool position at the start of the arc.
    pub start: [f64; 3],
    /// Absolute end point.
    pub target: [f64; 3],
    /// Center relative to `start`, indexed by linear axis (X, Y, Z).
    pub offset: [f64; 3],
    /// Radius used for path length; normally the in-plane length of `offset`.
    pub radius: f64,
    /// Rotation sense.
    pub direction: ArcDirection,
    /// Active plane.
    pub plane: Plane,
}

impl ArcMove {
    /// Describe an arc, deriving the radius from the in-plane offset.
    pub fn new(
        start: [f64; 3],
        target: [f64; 3],
        offset: [f64; 3],
        direction: ArcDirection,
        plane: Plane,
    ) -> Self {
        let (a0, a1, _) = plane.indices();
        Self {
            start,
            target,
            offset,
            radius: hypot(offset[a0], offset[a1]),
            direction,
            plane,
        }
    }

    /// Signed angle swept from start to target around the center.
    ///
    /// Counter-clockwise travel lies in `[0, 2pi)`; clockwise travel in `[-2pi, 0)`.
    pub fn angular_travel(&self) -> f64 {
        let (a0, a1, _) = self.plane.indices();
        let center0 = self.start[a0] + self.offset[a0];
        let center1 = self.start[a1] + self.offset[a1];

        let r0 = -self.offset[a0];
        let r1 = -self.offset[a1];
        let rt0 = self.target[a0] - center0;
        let rt1 = self.target[a1] - center1;

        // One atan2 gives the counter-clockwise angle between both radius vectors
        let mut travel = atan2(r0 * rt1 - r1 * rt0, r0 * rt0 + r1 * rt1);
        if travel < 0.0 {
            travel += 2.0 * PI;
        }
        if self.direction == ArcDirection::Clockwise {
            travel -= 2.0 * PI;
        }
        travel
    }

    /// Displacement along the perpendicular axis.
    #[inline]
    pub fn linear_travel(&self) -> f64 {
        let (_, _, a2) = self.plane.indices();
        self.target[a2] - self.start[a2]
    }

    /// Helical path length in millimeters.
    pub fn path_length(&self) -> f64 {
        hypot(self.angular_travel() * self.radius, fabs(self.linear_travel()))
    }

    /// Cut the arc into milestones.
    ///
    /// `max_segment_length` must be strictly positive and
    /// `correction_interval` at least 1; both are guaranteed for values from
    /// a validated [`MachineConfig`](crate::config::MachineConfig).
    pub fn segments(
        &self,
        rate: f64,
        max_segment_length: f64,
        correction_interval: u8,
    ) -> ArcSegments {
        ArcSegments::new(self, rate, max_segment_length, correction_interval)
    }
}

/// Iterator over the milestones of one arc.
#[derive(Debug, Clone)]
pub struct ArcSegments {
    plane: Plane,
    target: [f64; 3],
    rate: f64,
    center: [f64; 2],
    initial: [f64; 2],
    radius_vector: [f64; 2],
    point: [f64; 3],
    angular_travel: f64,
    theta_per_segment: f64,
    linear_per_segment: f64,
    cos_t: f64,
    sin_t: f64,
    segments: u32,
    next: u64,
    count: u8,
    correction_interval: u8,
}

impl ArcSegments {
    fn new(arc: &ArcMove, rate: f64, max_segment_length: f64, correction_interval: u8) -> Self {
        let (a0, a1, _) = arc.plane.indices();
        let angular_travel = arc.angular_travel();
        let linear_travel = arc.linear_travel();
        let path_length = hypot(angular_travel * arc.radius, fabs(linear_travel));

        let segments = if path_length == 0.0 {
            0
        } else {
            // An arc shorter than one segment still ends on its target
            (floor(path_length / max_segment_length) as u32).max(1)
        };

        let (theta_per_segment, linear_per_segment) = if segments == 0 {
            (0.0, 0.0)
        } else {
            (
                angular_travel / segments as f64,
                linear_travel / segments as f64,
            )
        };

        let initial = [-arc.offset[a0], -arc.offset[a1]];

        trace!(
            "arc: travel {=f64} rad, {=f64} mm, {=u32} segments",
            angular_travel,
            path_length,
            segments
        );

        Self {
            plane: arc.plane,
            target: arc.target,
            rate,
            center: [arc.start[a0] + arc.offset[a0], arc.start[a1] + arc.offset[a1]],
            initial,
            radius_vector: initial,
            point: arc.start,
            angular_travel,
            theta_per_segment,
            linear_per_segment,
            cos_t: 1.0 - 0.5 * theta_per_segment * theta_per_segment,
            sin_t: theta_per_segment,
            segments,
            next: 1,
            count: 0,
            correction_interval: correction_interval.max(1),
        }
    }

    /// Signed angle swept by the whole arc.
    #[inline]
    pub fn angular_travel(&self) -> f64 {
        self.angular_travel
    }

    /// Angle advanced per milestone.
    #[inline]
    pub fn theta_per_segment(&self) -> f64 {
        self.theta_per_segment
    }

    /// Perpendicular-axis advance per milestone.
    #[inline]
    pub fn linear_per_segment(&self) -> f64 {
        self.linear_per_segment
    }

    /// Number of milestones the arc is cut into.
    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    fn rotate(&mut self, i: u64) {
        let [r0, r1] = self.radius_vector;

        if self.count < self.correction_interval {
            self.radius_vector = [
                r0 * self.cos_t - r1 * self.sin_t,
                r0 * self.sin_t + r1 * self.cos_t,
            ];
            self.count += 1;
        } else {
            // Exact position from the initial radius vector
            let angle = i as f64 * self.theta_per_segment;
            let (cos_i, sin_i) = (cos(angle), sin(angle));
            let [i0, i1] = self.initial;
            self.radius_vector = [i0 * cos_i - i1 * sin_i, i0 * sin_i + i1 * cos_i];
            self.count = 0;
        }
    }
}

impl Iterator for ArcSegments {
    type Item = Milestone;

    fn next(&mut self) -> Option<Milestone> {
        if self.next > u64::from(self.segments) {
            return None;
        }

        let i = self.next;
        self.next += 1;

        if i == u64::from(self.segments) {
            return Some(Milestone::new(self.target, self.rate));
        }

        self.rotate(i);

        let (a0, a1, a2) = self.plane.indices();
        self.point[a0] = self.center[0] + self.radius_vector[0];
        self.point[a1] = self.center[1] + self.radius_vector[1];
        self.point[a2] += self.linear_per_segment;

        Some(Milestone::new(self.point, self.rate))
    }

    fn nth(&mut self, n: usize) -> Option<Milestone> {
        if n > 0 {
            let remaining = (u64::from(self.segments) + 1).saturating_sub(self.next);
            let skip = (n as u64).min(remaining);
            let (_, _, a2) = self.plane.indices();
            self.next += skip;
            self.point[a2] += self.linear_per_segment * skip as f64;
            // Land on the exact rotation for the new index
            self.count = self.correction_interval;
        }
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u64::from(self.segments) + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArcSegments {}
