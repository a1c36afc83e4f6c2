//! Milestones and the motion blocks built from them.

/// One intermediate target of a decomposed line or arc move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    /// Absolute target in millimeters.
    pub target: [f64; 3],
    /// Rate in millimeters per second.
    pub rate: f64,
}

impl Milestone {
    /// Create a new milestone.
    #[inline]
    pub const fn new(target: [f64; 3], rate: f64) -> Self {
        Self { target, rate }
    }
}

/// Unit of work handed to the planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionBlock {
    /// Absolute actuator positions at the end of the block.
    pub steps: [i32; 3],
    /// Commanded rate in millimeters per minute.
    pub rate: f64,
    /// Cartesian length of the block in millimeters.
    pub distance_mm: f64,
    /// Per-axis displacement from the previous block in millimeters.
    pub deltas: [f64; 3],
}

/// Euclidean length of a displacement vector.
#[inline]
pub(crate) fn magnitude(v: &[f64; 3]) -> f64 {
    libm::sqrt(v[0] * v[0] + v[1] * v[1] + v[2] * v[2])
}

/// Component-wise `to - from`.
#[inline]
pub(crate) fn displacement(from: &[f64; 3], to: &[f64; 3]) -> [f64; 3] {
    [to[0] - from[0], to[1] - from[1], to[2] - from[2]]
}
