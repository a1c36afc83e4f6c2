//! Linear axes and arc planes.

/// One of the three linear axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index into a `[f64; 3]` position.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Arc plane: two in-plane axes plus the perpendicular (helical) axis.
///
/// Only the three orthogonal planes exist, so every plane holds each axis
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Plane {
    /// X/Y in-plane, Z perpendicular (`G17`).
    #[default]
    Xy,
    /// X/Z in-plane, Y perpendicular (`G18`).
    Xz,
    /// Y/Z in-plane, X perpendicular (`G19`).
    Yz,
}

impl Plane {
    /// The `(axis0, axis1, axis2)` permutation of this plane.
    #[inline]
    pub const fn axes(self) -> (Axis, Axis, Axis) {
        match self {
            Plane::Xy => (Axis::X, Axis::Y, Axis::Z),
            Plane::Xz => (Axis::X, Axis::Z, Axis::Y),
            Plane::Yz => (Axis::Y, Axis::Z, Axis::X),
        }
    }

    /// Position indices of `(axis0, axis1, axis2)`.
    #[inline]
    pub const fn indices(self) -> (usize, usize, usize) {
        let (a0, a1, a2) = self.axes();
        (a0.index(), a1.index(), a2.index())
    }
}
