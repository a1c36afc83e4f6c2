//! Unit types for linear quantities.
//!
//! Provides type-safe representations of lengths and rates so configuration
//! values cannot be mixed up, plus the inch/millimeter conversion applied to
//! every coordinate the interpreter reads.

use core::ops::{Add, Mul, Sub};

use serde::Deserialize;

/// Number of millimeters in one inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Seconds per minute; configured and commanded rates are per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Linear unit selected by the modal `G20` / `G21` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Units {
    /// Values are given in inches.
    Inch,
    /// Values are given in millimeters (the internal canonical unit).
    #[default]
    Millimeter,
}

impl Units {
    /// Convert a raw commanded value to millimeters.
    ///
    /// Inch values are divided by [`MM_PER_INCH`]; millimeter values pass
    /// through unchanged.
    #[inline]
    pub fn to_millimeters(self, value: f64) -> f64 {
        match self {
            Units::Inch => value / MM_PER_INCH,
            Units::Millimeter => value,
        }
    }
}

/// Length in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl Millimeters {
    /// Create a new Millimeters value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Check that the length is finite and strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl From<f64> for Millimeters {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Millimeters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Millimeters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Linear rate in millimeters per minute, as written in configuration and `F` words.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct MillimetersPerMinute(pub f64);

impl MillimetersPerMinute {
    /// Create a new MillimetersPerMinute value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to millimeters per second, the unit rates are held in internally.
    #[inline]
    pub fn per_second(self) -> f64 {
        self.0 / SECONDS_PER_MINUTE
    }
}

impl From<f64> for MillimetersPerMinute {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Mul<f64> for MillimetersPerMinute {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Millimeters.
    fn mm(self) -> Millimeters;
    /// Convert to MillimetersPerMinute.
    fn mm_per_min(self) -> MillimetersPerMinute;
}

impl UnitExt for f64 {
    #[inline]
    fn mm(self) -> Millimeters {
        Millimeters(self)
    }

    #[inline]
    fn mm_per_min(self) -> MillimetersPerMinute {
        MillimetersPerMinute(self)
    }
}
