//! Error types for motion-interp.
//!
//! Provides unified error handling across configuration and planner submission.
//! Degenerate moves and unrecognized modal codes are not errors; they are
//! silently skipped by the interpreter.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all motion-interp operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// The planner refused a motion block
    Planner(PlannerError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid line segment length (must be > 0)
    InvalidLineSegmentLength(f64),
    /// Invalid arc segment length (must be > 0)
    InvalidArcSegmentLength(f64),
    /// Invalid default feed rate (must be > 0)
    InvalidFeedRate(f64),
    /// Invalid default seek rate (must be > 0)
    InvalidSeekRate(f64),
    /// Arc correction interval must be at least 1
    InvalidArcCorrectionInterval(u8),
    /// Invalid steps per millimeter for an axis (must be > 0)
    InvalidStepsPerMillimeter {
        /// Axis index (0 = X, 1 = Y, 2 = Z)
        axis: usize,
        /// Offending value
        value: f64,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Errors reported by the downstream planner.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// The planner rejected the block and will not accept it on retry.
    Rejected(heapless::String<64>),
    /// The planner has been halted and accepts no further motion.
    Halted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Planner(e) => write!(f, "Planner error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidLineSegmentLength(v) => {
                write!(f, "Invalid mm_per_line_segment: {}. Must be > 0", v)
            }
            ConfigError::InvalidArcSegmentLength(v) => {
                write!(f, "Invalid mm_per_arc_segment: {}. Must be > 0", v)
            }
            ConfigError::InvalidFeedRate(v) => write!(f, "Invalid default feed rate: {}. Must be > 0", v),
            ConfigError::InvalidSeekRate(v) => write!(f, "Invalid default seek rate: {}. Must be > 0", v),
            ConfigError::InvalidArcCorrectionInterval(v) => {
                write!(f, "Invalid arc correction interval: {}. Must be >= 1", v)
            }
            ConfigError::InvalidStepsPerMillimeter { axis, value } => {
                write!(f, "Invalid steps per mm on axis {}: {}. Must be > 0", axis, value)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::Rejected(reason) => write!(f, "Block rejected: {}", reason),
            PlannerError::Halted => write!(f, "Planner is halted"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PlannerError> for Error {
    fn from(e: PlannerError) -> Self {
        Error::Planner(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PlannerError {}
