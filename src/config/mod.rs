//! Configuration module for motion-interp.
//!
//! Provides the machine configuration loaded from TOML files (with `std`
//! feature) or constructed in code, its validation, and the derived runtime
//! motion settings.

mod machine;
mod settings;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use machine::{
    KinematicsConfig, MachineConfig, SolutionKind, DEFAULT_ARC_CORRECTION_INTERVAL,
    DEFAULT_BACKPRESSURE_POLL_US,
};
pub use settings::MotionSettings;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Millimeters, MillimetersPerMinute, Units, MM_PER_INCH};
