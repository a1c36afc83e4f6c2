//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::machine::{KinematicsConfig, MachineConfig};

/// Validate a machine configuration.
///
/// Checks:
/// - Line and arc segment lengths are finite and > 0
/// - Default feed and seek rates are finite and > 0
/// - Arc correction interval is at least 1
/// - Every axis has a positive steps-per-millimeter ratio
pub fn validate_config(config: &MachineConfig) -> Result<()> {
    // Segment lengths divide path lengths; zero would fault later
    if !config.line_segment_length.is_positive() {
        return Err(Error::Config(ConfigError::InvalidLineSegmentLength(
            config.line_segment_length.0,
        )));
    }

    if !config.arc_segment_length.is_positive() {
        return Err(Error::Config(ConfigError::InvalidArcSegmentLength(
            config.arc_segment_length.0,
        )));
    }

    if !is_positive(config.default_feed_rate.0) {
        return Err(Error::Config(ConfigError::InvalidFeedRate(
            config.default_feed_rate.0,
        )));
    }

    if !is_positive(config.default_seek_rate.0) {
        return Err(Error::Config(ConfigError::InvalidSeekRate(
            config.default_seek_rate.0,
        )));
    }

    if config.arc_correction_interval == 0 {
        return Err(Error::Config(ConfigError::InvalidArcCorrectionInterval(
            config.arc_correction_interval,
        )));
    }

    validate_kinematics(&config.kinematics)
}

fn validate_kinematics(config: &KinematicsConfig) -> Result<()> {
    for (axis, &value) in config.steps_per_mm.iter().enumerate() {
        if !is_positive(value) {
            return Err(Error::Config(ConfigError::InvalidStepsPerMillimeter {
                axis,
                value,
            }));
        }
    }

    Ok(())
}

#[inline]
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
