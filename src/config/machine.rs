//! Machine configuration - root configuration structure.

use serde::Deserialize;

use super::units::{Millimeters, MillimetersPerMinute};

/// Default number of incremental arc rotations between exact corrections.
pub const DEFAULT_ARC_CORRECTION_INTERVAL: u8 = 25;

/// Default planner backpressure poll interval in microseconds.
pub const DEFAULT_BACKPRESSURE_POLL_US: u32 = 100;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    /// Feed rate used for cutting moves until an `F` word overrides it.
    pub default_feed_rate: MillimetersPerMinute,

    /// Seek rate used for rapid moves until an `F` word overrides it.
    pub default_seek_rate: MillimetersPerMinute,

    /// Maximum length of one straight-line milestone.
    #[serde(rename = "mm_per_line_segment")]
    pub line_segment_length: Millimeters,

    /// Target length of one arc milestone.
    #[serde(rename = "mm_per_arc_segment")]
    pub arc_segment_length: Millimeters,

    /// Incremental rotations between exact trigonometric corrections.
    #[serde(default = "default_arc_correction_interval")]
    pub arc_correction_interval: u8,

    /// How long to wait before re-offering a block to a full planner.
    #[serde(default = "default_backpressure_poll_us")]
    pub backpressure_poll_us: u32,

    /// Kinematic solution selection.
    #[serde(default)]
    pub kinematics: KinematicsConfig,
}

fn default_arc_correction_interval() -> u8 {
    DEFAULT_ARC_CORRECTION_INTERVAL
}

fn default_backpressure_poll_us() -> u32 {
    DEFAULT_BACKPRESSURE_POLL_US
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            default_feed_rate: MillimetersPerMinute(4000.0),
            default_seek_rate: MillimetersPerMinute(4000.0),
            line_segment_length: Millimeters(5.0),
            arc_segment_length: Millimeters(0.5),
            arc_correction_interval: DEFAULT_ARC_CORRECTION_INTERVAL,
            backpressure_poll_us: DEFAULT_BACKPRESSURE_POLL_US,
            kinematics: KinematicsConfig::default(),
        }
    }
}

/// Machine topology used to map millimeters to actuator steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionKind {
    /// One actuator per linear axis.
    #[default]
    Cartesian,
}

/// Kinematics section of the configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KinematicsConfig {
    /// Which solution to build.
    #[serde(default)]
    pub solution: SolutionKind,

    /// Steps per millimeter for the X, Y and Z actuators.
    pub steps_per_mm: [f64; 3],
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            solution: SolutionKind::Cartesian,
            steps_per_mm: [80.0, 80.0, 1600.0],
        }
    }
}
