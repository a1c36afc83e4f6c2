//! Runtime motion settings derived from the machine configuration.

use super::machine::MachineConfig;

/// Derived segmentation and rate parameters.
///
/// Computed once per configuration load and consulted for every command.
/// Rates are held in millimeters per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    /// Maximum straight-line milestone length in millimeters.
    pub max_line_segment_length: f64,

    /// Target arc milestone length in millimeters.
    pub max_arc_segment_length: f64,

    /// Incremental rotations between exact arc corrections.
    pub arc_correction_interval: u8,

    /// Planner backpressure poll interval in microseconds.
    pub backpressure_poll_us: u32,

    /// Default feed rate in millimeters per second.
    pub default_feed_rate: f64,

    /// Default seek rate in millimeters per second.
    pub default_seek_rate: f64,
}

impl MotionSettings {
    /// Compute motion settings from a machine configuration.
    ///
    /// The configuration is expected to have passed
    /// [`validate_config`](super::validate_config).
    pub fn from_config(config: &MachineConfig) -> Self {
        Self {
            max_line_segment_length: config.line_segment_length.value(),
            max_arc_segment_length: config.arc_segment_length.value(),
            arc_correction_interval: config.arc_correction_interval,
            backpressure_poll_us: config.backpressure_poll_us,
            default_feed_rate: config.default_feed_rate.per_second(),
            default_seek_rate: config.default_seek_rate.per_second(),
        }
    }
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self::from_config(&MachineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Millimeters, MillimetersPerMinute};

    #[test]
    fn test_rates_converted_to_per_second() {
        let config = MachineConfig {
            default_feed_rate: MillimetersPerMinute(600.0),
            default_seek_rate: MillimetersPerMinute(3000.0),
            ..MachineConfig::default()
        };
        let settings = MotionSettings::from_config(&config);

        assert!((settings.default_feed_rate - 10.0).abs() < 1e-12);
        assert!((settings.default_seek_rate - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_lengths_copied() {
        let config = MachineConfig {
            line_segment_length: Millimeters(2.0),
            arc_segment_length: Millimeters(0.1),
            ..MachineConfig::default()
        };
        let settings = MotionSettings::from_config(&config);

        assert_eq!(settings.max_line_segment_length, 2.0);
        assert_eq!(settings.max_arc_segment_length, 0.1);
        assert_eq!(settings.arc_correction_interval, 25);
    }
}
