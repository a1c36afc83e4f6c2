//! Modal machine state.

use crate::config::units::Units;
use crate::config::MotionSettings;
use crate::motion::Plane;

use super::modal::{MotionMode, Positioning};

/// State owned by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineState {
    /// Endpoint of the most recently interpreted command, in millimeters.
    ///
    /// May be ahead of the motion the machine has physically completed.
    pub current_position: [f64; 3],
    /// Last point handed to the planner, in millimeters.
    pub last_milestone: [f64; 3],
    /// Active motion mode.
    pub motion_mode: MotionMode,
    /// Active linear units.
    pub units: Units,
    /// Absolute or relative axis words.
    pub positioning: Positioning,
    /// Active arc plane.
    pub plane: Plane,
    /// Cutting rate in millimeters per second.
    pub feed_rate: f64,
    /// Rapid rate in millimeters per second.
    pub seek_rate: f64,
}

impl MachineState {
    /// Power-on state: at the origin, seek mode, millimeters, absolute, XY plane.
    pub fn new(settings: &MotionSettings) -> Self {
        Self {
            current_position: [0.0; 3],
            last_milestone: [0.0; 3],
            motion_mode: MotionMode::default(),
            units: Units::default(),
            positioning: Positioning::default(),
            plane: Plane::default(),
            feed_rate: settings.default_feed_rate,
            seek_rate: settings.default_seek_rate,
        }
    }

    /// Convert a commanded value to millimeters under the active units.
    #[inline]
    pub fn to_millimeters(&self, value: f64) -> f64 {
        self.units.to_millimeters(value)
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new(&MotionSettings::default())
    }
}
