//! Modal codes and the modal groups they select.

use libm::trunc;

use crate::config::units::Units;
use crate::motion::{ArcDirection, Plane};

/// Active motion mode; persists until another motion code arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionMode {
    /// Rapid positioning at the seek rate (`G0`).
    #[default]
    Seek,
    /// Straight cut at the feed rate (`G1`).
    Linear,
    /// Clockwise arc at the feed rate (`G2`).
    ClockwiseArc,
    /// Counter-clockwise arc at the feed rate (`G3`).
    CounterClockwiseArc,
    /// No motion.
    Cancel,
}

impl MotionMode {
    /// Arc direction for the arc modes.
    pub fn arc_direction(self) -> Option<ArcDirection> {
        match self {
            MotionMode::ClockwiseArc => Some(ArcDirection::Clockwise),
            MotionMode::CounterClockwiseArc => Some(ArcDirection::CounterClockwise),
            _ => None,
        }
    }
}

/// Coordinate interpretation of axis words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Positioning {
    /// Axis words are absolute coordinates (`G90`).
    #[default]
    Absolute,
    /// Axis words are offsets from the current position (`G91`).
    Relative,
}

/// A recognized `G` code and the modal change it makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModalCode {
    /// Select a motion mode.
    Motion(MotionMode),
    /// Select the arc plane.
    Plane(Plane),
    /// Select linear units.
    Units(Units),
    /// Select absolute or relative positioning.
    Positioning(Positioning),
}

impl ModalCode {
    /// Decode a `G` word value.
    ///
    /// Returns `None` for anything outside the recognized set, including
    /// fractional codes such as `G38.2`.
    pub fn from_code(code: f64) -> Option<Self> {
        if trunc(code) != code {
            return None;
        }
        // Out-of-range values saturate and fall through to `None`
        let code = code as i32;
        match code {
            0 => Some(ModalCode::Motion(MotionMode::Seek)),
            1 => Some(ModalCode::Motion(MotionMode::Linear)),
            2 => Some(ModalCode::Motion(MotionMode::ClockwiseArc)),
            3 => Some(ModalCode::Motion(MotionMode::CounterClockwiseArc)),
            17 => Some(ModalCode::Plane(Plane::Xy)),
            18 => Some(ModalCode::Plane(Plane::Xz)),
            19 => Some(ModalCode::Plane(Plane::Yz)),
            20 => Some(ModalCode::Units(Units::Inch)),
            21 => Some(ModalCode::Units(Units::Millimeter)),
            90 => Some(ModalCode::Positioning(Positioning::Absolute)),
            91 => Some(ModalCode::Positioning(Positioning::Relative)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_codes() {
        assert_eq!(ModalCode::from_code(0.0), Some(ModalCode::Motion(MotionMode::Seek)));
        assert_eq!(
            ModalCode::from_code(3.0),
            Some(ModalCode::Motion(MotionMode::CounterClockwiseArc))
        );
        assert_eq!(ModalCode::from_code(18.0), Some(ModalCode::Plane(Plane::Xz)));
        assert_eq!(ModalCode::from_code(20.0), Some(ModalCode::Units(Units::Inch)));
        assert_eq!(
            ModalCode::from_code(91.0),
            Some(ModalCode::Positioning(Positioning::Relative))
        );
    }

    #[test]
    fn test_unrecognized_codes() {
        for code in [4.0, 28.0, 80.0, 92.0, -1.0, 1.5, 38.2, f64::NAN, 1e12] {
            assert_eq!(ModalCode::from_code(code), None, "G{}", code);
        }
    }

    #[test]
    fn test_arc_direction() {
        assert_eq!(MotionMode::ClockwiseArc.arc_direction(), Some(ArcDirection::Clockwise));
        assert_eq!(MotionMode::Linear.arc_direction(), None);
    }
}
