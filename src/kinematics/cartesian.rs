//! Cartesian kinematics - each actuator drives one linear axis.

use libm::round;

use super::ArmSolution;

/// Cartesian solution with an independent steps-per-millimeter ratio per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianSolution {
    steps_per_mm: [f64; 3],
}

impl CartesianSolution {
    /// Create a solution from per-axis steps-per-millimeter ratios.
    pub const fn new(steps_per_mm: [f64; 3]) -> Self {
        Self { steps_per_mm }
    }

    /// Get the per-axis steps-per-millimeter ratios.
    #[inline]
    pub fn steps_per_mm(&self) -> [f64; 3] {
        self.steps_per_mm
    }
}

impl ArmSolution for CartesianSolution {
    fn millimeters_to_steps(&self, millimeters: &[f64; 3]) -> [i32; 3] {
        let mut steps = [0i32; 3];
        for (axis, step) in steps.iter_mut().enumerate() {
            // Nearest step; `as` saturates out-of-range values
            *step = round(millimeters[axis] * self.steps_per_mm[axis]) as i32;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_each_axis() {
        let solution = CartesianSolution::new([80.0, 80.0, 1600.0]);

        assert_eq!(solution.millimeters_to_steps(&[10.0, -5.0, 0.5]), [800, -400, 800]);
    }

    #[test]
    fn test_rounds_to_nearest_step() {
        let solution = CartesianSolution::new([10.0, 10.0, 10.0]);

        assert_eq!(solution.millimeters_to_steps(&[0.04, 0.06, -0.06]), [0, 1, -1]);
    }
}
