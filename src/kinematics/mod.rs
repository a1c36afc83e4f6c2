//! Kinematic solutions.
//!
//! A solution maps a Cartesian target in millimeters to absolute actuator
//! step counts. Each machine topology gets its own implementation; the one
//! in use is selected from [`KinematicsConfig`] at construction time.

mod cartesian;

pub use cartesian::CartesianSolution;

use crate::config::{KinematicsConfig, SolutionKind};

/// Mapping from millimeter space to actuator steps.
pub trait ArmSolution {
    /// Convert an absolute millimeter target to absolute actuator steps.
    fn millimeters_to_steps(&self, millimeters: &[f64; 3]) -> [i32; 3];
}

impl<T: ArmSolution + ?Sized> ArmSolution for &T {
    #[inline]
    fn millimeters_to_steps(&self, millimeters: &[f64; 3]) -> [i32; 3] {
        (**self).millimeters_to_steps(millimeters)
    }
}

/// Solution selected from configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// One actuator per linear axis.
    Cartesian(CartesianSolution),
}

impl Solution {
    /// Build the solution named by the configuration.
    pub fn from_config(config: &KinematicsConfig) -> Self {
        match config.solution {
            SolutionKind::Cartesian => {
                Solution::Cartesian(CartesianSolution::new(config.steps_per_mm))
            }
        }
    }
}

impl ArmSolution for Solution {
    #[inline]
    fn millimeters_to_steps(&self, millimeters: &[f64; 3]) -> [i32; 3] {
        match self {
            Solution::Cartesian(solution) => solution.millimeters_to_steps(millimeters),
        }
    }
}
