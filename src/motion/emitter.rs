//! Milestone emission.
//!
//! Turns milestones into motion blocks and hands them to the planner,
//! waiting out planner backpressure instead of dropping motion.

use embedded_hal::delay::DelayNs;

use crate::config::units::SECONDS_PER_MINUTE;
use crate::error::{Error, Result};
use crate::kinematics::ArmSolution;
use crate::planner::{AppendError, Planner};

use super::milestone::{displacement, magnitude, Milestone, MotionBlock};

/// Moves shorter than this many millimeters are discarded.
pub const MIN_MOVE_MM: f64 = 0.001;

/// Converts milestones into motion blocks and submits them to a planner.
///
/// Generic over:
/// - `K`: kinematic solution (must implement [`ArmSolution`])
/// - `P`: downstream planner (must implement [`Planner`])
/// - `D`: delay provider used while the planner is full (must implement `DelayNs`)
pub struct MilestoneEmitter<K, P, D>
where
    K: ArmSolution,
    P: Planner,
    D: DelayNs,
{
    solution: K,
    planner: P,
    delay: D,
    poll_us: u32,
}

impl<K, P, D> MilestoneEmitter<K, P, D>
where
    K: ArmSolution,
    P: Planner,
    D: DelayNs,
{
    /// Create an emitter that polls a full planner every `poll_us` microseconds.
    pub fn new(solution: K, planner: P, delay: D, poll_us: u32) -> Self {
        Self {
            solution,
            planner,
            delay,
            poll_us,
        }
    }

    /// Emit one milestone relative to `last_milestone`.
    ///
    /// Returns `Ok(false)` when the move is negligible and was discarded.
    /// On success `last_milestone` becomes the milestone's target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Planner`] if the planner refuses the block for good;
    /// `last_milestone` is left unchanged in that case.
    pub fn emit(&mut self, last_milestone: &mut [f64; 3], milestone: Milestone) -> Result<bool> {
        let deltas = displacement(last_milestone, &milestone.target);
        let distance_mm = magnitude(&deltas);

        if distance_mm < MIN_MOVE_MM {
            trace!("milestone dropped: {=f64} mm", distance_mm);
            return Ok(false);
        }

        let block = MotionBlock {
            steps: self.solution.millimeters_to_steps(&milestone.target),
            rate: milestone.rate * SECONDS_PER_MINUTE,
            distance_mm,
            deltas,
        };

        self.submit(block)?;

        *last_milestone = milestone.target;
        Ok(true)
    }

    /// Offer a block until the planner takes it.
    fn submit(&mut self, block: MotionBlock) -> Result<()> {
        let mut waited = false;
        loop {
            match self.planner.try_append_block(block) {
                Ok(()) => return Ok(()),
                Err(AppendError::QueueFull) => {
                    if !waited {
                        debug!("planner full, waiting");
                        waited = true;
                    }
                    self.delay.delay_us(self.poll_us);
                }
                Err(AppendError::Fatal(e)) => {
                    warn!("planner rejected block");
                    return Err(Error::Planner(e));
                }
            }
        }
    }

    /// Set the backpressure poll interval.
    #[inline]
    pub fn set_poll_us(&mut self, poll_us: u32) {
        self.poll_us = poll_us;
    }

    /// Get the kinematic solution.
    #[inline]
    pub fn solution(&self) -> &K {
        &self.solution
    }

    /// Get the planner.
    #[inline]
    pub fn planner(&self) -> &P {
        &self.planner
    }

    /// Get the planner mutably, e.g. to drain queued blocks.
    #[inline]
    pub fn planner_mut(&mut self) -> &mut P {
        &mut self.planner
    }

    /// Release the owned collaborators.
    pub fn into_parts(self) -> (K, P, D) {
        (self.solution, self.planner, self.delay)
    }
}
