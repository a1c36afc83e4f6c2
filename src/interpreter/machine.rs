//! Command interpreter.
//!
//! Owns the modal machine state, resolves each command's target and arc
//! offset, and dispatches to the line or arc segmenter.

use embedded_hal::delay::DelayNs;

use crate::config::units::SECONDS_PER_MINUTE;
use crate::config::{validate_config, MachineConfig, MotionSettings};
use crate::error::Result;
use crate::kinematics::{ArmSolution, Solution};
use crate::motion::{ArcDirection, ArcMove, LineSegments, Milestone, MilestoneEmitter};
use crate::planner::Planner;

use super::command::Command;
use super::modal::{ModalCode, MotionMode, Positioning};
use super::state::MachineState;

/// Axis letters, in position index order.
const AXIS_LETTERS: [char; 3] = ['X', 'Y', 'Z'];

/// Arc center offset letters, mapped to X, Y, Z regardless of plane.
const OFFSET_LETTERS: [char; 3] = ['I', 'J', 'K'];

/// Result of one interpreted command or generated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Milestones produced by the segmenter.
    pub milestones: usize,
    /// Motion blocks accepted by the planner.
    pub blocks: usize,
}

impl Outcome {
    /// Milestones discarded as negligible.
    #[inline]
    pub fn discarded(&self) -> usize {
        self.milestones - self.blocks
    }
}

/// Modal motion-command interpreter.
///
/// Generic over:
/// - `K`: kinematic solution (must implement [`ArmSolution`])
/// - `P`: downstream planner (must implement [`Planner`])
/// - `D`: delay provider for planner backpressure (must implement `DelayNs`)
///
/// Commands are processed one at a time to completion; every milestone of a
/// command has been accepted by the planner before [`execute`](Self::execute)
/// returns.
pub struct Interpreter<K, P, D>
where
    K: ArmSolution,
    P: Planner,
    D: DelayNs,
{
    state: MachineState,
    settings: MotionSettings,
    emitter: MilestoneEmitter<K, P, D>,
}

impl<P, D> Interpreter<Solution, P, D>
where
    P: Planner,
    D: DelayNs,
{
    /// Create an interpreter using the kinematic solution named in the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn from_config(config: &MachineConfig, planner: P, delay: D) -> Result<Self> {
        let solution = Solution::from_config(&config.kinematics);
        Self::new(config, solution, planner, delay)
    }
}

impl<K, P, D> Interpreter<K, P, D>
where
    K: ArmSolution,
    P: Planner,
    D: DelayNs,
{
    /// Create an interpreter in the power-on state.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn new(config: &MachineConfig, solution: K, planner: P, delay: D) -> Result<Self> {
        validate_config(config)?;
        let settings = MotionSettings::from_config(config);

        Ok(Self {
            state: MachineState::new(&settings),
            emitter: MilestoneEmitter::new(solution, planner, delay, settings.backpressure_poll_us),
            settings,
        })
    }

    /// Re-read segmentation settings and default rates.
    ///
    /// Feed and seek rates return to the configured defaults. Position and
    /// modal state are kept.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation; the
    /// interpreter is left unchanged in that case.
    pub fn on_config_reload(&mut self, config: &MachineConfig) -> Result<()> {
        validate_config(config)?;
        let settings = MotionSettings::from_config(config);

        self.state.feed_rate = settings.default_feed_rate;
        self.state.seek_rate = settings.default_seek_rate;
        self.emitter.set_poll_us(settings.backpressure_poll_us);
        self.settings = settings;

        debug!(
            "config reloaded: line {=f64} mm, arc {=f64} mm",
            settings.max_line_segment_length,
            settings.max_arc_segment_length
        );
        Ok(())
    }

    /// Interpret one command.
    ///
    /// Applies modal codes, resolves the target and arc offset, updates the
    /// rate, performs the active motion, and finally moves
    /// `current_position` to the resolved target. The position advances even
    /// in [`MotionMode::Cancel`] and even if the planner fails mid-move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Planner`](crate::Error::Planner) if the planner
    /// refuses a block.
    pub fn execute(&mut self, command: &Command) -> Result<Outcome> {
        for code in command.values('G') {
            self.apply_code(code);
        }

        let target = self.resolve_target(command);
        let offset = self.resolve_offset(command);

        if let Some(rate) = command.value('F') {
            let rate = self.state.to_millimeters(rate) / SECONDS_PER_MINUTE;
            match self.state.motion_mode {
                MotionMode::Seek => self.state.seek_rate = rate,
                _ => self.state.feed_rate = rate,
            }
        }

        let result = match self.state.motion_mode {
            MotionMode::Cancel => Ok(Outcome::default()),
            MotionMode::Seek => self.append_line(target, self.state.seek_rate),
            MotionMode::Linear => self.append_line(target, self.state.feed_rate),
            mode @ (MotionMode::ClockwiseArc | MotionMode::CounterClockwiseArc) => {
                match mode.arc_direction() {
                    Some(direction) => self.compute_arc(target, offset, direction),
                    None => Ok(Outcome::default()),
                }
            }
        };

        // Command-domain position; the machine may still be on its way
        self.state.current_position = target;
        result
    }

    /// Emit a straight move from `current_position` to `target` at `rate` (mm/s).
    ///
    /// Does not move `current_position`; [`execute`](Self::execute) does that
    /// once the whole command has been dispatched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Planner`](crate::Error::Planner) if the planner
    /// refuses a block.
    pub fn append_line(&mut self, target: [f64; 3], rate: f64) -> Result<Outcome> {
        let line = LineSegments::new(
            self.state.current_position,
            target,
            rate,
            self.settings.max_line_segment_length,
        );
        self.emit_all(line)
    }

    /// Emit an arc from `current_position` to `target` at the feed rate.
    ///
    /// `offset` locates the center relative to `current_position`, indexed by
    /// linear axis. Does not move `current_position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Planner`](crate::Error::Planner) if the planner
    /// refuses a block.
    pub fn append_arc(
        &mut self,
        target: [f64; 3],
        offset: [f64; 3],
        radius: f64,
        direction: ArcDirection,
    ) -> Result<Outcome> {
        let arc = ArcMove {
            radius,
            ..ArcMove::new(
                self.state.current_position,
                target,
                offset,
                direction,
                self.state.plane,
            )
        };
        let segments = arc.segments(
            self.state.feed_rate,
            self.settings.max_arc_segment_length,
            self.settings.arc_correction_interval,
        );
        self.emit_all(segments)
    }

    /// Seat both the command position and the planner position at `position`.
    ///
    /// No motion is generated.
    pub fn reset_position(&mut self, position: [f64; 3]) {
        self.state.current_position = position;
        self.state.last_milestone = position;
    }

    /// Force the motion mode, e.g. to cancel motion from a canned cycle.
    pub fn set_motion_mode(&mut self, mode: MotionMode) {
        self.state.motion_mode = mode;
    }

    /// Get the machine state.
    #[inline]
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Get the active motion settings.
    #[inline]
    pub fn settings(&self) -> &MotionSettings {
        &self.settings
    }

    /// Get the kinematic solution.
    #[inline]
    pub fn solution(&self) -> &K {
        self.emitter.solution()
    }

    /// Get the planner.
    #[inline]
    pub fn planner(&self) -> &P {
        self.emitter.planner()
    }

    /// Get the planner mutably.
    #[inline]
    pub fn planner_mut(&mut self) -> &mut P {
        self.emitter.planner_mut()
    }

    /// Release the owned collaborators.
    pub fn into_parts(self) -> (K, P, D) {
        self.emitter.into_parts()
    }

    fn apply_code(&mut self, code: f64) {
        match ModalCode::from_code(code) {
            Some(ModalCode::Motion(mode)) => self.state.motion_mode = mode,
            Some(ModalCode::Plane(plane)) => self.state.plane = plane,
            Some(ModalCode::Units(units)) => self.state.units = units,
            Some(ModalCode::Positioning(positioning)) => self.state.positioning = positioning,
            None => trace!("ignoring G{=f64}", code),
        }
    }

    fn resolve_target(&self, command: &Command) -> [f64; 3] {
        let mut target = self.state.current_position;
        for (axis, &letter) in AXIS_LETTERS.iter().enumerate() {
            if let Some(value) = command.value(letter) {
                let mm = self.state.to_millimeters(value);
                target[axis] = match self.state.positioning {
                    Positioning::Absolute => mm,
                    Positioning::Relative => target[axis] + mm,
                };
            }
        }
        target
    }

    fn resolve_offset(&self, command: &Command) -> [f64; 3] {
        let mut offset = [0.0; 3];
        for (axis, &letter) in OFFSET_LETTERS.iter().enumerate() {
            if let Some(value) = command.value(letter) {
                offset[axis] = self.state.to_millimeters(value);
            }
        }
        offset
    }

    fn compute_arc(
        &mut self,
        target: [f64; 3],
        offset: [f64; 3],
        direction: ArcDirection,
    ) -> Result<Outcome> {
        let (a0, a1, _) = self.state.plane.indices();
        let radius = libm::hypot(offset[a0], offset[a1]);
        self.append_arc(target, offset, radius, direction)
    }

    fn emit_all<I>(&mut self, milestones: I) -> Result<Outcome>
    where
        I: Iterator<Item = Milestone>,
    {
        let mut outcome = Outcome::default();
        for milestone in milestones {
            outcome.milestones += 1;
            if self.emitter.emit(&mut self.state.last_milestone, milestone)? {
                outcome.blocks += 1;
            }
        }
        Ok(outcome)
    }
}
