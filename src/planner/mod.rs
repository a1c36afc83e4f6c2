//! Planner boundary.
//!
//! The planner is the downstream consumer of motion blocks. It owns velocity
//! blending and queueing; this crate only offers blocks to it, one at a time,
//! in path order.

mod queue;
mod spsc;

pub use queue::BlockQueue;

use crate::error::PlannerError;
use crate::motion::MotionBlock;

/// Why a block was not accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum AppendError {
    /// The queue is full. Offer the same block again once space frees up.
    QueueFull,
    /// The planner will never accept this block.
    Fatal(PlannerError),
}

impl From<PlannerError> for AppendError {
    fn from(e: PlannerError) -> Self {
        AppendError::Fatal(e)
    }
}

/// Downstream consumer of motion blocks.
///
/// Implementations must not block; backpressure is reported with
/// [`AppendError::QueueFull`] and the caller decides how to wait.
pub trait Planner {
    /// Offer a block to the planner. Ownership moves on success.
    fn try_append_block(&mut self, block: MotionBlock) -> Result<(), AppendError>;
}

impl<P: Planner + ?Sized> Planner for &mut P {
    #[inline]
    fn try_append_block(&mut self, block: MotionBlock) -> Result<(), AppendError> {
        (**self).try_append_block(block)
    }
}
