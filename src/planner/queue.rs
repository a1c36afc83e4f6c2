//! Bounded in-memory planner queue.

use heapless::Deque;

use crate::error::PlannerError;
use crate::motion::MotionBlock;

use super::{AppendError, Planner};

/// Fixed-capacity FIFO of motion blocks.
///
/// Reports [`AppendError::QueueFull`] when all `N` slots are taken. A consumer
/// drains it with [`pop`](Self::pop). Halting the queue turns every further
/// append into a fatal error.
///
/// An interpreter that owns a `BlockQueue` keeps it to itself while a command
/// runs, so nothing drains it mid-command. Size `N` for the longest command
/// and drain between commands, or hand the interpreter the producer half of a
/// [`heapless::spsc::Queue`] instead so another context can drain it.
#[derive(Debug)]
pub struct BlockQueue<const N: usize> {
    blocks: Deque<MotionBlock, N>,
    halted: bool,
}

impl<const N: usize> Default for BlockQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> BlockQueue<N> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            blocks: Deque::new(),
            halted: false,
        }
    }

    /// Remove the oldest block.
    pub fn pop(&mut self) -> Option<MotionBlock> {
        self.blocks.pop_front()
    }

    /// Get the oldest block without removing it.
    pub fn front(&self) -> Option<&MotionBlock> {
        self.blocks.front()
    }

    /// Number of queued blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if no blocks are queued.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Check if every slot is taken.
    pub fn is_full(&self) -> bool {
        self.blocks.is_full()
    }

    /// Iterate over queued blocks, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MotionBlock> {
        self.blocks.iter()
    }

    /// Stop accepting blocks.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Accept blocks again after a halt.
    pub fn resume(&mut self) {
        self.halted = false;
    }

    /// Drop every queued block.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }
}

impl<const N: usize> Planner for BlockQueue<N> {
    fn try_append_block(&mut self, block: MotionBlock) -> Result<(), AppendError> {
        if self.halted {
            return Err(AppendError::Fatal(PlannerError::Halted));
        }
        self.blocks
            .push_back(block)
            .map_err(|_| AppendError::QueueFull)
    }
}
