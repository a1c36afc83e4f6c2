//! Planner on the producer half of a lock-free single-producer queue.
//!
//! The interpreter holds the [`Producer`]; the step generator (an interrupt
//! handler or another thread) holds the [`Consumer`](heapless::spsc::Consumer)
//! and drains blocks while the interpreter waits out backpressure.

use heapless::spsc::Producer;

use crate::motion::MotionBlock;

use super::{AppendError, Planner};

impl<'a, const N: usize> Planner for Producer<'a, MotionBlock, N> {
    fn try_append_block(&mut self, block: MotionBlock) -> Result<(), AppendError> {
        self.enqueue(block).map_err(|_| AppendError::QueueFull)
    }
}
