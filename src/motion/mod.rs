//! Motion module for motion-interp.
//!
//! Provides line and arc segmentation into milestones and the emitter that
//! turns milestones into planner blocks.

mod arc;
mod emitter;
mod line;
mod milestone;
mod plane;

pub use arc::{ArcDirection, ArcMove, ArcSegments};
pub use emitter::{MilestoneEmitter, MIN_MOVE_MM};
pub use line::LineSegments;
pub use milestone::{Milestone, MotionBlock};
pub use plane::{Axis, Plane};
