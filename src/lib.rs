//! # motion-interp
//!
//! Modal motion-command interpreter with line and arc segmentation for
//! CNC-class motion controllers.
//!
//! ## Features
//!
//! - **Modal interpreter**: motion mode, units, positioning and arc plane persist across commands
//! - **Bounded segments**: lines and arcs are cut into short milestones for the planner
//! - **Real-time arcs**: small-angle rotation with periodic exact correction, no per-segment trig
//! - **Pluggable kinematics**: millimeter-to-step mapping behind a trait
//! - **Backpressure-safe**: a full planner is waited on, never dropped
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use heapless::spsc::Queue;
//! use motion_interp::{Command, Interpreter, MotionBlock};
//!
//! // Load configuration from TOML
//! let config = motion_interp::load_config("machine.toml")?;
//!
//! // The interpreter fills the producer half; the step generator drains the
//! // consumer half from an interrupt or another thread
//! let mut queue: Queue<MotionBlock, 32> = Queue::new();
//! let (producer, consumer) = queue.split();
//! let mut interp = Interpreter::from_config(&config, producer, delay)?;
//!
//! // G1 X10 F600; waits for the consumer whenever the queue is full
//! interp.execute(&Command::new().with('G', 1.0).with('X', 10.0).with('F', 600.0))?;
//! ```
//!
//! [`BlockQueue`] is a simpler planner for hosts that drain between
//! commands; it must hold every block of the longest command.
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Logging macros, declared ahead of the modules that use them
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod interpreter;
pub mod kinematics;
pub mod motion;
pub mod planner;

// Re-exports for ergonomic API
pub use config::{validate_config, MachineConfig, MotionSettings, Units};
pub use error::{Error, Result};
pub use interpreter::{Command, Interpreter, MachineState, MotionMode, Outcome, Positioning};
pub use kinematics::{ArmSolution, CartesianSolution, Solution};
pub use motion::{ArcDirection, ArcMove, Axis, LineSegments, Milestone, MotionBlock, Plane};
pub use planner::{AppendError, BlockQueue, Planner};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Millimeters, MillimetersPerMinute, MM_PER_INCH};
