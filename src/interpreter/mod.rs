//! Interpreter module for motion-interp.
//!
//! Provides the modal command interpreter, the parsed command type it
//! consumes, and the machine state it owns.

mod command;
mod machine;
mod modal;
mod state;

pub use command::{Command, Word, MAX_WORDS};
pub use machine::{Interpreter, Outcome};
pub use modal::{ModalCode, MotionMode, Positioning};
pub use state::MachineState;
