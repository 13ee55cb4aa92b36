//! Interpreter Module
//!
//! Session state and the error type produced by command execution.

pub mod errors;
pub mod types;

pub use errors::CommandError;
pub use types::{ExecOutcome, ShellState, DEFAULT_USER};
