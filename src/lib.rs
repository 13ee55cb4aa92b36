//! vfs-shell - A shell over an in-memory virtual file system
//!
//! The tree lives entirely in memory and is navigated with a small set of
//! shell-like commands (`ls`, `cd`, `cat`, `head`, `chown`, `rmdir`,
//! `whoami`, `exit`). Paths are resolved by re-walking from the root, so the
//! working directory is just a list of names.

pub mod commands;
pub mod error;
pub mod fs;
pub mod interpreter;
pub mod repl;
pub mod shell;

pub use error::ErrorKind;
pub use interpreter::{CommandError, ExecOutcome};
pub use shell::{Shell, ShellOptions};
