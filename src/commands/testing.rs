//! Helpers shared by command tests.

use crate::fs::{builtin_tree, parse_snapshot, Vfs};
use crate::interpreter::{ShellState, DEFAULT_USER};

use super::types::{Command, CommandContext, CommandResult};

/// Session over the built-in tree, positioned at the root.
pub fn create_state() -> ShellState {
    let source = builtin_tree();
    ShellState::new(Vfs::new(source.root), source.name, DEFAULT_USER)
}

/// Session over a snapshot document.
pub fn create_state_from(json: &str) -> ShellState {
    let source = parse_snapshot(json).expect("valid snapshot");
    ShellState::new(Vfs::new(source.root), source.name, DEFAULT_USER)
}

pub fn run(cmd: &dyn Command, state: &mut ShellState, args: &[&str]) -> CommandResult {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    cmd.execute(CommandContext { args: &args, state })
}

/// Run and return the output text, panicking on failure or exit.
pub fn run_ok(cmd: &dyn Command, state: &mut ShellState, args: &[&str]) -> String {
    match run(cmd, state, args) {
        Ok(outcome) => outcome.output().expect("command produced output").to_string(),
        Err(e) => panic!("{} failed: {}", cmd.name(), e),
    }
}
