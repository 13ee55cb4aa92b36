// src/commands/types.rs
use crate::interpreter::{CommandError, ExecOutcome, ShellState};

/// Result of running one command.
pub type CommandResult = Result<ExecOutcome, CommandError>;

/// Everything a command may read or change.
pub struct CommandContext<'a> {
    pub args: &'a [String],
    pub state: &'a mut ShellState,
}

/// A shell verb.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}

/// Successful result carrying `text`.
pub fn output(text: impl Into<String>) -> CommandResult {
    Ok(ExecOutcome::Output(text.into()))
}
