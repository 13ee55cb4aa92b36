//! exit - End the session
//!
//! Never fails; arguments are ignored. The caller decides what ending the
//! session means.

use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::ExecOutcome;

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        Ok(ExecOutcome::Exit)
    }
}
