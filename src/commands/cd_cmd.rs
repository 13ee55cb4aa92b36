//! cd - Change the working directory
//!
//! - `cd` with no argument returns to the root
//! - `cd PATH` moves to the directory PATH resolves to

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{display_path, FsError};
use crate::interpreter::{CommandError, ExecOutcome};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(target) = ctx.args.first() else {
            ctx.state.reset_cwd();
            return Ok(ExecOutcome::empty());
        };

        let resolved = ctx.state.resolve(target).map_err(CommandError::fs("cd"))?;
        if !resolved.node.is_directory() {
            return Err(CommandError::fs("cd")(FsError::NotADirectory {
                path: display_path(&resolved.components),
            }));
        }
        let components = resolved.components;
        ctx.state.set_cwd(components);
        Ok(ExecOutcome::empty())
    }
}
