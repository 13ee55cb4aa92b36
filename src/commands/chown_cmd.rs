//! chown - Change the owner tag of a node
//!
//! Usage: chown OWNER PATH. No permission check is made.

use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::{CommandError, ExecOutcome};

pub struct ChownCommand;

impl Command for ChownCommand {
    fn name(&self) -> &'static str {
        "chown"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let [owner, path] = ctx.args else {
            return Err(CommandError::invalid_argument(
                "chown",
                "usage: chown OWNER PATH",
            ));
        };

        let components = ctx.state.resolve_components(path).map_err(CommandError::fs("chown"))?;
        ctx.state
            .vfs
            .node_at_mut(&components)
            .map_err(CommandError::fs("chown"))?
            .set_owner(owner.as_str());
        Ok(ExecOutcome::empty())
    }
}
