use crate::commands::types::output;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        output(ctx.state.user.clone())
    }
}
