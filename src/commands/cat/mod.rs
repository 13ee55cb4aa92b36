// src/commands/cat/mod.rs
use crate::commands::types::output;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{display_path, DecodeErrors, FsError, TextEncoding};
use crate::interpreter::{CommandError, ShellState};

pub struct CatCommand;

/// Resolve `path` to a file and decode it for display.
pub(crate) fn read_file_text(
    state: &ShellState,
    command: &'static str,
    path: &str,
) -> Result<String, CommandError> {
    let resolved = state.resolve(path).map_err(CommandError::fs(command))?;
    let file = resolved.node.as_file().ok_or_else(|| {
        CommandError::fs(command)(FsError::IsADirectory {
            path: display_path(&resolved.components),
        })
    })?;
    file.read_text(TextEncoding::Utf8, DecodeErrors::Replace)
        .map_err(CommandError::fs(command))
}

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return Err(CommandError::MissingOperand { command: "cat" });
        }

        let state: &ShellState = ctx.state;
        let parts = ctx
            .args
            .iter()
            .map(|path| read_file_text(state, "cat", path))
            .collect::<Result<Vec<_>, _>>()?;

        output(parts.join("\n"))
    }
}
