use tracing::debug;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{display_path, FsError};
use crate::interpreter::{CommandError, ExecOutcome, ShellState};

pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let dir = match ctx.args {
            [] => return Err(CommandError::MissingOperand { command: "rmdir" }),
            [dir] => dir,
            _ => {
                return Err(CommandError::invalid_argument(
                    "rmdir",
                    "expected a single directory operand",
                ))
            }
        };

        remove_dir(ctx.state, dir).map_err(CommandError::fs("rmdir"))?;
        Ok(ExecOutcome::empty())
    }
}

fn remove_dir(state: &mut ShellState, dir: &str) -> Result<(), FsError> {
    let resolved = state.resolve(dir)?;
    let path = display_path(&resolved.components);

    let node = resolved
        .node
        .as_directory()
        .ok_or_else(|| FsError::NotADirectory { path: path.clone() })?;
    if resolved.components.len() <= 1 {
        return Err(FsError::CannotRemoveRoot);
    }
    if !node.is_empty() {
        return Err(FsError::NotEmpty { path });
    }

    let mut components = resolved.components;
    let name = components.pop().unwrap_or_default();
    let parent = state
        .vfs
        .node_at_mut(&components)?
        .as_directory_mut()
        .ok_or_else(|| FsError::InvalidState {
            message: format!("parent of '{}' is not a directory", path),
        })?;
    parent.remove_child(&name)?;
    debug!(path = %path, "removed directory");

    // Keep the working directory resolvable.
    let removed_cwd = state.cwd().len() > components.len()
        && state.cwd()[..components.len()] == components[..]
        && state.cwd()[components.len()] == name;
    if removed_cwd {
        state.set_cwd(components);
    }
    Ok(())
}
