//! Shell Environment
//!
//! Main entry point for a VFS session. Ties together the tree, the session
//! state and the command registry, and turns one raw line into one outcome.

use tracing::debug;

use crate::commands::{create_builtin_registry, CommandContext, CommandRegistry};
use crate::fs::{builtin_tree, TreeSource, Vfs};
use crate::interpreter::{CommandError, ExecOutcome, ShellState, DEFAULT_USER};

/// Options for creating a shell session.
#[derive(Debug, Default)]
pub struct ShellOptions {
    /// Initial tree (defaults to the built-in tree)
    pub tree: Option<TreeSource>,
    /// Display name used in the prompt (defaults to the tree's name)
    pub name: Option<String>,
    /// User reported by `whoami`
    pub user: Option<String>,
}

/// A single interactive session over an in-memory tree.
pub struct Shell {
    state: ShellState,
    registry: CommandRegistry,
}

impl Shell {
    pub fn new(options: ShellOptions) -> Self {
        let tree = options.tree.unwrap_or_else(builtin_tree);
        let name = options.name.unwrap_or(tree.name);
        let user = options.user.unwrap_or_else(|| DEFAULT_USER.to_string());

        Self {
            state: ShellState::new(Vfs::new(tree.root), name, user),
            registry: create_builtin_registry(),
        }
    }

    /// Execute one command line.
    ///
    /// Blank lines produce empty output. Every failure comes back as a
    /// [`CommandError`]; `exit` comes back as [`ExecOutcome::Exit`].
    pub fn exec(&mut self, line: &str) -> Result<ExecOutcome, CommandError> {
        let Some((verb, args)) = split_command_line(line) else {
            return Ok(ExecOutcome::empty());
        };

        let command = self
            .registry
            .get(verb)
            .ok_or_else(|| CommandError::UnknownCommand { name: verb.to_string() })?;

        debug!(command = verb, ?args, cwd = %self.state.cwd_display(), "executing command");
        command.execute(CommandContext {
            args: &args,
            state: &mut self.state,
        })
    }

    pub fn prompt(&self) -> String {
        self.state.prompt()
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

/// Split a line on whitespace into a verb and its arguments.
///
/// Returns `None` for a blank line.
pub fn split_command_line(line: &str) -> Option<(&str, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?;
    Some((verb, parts.map(String::from).collect()))
}
