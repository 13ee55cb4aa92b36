//! Interpreter Types
//!
//! Session state shared by all commands and the outcome of running one.

use crate::fs::{display_path, FsError, Resolved, Vfs};

/// User reported by `whoami` when none is configured.
pub const DEFAULT_USER: &str = "guest";

/// What a successfully dispatched command line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecOutcome {
    /// Text to display, possibly empty.
    Output(String),
    /// The session should end.
    Exit,
}

impl ExecOutcome {
    pub fn empty() -> Self {
        ExecOutcome::Output(String::new())
    }

    /// Output text, or `None` for [`ExecOutcome::Exit`].
    pub fn output(&self) -> Option<&str> {
        match self {
            ExecOutcome::Output(text) => Some(text),
            ExecOutcome::Exit => None,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, ExecOutcome::Exit)
    }
}

/// Per-session state: the tree, display name, user and working directory.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub vfs: Vfs,
    pub vfs_name: String,
    pub user: String,
    /// Components from the root (root name first); always a directory.
    cwd: Vec<String>,
}

impl ShellState {
    pub fn new(vfs: Vfs, vfs_name: impl Into<String>, user: impl Into<String>) -> Self {
        let cwd = vfs.root_components();
        Self {
            vfs,
            vfs_name: vfs_name.into(),
            user: user.into(),
            cwd,
        }
    }

    pub fn cwd(&self) -> &[String] {
        &self.cwd
    }

    /// Working directory as an absolute path, e.g. `/home/alice`.
    pub fn cwd_display(&self) -> String {
        display_path(&self.cwd)
    }

    /// Prompt shown before each command line.
    pub fn prompt(&self) -> String {
        format!("{}:{}$ ", self.vfs_name, self.cwd_display())
    }

    /// Resolve `path` against the working directory.
    pub fn resolve(&self, path: &str) -> Result<Resolved<'_>, FsError> {
        self.vfs.resolve(&self.cwd, path)
    }

    /// Resolve `path` to canonical components without borrowing the tree.
    pub fn resolve_components(&self, path: &str) -> Result<Vec<String>, FsError> {
        self.vfs.resolve_components(&self.cwd, path)
    }

    /// Replace the working directory. `components` must denote a directory.
    pub(crate) fn set_cwd(&mut self, components: Vec<String>) {
        self.cwd = components;
    }

    pub(crate) fn reset_cwd(&mut self) {
        self.cwd = self.vfs.root_components();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::builtin_tree;

    fn create_state() -> ShellState {
        let source = builtin_tree();
        ShellState::new(Vfs::new(source.root), source.name, DEFAULT_USER)
    }

    #[test]
    fn test_initial_cwd_is_root() {
        let state = create_state();
        assert_eq!(state.cwd().to_vec(), vec!["root".to_string()]);
        assert_eq!(state.cwd_display(), "/");
        assert_eq!(state.prompt(), "builtin_vfs:/$ ");
    }

    #[test]
    fn test_set_and_reset_cwd() {
        let mut state = create_state();
        let components = state.resolve_components("home/alice").unwrap();
        state.set_cwd(components);
        assert_eq!(state.cwd_display(), "/home/alice");
        assert_eq!(state.resolve("notes.txt").unwrap().node.owner(), "alice");
        state.reset_cwd();
        assert_eq!(state.cwd_display(), "/");
    }

    #[test]
    fn test_exec_outcome_accessors() {
        assert_eq!(ExecOutcome::Output("x".into()).output(), Some("x"));
        assert_eq!(ExecOutcome::empty().output(), Some(""));
        assert!(ExecOutcome::Exit.is_exit());
        assert_eq!(ExecOutcome::Exit.output(), None);
    }
}
