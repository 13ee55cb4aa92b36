// src/commands/ls/mod.rs
use crate::commands::types::output;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::Node;
use crate::interpreter::CommandError;

pub struct LsCommand;

fn type_char(node: &Node) -> char {
    if node.is_directory() {
        'd'
    } else {
        '-'
    }
}

/// One `type owner name` line per child, sorted by name.
fn format_listing(node: &Node) -> String {
    match node.as_directory() {
        Some(dir) => dir
            .sorted_children()
            .into_iter()
            .map(|child| format!("{} {} {}", type_char(child), child.owner(), child.name()))
            .collect::<Vec<_>>()
            .join("\n"),
        None => node.name().to_string(),
    }
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let path = ctx.args.first().map(String::as_str).unwrap_or("");
        let resolved = ctx.state.resolve(path).map_err(CommandError::fs("ls"))?;
        output(format_listing(resolved.node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{create_state, create_state_from, run, run_ok};
    use crate::error::ErrorKind;

    #[test]
    fn test_ls_root() {
        let mut state = create_state();
        let out = run_ok(&LsCommand, &mut state, &[]);
        assert_eq!(out, "d root etc\nd root home\n- root readme.txt");
    }

    #[test]
    fn test_ls_subdirectory() {
        let mut state = create_state();
        assert_eq!(run_ok(&LsCommand, &mut state, &["etc"]), "- root config");
        assert_eq!(run_ok(&LsCommand, &mut state, &["/home"]), "d alice alice");
    }

    #[test]
    fn test_ls_file_prints_name() {
        let mut state = create_state();
        assert_eq!(run_ok(&LsCommand, &mut state, &["home/alice/notes.txt"]), "notes.txt");
    }

    #[test]
    fn test_ls_empty_directory() {
        let mut state = create_state_from(r#"{"type": "dir", "name": "r", "children": [
            {"type": "dir", "name": "empty"}]}"#);
        assert_eq!(run_ok(&LsCommand, &mut state, &["empty"]), "");
    }

    #[test]
    fn test_ls_sorted_regardless_of_insertion_order() {
        let mut state = create_state_from(r#"{"type": "dir", "name": "r", "children": [
            {"type": "file", "name": "zeta"},
            {"type": "dir", "name": "alpha", "owner": "ann"},
            {"type": "file", "name": "mid", "owner": "max"}]}"#);
        let first = run_ok(&LsCommand, &mut state, &[]);
        assert_eq!(first, "d ann alpha\n- max mid\n- root zeta");
        assert_eq!(run_ok(&LsCommand, &mut state, &[]), first);
    }

    #[test]
    fn test_ls_missing_path() {
        let mut state = create_state();
        let err = run(&LsCommand, &mut state, &["nope"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().starts_with("ls: "));
    }
}
