// src/commands/head/mod.rs
use crate::commands::cat::read_file_text;
use crate::commands::types::output;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{display_path, FsError};
use crate::interpreter::{CommandError, ShellState};

pub struct HeadCommand;

const DEFAULT_LINES: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeadOptions<'a> {
    /// Negative counts drop that many lines from the end.
    lines: i64,
    files: &'a [String],
}

/// Accepts an optional leading `-n NUM`; everything after it is a file.
fn parse_head_args(args: &[String]) -> Result<HeadOptions<'_>, CommandError> {
    match args {
        [flag, rest @ ..] if flag == "-n" => {
            let (count, files) = rest.split_first().ok_or_else(|| {
                CommandError::invalid_argument("head", "option requires an argument -- 'n'")
            })?;
            let lines = count.parse::<i64>().map_err(|_| {
                CommandError::invalid_argument("head", format!("invalid number of lines: '{}'", count))
            })?;
            Ok(HeadOptions { lines, files })
        }
        files => Ok(HeadOptions {
            lines: DEFAULT_LINES,
            files,
        }),
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on every Unicode line boundary; `\r\n` counts as one break and a
/// final terminator does not start an empty line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&content[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                end += 1;
            }
        }
        start = end;
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// First `lines` lines of `content`, joined without a trailing newline.
/// A negative count keeps all but the last `-lines` lines.
fn get_head(content: &str, lines: i64) -> String {
    let all = split_lines(content);
    let keep = if lines >= 0 {
        usize::try_from(lines).unwrap_or(usize::MAX).min(all.len())
    } else {
        let dropped = usize::try_from(lines.unsigned_abs()).unwrap_or(usize::MAX);
        all.len().saturating_sub(dropped)
    };
    all[..keep].join("\n")
}

fn check_is_file(state: &ShellState, path: &str) -> Result<(), CommandError> {
    let resolved = state.resolve(path).map_err(CommandError::fs("head"))?;
    if resolved.node.is_directory() {
        return Err(CommandError::fs("head")(FsError::IsADirectory {
            path: display_path(&resolved.components),
        }));
    }
    Ok(())
}

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let opts = parse_head_args(ctx.args)?;
        if opts.files.is_empty() {
            return Err(CommandError::MissingOperand { command: "head" });
        }

        let state: &ShellState = ctx.state;
        for file in opts.files {
            check_is_file(state, file)?;
        }

        let parts = opts
            .files
            .iter()
            .map(|file| read_file_text(state, "head", file).map(|text| get_head(&text, opts.lines)))
            .collect::<Result<Vec<_>, _>>()?;

        output(parts.join("\n"))
    }
}
