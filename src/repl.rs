//! Startup scripts and the interactive loop
//!
//! Both drivers are plain callers of [`Shell::exec`]. They are generic over
//! their input and output so they can run against in-memory buffers.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::interpreter::{CommandError, ExecOutcome};
use crate::shell::Shell;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("cannot open startup script '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("startup script stopped at line {line}: {source}")]
    CommandFailed {
        line: usize,
        #[source]
        source: CommandError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// How a script run ended when no command failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// Every line ran.
    Completed,
    /// An `exit` command ended the session.
    Exited,
}

fn write_output<W: Write>(out: &mut W, outcome: &ExecOutcome) -> io::Result<()> {
    match outcome.output() {
        Some(text) if !text.is_empty() => writeln!(out, "{}", text.trim_end_matches('\n')),
        _ => Ok(()),
    }
}

/// Run a script line by line, echoing each command after the prompt.
///
/// Blank lines and `#` comments are skipped. The first failing command stops
/// the script.
pub fn run_script<R: BufRead, W: Write>(
    shell: &mut Shell,
    input: R,
    out: &mut W,
) -> Result<ScriptOutcome, ScriptError> {
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() || command.starts_with('#') {
            continue;
        }

        writeln!(out, "{}{}", shell.prompt(), command)?;
        match shell.exec(command) {
            Ok(ExecOutcome::Exit) => {
                debug!(line = index + 1, "script requested exit");
                return Ok(ScriptOutcome::Exited);
            }
            Ok(outcome) => write_output(out, &outcome)?,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                warn!(line = index + 1, error = %e, "startup script command failed");
                return Err(ScriptError::CommandFailed {
                    line: index + 1,
                    source: e,
                });
            }
        }
    }
    Ok(ScriptOutcome::Completed)
}

/// Open `path` and run it with [`run_script`].
pub fn run_script_file<W: Write>(
    shell: &mut Shell,
    path: impl AsRef<Path>,
    out: &mut W,
) -> Result<ScriptOutcome, ScriptError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ScriptError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "running startup script");
    run_script(shell, BufReader::new(file), out)
}

/// Read-eval-print until end of input or `exit`.
///
/// Command failures are printed and the loop continues.
pub fn run_interactive<R: BufRead, W: Write>(
    shell: &mut Shell,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{}", shell.prompt())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match shell.exec(&line) {
            Ok(ExecOutcome::Exit) => return Ok(()),
            Ok(outcome) => write_output(out, &outcome)?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }
}
