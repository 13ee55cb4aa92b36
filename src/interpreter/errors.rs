//! Command Errors
//!
//! Every failure raised while running a command line is converted into a
//! [`CommandError`] at the dispatch boundary. The `exit` command is not an
//! error; it travels as [`ExecOutcome::Exit`](super::types::ExecOutcome).

use thiserror::Error;

use crate::error::ErrorKind;
use crate::fs::FsError;

#[derive(Error, Debug, Clone)]
pub enum CommandError {
    #[error("{command}: {source}")]
    Fs {
        command: &'static str,
        #[source]
        source: FsError,
    },

    #[error("{command}: missing operand")]
    MissingOperand { command: &'static str },

    #[error("{command}: {message}")]
    InvalidArgument { command: &'static str, message: String },

    #[error("{name}: command not found")]
    UnknownCommand { name: String },
}

impl CommandError {
    /// Attach the failing command's name to a file system error.
    pub fn fs(command: &'static str) -> impl FnOnce(FsError) -> CommandError {
        move |source| CommandError::Fs { command, source }
    }

    pub fn invalid_argument(command: &'static str, message: impl Into<String>) -> Self {
        CommandError::InvalidArgument {
            command,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Fs { source, .. } => source.kind(),
            CommandError::MissingOperand { .. } => ErrorKind::MissingOperand,
            CommandError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            CommandError::UnknownCommand { .. } => ErrorKind::UnknownCommand,
        }
    }
}
