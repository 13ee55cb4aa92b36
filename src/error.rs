//! Error classification shared by the filesystem and command layers.

/// Kind of failure, independent of which layer raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    NotADirectory,
    IsADirectory,
    NotEmpty,
    CannotRemoveRoot,
    MissingOperand,
    InvalidArgument,
    UnknownCommand,
    DecodeError,
    InvalidSnapshot,
    InvalidState,
}
