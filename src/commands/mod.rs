// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod chown_cmd;
pub mod exit_cmd;
pub mod head;
pub mod ls;
pub mod registry;
pub mod rmdir_cmd;
pub mod types;
pub mod whoami_cmd;

#[cfg(test)]
pub(crate) mod testing;

pub use registry::{create_builtin_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};
