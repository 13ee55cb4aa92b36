//! File System Module
//!
//! In-memory tree of directories and files, the path resolver that walks it,
//! and the sources used to build the initial tree.

pub mod node;
pub mod snapshot;
pub mod types;
pub mod vfs;

pub use node::{Directory, File, Node, DEFAULT_OWNER};
pub use snapshot::{builtin_tree, load_snapshot, parse_snapshot, SnapshotError, TreeSource};
pub use types::*;
pub use vfs::{display_path, Resolved, Vfs};
