//! In-Memory File System
//!
//! Owns the tree and resolves path expressions against it. Locations are
//! plain component lists starting with the root's own name; every lookup
//! re-walks from the root, so probing a path never mutates anything.

use tracing::trace;

use super::node::{Directory, Node};
use super::types::FsError;

/// Result of resolving a path expression.
#[derive(Debug)]
pub struct Resolved<'a> {
    pub node: &'a Node,
    /// Canonical components from the root, root name first.
    pub components: Vec<String>,
}

/// In-memory virtual file system rooted at a single directory.
#[derive(Debug, Clone)]
pub struct Vfs {
    // Always a `Node::Directory`; only `new` constructs it.
    root: Node,
}

impl Vfs {
    pub fn new(root: Directory) -> Self {
        Self { root: Node::Directory(root) }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_name(&self) -> &str {
        self.root.name()
    }

    /// Components denoting the root itself.
    pub fn root_components(&self) -> Vec<String> {
        vec![self.root_name().to_string()]
    }

    /// Walk from the root through `components`.
    ///
    /// An empty list denotes the root. The first component must be the root's
    /// name.
    pub fn node_at(&self, components: &[String]) -> Result<&Node, FsError> {
        let Some((first, rest)) = components.split_first() else {
            return Ok(&self.root);
        };
        self.check_root(first)?;

        let mut node = &self.root;
        for (depth, name) in rest.iter().enumerate() {
            let dir = node.as_directory().ok_or_else(|| FsError::NotADirectory {
                path: display_path(&components[..depth + 1]),
            })?;
            node = dir.child(name).ok_or_else(|| FsError::NotFound {
                path: display_path(&components[..depth + 2]),
            })?;
        }
        Ok(node)
    }

    /// Mutable counterpart of [`Vfs::node_at`].
    pub fn node_at_mut(&mut self, components: &[String]) -> Result<&mut Node, FsError> {
        let Some((first, rest)) = components.split_first() else {
            return Ok(&mut self.root);
        };
        self.check_root(first)?;

        let mut node = &mut self.root;
        for (depth, name) in rest.iter().enumerate() {
            let dir = node.as_directory_mut().ok_or_else(|| FsError::NotADirectory {
                path: display_path(&components[..depth + 1]),
            })?;
            node = dir.child_mut(name).ok_or_else(|| FsError::NotFound {
                path: display_path(&components[..depth + 2]),
            })?;
        }
        Ok(node)
    }

    /// Resolve `path` relative to `cwd` into canonical components.
    ///
    /// `.` is skipped, `..` pops one component but never past the root, and
    /// empty segments (repeated or trailing slashes) are ignored. Each named
    /// segment must exist in a directory.
    pub fn resolve_components(&self, cwd: &[String], path: &str) -> Result<Vec<String>, FsError> {
        if path.is_empty() {
            return Ok(cwd.to_vec());
        }

        let mut stack = if path.starts_with('/') {
            self.root_components()
        } else {
            cwd.to_vec()
        };

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            match segment {
                "." => {}
                ".." => {
                    if stack.len() > 1 {
                        stack.pop();
                    }
                }
                name => {
                    let dir = self.node_at(&stack)?.as_directory().ok_or_else(|| {
                        FsError::NotADirectory { path: display_path(&stack) }
                    })?;
                    if dir.child(name).is_none() {
                        stack.push(name.to_string());
                        return Err(FsError::NotFound { path: display_path(&stack) });
                    }
                    stack.push(name.to_string());
                }
            }
            trace!(segment, depth = stack.len(), "resolved path segment");
        }

        Ok(stack)
    }

    /// Resolve `path` relative to `cwd` to a node and its canonical components.
    pub fn resolve(&self, cwd: &[String], path: &str) -> Result<Resolved<'_>, FsError> {
        let components = self.resolve_components(cwd, path)?;
        let node = self.node_at(&components)?;
        Ok(Resolved { node, components })
    }

    fn check_root(&self, first: &str) -> Result<(), FsError> {
        if first != self.root_name() {
            return Err(FsError::InvalidState {
                message: format!(
                    "path starts at '{}' but the root is '{}'",
                    first,
                    self.root_name()
                ),
            });
        }
        Ok(())
    }
}

/// Render components as an absolute path, omitting the root's own name.
pub fn display_path(components: &[String]) -> String {
    match components.split_first() {
        Some((_, rest)) if !rest.is_empty() => format!("/{}", rest.join("/")),
        _ => "/".to_string(),
    }
}
