//! Tree nodes
//!
//! A node is either a [`Directory`] owning its children or a [`File`] owning
//! its payload. There are no parent pointers: every directory exclusively
//! owns its subtree, and attaching a node moves it into the tree.

use indexmap::IndexMap;

use super::types::{decode_text, DecodeErrors, FileContent, FsError, TextEncoding};

/// Owner assigned to nodes created without an explicit owner.
pub const DEFAULT_OWNER: &str = "root";

/// A node in the virtual file system tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    File(File),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Directory(dir) => dir.name(),
            Node::File(file) => file.name(),
        }
    }

    pub fn owner(&self) -> &str {
        match self {
            Node::Directory(dir) => dir.owner(),
            Node::File(file) => file.owner(),
        }
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        match self {
            Node::Directory(dir) => dir.set_owner(owner),
            Node::File(file) => file.set_owner(owner),
        }
    }

    /// Check if node is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Check if node is a file
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }
}

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Node::Directory(dir)
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}

/// A directory: a mapping from child name to child node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    name: String,
    owner: String,
    children: IndexMap<String, Node>,
}

impl Directory {
    /// Create a detached, empty directory.
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            children: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    /// Insert `node` under its own name.
    ///
    /// An existing child with the same name is replaced and returned.
    pub fn add_child(&mut self, node: impl Into<Node>) -> Option<Node> {
        let node = node.into();
        self.children.insert(node.name().to_string(), node)
    }

    /// Detach and return the child called `name`.
    pub fn remove_child(&mut self, name: &str) -> Result<Node, FsError> {
        self.children
            .shift_remove(name)
            .ok_or_else(|| FsError::NotFound { path: name.to_string() })
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    /// Children sorted by name.
    pub fn sorted_children(&self) -> Vec<&Node> {
        let mut children: Vec<&Node> = self.children.values().collect();
        children.sort_by(|a, b| a.name().cmp(b.name()));
        children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A regular file holding an opaque byte payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    owner: String,
    content: FileContent,
}

impl File {
    /// Create a detached file.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<FileContent>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    /// Replace the stored content.
    pub fn set_content(&mut self, content: impl Into<FileContent>) {
        self.content = content.into();
    }

    pub fn content(&self) -> &FileContent {
        &self.content
    }

    /// Read the payload, failing if the stored encoding is corrupt.
    pub fn read_bytes(&self) -> Result<Vec<u8>, FsError> {
        self.content.decode().map_err(|source| FsError::Decode {
            name: self.name.clone(),
            source,
        })
    }

    /// Read the payload as text. Invalid sequences are handled per `errors`.
    pub fn read_text(&self, encoding: TextEncoding, errors: DecodeErrors) -> Result<String, FsError> {
        let bytes = self.read_bytes()?;
        Ok(decode_text(&bytes, encoding, errors))
    }
}
