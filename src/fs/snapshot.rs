//! Tree construction
//!
//! Builds the initial tree either from a JSON snapshot or from the built-in
//! default layout.
//!
//! Snapshot shape (recursive):
//!
//! ```json
//! { "type": "dir", "name": "root", "owner": "root", "children": [
//!     { "type": "file", "name": "a.txt", "content_b64": "aGk=" } ] }
//! ```

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::node::{Directory, File, Node, DEFAULT_OWNER};
use super::types::FileContent;
use crate::error::ErrorKind;

/// Display name of the built-in tree.
pub const BUILTIN_NAME: &str = "builtin_vfs";

/// Snapshot construction errors
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("cannot read snapshot '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("invalid snapshot: root node '{name}' must be a directory")]
    RootNotDirectory { name: String },
}

impl SnapshotError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidSnapshot
    }
}

/// A root directory together with its display name.
#[derive(Debug, Clone)]
pub struct TreeSource {
    pub root: Directory,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum SnapshotNode {
    // Optional fields accept both absence and `null`.
    #[serde(rename = "file")]
    File {
        name: String,
        #[serde(default)]
        owner: Option<String>,
        #[serde(default)]
        content_b64: Option<String>,
    },
    #[serde(rename = "dir")]
    Dir {
        name: String,
        #[serde(default)]
        owner: Option<String>,
        #[serde(default)]
        children: Option<Vec<SnapshotNode>>,
    },
}

fn owner_or_default(owner: Option<String>) -> String {
    owner.unwrap_or_else(|| DEFAULT_OWNER.to_string())
}

fn build_node(node: SnapshotNode) -> Node {
    match node {
        SnapshotNode::File { name, owner, content_b64 } => Node::File(File::new(
            name,
            FileContent::Base64(content_b64.unwrap_or_default()),
            owner_or_default(owner),
        )),
        SnapshotNode::Dir { name, owner, children } => {
            let mut dir = Directory::new(name, owner_or_default(owner));
            for child in children.unwrap_or_default() {
                dir.add_child(build_node(child));
            }
            Node::Directory(dir)
        }
    }
}

/// Parse a snapshot document. The tree is named after its root.
pub fn parse_snapshot(json: &str) -> Result<TreeSource, SnapshotError> {
    let snapshot: SnapshotNode = serde_json::from_str(json)?;
    match build_node(snapshot) {
        Node::Directory(root) => Ok(TreeSource {
            name: root.name().to_string(),
            root,
        }),
        Node::File(file) => Err(SnapshotError::RootNotDirectory {
            name: file.name().to_string(),
        }),
    }
}

/// Read and parse a snapshot file.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<TreeSource, SnapshotError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading snapshot");
    let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source = parse_snapshot(&json)?;
    debug!(root = source.root.name(), entries = source.root.len(), "snapshot loaded");
    Ok(source)
}

fn encoded(text: &str) -> FileContent {
    FileContent::Base64(STANDARD.encode(text))
}

/// The built-in tree used when no snapshot is given.
pub fn builtin_tree() -> TreeSource {
    let mut root = Directory::new("root", DEFAULT_OWNER);
    root.add_child(File::new("readme.txt", encoded("Welcome to VFS emulator\n"), DEFAULT_OWNER));

    let mut etc = Directory::new("etc", DEFAULT_OWNER);
    etc.add_child(File::new("config", encoded("config=1\n"), DEFAULT_OWNER));

    let mut home = Directory::new("home", DEFAULT_OWNER);
    let mut alice = Directory::new("alice", "alice");
    alice.add_child(File::new(
        "notes.txt",
        encoded("These are Alice's notes\nLine2\n"),
        "alice",
    ));
    home.add_child(alice);

    root.add_child(etc);
    root.add_child(home);

    TreeSource {
        root,
        name: BUILTIN_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_nested_snapshot() {
        let json = r#"{
            "type": "dir", "name": "vfs", "children": [
                {"type": "file", "name": "a.txt", "content_b64": "aGVsbG8K", "owner": "bob"},
                {"type": "dir", "name": "tmp"}
            ]
        }"#;
        let source = parse_snapshot(json).unwrap();
        assert_eq!(source.name, "vfs");
        assert_eq!(source.root.owner(), "root");
        assert_eq!(source.root.len(), 2);

        let file = source.root.child("a.txt").unwrap().as_file().unwrap();
        assert_eq!(file.owner(), "bob");
        assert_eq!(file.read_bytes().unwrap(), b"hello\n");

        let tmp = source.root.child("tmp").unwrap().as_directory().unwrap();
        assert!(tmp.is_empty());
    }

    #[test]
    fn test_file_content_defaults_to_empty() {
        let json = r#"{"type": "dir", "name": "r", "children": [{"type": "file", "name": "e"}]}"#;
        let source = parse_snapshot(json).unwrap();
        let file = source.root.child("e").unwrap().as_file().unwrap();
        assert!(file.read_bytes().unwrap().is_empty());
    }

    #[test]
    fn test_null_optional_fields_take_defaults() {
        let json = r#"{"type": "dir", "name": "r", "owner": null, "children": [
            {"type": "file", "name": "f", "content_b64": null, "owner": null},
            {"type": "dir", "name": "d", "children": null}]}"#;
        let source = parse_snapshot(json).unwrap();
        assert_eq!(source.root.owner(), "root");
        let file = source.root.child("f").unwrap().as_file().unwrap();
        assert_eq!(file.owner(), "root");
        assert!(file.read_bytes().unwrap().is_empty());
        assert!(source.root.child("d").unwrap().as_directory().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_content_fails_on_read_only() {
        let json = r#"{"type": "dir", "name": "r", "children": [
            {"type": "file", "name": "bad", "content_b64": "abcde"}]}"#;
        let source = parse_snapshot(json).unwrap();
        let file = source.root.child("bad").unwrap().as_file().unwrap();
        assert_eq!(file.read_bytes().unwrap_err().kind(), ErrorKind::DecodeError);
    }

    #[test]
    fn test_missing_type_or_name() {
        let err = parse_snapshot(r#"{"name": "r"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSnapshot);
        assert!(parse_snapshot(r#"{"type": "dir"}"#).is_err());
        assert!(parse_snapshot(
            r#"{"type": "dir", "name": "r", "children": [{"type": "file"}]}"#
        )
        .is_err());
    }

    #[test]
    fn test_unknown_type() {
        let err = parse_snapshot(r#"{"type": "socket", "name": "s"}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
    }

    #[test]
    fn test_root_must_be_directory() {
        let err = parse_snapshot(r#"{"type": "file", "name": "f"}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::RootNotDirectory { ref name } if name == "f"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_snapshot("{not json"), Err(SnapshotError::Parse { .. })));
    }

    #[test]
    fn test_load_snapshot_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"type": "dir", "name": "disk"}}"#).unwrap();
        let source = load_snapshot(file.path()).unwrap();
        assert_eq!(source.name, "disk");
        assert!(source.root.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_snapshot("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn test_builtin_tree() {
        let source = builtin_tree();
        assert_eq!(source.name, BUILTIN_NAME);
        assert_eq!(source.root.name(), "root");
        let alice = source.root.child("home").unwrap().as_directory().unwrap()
            .child("alice").unwrap();
        assert_eq!(alice.owner(), "alice");
        let notes = alice.as_directory().unwrap().child("notes.txt").unwrap();
        assert_eq!(notes.as_file().unwrap().read_bytes().unwrap(), b"These are Alice's notes\nLine2\n");
    }
}
