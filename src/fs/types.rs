//! File System Types
//!
//! Errors, file content storage and text decoding options for the virtual
//! file system.

use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use thiserror::Error;

use crate::error::ErrorKind;

/// File system errors
#[derive(Error, Debug, Clone)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, '{path}'")]
    NotFound { path: String },

    #[error("ENOTDIR: not a directory, '{path}'")]
    NotADirectory { path: String },

    #[error("EISDIR: illegal operation on a directory, '{path}'")]
    IsADirectory { path: String },

    #[error("ENOTEMPTY: directory not empty, '{path}'")]
    NotEmpty { path: String },

    #[error("EBUSY: cannot remove the root directory")]
    CannotRemoveRoot,

    #[error("EILSEQ: cannot decode content of '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("invalid state: {message}")]
    InvalidState { message: String },
}

impl FsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FsError::NotFound { .. } => ErrorKind::NotFound,
            FsError::NotADirectory { .. } => ErrorKind::NotADirectory,
            FsError::IsADirectory { .. } => ErrorKind::IsADirectory,
            FsError::NotEmpty { .. } => ErrorKind::NotEmpty,
            FsError::CannotRemoveRoot => ErrorKind::CannotRemoveRoot,
            FsError::Decode { .. } => ErrorKind::DecodeError,
            FsError::InvalidState { .. } => ErrorKind::InvalidState,
        }
    }
}

/// Supported text encodings for `File::read_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
}

/// What to do with byte sequences that are invalid in the chosen encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeErrors {
    /// Substitute U+FFFD for each invalid sequence.
    #[default]
    Replace,
    /// Drop invalid sequences.
    Ignore,
}

/// Stored file payload.
///
/// Snapshots carry content base64-encoded; it is kept that way until read so
/// a corrupt payload surfaces as a decode error on the read that touches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Bytes(Vec<u8>),
    Base64(String),
}

/// Standard alphabet, padding required, non-zero trailing bits tolerated.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

fn is_base64_symbol(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}

impl FileContent {
    /// Payload bytes. Base64 text may be line-wrapped: bytes outside the
    /// alphabet are skipped before decoding.
    pub(crate) fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        match self {
            FileContent::Bytes(bytes) => Ok(bytes.clone()),
            FileContent::Base64(encoded) => {
                let symbols: Vec<u8> = encoded.bytes().filter(|&b| is_base64_symbol(b)).collect();
                if symbols.is_empty() {
                    return Ok(Vec::new());
                }
                LENIENT.decode(symbols)
            }
        }
    }
}

impl Default for FileContent {
    fn default() -> Self {
        FileContent::Bytes(Vec::new())
    }
}

impl From<String> for FileContent {
    fn from(s: String) -> Self {
        FileContent::Bytes(s.into_bytes())
    }
}

impl From<&str> for FileContent {
    fn from(s: &str) -> Self {
        FileContent::Bytes(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for FileContent {
    fn from(v: Vec<u8>) -> Self {
        FileContent::Bytes(v)
    }
}

impl From<&[u8]> for FileContent {
    fn from(v: &[u8]) -> Self {
        FileContent::Bytes(v.to_vec())
    }
}

/// Decode `bytes` to text, never failing on invalid input.
pub fn decode_text(bytes: &[u8], encoding: TextEncoding, errors: DecodeErrors) -> String {
    match encoding {
        TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        TextEncoding::Ascii => bytes
            .iter()
            .filter_map(|&b| {
                if b.is_ascii() {
                    Some(b as char)
                } else if errors == DecodeErrors::Replace {
                    Some(char::REPLACEMENT_CHARACTER)
                } else {
                    None
                }
            })
            .collect(),
        TextEncoding::Utf8 => {
            let mut text = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                text.push_str(chunk.valid());
                if !chunk.invalid().is_empty() && errors == DecodeErrors::Replace {
                    text.push(char::REPLACEMENT_CHARACTER);
                }
            }
            text
        }
    }
}
