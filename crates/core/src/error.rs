//! Error types for EDID parsing, extraction, and output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Largest EDID (in bytes) a dialect parser will accept.
pub const MAX_EDID_SIZE: usize = 4096;

/// Failure of a single EDID decode attempt.
///
/// In the log dialect these abandon one header match and scanning resumes;
/// in the text dialect they leave the file with no EDID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The cursor ran off the end of the input before the state machine finished.
    #[error("unexpected end of input")]
    EndOfInput,

    /// A top nibble was not followed by a bottom nibble (or the text table held junk).
    #[error("malformed hex pair at offset {offset}")]
    MalformedHexPair { offset: usize },

    /// No `NVIDIA(` line label was found after a line break inside the byte dump.
    #[error("missing log line label after offset {offset}")]
    MissingLabel { offset: usize },

    /// A line label was found but was not of the form `NVIDIA(<digits>):`.
    #[error("malformed log line label at offset {offset}")]
    MalformedLabel { offset: usize },

    /// The display name footer (or text `Monitor Name` field) was unterminated or
    /// its length fell outside 1..=512.
    #[error("malformed EDID name field at offset {offset}")]
    MalformedFooter { offset: usize },

    /// More than `limit` bytes were decoded.
    #[error("EDID exceeds the {limit}-byte limit")]
    EdidTooLarge { limit: usize },

    /// The byte stream ended before a single byte was decoded.
    #[error("no EDID bytes found after offset {offset}")]
    EmptyEdid { offset: usize },
}

/// Convenience result type for parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Fatal failure of the extraction subsystem.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Reading the input failed.
    #[error("Unable to read file \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input exists but holds no bytes.
    #[error("File \"{}\" is empty.", .path.display())]
    EmptyInput { path: PathBuf },
}

/// Failure to write a single EDID to disk. Never fatal to the batch.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Unable to open file for writing: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to set file size: {source}")]
    Size {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to copy EDID bytes into file: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// Path of the file that could not be written.
    pub fn path(&self) -> &PathBuf {
        match self {
            WriteError::Create { path, .. }
            | WriteError::Size { path, .. }
            | WriteError::Copy { path, .. } => path,
        }
    }
}
