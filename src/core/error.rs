//! Error types
//!
//! Two layers:
//! - `UnpackError`: fatal conditions that stop a run before any file is written
//! - `WriteError`: per-file failures, recorded on the entry and never fatal

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors of an unpack run
#[derive(Debug, Error)]
pub enum UnpackError {
    /// The input document does not exist
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// The input document is not valid UTF-8
    #[error("Input file '{}' is not valid UTF-8", .0.display())]
    InputNotUtf8(PathBuf),

    /// Any other failure while reading the input document
    #[error("Failed to read input file '{}': {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `--out-dir` names something that is not a directory
    #[error("Output directory '{}' exists and is not a directory", .0.display())]
    OutputNotDirectory(PathBuf),

    /// The document contains no heading + code block pairs
    #[error("No files and code blocks were found")]
    NoMatchesFound,
}

impl UnpackError {
    /// Stable machine-readable code, used by the JSON renderers
    pub fn code(&self) -> &'static str {
        match self {
            UnpackError::InputNotFound(_) => "INPUT_NOT_FOUND",
            UnpackError::InputNotUtf8(_) => "INPUT_NOT_UTF8",
            UnpackError::InputUnreadable { .. } => "INPUT_UNREADABLE",
            UnpackError::OutputNotDirectory(_) => "OUTPUT_NOT_DIRECTORY",
            UnpackError::NoMatchesFound => "NO_MATCHES_FOUND",
        }
    }
}

/// Failure to materialize a single entry
#[derive(Debug, Error)]
pub enum WriteError {
    /// Absolute path or a path escaping the output directory
    #[error("refusing to write outside the output directory: {0}")]
    UnsafePath(String),

    #[error("cannot create directory '{}': {source}", dir.display())]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
