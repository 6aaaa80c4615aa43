//! Error taxonomy
//!
//! Every failure in the core is returned as a typed value; presentation is
//! left to the caller.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected user input (document name or search word).
///
/// The `Display` text is the message shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Input is empty.")]
    EmptyFilename,

    #[error("Invalid file type. Must be a .txt file.")]
    InvalidFileType,

    #[error("File does not exist in this directory.")]
    FileNotFound,

    #[error("Please enter a word.")]
    EmptyWord,

    #[error("Illegal character detected: '{0}'")]
    IllegalCharacter(char),

    #[error("Hyphens must be between letters (no leading/trailing hyphens).")]
    MisplacedHyphen,
}

/// Failures of session-level operations (open, close, find, concordance).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("This file is already open: {0}")]
    Duplicate(String),

    #[error("Maximum of {0} files allowed.")]
    LimitReached(usize),

    #[error("File is not open: {0}")]
    NotOpen(String),

    #[error("There are no files open.")]
    NoDocuments,

    #[error("Choose a file.")]
    NoSelection,

    #[error("Could not {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SessionError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SessionError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Whether the caller can recover by asking for different input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SessionError::Io { .. })
    }
}
