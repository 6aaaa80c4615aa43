//! Input validation for document names and search words

use std::path::{Path, PathBuf};

use crate::core::error::ValidationError;

/// Accepted document extension (compared case-insensitively)
pub const DOCUMENT_EXTENSION: &str = ".txt";

/// Validate a candidate document name against `root`.
///
/// Checks, in order: non-empty, `.txt` suffix, existing file. Returns the
/// resolved path on success.
pub fn validate_filename(root: &Path, candidate: &str) -> Result<PathBuf, ValidationError> {
    if candidate.is_empty() {
        return Err(ValidationError::EmptyFilename);
    }

    if !candidate.to_lowercase().ends_with(DOCUMENT_EXTENSION) {
        return Err(ValidationError::InvalidFileType);
    }

    let path = root.join(candidate);
    if !path.is_file() {
        return Err(ValidationError::FileNotFound);
    }

    Ok(path)
}

/// Validate a search word: ASCII letters and interior hyphens only.
pub fn validate_search_word(word: &str) -> Result<&str, ValidationError> {
    if word.is_empty() {
        return Err(ValidationError::EmptyWord);
    }

    if let Some(bad) = word.chars().find(|c| !c.is_ascii_alphabetic() && *c != '-') {
        return Err(ValidationError::IllegalCharacter(bad));
    }

    if word.starts_with('-') || word.ends_with('-') {
        return Err(ValidationError::MisplacedHyphen);
    }

    Ok(word)
}
