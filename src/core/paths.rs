//! Path helpers
//!
//! Display names for documents, output file naming and '/'-normalized
//! relative paths for listings.

use std::path::{Path, PathBuf};

/// Suffix appended to a document name to form its concordance file name
pub const CONCORDANCE_SUFFIX: &str = "_CONCORDANCE.txt";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Name a document is known by in a session: its final path component
pub fn display_name(candidate: &str) -> String {
    Path::new(candidate)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| candidate.to_string())
}

/// `<dir>/<name>_CONCORDANCE.txt`
pub fn concordance_output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}{}", name, CONCORDANCE_SUFFIX))
}
