//! Ignore / highlight word lists
//!
//! File format: a line `IGNORE:` or `HIGHLIGHT:` (any case) opens a
//! section; following non-blank lines are lower-cased into that section
//! until the next marker. Lines before the first marker are skipped.
//!
//! ```text
//! IGNORE:
//! the
//! a
//! HIGHLIGHT:
//! whale
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::core::model::WordSet;

/// Default list file name, resolved against the working root
pub const DEFAULT_EXTRA_LISTS: &str = "ExtraLists.txt";

const IGNORE_MARKER: &str = "IGNORE:";
const HIGHLIGHT_MARKER: &str = "HIGHLIGHT:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Ignore,
    Highlight,
}

/// Words excluded from and emphasised in a concordance, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraLists {
    pub ignore: Vec<String>,
    pub highlight: Vec<String>,
}

impl ExtraLists {
    /// Parse list file content
    pub fn parse(content: &str) -> Self {
        let mut lists = ExtraLists::default();
        let mut section = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.eq_ignore_ascii_case(IGNORE_MARKER) {
                section = Some(Section::Ignore);
            } else if line.eq_ignore_ascii_case(HIGHLIGHT_MARKER) {
                section = Some(Section::Highlight);
            } else {
                match section {
                    Some(Section::Ignore) => lists.ignore.push(line.to_lowercase()),
                    Some(Section::Highlight) => lists.highlight.push(line.to_lowercase()),
                    None => {}
                }
            }
        }

        lists
    }

    /// Load a list file. A missing file yields empty lists; other read
    /// failures are returned.
    pub fn load(path: &Path) -> io::Result<Self> {
        match fs::read(path) {
            Ok(bytes) => Ok(Self::parse(&String::from_utf8_lossy(&bytes))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn ignore_set(&self) -> WordSet {
        self.ignore.iter().cloned().collect()
    }

    pub fn highlight_set(&self) -> WordSet {
        self.highlight.iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.ignore.is_empty() && self.highlight.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_sections() {
        let lists = ExtraLists::parse("IGNORE:\nThe\na\n\nHIGHLIGHT:\nWhale\n");
        assert_eq!(lists.ignore, vec!["the", "a"]);
        assert_eq!(lists.highlight, vec!["whale"]);
    }

    #[test]
    fn test_markers_case_insensitive() {
        let lists = ExtraLists::parse("ignore:\nx\nHighlight:\ny\n");
        assert_eq!(lists.ignore, vec!["x"]);
        assert_eq!(lists.highlight, vec!["y"]);
    }

    #[test]
    fn test_lines_before_first_marker_ignored() {
        let lists = ExtraLists::parse("preamble\nmore\nHIGHLIGHT:\nz\n");
        assert!(lists.ignore.is_empty());
        assert_eq!(lists.highlight, vec!["z"]);
    }

    #[test]
    fn test_duplicates_and_order_kept() {
        let lists = ExtraLists::parse("IGNORE:\nb\na\nb\n");
        assert_eq!(lists.ignore, vec!["b", "a", "b"]);
        assert_eq!(lists.ignore_set().len(), 2);
    }

    #[test]
    fn test_sections_can_reopen() {
        let lists = ExtraLists::parse("IGNORE:\na\nHIGHLIGHT:\nb\nIGNORE:\nc\n");
        assert_eq!(lists.ignore, vec!["a", "c"]);
        assert_eq!(lists.highlight, vec!["b"]);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let lists = ExtraLists::parse("  IGNORE:  \r\n   Word \r\n");
        assert_eq!(lists.ignore, vec!["word"]);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = tempdir().unwrap();
        let lists = ExtraLists::load(&temp.path().join("ExtraLists.txt")).unwrap();
        assert_eq!(lists, ExtraLists::default());
        assert!(lists.is_empty());
    }

    #[test]
    fn test_load_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(DEFAULT_EXTRA_LISTS);
        std::fs::write(&path, "IGNORE:\nof\nHIGHLIGHT:\nsea\n").unwrap();

        let lists = ExtraLists::load(&path).unwrap();
        assert!(lists.ignore_set().contains("of"));
        assert!(lists.highlight_set().contains("sea"));
    }

    #[test]
    fn test_load_directory_is_an_error() {
        let temp = tempdir().unwrap();
        assert!(ExtraLists::load(temp.path()).is_err());
    }
}
