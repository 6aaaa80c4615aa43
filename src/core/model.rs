//! Data model
//!
//! Word lists, concordance locations and the per-document summary view.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Ordered tokens of one document. Tokens keep their original case and may be empty.
pub type WordList = Vec<String>;

/// A set of lower-cased words (ignore or highlight list).
pub type WordSet = HashSet<String>;

/// Where a word occurs: 1-based document, line and word position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub document: usize,
    pub line: usize,
    pub word: usize,
}

impl Location {
    pub fn new(document: usize, line: usize, word: usize) -> Self {
        Self {
            document,
            line,
            word,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.document, self.line, self.word)
    }
}

/// Mapping from lower-cased word to every location it was found at, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Concordance {
    entries: HashMap<String, Vec<Location>>,
}

impl Concordance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a location for `word`, creating the entry on first occurrence
    pub(crate) fn record(&mut self, word: String, location: Location) {
        self.entries.entry(word).or_default().push(location);
    }

    pub fn get(&self, word: &str) -> Option<&[Location]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Location])> {
        self.entries
            .iter()
            .map(|(word, locations)| (word.as_str(), locations.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Number of tokens containing the query, for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceRow {
    pub document: String,
    pub query: String,
    pub count: usize,
}

pub const HEADER_FILENAME: &str = "Filename";
pub const HEADER_TOTAL: &str = "TotalWords";
pub const HEADER_DISTINCT: &str = "Distinct";

/// One line of the summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub filename: String,
    /// Every token, empty ones included
    pub total_words: usize,
    /// Case-insensitively distinct, non-empty tokens
    pub distinct_words: usize,
}

impl SummaryRow {
    pub fn from_words(filename: impl Into<String>, words: &[String]) -> Self {
        let distinct: HashSet<String> = words
            .iter()
            .filter(|w| !w.is_empty())
            .map(|w| w.to_lowercase())
            .collect();

        Self {
            filename: filename.into(),
            total_words: words.len(),
            distinct_words: distinct.len(),
        }
    }
}

/// Column widths for tabular rendering: max(content width, header width)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWidths {
    pub filename: usize,
    pub total: usize,
    pub distinct: usize,
}

/// Summary view over the open documents, in load order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    pub widths: ColumnWidths,
}

impl Summary {
    pub fn new(rows: Vec<SummaryRow>) -> Self {
        let widths = ColumnWidths {
            filename: column_width(rows.iter().map(|r| r.filename.chars().count()), HEADER_FILENAME),
            total: column_width(
                rows.iter().map(|r| r.total_words.to_string().len()),
                HEADER_TOTAL,
            ),
            distinct: column_width(
                rows.iter().map(|r| r.distinct_words.to_string().len()),
                HEADER_DISTINCT,
            ),
        };

        Self { rows, widths }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn column_width(content: impl Iterator<Item = usize>, header: &str) -> usize {
    content.max().unwrap_or(0).max(header.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> WordList {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::new(1, 12, 3).to_string(), "1.12.3");
    }

    #[test]
    fn test_concordance_record_keeps_order() {
        let mut concordance = Concordance::new();
        concordance.record("word".to_string(), Location::new(1, 1, 1));
        concordance.record("word".to_string(), Location::new(1, 3, 2));
        concordance.record("other".to_string(), Location::new(1, 2, 1));

        assert_eq!(concordance.len(), 2);
        assert_eq!(
            concordance.get("word").unwrap(),
            &[Location::new(1, 1, 1), Location::new(1, 3, 2)]
        );
        assert!(concordance.get("missing").is_none());
    }

    #[test]
    fn test_summary_row_counts_empty_tokens_in_total_only() {
        let row = SummaryRow::from_words("a.txt", &words(&["The", "the", "", "cat", ""]));
        assert_eq!(row.total_words, 5);
        assert_eq!(row.distinct_words, 2);
    }

    #[test]
    fn test_summary_widths_use_header_minimum() {
        let summary = Summary::new(vec![SummaryRow::from_words("a.txt", &words(&["x"]))]);
        assert_eq!(summary.widths.filename, HEADER_FILENAME.len());
        assert_eq!(summary.widths.total, HEADER_TOTAL.len());
        assert_eq!(summary.widths.distinct, HEADER_DISTINCT.len());
    }

    #[test]
    fn test_summary_widths_grow_with_content() {
        let summary = Summary::new(vec![
            SummaryRow::from_words("short.txt", &[]),
            SummaryRow::from_words("a_much_longer_name.txt", &[]),
        ]);
        assert_eq!(summary.widths.filename, "a_much_longer_name.txt".len());
    }

    #[test]
    fn test_summary_empty() {
        let summary = Summary::new(Vec::new());
        assert!(summary.is_empty());
        assert_eq!(summary.widths.filename, HEADER_FILENAME.len());
    }
}
