//! Concordance building and rendering
//!
//! The builder scans raw document text directly and does not reuse the
//! word lists produced by [`crate::core::tokenizer`]. Its rules differ:
//!
//! - lines are split on runs of whitespace, not single spaces
//! - the trimmed punctuation set is [`STRIP_CHARS`]
//! - there is no hyphen merging across lines
//! - word numbers are positions in the raw whitespace split, so skipped
//!   words still advance the count
//!
//! Rendering sorts words with hyphens ordered as if absent and prints one
//! line per word: `<WORD> d.l.w; d.l.w.`

use serde::Serialize;

use crate::core::model::{Concordance, Location, WordSet};

/// Characters trimmed from both ends of a word before it becomes a key
pub const STRIP_CHARS: &[char] = &[
    '(', ')', '[', ']', '{', '}', ',', '?', '\\', '/', '!', '.', '\'',
];

/// Separator placed between rendered locations
pub const LOCATION_SEPARATOR: &str = "; ";

/// Lower-cased concordance key for a raw word, `None` when nothing is left
pub fn concordance_key(raw: &str) -> Option<String> {
    let key = raw.trim_matches(STRIP_CHARS).to_lowercase();
    (!key.is_empty()).then_some(key)
}

/// Build a concordance over `(document index, text)` pairs.
///
/// Document indices are supplied by the caller (1-based load order), so a
/// build over a single document still records that document's own index.
pub fn build<'a, I>(documents: I, ignore: &WordSet) -> Concordance
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut concordance = Concordance::new();

    for (document, text) in documents {
        for (line_index, line) in text.lines().enumerate() {
            for (word_index, raw) in line.split_whitespace().enumerate() {
                let Some(key) = concordance_key(raw) else {
                    continue;
                };
                if ignore.contains(&key) {
                    continue;
                }
                concordance.record(key, Location::new(document, line_index + 1, word_index + 1));
            }
        }
    }

    concordance
}

/// Sort key placing a hyphen before every other character
fn collation_key(word: &str) -> String {
    word.replace('-', "\0")
}

/// One rendered concordance word with its locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcordanceEntry {
    /// Word as displayed (upper-cased when highlighted)
    pub word: String,
    pub highlighted: bool,
    pub locations: Vec<Location>,
}

impl ConcordanceEntry {
    /// Locations joined by `; `, e.g. `1.2.3; 1.4.1`
    pub fn locations_text(&self) -> String {
        self.locations
            .iter()
            .map(Location::to_string)
            .collect::<Vec<_>>()
            .join(LOCATION_SEPARATOR)
    }

    /// `<WORD> <loc1>; <loc2>.`
    pub fn to_line(&self) -> String {
        format!("{} {}.", self.word, self.locations_text())
    }
}

/// Sorted entries of a concordance, highlight casing applied
pub fn entries(concordance: &Concordance, highlight: &WordSet) -> Vec<ConcordanceEntry> {
    let mut words: Vec<(&str, &[Location])> = concordance.iter().collect();
    words.sort_by_cached_key(|(word, _)| collation_key(word));

    words
        .into_iter()
        .map(|(word, locations)| {
            let highlighted = highlight.contains(word);
            ConcordanceEntry {
                word: if highlighted {
                    word.to_uppercase()
                } else {
                    word.to_string()
                },
                highlighted,
                locations: locations.to_vec(),
            }
        })
        .collect()
}

/// Render a concordance into its output lines
pub fn render(concordance: &Concordance, highlight: &WordSet) -> Vec<String> {
    entries(concordance, highlight)
        .iter()
        .map(ConcordanceEntry::to_line)
        .collect()
}
