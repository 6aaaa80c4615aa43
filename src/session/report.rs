//! Printable reports for session results

use colored::Colorize;
use serde::Serialize;

use crate::core::concordance::ConcordanceEntry;
use crate::core::model::OccurrenceRow;
use crate::core::paths::normalize_path;
use crate::core::render::Report;
use crate::session::store::ConcordanceOutcome;

/// Occurrence counts of one query across the open documents
#[derive(Debug, Clone)]
pub struct OccurrenceReport {
    pub rows: Vec<OccurrenceRow>,
}

impl Report for OccurrenceReport {
    type Record = OccurrenceRow;

    fn records(&self) -> &[Self::Record] {
        &self.rows
    }

    fn to_text(&self, _color: bool) -> String {
        self.rows
            .iter()
            .map(|row| format!("{:30} {} occurrences", row.document, row.count))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A saved concordance, optionally with its lines
#[derive(Debug, Clone, Serialize)]
pub struct ConcordanceReport {
    pub document: String,
    pub index: usize,
    pub output: String,
    pub words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<ConcordanceEntry>>,
}

impl ConcordanceReport {
    pub fn new(outcome: ConcordanceOutcome, include_entries: bool) -> Self {
        Self {
            document: outcome.document,
            index: outcome.index,
            output: normalize_path(&outcome.output),
            words: outcome.entries.len(),
            entries: include_entries.then_some(outcome.entries),
        }
    }
}

impl Report for ConcordanceReport {
    type Record = ConcordanceReport;

    fn records(&self) -> &[Self::Record] {
        std::slice::from_ref(self)
    }

    fn to_text(&self, color: bool) -> String {
        let mut lines = Vec::new();

        for entry in self.entries.iter().flatten() {
            if color && entry.highlighted {
                lines.push(format!("{} {}.", entry.word.bold(), entry.locations_text()));
            } else {
                lines.push(entry.to_line());
            }
        }

        lines.push(format!("Saved as: {}", self.output));
        lines.join("\n")
    }
}
