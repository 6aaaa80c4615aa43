//! Candidates command - List documents that can be opened
//!
//! Walks the root with walkdir and keeps regular files whose name ends in
//! `.txt` (any case), sorted by path.

use anyhow::Result;
use serde::Serialize;
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::paths::make_relative;
use crate::core::render::{RenderConfig, Renderer, Report};
use crate::core::validate::DOCUMENT_EXTENSION;

/// A `.txt` file found under the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Path relative to root, using '/' as separator
    pub path: String,
    pub size: u64,
}

/// Sorted list of candidate documents
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
    pub items: Vec<Candidate>,
}

impl Report for CandidateList {
    type Record = Candidate;

    fn records(&self) -> &[Self::Record] {
        &self.items
    }

    fn to_text(&self, _color: bool) -> String {
        self.items
            .iter()
            .map(|c| c.path.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn is_document(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(DOCUMENT_EXTENSION))
        .unwrap_or(false)
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Find `.txt` files under `root`
pub fn scan_candidates(root: &Path, max_depth: Option<usize>, hidden: bool) -> CandidateList {
    let mut walker = WalkDir::new(root).min_depth(1);
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut items = Vec::new();

    for entry in walker
        .into_iter()
        .filter_entry(|e| hidden || e.depth() == 0 || !is_hidden(e.file_name()))
    {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() || !is_document(entry.path()) {
            continue;
        }

        let relative = match make_relative(entry.path(), root) {
            Some(r) => r,
            None => continue,
        };

        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        items.push(Candidate {
            path: relative,
            size,
        });
    }

    items.sort_by(|a, b| a.path.cmp(&b.path));
    CandidateList { items }
}

/// Run the candidates command
pub fn run_candidates(
    root: &Path,
    max_depth: Option<usize>,
    hidden: bool,
    render: RenderConfig,
) -> Result<()> {
    let list = scan_candidates(root, max_depth, hidden);

    let renderer = Renderer::with_config(render);
    println!("{}", renderer.render(&list));

    Ok(())
}
