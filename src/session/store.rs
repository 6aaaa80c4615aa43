//! Session - Owner of the open documents and their word lists
//!
//! A session holds at most `max_documents` documents in load order, keyed
//! by display name. Every operation runs to completion synchronously and a
//! failed operation leaves the session unchanged.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::concordance::{self, ConcordanceEntry};
use crate::core::error::SessionError;
use crate::core::extra_lists::{ExtraLists, DEFAULT_EXTRA_LISTS};
use crate::core::file_reader::{read_document, write_lines};
use crate::core::model::{OccurrenceRow, Summary, SummaryRow, WordList};
use crate::core::paths::{concordance_output_path, display_name};
use crate::core::search::count_occurrences;
use crate::core::tokenizer::tokenize;
use crate::core::validate::{validate_filename, validate_search_word};

/// Maximum number of documents open at once
pub const MAX_DOCUMENTS: usize = 10;

/// Explicit configuration for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory document names are resolved against
    pub root: PathBuf,
    pub max_documents: usize,
    /// Ignore / highlight list file
    pub lists_path: PathBuf,
    /// Where concordance files are written
    pub output_dir: PathBuf,
}

impl SessionConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            lists_path: root.join(DEFAULT_EXTRA_LISTS),
            output_dir: root.clone(),
            max_documents: MAX_DOCUMENTS,
            root,
        }
    }

    /// Set the list file; relative paths resolve against the root
    pub fn with_lists_path(mut self, path: impl AsRef<Path>) -> Self {
        self.lists_path = self.root.join(path);
        self
    }

    /// Set the output directory; relative paths resolve against the root
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = self.root.join(dir);
        self
    }
}

/// An open document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub path: PathBuf,
    pub words: WordList,
}

/// Result of building and saving one concordance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcordanceOutcome {
    pub document: String,
    /// 1-based load-order index used in every location
    pub index: usize,
    pub output: PathBuf,
    pub entries: Vec<ConcordanceEntry>,
}

impl ConcordanceOutcome {
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ConcordanceEntry::to_line).collect()
    }
}

/// The open-document store
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    documents: Vec<Document>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            documents: Vec::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.documents.len() >= self.config.max_documents
    }

    /// Open documents in load order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.name == name)
    }

    /// 1-based load-order index of an open document
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.documents
            .iter()
            .position(|d| d.name == name)
            .map(|i| i + 1)
    }

    /// Open and tokenize a document.
    ///
    /// Rejections happen in this order: session full (before any I/O),
    /// already open, invalid name, unreadable file.
    pub fn open(&mut self, candidate: &str) -> Result<&Document, SessionError> {
        if self.is_full() {
            return Err(SessionError::LimitReached(self.config.max_documents));
        }

        let name = display_name(candidate);
        if self.get(&name).is_some() {
            return Err(SessionError::Duplicate(name));
        }

        let path = validate_filename(&self.config.root, candidate)?;
        let text = read_document(&path).map_err(|e| SessionError::io("read", &path, e))?;
        if text.lossy {
            warn!("{} is not valid UTF-8; invalid bytes were replaced", path.display());
        }

        let words = tokenize(&text.content);
        debug!(
            "opened {} ({} lines, {} tokens)",
            name,
            text.line_count(),
            words.len()
        );

        self.documents.push(Document { name, path, words });
        Ok(&self.documents[self.documents.len() - 1])
    }

    /// Close an open document, returning it
    pub fn close(&mut self, name: &str) -> Result<Document, SessionError> {
        let name = display_name(name);
        let position = self
            .documents
            .iter()
            .position(|d| d.name == name)
            .ok_or(SessionError::NotOpen(name))?;

        let document = self.documents.remove(position);
        debug!("closed {}", document.name);
        Ok(document)
    }

    /// Token totals per open document, in load order
    pub fn summary(&self) -> Summary {
        Summary::new(
            self.documents
                .iter()
                .map(|d| SummaryRow::from_words(d.name.clone(), &d.words))
                .collect(),
        )
    }

    /// Count the tokens containing `query` in each open document
    pub fn find(&self, query: &str) -> Result<Vec<OccurrenceRow>, SessionError> {
        if self.is_empty() {
            return Err(SessionError::NoDocuments);
        }
        let query = validate_search_word(query)?;

        Ok(self
            .documents
            .iter()
            .map(|d| OccurrenceRow {
                document: d.name.clone(),
                query: query.to_string(),
                count: count_occurrences(&d.words, query),
            })
            .collect())
    }

    /// Load the configured ignore / highlight lists (missing file = empty)
    pub fn load_extra_lists(&self) -> Result<ExtraLists, SessionError> {
        let path = &self.config.lists_path;
        let lists = ExtraLists::load(path).map_err(|e| SessionError::io("read", path, e))?;
        debug!(
            "loaded {} ignore and {} highlight words from {}",
            lists.ignore.len(),
            lists.highlight.len(),
            path.display()
        );
        Ok(lists)
    }

    /// Build the concordance of one open document and write it to
    /// `<output dir>/<name>_CONCORDANCE.txt`.
    ///
    /// The raw source is re-read from disk; the stored word list is not used.
    pub fn concordance(
        &self,
        name: &str,
        lists: &ExtraLists,
    ) -> Result<ConcordanceOutcome, SessionError> {
        if self.is_empty() {
            return Err(SessionError::NoDocuments);
        }

        let name = display_name(name);
        let index = self
            .index_of(&name)
            .ok_or_else(|| SessionError::NotOpen(name.clone()))?;
        let document = &self.documents[index - 1];

        let text =
            read_document(&document.path).map_err(|e| SessionError::io("read", &document.path, e))?;

        let built = concordance::build([(index, text.content.as_str())], &lists.ignore_set());
        let entries = concordance::entries(&built, &lists.highlight_set());

        let outcome = ConcordanceOutcome {
            document: name,
            index,
            output: concordance_output_path(&self.config.output_dir, &document.name),
            entries,
        };

        write_lines(&outcome.output, &outcome.lines())
            .map_err(|e| SessionError::io("write", &outcome.output, e))?;
        info!(
            "wrote {} words to {}",
            outcome.entries.len(),
            outcome.output.display()
        );

        Ok(outcome)
    }
}
