//! Document reading
//!
//! Documents are read in one go and decoded as UTF-8. Invalid byte
//! sequences are replaced rather than failing the load; the result records
//! whether that happened so callers can warn about it.

use std::fs;
use std::io;
use std::path::Path;

/// Text of a document as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText {
    pub content: String,

    /// Whether invalid UTF-8 was replaced during decoding
    pub lossy: bool,
}

impl DocumentText {
    pub fn decode(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(content) => Self {
                content,
                lossy: false,
            },
            Err(e) => Self {
                content: String::from_utf8_lossy(e.as_bytes()).into_owned(),
                lossy: true,
            },
        }
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

/// Read a document from disk
pub fn read_document(path: &Path) -> io::Result<DocumentText> {
    Ok(DocumentText::decode(fs::read(path)?))
}

/// Write rendered lines joined by `\n`, no trailing newline, replacing any
/// existing file
pub fn write_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    fs::write(path, lines.join("\n"))
}
