//! Session module - The collaborator that owns open documents
//!
//! Provides:
//! - store: the open-document store and its operations
//! - report: printable results of those operations
//! - shell: an interactive session driven from stdin

pub mod report;
pub mod shell;
pub mod store;
