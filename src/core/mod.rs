//! Core module - Pure text processing with no printing or logging
//!
//! This module provides:
//! - Tokenizer producing per-document word lists
//! - Occurrence counting over word lists
//! - Concordance building and rendering (a separate scan of the raw text)
//! - Ignore / highlight list loading
//! - Input validation and the error taxonomy
//! - Document reading, path helpers and output rendering

pub mod concordance;
pub mod error;
pub mod extra_lists;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod search;
pub mod tokenizer;
pub mod validate;
