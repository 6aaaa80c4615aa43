//! wordlens - Word lists, occurrence counts and concordances for text files
//!
//! wordlens provides:
//! - A tokenizer with line-continuation hyphen merging
//! - Case-insensitive occurrence counting
//! - Concordances with ignore and highlight lists
//! - A session holding up to 10 open documents
//! - Unified output formats (text/json/jsonl)

pub mod cli;
pub mod commands;
pub mod core;
pub mod session;
