//! Commands module - One-shot command handlers
//!
//! Each handler opens the given documents into a fresh session, runs one
//! operation and prints the result.
//!
//! Provides:
//! - summary: per-document token totals
//! - find: occurrence counts for a word
//! - concordance: build and save a concordance
//! - lists: show the ignore and highlight lists
//! - candidates: list `.txt` files under the root

use anyhow::{Context, Result};
use tracing::debug;

use crate::session::store::{Session, SessionConfig};

pub mod candidates;
pub mod concordance;
pub mod find;
pub mod lists;
pub mod summary;

/// Open every file, in order, into a new session
pub fn open_session(config: SessionConfig, files: &[String]) -> Result<Session> {
    let mut session = Session::new(config);

    for file in files {
        session
            .open(file)
            .with_context(|| format!("Failed to open {}", file))?;
    }

    debug!("session holds {} documents", session.len());
    Ok(session)
}
