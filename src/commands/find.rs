//! Find command - Count a word across documents

use anyhow::{Context, Result};

use crate::commands::open_session;
use crate::core::render::{RenderConfig, Renderer};
use crate::session::report::OccurrenceReport;
use crate::session::store::SessionConfig;

/// Run the find command
pub fn run_find(
    config: SessionConfig,
    word: &str,
    files: &[String],
    render: RenderConfig,
) -> Result<()> {
    let session = open_session(config, files)?;
    let rows = session
        .find(word)
        .with_context(|| format!("Invalid search word: {:?}", word))?;

    let renderer = Renderer::with_config(render);
    println!("{}", renderer.render(&OccurrenceReport { rows }));

    Ok(())
}
