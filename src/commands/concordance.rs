//! Concordance command - Build and save the concordance of one document

use anyhow::{Context, Result};

use crate::commands::open_session;
use crate::core::paths::display_name;
use crate::core::render::{RenderConfig, Renderer};
use crate::session::report::ConcordanceReport;
use crate::session::store::SessionConfig;

/// Run the concordance command.
///
/// All `files` are opened so load-order indices match a session that opened
/// them in the same order; `select` (default: the first file) is the one
/// written out.
pub fn run_concordance(
    config: SessionConfig,
    files: &[String],
    select: Option<&str>,
    print: bool,
    render: RenderConfig,
) -> Result<()> {
    let session = open_session(config, files)?;

    let selected = match select {
        Some(name) => display_name(name),
        None => session
            .names()
            .next()
            .map(str::to_string)
            .context("No document given")?,
    };

    let lists = session.load_extra_lists()?;
    let outcome = session
        .concordance(&selected, &lists)
        .with_context(|| format!("Failed to build concordance for {}", selected))?;

    let renderer = Renderer::with_config(render);
    println!("{}", renderer.render(&ConcordanceReport::new(outcome, print)));

    Ok(())
}
