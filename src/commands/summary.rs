//! Summary command - Token totals per document

use anyhow::Result;

use crate::commands::open_session;
use crate::core::render::{RenderConfig, Renderer};
use crate::session::store::SessionConfig;

/// Run the summary command
pub fn run_summary(config: SessionConfig, files: &[String], render: RenderConfig) -> Result<()> {
    let session = open_session(config, files)?;

    let renderer = Renderer::with_config(render);
    println!("{}", renderer.render(&session.summary()));

    Ok(())
}
