//! Lists command - Show the ignore and highlight lists

use anyhow::Result;

use crate::core::render::{RenderConfig, Renderer};
use crate::session::store::{Session, SessionConfig};

/// Run the lists command
pub fn run_lists(config: SessionConfig, render: RenderConfig) -> Result<()> {
    let lists = Session::new(config).load_extra_lists()?;

    let renderer = Renderer::with_config(render);
    println!("{}", renderer.render(&lists));

    Ok(())
}
