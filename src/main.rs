//! wordlens - Word lists, occurrence counts and concordances for text files

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wordlens::cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    cli::run(cli)
}

/// Diagnostics go to stderr; stdout carries results only
fn init_tracing(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
