//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use crate::core::extra_lists::DEFAULT_EXTRA_LISTS;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::session::shell::run_shell;
use crate::session::store::{Session, SessionConfig};

/// wordlens - word lists, occurrence counts and concordances for text files.
#[derive(Parser, Debug)]
#[command(name = "wordlens")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordlens loads up to 10 plain-text (.txt) documents and reports on their words.

Every command opens the listed FILES in order, as a session would, then runs
one operation. Use `wordlens shell` for an interactive session instead.

Output formats:
- text: human-readable tables and lines (default)
- json: a single JSON array
- jsonl: one JSON object per line

Examples:
    wordlens summary moby.txt walden.txt
    wordlens find whale moby.txt walden.txt
    wordlens concordance moby.txt walden.txt --select walden.txt
    wordlens lists
    wordlens shell
"#
)]
pub struct Cli {
    /// Directory documents, lists and outputs are resolved against.
    #[arg(
        long,
        global = true,
        env = "WORDLENS_ROOT",
        default_value = ".",
        value_name = "ROOT",
        long_help = "Directory that document names, the list file and the output directory are\n\
resolved against (defaults to the current directory)."
    )]
    pub root: PathBuf,

    /// Output format (text/json/jsonl).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default)\n\
- json\n\
- jsonl"
    )]
    pub format: String,

    /// Ignore / highlight list file.
    #[arg(
        long,
        global = true,
        env = "WORDLENS_LISTS",
        default_value = DEFAULT_EXTRA_LISTS,
        value_name = "FILE",
        long_help = "File holding the IGNORE: and HIGHLIGHT: word lists used by concordances.\n\n\
A missing file means no ignored and no highlighted words."
    )]
    pub lists: PathBuf,

    /// Directory concordance files are written to.
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        long_help = "Directory that <name>_CONCORDANCE.txt files are written to (defaults to ROOT)."
    )]
    pub output_dir: Option<PathBuf>,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug diagnostics on stderr. RUST_LOG, when set, takes precedence."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show total and distinct word counts per document.
    #[command(long_about = "Open FILES in order and print one row per document: file name, total\n\
tokens (empty ones included) and case-insensitively distinct non-empty tokens.\n\n\
Example:\n\
  wordlens summary a.txt b.txt\n")]
    Summary {
        /// Documents to open (at most 10).
        #[arg(value_name = "FILES", required = true, num_args = 1..)]
        files: Vec<String>,
    },

    /// Count how many words contain WORD in each document.
    #[command(long_about = "Count, per document, the tokens that contain WORD as a case-insensitive\n\
substring. WORD may contain only letters and interior hyphens.\n\n\
Example:\n\
  wordlens find app a.txt b.txt\n")]
    Find {
        /// Word to search for.
        #[arg(value_name = "WORD", allow_hyphen_values = true)]
        word: String,

        /// Documents to open (at most 10).
        #[arg(value_name = "FILES", required = true, num_args = 1..)]
        files: Vec<String>,
    },

    /// Build the concordance of one document and save it.
    #[command(long_about = "Open FILES in order, then build the concordance of the selected document\n\
and write it to <name>_CONCORDANCE.txt in the output directory.\n\n\
Locations are printed as document.line.word; the document number is the\n\
file's position among FILES.\n\n\
Examples:\n\
  wordlens concordance moby.txt\n\
  wordlens concordance a.txt b.txt --select b.txt --print\n")]
    Concordance {
        /// Documents to open (at most 10).
        #[arg(value_name = "FILES", required = true, num_args = 1..)]
        files: Vec<String>,

        /// Document to build the concordance for (defaults to the first).
        #[arg(long, value_name = "NAME")]
        select: Option<String>,

        /// Also print the concordance lines.
        #[arg(long)]
        print: bool,
    },

    /// Show the ignore and highlight lists.
    Lists,

    /// List .txt files under ROOT.
    #[command(long_about = "List the .txt files under ROOT, sorted by path.\n\n\
Examples:\n\
  wordlens candidates\n\
  wordlens candidates --max-depth 1\n")]
    Candidates {
        /// Maximum directory depth from ROOT.
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,

        /// Include hidden files and directories.
        #[arg(long)]
        hidden: bool,
    },

    /// Start an interactive session on stdin.
    #[command(long_about = "Read commands from stdin, one per line, against a single session:\n\
open, close, list, find, concordance, lists, help, quit.\n\n\
Example:\n\
  printf 'open a.txt\\nfind app\\n' | wordlens shell\n")]
    Shell,
}

impl Cli {
    /// Session configuration from the global flags
    pub fn session_config(&self, root: PathBuf) -> SessionConfig {
        let config = SessionConfig::new(root).with_lists_path(&self.lists);
        match &self.output_dir {
            Some(dir) => config.with_output_dir(dir),
            None => config,
        }
    }

    pub fn render_config(&self) -> Result<RenderConfig> {
        let format: OutputFormat = self
            .format
            .parse()
            .map_err(anyhow::Error::msg)
            .context("Invalid --format")?;
        Ok(RenderConfig::new(format)
            .with_pretty(self.pretty)
            .with_color(!self.no_color))
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let render_config = cli.render_config()?;

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or_else(|_| cli.root.clone());
    let config = cli.session_config(root.clone());

    match cli.command {
        Commands::Summary { files } => {
            crate::commands::summary::run_summary(config, &files, render_config)
        }

        Commands::Find { word, files } => {
            crate::commands::find::run_find(config, &word, &files, render_config)
        }

        Commands::Concordance {
            files,
            select,
            print,
        } => crate::commands::concordance::run_concordance(
            config,
            &files,
            select.as_deref(),
            print,
            render_config,
        ),

        Commands::Lists => crate::commands::lists::run_lists(config, render_config),

        Commands::Candidates { max_depth, hidden } => {
            crate::commands::candidates::run_candidates(&root, max_depth, hidden, render_config)
        }

        Commands::Shell => {
            let mut session = Session::new(config);
            let renderer = Renderer::with_config(render_config);
            run_shell(&mut session, &renderer, io::stdin().lock(), io::stdout().lock())
                .context("Interactive session failed")
        }
    }
}
