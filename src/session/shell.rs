//! Interactive session - A line-oriented menu over one `Session`
//!
//! Commands are read one per line. Failures are printed as `error: ...`
//! and the loop carries on so the user can try again; `quit`, `exit` or
//! end of input closes the session.

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::core::error::SessionError;
use crate::core::render::Renderer;
use crate::session::report::{ConcordanceReport, OccurrenceReport};
use crate::session::store::Session;

pub const WELCOME: &str = "\
This program reads up to 10 text files, stores each file as a word list,
shows a summary table, counts how many times a word appears in each file,
and builds a concordance listing each word's locations.
Type `help` for the list of commands.";

pub const HELP: &str = "\
Commands:
  open <file>          open a .txt file (up to 10)
  close <name>         close an open file
  list                 summary of the open files
  find <word>          count a word in every open file
  concordance <name>   build and save the concordance of one open file
  lists                show the ignore and highlight lists
  help                 show this help
  quit                 leave the session";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(String),
    Close(Option<String>),
    List,
    Find(String),
    Concordance(Option<String>),
    Lists,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; `Ok(None)` for a blank line
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let argument = (!rest.is_empty()).then(|| rest.to_string());

        let command = match verb.to_lowercase().as_str() {
            "open" | "1" => Command::Open(rest.to_string()),
            "find" | "2" => Command::Find(rest.to_string()),
            "concordance" | "3" => Command::Concordance(argument),
            "close" | "4" => Command::Close(argument),
            "quit" | "exit" | "5" => Command::Quit,
            "list" | "summary" => Command::List,
            "lists" => Command::Lists,
            "help" | "?" => Command::Help,
            other => return Err(format!("Unknown command: {}. Type `help`.", other)),
        };

        Ok(Some(command))
    }
}

/// Run the session until `quit` or end of input
pub fn run_shell<R, W>(
    session: &mut Session,
    renderer: &Renderer,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "error: {}", message)?;
                continue;
            }
        };

        debug!("shell command: {:?}", command);
        if command == Command::Quit {
            break;
        }

        if let Err(e) = execute(session, renderer, command, &mut output)? {
            writeln!(output, "error: {}", e)?;
        }
    }

    Ok(())
}

/// Execute one command. The outer result is an output failure, the inner
/// one a failed operation to report.
fn execute<W: Write>(
    session: &mut Session,
    renderer: &Renderer,
    command: Command,
    output: &mut W,
) -> io::Result<Result<(), SessionError>> {
    match command {
        Command::Open(name) => match session.open(&name) {
            Ok(doc) => {
                writeln!(output, "Opened {} ({} words)", doc.name, doc.words.len())?;
            }
            Err(e) => return Ok(Err(e)),
        },
        Command::Close(name) => {
            let Some(name) = choose(session, name) else {
                return Ok(Err(missing_choice(session)));
            };
            match session.close(&name) {
                Ok(doc) => writeln!(output, "Closed {}", doc.name)?,
                Err(e) => return Ok(Err(e)),
            }
        }
        Command::List => renderer.render_to(&session.summary(), &mut *output)?,
        Command::Find(word) => match session.find(&word) {
            Ok(rows) => renderer.render_to(&OccurrenceReport { rows }, &mut *output)?,
            Err(e) => return Ok(Err(e)),
        },
        Command::Concordance(name) => {
            let Some(name) = choose(session, name) else {
                return Ok(Err(missing_choice(session)));
            };
            let outcome = session
                .load_extra_lists()
                .and_then(|lists| session.concordance(&name, &lists));
            match outcome {
                Ok(outcome) => {
                    renderer.render_to(&ConcordanceReport::new(outcome, false), &mut *output)?
                }
                Err(e) => return Ok(Err(e)),
            }
        }
        Command::Lists => match session.load_extra_lists() {
            Ok(lists) => renderer.render_to(&lists, &mut *output)?,
            Err(e) => return Ok(Err(e)),
        },
        Command::Help => writeln!(output, "{}", HELP)?,
        Command::Quit => {}
    }

    Ok(Ok(()))
}

/// The named document, or the only open one when no name was given
fn choose(session: &Session, name: Option<String>) -> Option<String> {
    match name {
        Some(name) => Some(name),
        None if session.len() == 1 => session.names().next().map(str::to_string),
        None => None,
    }
}

fn missing_choice(session: &Session) -> SessionError {
    if session.is_empty() {
        SessionError::NoDocuments
    } else {
        SessionError::NoSelection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::OutputFormat;
    use crate::session::store::SessionConfig;
    use std::fs;
    use tempfile::tempdir;

    fn run(root: &std::path::Path, script: &str) -> String {
        let mut session = Session::new(SessionConfig::new(root));
        let renderer = Renderer::new(OutputFormat::Text);
        let mut out = Vec::new();
        run_shell(&mut session, &renderer, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   "), Ok(None));
        assert_eq!(
            Command::parse("open  my file.txt "),
            Ok(Some(Command::Open("my file.txt".to_string())))
        );
        assert_eq!(Command::parse("OPEN"), Ok(Some(Command::Open(String::new()))));
        assert_eq!(Command::parse("close"), Ok(Some(Command::Close(None))));
        assert_eq!(
            Command::parse("3 a.txt"),
            Ok(Some(Command::Concordance(Some("a.txt".to_string()))))
        );
        assert_eq!(Command::parse("exit"), Ok(Some(Command::Quit)));
        assert!(Command::parse("dance").is_err());
    }

    #[test]
    fn test_session_flow() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "Apple apply grape").unwrap();

        let out = run(
            temp.path(),
            "open a.txt\nlist\nfind app\nconcordance\nclose a.txt\nquit\nlist\n",
        );

        assert!(out.starts_with(WELCOME));
        assert!(out.contains("Opened a.txt (3 words)"));
        assert!(out.contains("TotalWords"));
        assert!(out.contains("2 occurrences"));
        assert!(out.contains("Saved as:"));
        assert!(out.contains("Closed a.txt"));
        // Nothing after quit runs
        assert!(!out.contains("There are no files to display"));
        assert!(temp.path().join("a.txt_CONCORDANCE.txt").exists());
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "word").unwrap();

        let out = run(
            temp.path(),
            "open\nopen b.md\nopen a.txt\nopen a.txt\nfind -x\nclose zzz.txt\nlist\n",
        );

        assert!(out.contains("error: Input is empty."));
        assert!(out.contains("error: Invalid file type. Must be a .txt file."));
        assert!(out.contains("error: This file is already open: a.txt"));
        assert!(out.contains(
            "error: Hyphens must be between letters (no leading/trailing hyphens)."
        ));
        assert!(out.contains("error: File is not open: zzz.txt"));
        assert!(out.contains("a.txt"));
    }

    #[test]
    fn test_find_without_files() {
        let temp = tempdir().unwrap();
        let out = run(temp.path(), "find word\nconcordance\n");
        assert_eq!(out.matches("error: There are no files open.").count(), 2);
    }

    #[test]
    fn test_concordance_needs_a_choice_with_several_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "one").unwrap();
        fs::write(temp.path().join("b.txt"), "two").unwrap();

        let out = run(temp.path(), "open a.txt\nopen b.txt\nconcordance\nconcordance b.txt\n");
        assert!(out.contains("error: Choose a file."));
        assert!(temp.path().join("b.txt_CONCORDANCE.txt").exists());
        assert!(!temp.path().join("a.txt_CONCORDANCE.txt").exists());
    }

    #[test]
    fn test_unknown_command() {
        let temp = tempdir().unwrap();
        let out = run(temp.path(), "fly\n");
        assert!(out.contains("error: Unknown command: fly"));
    }
}
