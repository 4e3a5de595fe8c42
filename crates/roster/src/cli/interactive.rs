//! Interactive browse session.
//!
//! Reads one command per line, applies it to the [`Session`] and prints the
//! resulting screen.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::app::{AppState, Event, Session};
use crate::error::Result;
use crate::loader::{DirectoryLoader, DirectorySource};
use crate::render::render_screen;

const PROMPT: &str = "roster> ";

const HELP: &str = "\
Commands:
  /TEXT, search TEXT   filter by first or last name (bare / clears)
  N, open N            show detail for person N
  n, next              next person
  p, prev              previous person
  x, close             close the detail view
  r, reload            fetch a new batch
  ?, help              this help
  q, quit              exit
";

/// One parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Replace the search text.
    Search(String),
    /// Open the detail view.
    Open(usize),
    /// Previous record.
    Prev,
    /// Next record.
    Next,
    /// Close the detail view.
    Close,
    /// Fetch a new batch.
    Reload,
    /// Print help.
    Help,
    /// End the session.
    Quit,
    /// Blank line; redraw.
    Empty,
    /// Anything else.
    Unknown(String),
}

/// Parse one line of input.
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if let Some(query) = line.strip_prefix('/') {
        return Input::Search(query.to_string());
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match (word.to_lowercase().as_str(), rest) {
        ("", _) => Input::Empty,
        ("search", query) => Input::Search(query.to_string()),
        ("open", index) => index
            .parse()
            .map_or_else(|_| Input::Unknown(line.to_string()), Input::Open),
        ("n" | "next", "") => Input::Next,
        ("p" | "prev", "") => Input::Prev,
        ("x" | "close", "") => Input::Close,
        ("r" | "reload", "") => Input::Reload,
        ("?" | "help", "") => Input::Help,
        ("q" | "quit" | "exit", "") => Input::Quit,
        (_, "") => word
            .parse()
            .map_or_else(|_| Input::Unknown(line.to_string()), Input::Open),
        _ => Input::Unknown(line.to_string()),
    }
}

/// Run an interactive session until `quit` or end of input.
///
/// A failed reload keeps the current directory and reports the error.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub async fn run<S, R, W>(
    loader: &DirectoryLoader<S>,
    mut session: Session,
    reader: R,
    out: &mut W,
) -> Result<()>
where
    S: DirectorySource,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let total = session.state().directory().len();
    write!(out, "{}", render_screen(&session.screen()?, total))?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let event = match parse_input(&line) {
            Input::Quit => break,
            Input::Help => {
                write!(out, "{HELP}{PROMPT}")?;
                out.flush()?;
                continue;
            }
            Input::Unknown(text) => {
                writeln!(out, "Unknown command: {text} (type ? for help)")?;
                write!(out, "{PROMPT}")?;
                out.flush()?;
                continue;
            }
            Input::Empty => None,
            Input::Search(query) => Some(Event::Search(query)),
            Input::Open(index) => Some(Event::Open(index)),
            Input::Prev => Some(Event::Prev),
            Input::Next => Some(Event::Next),
            Input::Close => Some(Event::Close),
            Input::Reload => match loader.load().await {
                Ok(directory) => Some(Event::Reload(AppState::new(directory))),
                Err(e) => {
                    warn!(error = %e, "Reload failed");
                    writeln!(out, "Reload failed: {e}")?;
                    None
                }
            },
        };

        let total = match &event {
            Some(Event::Reload(state)) => state.directory().len(),
            _ => session.state().directory().len(),
        };
        let screen = match event {
            Some(event) => session.apply(event),
            None => session.screen(),
        };
        match screen {
            Ok(screen) => write!(out, "{}", render_screen(&screen, total))?,
            Err(e) => writeln!(out, "{e}")?,
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    debug!("Interactive session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::testing::{fixture_response, StaticSource};
    use crate::logging::init_test_logging;

    #[test]
    fn test_parse_search() {
        assert_eq!(parse_input("/adams"), Input::Search("adams".to_string()));
        assert_eq!(parse_input("/"), Input::Search(String::new()));
        assert_eq!(
            parse_input("search  de la cruz "),
            Input::Search("de la cruz".to_string())
        );
        assert_eq!(parse_input("search"), Input::Search(String::new()));
    }

    #[test]
    fn test_parse_open() {
        assert_eq!(parse_input("open 4"), Input::Open(4));
        assert_eq!(parse_input(" 11 "), Input::Open(11));
        assert_eq!(
            parse_input("open four"),
            Input::Unknown("open four".to_string())
        );
        assert_eq!(parse_input("-1"), Input::Unknown("-1".to_string()));
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_input("n"), Input::Next);
        assert_eq!(parse_input("NEXT"), Input::Next);
        assert_eq!(parse_input("p"), Input::Prev);
        assert_eq!(parse_input("x"), Input::Close);
        assert_eq!(parse_input("close"), Input::Close);
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   "), Input::Empty);
        assert_eq!(parse_input("r"), Input::Reload);
        assert_eq!(parse_input("?"), Input::Help);
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input("next 3"), Input::Unknown("next 3".to_string()));
        assert_eq!(parse_input("dance"), Input::Unknown("dance".to_string()));
    }

    async fn run_script(script: &str, source: StaticSource) -> String {
        init_test_logging();
        let loader = DirectoryLoader::new(StaticSource::new(fixture_response()), "%-m/%-d/%Y");
        let session = Session::new(AppState::new(loader.load().await.unwrap()));
        let loader = DirectoryLoader::new(source, "%-m/%-d/%Y");

        let mut out = Vec::new();
        run(&loader, session, script.as_bytes(), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_run_search_and_navigate() {
        let output = run_script(
            "/ADAMS\nopen 0\nn\nn\nn\nn\nn\nn\nx\n/\nq\n",
            StaticSource::new(fixture_response()),
        )
        .await;

        assert!(output.starts_with("12 people\n"));
        assert!(output.contains("Search \"ADAMS\": 3 of 12"));
        assert!(output.contains("#0 Brenda Adams"));
        assert!(output.contains("[-] prev  [n] next"));
        assert!(output.contains("#6 Julia Reyes"));
        // Cleared search lists everyone again
        assert_eq!(output.matches("12 people\n").count(), 2);
    }

    #[tokio::test]
    async fn test_run_reports_bad_index_and_unknown() {
        let output = run_script("open 40\nwat\n", StaticSource::new(fixture_response())).await;

        assert!(output.contains("index 40 is out of range for a directory of 12 records"));
        assert!(output.contains("Unknown command: wat"));
    }

    #[tokio::test]
    async fn test_run_reload_failure_keeps_directory() {
        let output = run_script("r\n3\n", StaticSource::failing()).await;

        assert!(output.contains("Reload failed:"));
        assert!(output.contains("#3 Gregory Adamson"));
    }

    #[tokio::test]
    async fn test_run_reload_replaces_directory() {
        let mut response = fixture_response();
        response.results.truncate(2);
        let output = run_script("0\nr\n", StaticSource::new(response)).await;

        assert!(output.contains("#0 Brenda Adams"));
        assert!(output.contains("roster> 2 people\n"));
    }

    #[tokio::test]
    async fn test_run_ends_at_eof() {
        let output = run_script("", StaticSource::failing()).await;
        assert!(output.ends_with(PROMPT));
    }
}
