//! REPL (Read-Eval-Print Loop) for interactive quote search

use super::command::ReplCommand;
use crate::config::ReplConfig;
use colored::Colorize;
use quotes_application::QuoteSearchSession;
use quotes_domain::FetchStatus;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use tracing::{debug, warn};

/// Number of entries kept in the history file
const HISTORY_CAPACITY: usize = 1000;

/// Interactive quote search REPL
///
/// Output of searches goes through the session's observers; the REPL itself
/// only prints help, status, and command errors.
pub struct QuoteRepl {
    session: QuoteSearchSession,
    config: ReplConfig,
}

impl QuoteRepl {
    pub fn new(session: QuoteSearchSession, config: ReplConfig) -> Self {
        Self { session, config }
    }

    pub fn session(&self) -> &QuoteSearchSession {
        &self.session
    }

    /// Load the quotes, then read and handle lines until the user quits.
    ///
    /// Input is only accepted once loading has resolved, so searches never
    /// race the fetch.
    pub async fn run(mut self) -> io::Result<()> {
        self.session.load().await;

        let mut line_editor = Reedline::create();
        if let Some(path) = self.config.resolved_history_file() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("Could not open history file {}: {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("quotes".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if self.handle_line(&line) {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handle one line of input. Returns true if the REPL should exit.
    pub fn handle_line(&mut self, line: &str) -> bool {
        let command = ReplCommand::parse(line);
        debug!(?command, "REPL input");

        match command {
            ReplCommand::Search(text) => {
                // Rejections are reported through the session's observers
                let _ = self.session.search(text);
            }
            ReplCommand::SetQuery(text) => {
                self.session.set_query(text);
                println!("{} {:?}", "Query set:".dimmed(), self.session.query().as_str());
            }
            ReplCommand::ExecuteSearch => {
                let _ = self.session.execute_search();
            }
            ReplCommand::View => self.session.refresh(),
            ReplCommand::Status => self.print_status(),
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          quote-search - Interactive         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type a theme (e.g. happiness, success, love) and press Enter.");
        println!("Type /help for commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  <text>             - Search for <text> in quotes and authors");
        println!("  /query <text>      - Set the query without searching");
        println!("  /search, /s        - Search with the current query");
        println!("  /view, /v          - Show the current results again");
        println!("  /status            - Show where quotes came from");
        println!("  /help, /h, /?      - Show this help");
        println!("  /quit, /exit, /q   - Exit");
        println!();
    }

    fn print_status(&self) {
        let cache = self.session.cache();
        println!();
        println!("{} {}", "Source:".cyan().bold(), cache.source_description());
        match self.session.status() {
            FetchStatus::Loading => println!("{} loading", "Status:".cyan().bold()),
            FetchStatus::Error(message) => {
                println!("{} {} ({})", "Status:".cyan().bold(), "error".red(), message)
            }
            FetchStatus::Success(quotes) => println!(
                "{} {} ({} quotes)",
                "Status:".cyan().bold(),
                "ready".green(),
                quotes.len()
            ),
        }
        if let Some(at) = cache.resolved_at() {
            println!("{} {}", "Loaded at:".cyan().bold(), at);
        }
        println!(
            "{} {:?}",
            "Query:".cyan().bold(),
            self.session.query().as_str()
        );
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quotes_application::{FetchCache, FetchError, QuoteSource, QuoteView};
    use quotes_domain::QuoteRecord;
    use std::sync::Arc;

    struct MockQuoteSource;

    #[async_trait]
    impl QuoteSource for MockQuoteSource {
        async fn fetch_quotes(&self) -> Result<Vec<QuoteRecord>, FetchError> {
            Ok(vec![
                QuoteRecord::new("Happiness is a choice").with_author("Anon"),
                QuoteRecord::new("Success breeds success"),
            ])
        }

        fn describe(&self) -> String {
            "mock://quotes".to_string()
        }
    }

    async fn loaded_repl() -> QuoteRepl {
        let cache = Arc::new(FetchCache::new(Arc::new(MockQuoteSource)));
        let mut session = QuoteSearchSession::new(cache);
        session.load().await;
        QuoteRepl::new(session, ReplConfig::default())
    }

    #[tokio::test]
    async fn test_plain_line_searches() {
        let mut repl = loaded_repl().await;
        assert!(!repl.handle_line("happiness"));
        assert_eq!(repl.session().view().cards().len(), 1);
    }

    #[tokio::test]
    async fn test_set_query_then_search() {
        let mut repl = loaded_repl().await;
        repl.handle_line("/query success");
        assert!(matches!(repl.session().view(), QuoteView::Preview { .. }));

        repl.handle_line("/search");
        let view = repl.session().view();
        assert_eq!(view.cards().len(), 1);
        assert_eq!(view.cards()[0].author, "Unknown");
    }

    #[tokio::test]
    async fn test_blank_line_keeps_previous_results() {
        let mut repl = loaded_repl().await;
        repl.handle_line("xyz-not-present");
        assert_eq!(repl.session().view(), QuoteView::NoResults);

        repl.handle_line("   ");
        assert_eq!(repl.session().view(), QuoteView::NoResults);
        assert_eq!(repl.session().query().as_str(), "   ");
    }

    #[tokio::test]
    async fn test_quit_and_other_commands() {
        let mut repl = loaded_repl().await;
        assert!(!repl.handle_line("/status"));
        assert!(!repl.handle_line("/help"));
        assert!(!repl.handle_line("/bogus"));
        assert!(repl.handle_line("/quit"));
    }
}
