//! Console output formatter for quote views

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use quotes_application::{QuoteCard, QuoteView};
use quotes_domain::DomainError;

/// Formats quote views for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a view as quote cards or a status line
    pub fn format_view(view: &QuoteView) -> String {
        match view {
            QuoteView::Loading => format!("{}", "Loading quotes...".dimmed()),
            QuoteView::Error { message } => {
                format!("{} {}", "Error:".red().bold(), message)
            }
            QuoteView::NoResults => format!("{}", "No results found.".yellow()),
            QuoteView::Results { quotes } => {
                let title = match quotes.len() {
                    1 => "1 matching quote".to_string(),
                    n => format!("{} matching quotes", n),
                };
                Self::card_list(&title, quotes)
            }
            QuoteView::Preview { quotes, total } => {
                if quotes.is_empty() {
                    return format!("{}", "No quotes available.".dimmed());
                }
                let title = format!(
                    "Showing {} of {} quotes (search to filter)",
                    quotes.len(),
                    total
                );
                Self::card_list(&title, quotes)
            }
        }
    }

    /// Format as JSON
    pub fn format_json(view: &QuoteView) -> String {
        serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a rejected search attempt as a notice
    pub fn format_rejection(reason: &DomainError) -> String {
        format!("{} {}", "!".yellow().bold(), reason)
    }

    /// Format a rejected search attempt as `{"state": "rejected", "reason": ...}`
    pub fn format_rejection_json(reason: &DomainError) -> String {
        serde_json::json!({
            "state": "rejected",
            "reason": reason.to_string(),
        })
        .to_string()
    }

    /// Format one quote card
    pub fn card(card: &QuoteCard) -> String {
        format!(
            "{}\n  {}",
            format!("\u{275D} {} \u{275E}", card.text).bold(),
            format!("\u{2014} {}", card.author).dimmed()
        )
    }

    fn card_list(title: &str, quotes: &[QuoteCard]) -> String {
        let mut output = format!("{}\n", title.cyan().bold());
        for card in quotes {
            output.push('\n');
            output.push_str(&Self::card(card));
            output.push('\n');
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_view(&self, view: &QuoteView) -> String {
        Self::format_view(view)
    }

    fn format_json(&self, view: &QuoteView) -> String {
        Self::format_json(view)
    }

    fn format_rejection(&self, reason: &DomainError) -> String {
        Self::format_rejection(reason)
    }

    fn format_rejection_json(&self, reason: &DomainError) -> String {
        Self::format_rejection_json(reason)
    }
}
