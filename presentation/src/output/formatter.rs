//! Output formatter trait

use quotes_application::QuoteView;
use quotes_domain::{DomainError, OutputFormat};

/// Trait for turning views and notices into terminal text
pub trait OutputFormatter: Send + Sync {
    /// Format a view as human-readable text
    fn format_view(&self, view: &QuoteView) -> String;

    /// Format a view as JSON
    fn format_json(&self, view: &QuoteView) -> String;

    /// Format a rejected search attempt
    fn format_rejection(&self, reason: &DomainError) -> String;

    /// Format a rejected search attempt as a JSON notice
    fn format_rejection_json(&self, reason: &DomainError) -> String;

    /// Format a view in the requested output format
    fn format(&self, view: &QuoteView, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format_view(view),
            OutputFormat::Json => self.format_json(view),
        }
    }

    /// Format a rejected search attempt in the requested output format
    fn rejection(&self, reason: &DomainError, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format_rejection(reason),
            OutputFormat::Json => self.format_rejection_json(reason),
        }
    }
}
