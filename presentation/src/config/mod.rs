//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior, resolved by the
//! binary from config files and command-line flags.

use quotes_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Text cards or JSON documents
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplConfig {
    /// Path to history file; defaults to the platform data directory
    pub history_file: Option<PathBuf>,
}

impl ReplConfig {
    /// History file to use: the configured one, else `<data dir>/quote-search/history.txt`
    pub fn resolved_history_file(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("quote-search").join("history.txt")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_history_file_wins() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("/tmp/quotes-history.txt")),
        };
        assert_eq!(
            config.resolved_history_file(),
            Some(PathBuf::from("/tmp/quotes-history.txt"))
        );
    }

    #[test]
    fn test_default_history_file_is_under_data_dir() {
        let config = ReplConfig::default();
        if let Some(path) = config.resolved_history_file() {
            assert!(path.ends_with("quote-search/history.txt"));
        }
    }
}
