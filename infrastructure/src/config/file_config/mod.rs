//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod repl;
mod source;

pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use source::FileSourceConfig;

use quotes_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quote source settings
    pub source: FileSourceConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let url = self.source.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidUrl {
                    field: "source.url".to_string(),
                    value: self.source.url.clone(),
                },
                message: format!(
                    "source.url: '{}' is not an http(s) URL",
                    self.source.url
                ),
            });
        }

        if self.source.timeout_secs == Some(0) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ZeroTimeout {
                    field: "source.timeout_secs".to_string(),
                },
                message: "source.timeout_secs = 0 disables the request timeout".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotes_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[source]
url = "http://localhost:8080/quotes"
timeout_secs = 3
user_agent = "my-agent"

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/quote-search/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.source.url, "http://localhost:8080/quotes");
        assert_eq!(config.source.timeout_secs, Some(3));
        assert_eq!(config.source.user_agent, "my-agent");
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.repl.history_file.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.output.color);
        // Defaults should apply
        assert_eq!(config.source, FileSourceConfig::default());
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_bad_url_and_zero_timeout() {
        let mut config = FileConfig::default();
        config.source.url = "ftp://example.com/quotes".to_string();
        config.source.timeout_secs = Some(0);

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].is_error());
        assert!(matches!(issues[0].code, ConfigIssueCode::InvalidUrl { .. }));
        assert_eq!(issues[1].severity, Severity::Warning);
    }
}
