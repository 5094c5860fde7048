//! Quote source configuration from TOML (`[source]` section)

use crate::http::{DEFAULT_QUOTES_URL, DEFAULT_USER_AGENT};
use quotes_application::FetchConfig;
use quotes_application::config::DEFAULT_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};

/// Raw quote source configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    /// Quote listing endpoint
    pub url: String,
    /// Request timeout in seconds; `0` disables it
    pub timeout_secs: Option<u64>,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_QUOTES_URL.to_string(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FileSourceConfig {
    /// Convert to the application's fetch configuration
    pub fn to_fetch_config(&self) -> FetchConfig {
        FetchConfig::from_timeout_seconds(self.timeout_secs.filter(|secs| *secs > 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_to_fetch_config() {
        let config = FileSourceConfig::default();
        assert_eq!(
            config.to_fetch_config().timeout,
            Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        );

        let config = FileSourceConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.to_fetch_config().timeout, None);
    }
}
