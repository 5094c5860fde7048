//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the timeout applied to the quote request.

use std::time::Duration;

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fetch behavior configuration.
///
/// Controls how the [`FetchCache`](crate::FetchCache) issues its one request.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Maximum time to wait for the quote source before giving up.
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::with_timeout_seconds(DEFAULT_TIMEOUT_SECS)
    }
}

impl FetchConfig {
    /// Creates a FetchConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
        }
    }

    /// Creates a FetchConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
        }
    }

    /// Disable the timeout entirely.
    pub fn without_timeout() -> Self {
        Self { timeout: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        assert_eq!(
            FetchConfig::default().timeout,
            Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        );
    }

    #[test]
    fn test_from_timeout_seconds() {
        assert_eq!(FetchConfig::from_timeout_seconds(None).timeout, None);
        assert_eq!(
            FetchConfig::from_timeout_seconds(Some(3)).timeout,
            Some(Duration::from_secs(3))
        );
    }
}
