//! Fetch status value object

use super::collection::QuoteCollection;

/// Status of the single quote fetch of a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// The request has not resolved yet
    #[default]
    Loading,
    /// The request failed; the message is shown to the user verbatim
    Error(String),
    /// The request succeeded; retained for the rest of the session
    Success(QuoteCollection),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn quotes(&self) -> Option<&QuoteCollection> {
        match self {
            FetchStatus::Success(quotes) => Some(quotes),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short label for status lines and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Loading => "loading",
            FetchStatus::Error(_) => "error",
            FetchStatus::Success(_) => "ready",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuoteRecord;

    #[test]
    fn test_default_is_loading() {
        assert!(FetchStatus::default().is_loading());
        assert_eq!(FetchStatus::default().as_str(), "loading");
    }

    #[test]
    fn test_accessors() {
        let error = FetchStatus::Error("Network Error".to_string());
        assert_eq!(error.error_message(), Some("Network Error"));
        assert!(error.quotes().is_none());

        let success = FetchStatus::Success(vec![QuoteRecord::new("a")].into());
        assert_eq!(success.quotes().map(|q| q.len()), Some(1));
        assert_eq!(success.error_message(), None);
        assert_eq!(success.as_str(), "ready");
    }
}
