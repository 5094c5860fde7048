//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// None of these are faults: each one rejects a single search attempt and
/// leaves the current search result untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please enter a theme to search for, e.g. happiness, success, love")]
    EmptyQuery,

    #[error("Quotes are still loading, search is not available yet")]
    DataNotReady,

    #[error("Quotes could not be loaded: {0}")]
    DataUnavailable(String),
}

impl DomainError {
    /// Check if this error was caused by the user's input rather than data state
    pub fn is_user_input(&self) -> bool {
        matches!(self, DomainError::EmptyQuery)
    }
}
