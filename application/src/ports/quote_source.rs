//! Quote source port
//!
//! Defines the interface for loading the quote list from the data source.

use async_trait::async_trait;
use quotes_domain::QuoteRecord;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading quotes
///
/// The `Display` text of each variant is what the user ends up seeing,
/// so keep it readable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Request cancelled")]
    Cancelled,
}

/// Source of quote records
///
/// Implementations (adapters) live in the infrastructure layer. A source is
/// called at most once per session; caching and deduplication are the
/// [`FetchCache`](crate::FetchCache)'s job, not the source's.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Load the full quote list, in the order the source returns it
    async fn fetch_quotes(&self) -> Result<Vec<QuoteRecord>, FetchError>;

    /// Human-readable description of where quotes come from (e.g. the URL)
    fn describe(&self) -> String;
}
