//! Domain layer for quote-search
//!
//! This crate contains the quote entities, the search state value objects
//! and the pure filter engine. It has no dependencies on networking,
//! configuration files, or terminal concerns.
//!
//! # Core Concepts
//!
//! - **Quote record**: a single attributed text snippet returned by the data source
//! - **Query**: free text entered by the user, stored verbatim
//! - **Search result**: either "not executed yet" or the matching subset
//! - **Preview**: the first [`PREVIEW_LIMIT`] records, shown before any search

pub mod config;
pub mod core;
pub mod quote;
pub mod search;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use quote::{
    collection::QuoteCollection,
    query::SearchQuery,
    record::{QuoteRecord, UNKNOWN_AUTHOR},
    result::SearchResult,
    status::FetchStatus,
};
pub use search::filter::{PREVIEW_LIMIT, QuoteMatcher, filter_quotes};
