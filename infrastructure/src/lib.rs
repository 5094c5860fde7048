//! Infrastructure layer for quote-search
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileOutputConfig, FileReplConfig, FileSourceConfig,
};
pub use http::{DEFAULT_QUOTES_URL, DEFAULT_USER_AGENT, HttpQuoteSource, parse_quotes};
