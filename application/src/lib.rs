//! Application layer for quote-search
//!
//! This crate contains the use cases (fetch cache, search controller,
//! view derivation, session) and the ports they talk through.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::FetchConfig;
pub use ports::{
    quote_source::{FetchError, QuoteSource},
    view_observer::QuoteViewObserver,
};
pub use use_cases::{
    fetch_cache::{FetchCache, QUOTES_CACHE_KEY},
    quote_session::QuoteSearchSession,
    quote_view::{QuoteCard, QuoteView},
    search_controller::SearchController,
};
