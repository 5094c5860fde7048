//! HTTP adapters
//!
//! - [`quote_client::HttpQuoteSource`] — [`QuoteSource`](quotes_application::QuoteSource)
//!   backed by a single `GET` to the quote listing endpoint

mod quote_client;

pub use quote_client::{DEFAULT_QUOTES_URL, DEFAULT_USER_AGENT, HttpQuoteSource, parse_quotes};
