//! Quote subdomain: records, the fetched collection, and search state.
//!
//! - [`record::QuoteRecord`] — one attributed quote (immutable)
//! - [`collection::QuoteCollection`] — ordered records from one fetch
//! - [`query::SearchQuery`] — the user's query text, stored verbatim
//! - [`result::SearchResult`] — "not executed" vs. the last matching subset
//! - [`status::FetchStatus`] — loading / error / success of the one fetch

pub mod collection;
pub mod query;
pub mod record;
pub mod result;
pub mod status;
