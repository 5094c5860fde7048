//! Use cases for the quote-search flow
//!
//! - [`fetch_cache`] — the single memoized quote request
//! - [`search_controller`] — query text and the last search result
//! - [`quote_view`] — pure derivation of what to display
//! - [`quote_session`] — wires the above and notifies view observers

pub mod fetch_cache;
pub mod quote_session;
pub mod quote_view;
pub mod search_controller;
