//! View observer port
//!
//! The presentation layer subscribes to the [`QuoteSearchSession`] through
//! this trait. Every state change is pushed as an already-derived
//! [`QuoteView`]; observers never inspect session state themselves.
//!
//! [`QuoteSearchSession`]: crate::QuoteSearchSession

use crate::use_cases::quote_view::QuoteView;
use quotes_domain::DomainError;

/// Callback for view changes and rejected searches
pub trait QuoteViewObserver: Send + Sync {
    /// Called whenever the derived view may have changed
    fn on_view_changed(&self, view: &QuoteView);

    /// Called when a search attempt was rejected (empty query, data not ready)
    fn on_search_rejected(&self, _reason: &DomainError) {}
}
