//! Quote search session.
//!
//! Ties the [`FetchCache`] and the [`SearchController`] together and pushes
//! a freshly derived [`QuoteView`] to every subscribed
//! [`QuoteViewObserver`] whenever the state changes.

use crate::ports::view_observer::QuoteViewObserver;
use crate::use_cases::fetch_cache::FetchCache;
use crate::use_cases::quote_view::QuoteView;
use crate::use_cases::search_controller::SearchController;
use quotes_domain::{DomainError, FetchStatus, SearchQuery};
use std::sync::Arc;
use tracing::{debug, info};

/// One user's quote search: shared fetch cache plus private search state
pub struct QuoteSearchSession {
    cache: Arc<FetchCache>,
    controller: SearchController,
    observers: Vec<Arc<dyn QuoteViewObserver>>,
}

impl QuoteSearchSession {
    pub fn new(cache: Arc<FetchCache>) -> Self {
        Self {
            cache,
            controller: SearchController::new(),
            observers: Vec::new(),
        }
    }

    /// Add an observer (builder form)
    pub fn with_observer(mut self, observer: Arc<dyn QuoteViewObserver>) -> Self {
        self.subscribe(observer);
        self
    }

    /// Add an observer; it is notified on every subsequent change
    pub fn subscribe(&mut self, observer: Arc<dyn QuoteViewObserver>) {
        self.observers.push(observer);
    }

    pub fn cache(&self) -> &Arc<FetchCache> {
        &self.cache
    }

    pub fn status(&self) -> FetchStatus {
        self.cache.status()
    }

    pub fn query(&self) -> &SearchQuery {
        self.controller.query()
    }

    /// The view for the current state
    pub fn view(&self) -> QuoteView {
        QuoteView::derive(&self.cache.status(), self.controller.result())
    }

    /// Await the quote list, publishing `Loading` first if it is not there yet
    pub async fn load(&mut self) -> FetchStatus {
        if !self.cache.is_resolved() {
            self.publish_view();
        }
        let status = self.cache.fetch().await;
        info!(status = status.as_str(), "Quote session ready");
        self.publish_view();
        status
    }

    /// Replace the query verbatim without searching
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.controller.set_query(text);
    }

    /// Run a search with the current query.
    ///
    /// Returns the number of matches. A rejected attempt notifies observers
    /// through [`QuoteViewObserver::on_search_rejected`] and changes nothing.
    pub fn execute_search(&mut self) -> Result<usize, DomainError> {
        let status = self.cache.status();
        match self.controller.execute_search(&status) {
            Ok(matches) => {
                let count = matches.len();
                self.publish_view();
                Ok(count)
            }
            Err(reason) => {
                debug!(reason = %reason, "Search rejected");
                for observer in &self.observers {
                    observer.on_search_rejected(&reason);
                }
                Err(reason)
            }
        }
    }

    /// Set the query and run the search in one step
    pub fn search(&mut self, text: impl Into<String>) -> Result<usize, DomainError> {
        self.set_query(text);
        self.execute_search()
    }

    /// Publish the current view again without changing anything
    pub fn refresh(&self) {
        self.publish_view();
    }

    fn publish_view(&self) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.view();
        for observer in &self.observers {
            observer.on_view_changed(&view);
        }
    }
}
