//! Search controller use case.
//!
//! Holds the user's query and the last computed result set. Updating the
//! query never filters; only [`SearchController::execute_search`] does, and
//! it recomputes the result wholesale from the fetched collection.

use quotes_domain::util::ellipsize;
use quotes_domain::{DomainError, FetchStatus, QuoteRecord, SearchQuery, SearchResult, filter_quotes};
use tracing::debug;

/// Query text plus the result of the last executed search
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    query: SearchQuery,
    result: SearchResult,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query verbatim. Does not run a search.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query.replace(text);
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    /// Filter the fetched quotes with the current query.
    ///
    /// Rejected attempts leave the previous result untouched:
    /// - blank query → [`DomainError::EmptyQuery`]
    /// - fetch still loading → [`DomainError::DataNotReady`]
    /// - fetch failed → [`DomainError::DataUnavailable`]
    pub fn execute_search(&mut self, status: &FetchStatus) -> Result<&[QuoteRecord], DomainError> {
        if self.query.is_blank() {
            debug!("Search rejected: empty query");
            return Err(DomainError::EmptyQuery);
        }

        let quotes = match status {
            FetchStatus::Loading => return Err(DomainError::DataNotReady),
            FetchStatus::Error(message) => {
                return Err(DomainError::DataUnavailable(message.clone()));
            }
            FetchStatus::Success(quotes) => quotes,
        };

        let matches = filter_quotes(quotes.as_slice(), self.query.as_str());
        debug!(
            query = %ellipsize(self.query.as_str(), 40),
            matched = matches.len(),
            total = quotes.len(),
            "Search executed"
        );
        self.result = SearchResult::Executed(matches);

        Ok(self.result.records().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> FetchStatus {
        FetchStatus::Success(
            vec![
                QuoteRecord::new("Happiness is a choice").with_author("Anon"),
                QuoteRecord::new("Success breeds success").with_author("Unknown"),
            ]
            .into(),
        )
    }

    #[test]
    fn test_set_query_does_not_search() {
        let mut controller = SearchController::new();
        controller.set_query("happiness");
        assert_eq!(controller.query().as_str(), "happiness");
        assert_eq!(controller.result(), &SearchResult::NotExecuted);
    }

    #[test]
    fn test_execute_search_stores_matches() {
        let mut controller = SearchController::new();
        controller.set_query("happiness");

        let matches = controller.execute_search(&loaded()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text(), "Happiness is a choice");
        assert!(controller.result().is_executed());
    }

    #[test]
    fn test_no_match_is_executed_and_empty() {
        let mut controller = SearchController::new();
        controller.set_query("xyz-not-present");

        assert!(controller.execute_search(&loaded()).unwrap().is_empty());
        assert_eq!(controller.result(), &SearchResult::Executed(vec![]));
    }

    #[test]
    fn test_empty_query_leaves_previous_result() {
        let mut controller = SearchController::new();
        controller.set_query("success");
        controller.execute_search(&loaded()).unwrap();
        let before = controller.result().clone();

        for blank in ["", "   ", "\t\n"] {
            controller.set_query(blank);
            assert_eq!(
                controller.execute_search(&loaded()),
                Err(DomainError::EmptyQuery)
            );
            assert_eq!(controller.result(), &before);
        }
    }

    #[test]
    fn test_search_before_data_ready_is_rejected() {
        let mut controller = SearchController::new();
        controller.set_query("happiness");

        assert_eq!(
            controller.execute_search(&FetchStatus::Loading),
            Err(DomainError::DataNotReady)
        );
        assert_eq!(controller.result(), &SearchResult::NotExecuted);
    }

    #[test]
    fn test_search_after_failed_fetch_is_rejected() {
        let mut controller = SearchController::new();
        controller.set_query("happiness");

        let status = FetchStatus::Error("Network Error".to_string());
        assert_eq!(
            controller.execute_search(&status),
            Err(DomainError::DataUnavailable("Network Error".to_string()))
        );
        assert!(!controller.result().is_executed());
    }

    #[test]
    fn test_each_search_recomputes_wholesale() {
        let mut controller = SearchController::new();
        controller.set_query("success");
        assert_eq!(controller.execute_search(&loaded()).unwrap().len(), 1);

        controller.set_query("s");
        assert_eq!(controller.execute_search(&loaded()).unwrap().len(), 2);
    }
}
