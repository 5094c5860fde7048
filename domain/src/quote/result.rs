//! Search result value object

use super::record::QuoteRecord;

/// Outcome of the last executed search
///
/// An executed search with no matches is `Executed(vec![])`, which is not
/// the same thing as `NotExecuted`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchResult {
    #[default]
    NotExecuted,
    Executed(Vec<QuoteRecord>),
}

impl SearchResult {
    pub fn is_executed(&self) -> bool {
        matches!(self, SearchResult::Executed(_))
    }

    /// The matching records, `None` if no search has run yet
    pub fn records(&self) -> Option<&[QuoteRecord]> {
        match self {
            SearchResult::NotExecuted => None,
            SearchResult::Executed(records) => Some(records),
        }
    }
}
