//! Quote view derivation.
//!
//! What the user sees is a pure function of the fetch status and the
//! search result. [`QuoteView::derive`] computes it; renderers only format.

use quotes_domain::{FetchStatus, PREVIEW_LIMIT, QuoteRecord, SearchResult};
use serde::Serialize;

/// One quote ready for display, author placeholder already applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteCard {
    pub text: String,
    pub author: String,
}

impl From<&QuoteRecord> for QuoteCard {
    fn from(record: &QuoteRecord) -> Self {
        Self {
            text: record.text().to_string(),
            author: record.display_author().to_string(),
        }
    }
}

/// What to display for the current session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuoteView {
    /// The fetch has not resolved; show a loading indicator and no list
    Loading,
    /// The fetch failed; show the message and no list
    Error { message: String },
    /// A search ran and matched nothing
    NoResults,
    /// A search ran; every match, in source order
    Results { quotes: Vec<QuoteCard> },
    /// No search yet; the first [`PREVIEW_LIMIT`] quotes
    Preview { quotes: Vec<QuoteCard>, total: usize },
}

impl QuoteView {
    pub fn derive(status: &FetchStatus, result: &SearchResult) -> Self {
        let quotes = match status {
            FetchStatus::Loading => return QuoteView::Loading,
            FetchStatus::Error(message) => {
                return QuoteView::Error {
                    message: message.clone(),
                };
            }
            FetchStatus::Success(quotes) => quotes,
        };

        match result.records() {
            Some([]) => QuoteView::NoResults,
            Some(records) => QuoteView::Results {
                quotes: cards(records),
            },
            None => QuoteView::Preview {
                quotes: cards(quotes.preview(PREVIEW_LIMIT)),
                total: quotes.len(),
            },
        }
    }

    /// The cards to list, empty for states that show no list
    pub fn cards(&self) -> &[QuoteCard] {
        match self {
            QuoteView::Results { quotes } | QuoteView::Preview { quotes, .. } => quotes,
            _ => &[],
        }
    }
}

fn cards(records: &[QuoteRecord]) -> Vec<QuoteCard> {
    records.iter().map(QuoteCard::from).collect()
}
