//! Filter engine
//!
//! Case-insensitive substring matching over a quote's text and author.
//! Matching is not anchored or tokenized and applies no normalization beyond
//! Unicode lower-casing. There is no ranking: matches keep their input order.
//!
//! An absent author is never a match target. The filter looks at the raw
//! field, so a query of `"unknown"` does not pick up records that are merely
//! *displayed* with the [`UNKNOWN_AUTHOR`](crate::UNKNOWN_AUTHOR) placeholder.

use crate::quote::record::QuoteRecord;

/// Number of records shown before any search has been executed
pub const PREVIEW_LIMIT: usize = 5;

/// A lower-cased query ready to test records against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteMatcher {
    needle: String,
}

impl QuoteMatcher {
    /// Build a matcher for `query`, used as-is apart from lower-casing
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, record: &QuoteRecord) -> bool {
        record.text().to_lowercase().contains(&self.needle)
            || record
                .author()
                .is_some_and(|author| author.to_lowercase().contains(&self.needle))
    }
}

/// Return the records of `quotes` that match `query`, in input order
pub fn filter_quotes(quotes: &[QuoteRecord], query: &str) -> Vec<QuoteRecord> {
    let matcher = QuoteMatcher::new(query);
    quotes
        .iter()
        .filter(|record| matcher.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Vec<QuoteRecord> {
        vec![
            QuoteRecord::new("Happiness is a choice").with_author("Anon"),
            QuoteRecord::new("Success breeds success").with_author("Unknown"),
        ]
    }

    #[test]
    fn test_happiness_matches_first_record_only() {
        let result = filter_quotes(&sample(), "happiness");
        assert_eq!(result, vec![sample()[0].clone()]);
    }

    #[test]
    fn test_not_present_is_empty() {
        assert!(filter_quotes(&sample(), "xyz-not-present").is_empty());
    }

    #[test]
    fn test_matches_author_case_insensitively() {
        let result = filter_quotes(&sample(), "ANON");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].author(), Some("Anon"));
    }

    #[test]
    fn test_substring_is_not_anchored() {
        let result = filter_quotes(&sample(), "eeds suc");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text(), "Success breeds success");
    }

    #[test]
    fn test_absent_author_is_never_matched() {
        let quotes = vec![
            QuoteRecord::new("No attribution here"),
            QuoteRecord::new("Attributed").with_author("Unknown"),
        ];
        let result = filter_quotes(&quotes, "unknown");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text(), "Attributed");
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let quotes = vec![QuoteRecord::new("love is all")];
        assert!(filter_quotes(&quotes, " love").is_empty());
        assert_eq!(filter_quotes(&quotes, "love ").len(), 1);
    }

    #[test]
    fn test_preserves_input_order() {
        let quotes = vec![
            QuoteRecord::new("c love"),
            QuoteRecord::new("a hate"),
            QuoteRecord::new("b LOVE"),
        ];
        let texts: Vec<_> = filter_quotes(&quotes, "love")
            .into_iter()
            .map(|q| q.text().to_string())
            .collect();
        assert_eq!(texts, vec!["c love", "b LOVE"]);
    }

    #[test]
    fn test_unicode_lowercasing() {
        let quotes = vec![QuoteRecord::new("ÉTÉ À PARIS")];
        assert_eq!(filter_quotes(&quotes, "été").len(), 1);
    }

    fn arb_record() -> impl Strategy<Value = QuoteRecord> {
        ("[a-zA-Z ]{0,24}", proptest::option::of("[a-zA-Z]{0,8}")).prop_map(|(text, author)| {
            match author {
                Some(author) => QuoteRecord::new(text).with_author(author),
                None => QuoteRecord::new(text),
            }
        })
    }

    fn contains_ci(record: &QuoteRecord, query: &str) -> bool {
        let q = query.to_lowercase();
        record.text().to_lowercase().contains(&q)
            || record.author().is_some_and(|a| a.to_lowercase().contains(&q))
    }

    proptest! {
        #[test]
        fn prop_partition_is_exact(
            quotes in proptest::collection::vec(arb_record(), 1..20),
            query in "[a-zA-Z]{1,3}",
        ) {
            let result = filter_quotes(&quotes, &query);
            for record in &result {
                prop_assert!(contains_ci(record, &query));
            }
            let rejected = quotes.iter().filter(|r| !result.contains(r));
            for record in rejected {
                prop_assert!(!contains_ci(record, &query));
            }
        }

        #[test]
        fn prop_idempotent(
            quotes in proptest::collection::vec(arb_record(), 0..20),
            query in "[a-zA-Z]{1,3}",
        ) {
            let once = filter_quotes(&quotes, &query);
            let twice = filter_quotes(&once, &query);
            prop_assert_eq!(once, twice);
        }
    }
}
