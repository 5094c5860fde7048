//! Quote collection value object

use super::record::QuoteRecord;
use std::sync::Arc;

/// Ordered quote records from one fetch (Value Object)
///
/// Order is the order received; nothing is de-duplicated. The records are
/// shared, so cloning a collection never copies them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteCollection {
    records: Arc<[QuoteRecord]>,
}

impl QuoteCollection {
    pub fn new(records: Vec<QuoteRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[QuoteRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuoteRecord> {
        self.records.iter()
    }

    /// The first `limit` records, or all of them if there are fewer
    pub fn preview(&self, limit: usize) -> &[QuoteRecord] {
        &self.records[..limit.min(self.records.len())]
    }
}

impl From<Vec<QuoteRecord>> for QuoteCollection {
    fn from(records: Vec<QuoteRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a QuoteCollection {
    type Item = &'a QuoteRecord;
    type IntoIter = std::slice::Iter<'a, QuoteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> QuoteCollection {
        (0..n)
            .map(|i| QuoteRecord::new(format!("quote {i}")))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_preview_bounds() {
        let quotes = numbered(8);
        let preview = quotes.preview(5);
        assert_eq!(preview.len(), 5);
        assert_eq!(preview[0].text(), "quote 0");
        assert_eq!(preview[4].text(), "quote 4");

        assert_eq!(numbered(3).preview(5).len(), 3);
        assert!(numbered(0).preview(5).is_empty());
    }

    #[test]
    fn test_keeps_duplicates_and_order() {
        let quotes = QuoteCollection::new(vec![
            QuoteRecord::new("b"),
            QuoteRecord::new("a"),
            QuoteRecord::new("b"),
        ]);
        let texts: Vec<_> = quotes.iter().map(|q| q.text()).collect();
        assert_eq!(texts, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_clone_shares_records() {
        let quotes = numbered(2);
        let copy = quotes.clone();
        assert!(std::ptr::eq(quotes.as_slice(), copy.as_slice()));
    }
}
