//! Quote record entity

use serde::{Deserialize, Deserializer, Serialize};

/// Author shown for records whose author is absent.
///
/// Display-only: the filter never matches against this placeholder.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A single attributed quote as returned by the data source (Entity)
///
/// Field names on the wire follow the data source's contract: `q` for the
/// text and `a` for the author. Any other fields are ignored. A missing,
/// `null`, or empty author is stored as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    #[serde(rename = "q")]
    text: String,
    #[serde(
        rename = "a",
        default,
        deserialize_with = "deserialize_author",
        skip_serializing_if = "Option::is_none"
    )]
    author: Option<String>,
}

impl QuoteRecord {
    /// Create a record with no author
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: None,
        }
    }

    /// Attach an author; an empty author stays absent
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        let author = author.into();
        self.author = (!author.is_empty()).then_some(author);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The raw author, `None` when the source did not provide one
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// The author to show to the user, substituting [`UNKNOWN_AUTHOR`]
    pub fn display_author(&self) -> &str {
        self.author.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }
}

fn deserialize_author<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let author = Option::<String>::deserialize(deserializer)?;
    Ok(author.filter(|a| !a.is_empty()))
}
