//! HTTP quote source: one `GET` to the quote listing endpoint.
//!
//! The endpoint returns a JSON array of objects with a `q` (text) field and
//! an optional `a` (author) field. Anything else in the objects is ignored.

use async_trait::async_trait;
use quotes_application::{FetchError, QuoteSource};
use quotes_domain::QuoteRecord;
use tracing::debug;

/// Default quote listing endpoint
pub const DEFAULT_QUOTES_URL: &str = "https://zenquotes.io/api/quotes";

/// Default `User-Agent` header sent with the request
pub const DEFAULT_USER_AGENT: &str = concat!("quote-search/", env!("CARGO_PKG_VERSION"));

/// Maximum response body size (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// [`QuoteSource`] that fetches the quote list over HTTP
pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
    user_agent: String,
}

impl HttpQuoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Use a preconfigured client (proxies, TLS settings, ...)
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpQuoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTES_URL)
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch_quotes(&self) -> Result<Vec<QuoteRecord>, FetchError> {
        debug!(url = %self.url, "GET quote list");

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let content_length = response.content_length().unwrap_or(0);
        if content_length > MAX_BODY_SIZE as u64 {
            return Err(FetchError::Decode(format!(
                "response too large: {} bytes (max: {} bytes)",
                content_length, MAX_BODY_SIZE
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(format!("failed to read response body: {}", e)))?;

        if body.len() > MAX_BODY_SIZE {
            return Err(FetchError::Decode(format!(
                "response too large: {} bytes",
                body.len()
            )));
        }

        let quotes = parse_quotes(&body)?;
        debug!(count = quotes.len(), bytes = body.len(), "Parsed quote list");
        Ok(quotes)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Decode a quote listing body, keeping the order of the array
pub fn parse_quotes(body: &[u8]) -> Result<Vec<QuoteRecord>, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
}
