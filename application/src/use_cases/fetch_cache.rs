//! Fetch cache use case.
//!
//! Issues the one quote request of a session on first need and memoizes the
//! outcome under a constant cache key. Every consumer, concurrent or not,
//! gets the same status; the source is never called twice.
//!
//! The request runs on its own task, so a consumer that stops waiting does
//! not abort it. Success and failure are both final: there is no expiry, no
//! invalidation, and no automatic retry.

use crate::config::FetchConfig;
use crate::ports::quote_source::{FetchError, QuoteSource};
use chrono::{DateTime, Utc};
use futures::future::{BoxFuture, FutureExt, Shared};
use quotes_domain::{FetchStatus, QuoteRecord};
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Cache key under which the quote list is memoized.
pub const QUOTES_CACHE_KEY: &str = "quotes";

#[derive(Debug, Clone)]
struct Resolved {
    status: FetchStatus,
    resolved_at: DateTime<Utc>,
}

/// Handle on the spawned request, awaited by every consumer
type PendingFetch = Shared<BoxFuture<'static, Resolved>>;

/// Everything the spawned request task needs
#[derive(Clone)]
struct QuoteRequest {
    key: &'static str,
    source: Arc<dyn QuoteSource>,
    config: FetchConfig,
    cancel: CancellationToken,
}

impl QuoteRequest {
    async fn resolve(self) -> FetchStatus {
        info!(
            key = self.key,
            source = %self.source.describe(),
            "Fetching quotes"
        );
        let started = Instant::now();

        match self.send().await {
            Ok(records) => {
                info!(
                    key = self.key,
                    count = records.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Quotes loaded"
                );
                FetchStatus::Success(records.into())
            }
            Err(e) => {
                warn!(key = self.key, error = %e, "Failed to load quotes");
                FetchStatus::Error(e.to_string())
            }
        }
    }

    async fn send(&self) -> Result<Vec<QuoteRecord>, FetchError> {
        let request = self.source.fetch_quotes();
        let bounded = async {
            match self.config.timeout {
                Some(limit) => tokio::time::timeout(limit, request)
                    .await
                    .unwrap_or_else(|_| Err(FetchError::Timeout(limit))),
                None => request.await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                debug!(key = self.key, "Quote request cancelled");
                Err(FetchError::Cancelled)
            }
            result = bounded => result,
        }
    }
}

/// Memoized quote request.
///
/// Shared between consumers behind an `Arc`. [`fetch`](Self::fetch) awaits
/// the request (starting it if nobody has yet); [`status`](Self::status)
/// never waits and reports [`FetchStatus::Loading`] until the request has
/// resolved.
pub struct FetchCache {
    request: QuoteRequest,
    pending: OnceLock<PendingFetch>,
    resolved: Arc<OnceLock<Resolved>>,
    status_tx: Arc<watch::Sender<FetchStatus>>,
}

impl FetchCache {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self::with_config(source, FetchConfig::default())
    }

    pub fn with_config(source: Arc<dyn QuoteSource>, config: FetchConfig) -> Self {
        let (status_tx, _) = watch::channel(FetchStatus::Loading);
        Self {
            request: QuoteRequest {
                key: QUOTES_CACHE_KEY,
                source,
                config,
                cancel: CancellationToken::new(),
            },
            pending: OnceLock::new(),
            resolved: Arc::new(OnceLock::new()),
            status_tx: Arc::new(status_tx),
        }
    }

    /// The cache key the quote list is stored under
    pub fn key(&self) -> &'static str {
        self.request.key
    }

    /// Description of the underlying quote source
    pub fn source_description(&self) -> String {
        self.request.source.describe()
    }

    /// Resolve the quote list, issuing the request only if nobody has yet.
    ///
    /// Concurrent callers share the same in-flight request. Dropping the
    /// returned future stops waiting but leaves the request running.
    pub async fn fetch(&self) -> FetchStatus {
        let pending = self
            .pending
            .get_or_init(|| self.spawn_request())
            .clone();
        pending.await.status
    }

    /// Current status without waiting
    pub fn status(&self) -> FetchStatus {
        self.resolved
            .get()
            .map(|resolved| resolved.status.clone())
            .unwrap_or_default()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// When the request resolved, `None` while still loading
    pub fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved.get().map(|resolved| resolved.resolved_at)
    }

    /// Watch status changes; the receiver starts at the current status
    pub fn subscribe(&self) -> watch::Receiver<FetchStatus> {
        self.status_tx.subscribe()
    }

    /// Cancel the in-flight request, if any.
    ///
    /// A cancelled request resolves to [`FetchStatus::Error`]. Cancelling
    /// after resolution has no effect.
    pub fn cancel(&self) {
        self.request.cancel.cancel();
    }

    /// Token that cancels this cache's request when triggered
    pub fn cancellation_token(&self) -> CancellationToken {
        self.request.cancel.clone()
    }

    fn spawn_request(&self) -> PendingFetch {
        let request = self.request.clone();
        let resolved = self.resolved.clone();
        let status_tx = self.status_tx.clone();
        let task = tokio::spawn(async move {
            let status = request.resolve().await;
            Self::record(&resolved, &status_tx, status)
        });

        let key = self.request.key;
        let resolved = self.resolved.clone();
        let status_tx = self.status_tx.clone();
        async move {
            match task.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(key, error = %e, "Quote request task failed");
                    let status = FetchStatus::Error(format!("Quote request failed: {}", e));
                    Self::record(&resolved, &status_tx, status)
                }
            }
        }
        .boxed()
        .shared()
    }

    /// Store the outcome once and broadcast it; later outcomes are ignored
    fn record(
        resolved: &OnceLock<Resolved>,
        status_tx: &watch::Sender<FetchStatus>,
        status: FetchStatus,
    ) -> Resolved {
        let outcome = resolved
            .get_or_init(|| Resolved {
                status,
                resolved_at: Utc::now(),
            })
            .clone();
        status_tx.send_replace(outcome.status.clone());
        outcome
    }
}
