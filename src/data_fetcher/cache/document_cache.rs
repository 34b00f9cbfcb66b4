use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use super::types::{CacheEntry, CacheStats};
use crate::constants::cache_ttl;
use crate::data_fetcher::api::Fetcher;
use crate::data_fetcher::models::PageDocument;
use crate::error::AppError;

/// Per-URL slot. Holding its lock makes "check freshness, fetch, store" atomic
/// for that URL only.
type Slot = Arc<Mutex<Option<CacheEntry>>>;

/// URL-keyed cache of decoded page documents with a fixed time-to-live.
///
/// Concurrent requests for the same URL are coalesced into a single fetch;
/// requests for different URLs never wait on each other. Entries are only ever
/// replaced, never evicted.
pub struct DocumentCache {
    fetcher: Arc<dyn Fetcher>,
    ttl: Duration,
    slots: RwLock<HashMap<String, Slot>>,
}

impl DocumentCache {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            ttl: Duration::from_secs(cache_ttl::DOCUMENT_SECONDS),
            slots: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The fetcher misses are delegated to.
    pub fn fetcher(&self) -> &Arc<dyn Fetcher> {
        &self.fetcher
    }

    async fn slot(&self, url: &str) -> Slot {
        if let Some(slot) = self.slots.read().await.get(url) {
            return Arc::clone(slot);
        }

        let mut slots = self.slots.write().await;
        Arc::clone(slots.entry(url.to_string()).or_default())
    }

    /// Returns the document for `url`, fetching it when absent or older than the TTL.
    ///
    /// A failed fetch or decode leaves any previous entry for `url` in place.
    #[instrument(skip(self))]
    pub async fn get_document(&self, url: &str) -> Result<Arc<PageDocument>, AppError> {
        let slot = self.slot(url).await;
        let mut entry = slot.lock().await;

        match entry.as_ref() {
            Some(cached) if !cached.is_expired(self.ttl) => {
                debug!("Cache hit for document: url={}, age={:?}", url, cached.age());
                return Ok(Arc::clone(&cached.document));
            }
            Some(cached) => {
                info!(
                    "Refreshing expired document: url={}, age={:?}, ttl={:?}",
                    url,
                    cached.age(),
                    self.ttl
                );
            }
            None => debug!("Cache miss for document: url={}", url),
        }

        let body = self.fetcher.fetch(url).await?;
        let document = PageDocument::decode(&body, url).inspect_err(|e| {
            warn!("Discarding undecodable response for {}: {}", url, e);
        })?;

        let document = Arc::new(document);
        *entry = Some(CacheEntry::new(Arc::clone(&document)));

        debug!(
            "Cached document: url={}, records={}, has_next={}",
            url,
            document.results.len(),
            !document.is_last()
        );
        Ok(document)
    }

    /// When the current entry for `url` was fetched, if there is one.
    pub async fn fetched_at(&self, url: &str) -> Option<Instant> {
        let slot = self.slots.read().await.get(url).cloned()?;
        let entry = slot.lock().await;
        entry.as_ref().map(|e| e.fetched_at)
    }

    /// Number of URLs holding a document, fresh or not.
    pub async fn len(&self) -> usize {
        self.stats().await.entries
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn stats(&self) -> CacheStats {
        let slots: Vec<Slot> = self.slots.read().await.values().cloned().collect();

        let mut stats = CacheStats::default();
        for slot in slots {
            if let Some(entry) = slot.lock().await.as_ref() {
                stats.entries += 1;
                if entry.is_expired(self.ttl) {
                    stats.expired += 1;
                } else {
                    stats.fresh += 1;
                }
            }
        }
        stats
    }
}

impl std::fmt::Debug for DocumentCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentCache")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
