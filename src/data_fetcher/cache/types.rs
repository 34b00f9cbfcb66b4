//! Cache data structures with TTL support

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::data_fetcher::models::PageDocument;

/// A decoded page document and the moment it was fetched.
///
/// Entries are never mutated; a refresh replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub document: Arc<PageDocument>,
    pub fetched_at: Instant,
}

impl CacheEntry {
    pub fn new(document: Arc<PageDocument>) -> Self {
        Self {
            document,
            fetched_at: Instant::now(),
        }
    }

    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }

    /// An entry exactly `ttl` old is still fresh.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}

/// Snapshot of document cache occupancy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub fresh: usize,
    pub expired: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_document() -> Arc<PageDocument> {
        Arc::new(PageDocument {
            results: Vec::new(),
            next: None,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expiry_boundary() {
        let ttl = Duration::from_secs(3600);
        let entry = CacheEntry::new(empty_document());
        assert!(!entry.is_expired(ttl));

        tokio::time::advance(ttl).await;
        assert!(!entry.is_expired(ttl));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(entry.is_expired(ttl));
        assert_eq!(entry.age(), Duration::from_secs(3601));
    }
}
