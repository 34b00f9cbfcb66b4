//! Test utilities: an in-memory fetcher and page body builders

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::data_fetcher::api::Fetcher;
use crate::error::AppError;

/// Fetcher serving canned bodies by URL and counting every call.
///
/// Unknown URLs fail with a 404-style error.
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: Mutex<HashMap<String, String>>,
    calls: Mutex<HashMap<String, usize>>,
    delay: Option<Duration>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetch sleeps for `delay` before answering.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Sets (or replaces) the body served for `url`.
    pub fn respond(&self, url: &str, body: String) {
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .insert(url.to_string(), body);
    }

    /// Serves `pages` as a chain starting at `start_url`; page N > 1 lives at
    /// `{start_url}?page=N`. Returns the URLs in chain order.
    pub fn respond_chain(&self, start_url: &str, pages: Vec<Value>) -> Vec<String> {
        let urls: Vec<String> = (1..=pages.len())
            .map(|n| {
                if n == 1 {
                    start_url.to_string()
                } else {
                    format!("{start_url}?page={n}")
                }
            })
            .collect();

        for (i, results) in pages.into_iter().enumerate() {
            let next = urls.get(i + 1).map(String::as_str);
            self.respond(&urls[i], page_body(results, next));
        }
        urls
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .get(url)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().expect("calls lock poisoned").values().sum()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        *self
            .calls
            .lock()
            .expect("calls lock poisoned")
            .entry(url.to_string())
            .or_default() += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .lock()
            .expect("responses lock poisoned")
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::api_not_found(url))
    }
}

/// Serializes a page body with the given `results` array and `next` link.
pub fn page_body(results: Value, next: Option<&str>) -> String {
    json!({
        "count": results.as_array().map_or(0, Vec::len),
        "results": results,
        "next": next,
    })
    .to_string()
}
