//! Searching across paginated API resources
//!
//! A resource is a chain of pages linked by their `next` URL. [`pages`] walks
//! that chain lazily through the [`DocumentCache`], and the policies on top of
//! it decide how much of the chain gets fetched:
//!
//! - [`find_first`] stops at the first record whose field equals the query,
//! - [`find_all`] walks to the end collecting every match,
//! - [`project`] walks to the end collecting the field from every record.
//!
//! A record lacking the searched field aborts the search with
//! [`AppError::MissingField`]. Any error discards whatever was collected so far.

use futures::stream::{self, Stream, TryStreamExt};
use serde_json::Value;
use std::pin::pin;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::data_fetcher::cache::DocumentCache;
use crate::data_fetcher::models::{PageDocument, Record};
use crate::error::AppError;

/// A page together with the URL it was served from.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub document: Arc<PageDocument>,
}

/// Lazily walks the page chain starting at `start_url`.
///
/// Each item costs at most one fetch (none on a cache hit). The stream ends
/// after the page whose `next` is null, or right after yielding an error.
pub fn pages<'a>(
    cache: &'a DocumentCache,
    start_url: &str,
) -> impl Stream<Item = Result<Page, AppError>> + 'a {
    stream::try_unfold(Some(start_url.to_string()), move |next| async move {
        let Some(url) = next else {
            return Ok(None);
        };

        let document = cache.get_document(&url).await?;
        let following = document.next.clone();
        Ok::<_, AppError>(Some((Page { url, document }, following)))
    })
}

fn field_value<'r>(record: &'r Record, field: &str, url: &str) -> Result<&'r Value, AppError> {
    record
        .get(field)
        .ok_or_else(|| AppError::missing_field(field, url))
}

/// First record whose `field` equals `query`. No page after the match is fetched.
#[instrument(skip(cache, query))]
pub async fn find_first(
    cache: &DocumentCache,
    start_url: &str,
    field: &str,
    query: &Value,
) -> Result<Option<Record>, AppError> {
    let mut chain = pin!(pages(cache, start_url));

    while let Some(page) = chain.try_next().await? {
        for record in &page.document.results {
            if field_value(record, field, &page.url)? == query {
                debug!("Match for {}={} on {}", field, query, page.url);
                return Ok(Some(record.clone()));
            }
        }
    }

    debug!("No match for {}={} from {}", field, query, start_url);
    Ok(None)
}

/// Every record whose `field` equals `query`, in page-chain order.
#[instrument(skip(cache, query))]
pub async fn find_all(
    cache: &DocumentCache,
    start_url: &str,
    field: &str,
    query: &Value,
) -> Result<Vec<Record>, AppError> {
    let mut chain = pin!(pages(cache, start_url));
    let mut matches = Vec::new();

    while let Some(page) = chain.try_next().await? {
        for record in &page.document.results {
            if field_value(record, field, &page.url)? == query {
                matches.push(record.clone());
            }
        }
    }

    debug!("{} matches for {}={} from {}", matches.len(), field, query, start_url);
    Ok(matches)
}

/// The value of `field` from every record on every page.
#[instrument(skip(cache))]
pub async fn project(
    cache: &DocumentCache,
    start_url: &str,
    field: &str,
) -> Result<Vec<Value>, AppError> {
    let mut chain = pin!(pages(cache, start_url));
    let mut values = Vec::new();

    while let Some(page) = chain.try_next().await? {
        for record in &page.document.results {
            values.push(field_value(record, field, &page.url)?.clone());
        }
    }

    Ok(values)
}

/// Outcome of [`search`]: whole records in query mode, bare field values in
/// projection mode.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Records(Vec<Record>),
    Values(Vec<Value>),
}

impl SearchResult {
    pub fn len(&self) -> usize {
        match self {
            SearchResult::Records(records) => records.len(),
            SearchResult::Values(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_records(&self) -> Option<&[Record]> {
        match self {
            SearchResult::Records(records) => Some(records),
            SearchResult::Values(_) => None,
        }
    }

    pub fn as_values(&self) -> Option<&[Value]> {
        match self {
            SearchResult::Values(values) => Some(values),
            SearchResult::Records(_) => None,
        }
    }
}

/// Searches the page chain at `start_url`.
///
/// With a `query`, returns matching records: only the first one unless
/// `get_all` is set. Without a query, `get_all` is ignored and the value of
/// `field` is collected from every record.
pub async fn search(
    cache: &DocumentCache,
    start_url: &str,
    field: &str,
    query: Option<&Value>,
    get_all: bool,
) -> Result<SearchResult, AppError> {
    match query {
        Some(query) if get_all => find_all(cache, start_url, field, query)
            .await
            .map(SearchResult::Records),
        Some(query) => find_first(cache, start_url, field, query)
            .await
            .map(|hit| SearchResult::Records(hit.into_iter().collect())),
        None => project(cache, start_url, field)
            .await
            .map(SearchResult::Values),
    }
}
