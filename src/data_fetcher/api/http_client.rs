//! HTTP client creation and the `Fetcher` abstraction used by the document cache

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

use super::fetch_utils::fetch_text;
use crate::error::AppError;

/// Issues one GET per call and returns the body as text.
///
/// Implementations must not cache or retry; failures go straight back to the
/// caller.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, AppError>;
}

/// Transport settings chosen once per fetcher instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetcherOptions {
    pub timeout: Duration,
    /// Certificate validation. Only turned off when a caller asks for it.
    pub verify_tls: bool,
}

impl Default for FetcherOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS),
            verify_tls: true,
        }
    }
}

/// Creates a configured HTTP client with connection pooling and a per-request timeout.
pub fn create_http_client(options: FetcherOptions) -> Result<Client, reqwest::Error> {
    if !options.verify_tls {
        warn!("TLS certificate validation is disabled for this client");
    }

    Client::builder()
        .timeout(options.timeout)
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .danger_accept_invalid_certs(!options.verify_tls)
        .build()
}

/// [`Fetcher`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    options: FetcherOptions,
}

impl HttpFetcher {
    pub fn new(options: FetcherOptions) -> Result<Self, AppError> {
        Ok(Self {
            client: create_http_client(options)?,
            options,
        })
    }

    pub fn options(&self) -> FetcherOptions {
        self.options
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        fetch_text(&self.client, url).await
    }
}

/// Creates an HTTP fetcher for testing with default options
#[cfg(test)]
pub fn create_test_fetcher() -> HttpFetcher {
    HttpFetcher::new(FetcherOptions::default()).expect("Failed to create test HTTP fetcher")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_default_options_verify_certificates() {
        let options = FetcherOptions::default();
        assert!(options.verify_tls);
        assert_eq!(options.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_fetcher_keeps_options() {
        let options = FetcherOptions {
            timeout: Duration::from_secs(5),
            verify_tls: false,
        };
        let fetcher = HttpFetcher::new(options).unwrap();
        assert_eq!(fetcher.options(), options);
    }

    #[tokio::test]
    async fn test_fetch_returns_body_text() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/heroes.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"results\": []}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = create_test_fetcher();
        let body = fetcher
            .fetch(&format!("{}/heroes.json", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "{\"results\": []}");
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new(FetcherOptions {
            timeout: Duration::from_millis(200),
            verify_tls: true,
        })
        .unwrap();

        let error = fetcher
            .fetch(&format!("{}/teams.json", mock_server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::NetworkTimeout { .. }));
        assert!(error.is_network_error());
    }
}
