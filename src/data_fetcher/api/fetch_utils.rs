//! Single-shot HTTP GET with status classification

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Performs exactly one GET against `url` and returns the body as text.
///
/// Non-success statuses are mapped to the specific API error variants; timeouts
/// and connection failures to the network variants. Nothing is retried.
#[instrument(skip(client))]
pub(crate) async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(status_error(status_code, reason, url));
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    debug!("Response length: {} bytes", response_text.len());
    Ok(response_text)
}

fn status_error(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::{FetcherOptions, create_http_client};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn fetch_with_status(status: u16) -> AppError {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams.json"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_http_client(FetcherOptions::default()).unwrap();
        fetch_text(&client, &format!("{}/teams.json", mock_server.uri()))
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let error = fetch_with_status(404).await;
        assert!(matches!(error, AppError::ApiNotFound { .. }));
    }

    #[tokio::test]
    async fn test_rate_limit_status_is_not_retried() {
        let error = fetch_with_status(429).await;
        assert!(matches!(error, AppError::ApiRateLimit { .. }));
    }

    #[tokio::test]
    async fn test_server_error_statuses() {
        assert!(matches!(
            fetch_with_status(500).await,
            AppError::ApiServerError { status: 500, .. }
        ));
        assert!(matches!(
            fetch_with_status(503).await,
            AppError::ApiServiceUnavailable { status: 503, .. }
        ));
    }

    #[tokio::test]
    async fn test_client_error_status() {
        let error = fetch_with_status(403).await;
        assert!(matches!(error, AppError::ApiClientError { status: 403, .. }));
        assert!(error.is_network_error());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let client = create_http_client(FetcherOptions::default()).unwrap();
        // Port 9 (discard) is not served on the loopback interface in test environments
        let error = fetch_text(&client, "http://127.0.0.1:9/teams.json")
            .await
            .unwrap_err();
        assert!(error.is_network_error());
    }
}
