pub mod fetch_utils;
pub mod http_client;
pub mod urls;
mod core;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::{Fetcher, FetcherOptions, HttpFetcher, create_http_client};
// Re-export the API client
pub use core::MasterLeagueClient;
