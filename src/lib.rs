//! Master League (Heroes of the Storm esports) API library
//!
//! Resources on the API are paginated: every page carries a `results` list and
//! a `next` link. This library caches each page by URL for an hour and searches
//! across page chains, stopping early when only the first match is wanted.
//!
//! # Examples
//!
//! ```rust,no_run
//! use masterleague_stats::data_fetcher::{FetcherOptions, MasterLeagueClient};
//! use masterleague_stats::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = MasterLeagueClient::new("https://api.masterleague.net", FetcherOptions::default())?;
//!
//!     let heroes = client.all_heroes().await?;
//!     println!("{} heroes", heroes.len());
//!
//!     let team = client.find_team("Tempo Storm").await?;
//!     println!("{} (id {:?})", team.name, team.id);
//!
//!     for game in client.todays_matches().await? {
//!         println!("{} vs {} - {}", game.left_team.name, game.right_team.name, game.when);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{
    DocumentCache, Fetcher, FetcherOptions, HttpFetcher, Match, MasterLeagueClient, PageDocument,
    Record, Resource, SearchResult, Team,
};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
