pub mod api;
pub mod cache;
pub mod models;
pub mod search;
pub mod standings;

pub use api::{Fetcher, FetcherOptions, HttpFetcher, MasterLeagueClient, Resource};
pub use cache::DocumentCache;
pub use models::{Match, PageDocument, Record, Team};
pub use search::{SearchResult, find_all, find_first, pages, project, search};
