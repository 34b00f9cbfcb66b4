use chrono::{Local, NaiveDate};
use futures::TryStreamExt;
use futures::future::try_join_all;
use serde_json::{Value, json};
use std::pin::pin;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::http_client::{Fetcher, FetcherOptions, HttpFetcher};
use super::urls::{Resource, build_resource_url};
use crate::data_fetcher::cache::DocumentCache;
use crate::data_fetcher::models::schedule::{calendar_day_matches, is_calendar_day};
use crate::data_fetcher::models::{Match, Record, ScheduledMatch, Team};
use crate::data_fetcher::search::{self, SearchResult, find_first, pages, project};
use crate::data_fetcher::standings::{StandingsRow, fetch_standings, find_row};
use crate::error::AppError;

/// Entry point to the Master League API.
///
/// Cloning is cheap and clones share one [`DocumentCache`], so concurrent
/// lookups made through any clone coalesce onto the same fetches.
#[derive(Debug, Clone)]
pub struct MasterLeagueClient {
    api_root: String,
    cache: Arc<DocumentCache>,
}

impl MasterLeagueClient {
    /// Creates a client backed by an HTTP fetcher built from `options`.
    pub fn new(api_root: impl Into<String>, options: FetcherOptions) -> Result<Self, AppError> {
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(options)?);
        Ok(Self::with_cache(
            api_root,
            Arc::new(DocumentCache::new(fetcher)),
        ))
    }

    pub fn with_cache(api_root: impl Into<String>, cache: Arc<DocumentCache>) -> Self {
        Self {
            api_root: api_root.into(),
            cache,
        }
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn cache(&self) -> &Arc<DocumentCache> {
        &self.cache
    }

    pub fn resource_url(&self, resource: Resource) -> String {
        build_resource_url(&self.api_root, resource)
    }

    /// Runs [`search::search`] over the page chain of `resource`.
    pub async fn search(
        &self,
        resource: Resource,
        field: &str,
        query: Option<&Value>,
        get_all: bool,
    ) -> Result<SearchResult, AppError> {
        search::search(
            &self.cache,
            &self.resource_url(resource),
            field,
            query,
            get_all,
        )
        .await
    }

    /// Names of every hero, across all pages.
    #[instrument(skip(self))]
    pub async fn all_heroes(&self) -> Result<Vec<String>, AppError> {
        let names = project(&self.cache, &self.resource_url(Resource::Heroes), "name").await?;
        let heroes: Vec<String> = names
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();

        info!("Fetched {} heroes", heroes.len());
        Ok(heroes)
    }

    async fn find_team_by(&self, field: &str, query: Value) -> Result<Team, AppError> {
        let hit = find_first(&self.cache, &self.resource_url(Resource::Teams), field, &query).await?;
        if hit.is_none() {
            debug!("No team with {}={}", field, query);
        }
        Ok(Team::from_search_hit(hit.as_ref()))
    }

    /// Looks a team up by id. A miss yields [`Team::unknown`], not an error.
    pub async fn find_team_by_id(&self, id: i64) -> Result<Team, AppError> {
        self.find_team_by("id", json!(id)).await
    }

    /// Looks a team up by exact name. A miss yields [`Team::unknown`], not an error.
    pub async fn find_team(&self, name: &str) -> Result<Team, AppError> {
        self.find_team_by("name", json!(name)).await
    }

    async fn resolve_team(&self, id: Option<i64>) -> Result<Team, AppError> {
        match id {
            Some(id) => self.find_team_by_id(id).await,
            None => Ok(Team::unknown()),
        }
    }

    async fn resolve_match(&self, scheduled: ScheduledMatch) -> Result<Match, AppError> {
        let (left, right) = tokio::try_join!(
            self.resolve_team(scheduled.left_team_id),
            self.resolve_team(scheduled.right_team_id)
        )?;
        Ok(Match::new(scheduled, left, right))
    }

    /// Matches the calendar lists for `date`, with both teams resolved.
    #[instrument(skip(self))]
    pub async fn matches_on(&self, date: NaiveDate) -> Result<Vec<Match>, AppError> {
        let day = date.format("%Y-%m-%d").to_string();
        let calendar_url = self.resource_url(Resource::Calendar);

        let mut days: Vec<Record> = Vec::new();
        let mut chain = pin!(pages(&self.cache, &calendar_url));
        while let Some(page) = chain.try_next().await? {
            days.extend(
                page.document
                    .results
                    .iter()
                    .filter(|record| is_calendar_day(record, &day))
                    .cloned(),
            );
        }

        let scheduled: Vec<ScheduledMatch> = days
            .iter()
            .flat_map(calendar_day_matches)
            .map(ScheduledMatch::from_record)
            .collect();

        debug!("{} matches scheduled on {}", scheduled.len(), day);
        try_join_all(scheduled.into_iter().map(|m| self.resolve_match(m))).await
    }

    pub async fn todays_matches(&self) -> Result<Vec<Match>, AppError> {
        self.matches_on(Local::now().date_naive()).await
    }

    /// The win/loss line for `team` on the stage page at `standings_url`.
    ///
    /// The page is fetched on every call; it does not go through the document cache.
    pub async fn team_record(
        &self,
        team: &Team,
        standings_url: &str,
    ) -> Result<Option<StandingsRow>, AppError> {
        if team.is_unknown() {
            return Ok(None);
        }

        let rows = fetch_standings(self.cache.fetcher().as_ref(), standings_url).await?;
        Ok(find_row(&rows, &team.name).cloned())
    }
}
