//! URL building utilities for API endpoints

use std::fmt;

/// Well-known resources served by the Master League API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Heroes,
    Matches,
    Teams,
    Maps,
    Regions,
    Patches,
    Players,
    Tournaments,
    Calendar,
}

impl Resource {
    pub const ALL: [Resource; 9] = [
        Resource::Heroes,
        Resource::Matches,
        Resource::Teams,
        Resource::Maps,
        Resource::Regions,
        Resource::Patches,
        Resource::Players,
        Resource::Tournaments,
        Resource::Calendar,
    ];

    /// Path of the first page of this resource, relative to the API root.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Heroes => "/heroes.json",
            Resource::Matches => "/matches.json",
            Resource::Teams => "/teams.json",
            Resource::Maps => "/maps.json",
            // The API names this one in the singular
            Resource::Regions => "/region.json",
            Resource::Patches => "/patches.json",
            Resource::Players => "/players.json",
            Resource::Tournaments => "/tournaments.json",
            Resource::Calendar => "/calendar.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_start_matches('/').trim_end_matches(".json"))
    }
}

/// Builds the URL of the first page of `resource`.
///
/// # Example
/// ```
/// use masterleague_stats::data_fetcher::api::{Resource, build_resource_url};
///
/// let url = build_resource_url("https://api.masterleague.net/", Resource::Teams);
/// assert_eq!(url, "https://api.masterleague.net/teams.json");
/// ```
pub fn build_resource_url(api_root: &str, resource: Resource) -> String {
    format!("{}{}", api_root.trim_end_matches('/'), resource.path())
}
