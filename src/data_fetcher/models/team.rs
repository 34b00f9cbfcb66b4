use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fields::{required_i64, required_str};
use super::page::Record;
use crate::constants::unknown;
use crate::error::AppError;

/// A team as listed by the `/teams.json` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// `None` only for the unknown sentinel
    pub id: Option<i64>,
    pub name: String,
    pub logo: String,
    pub region: Option<i64>,
}

impl Team {
    /// Placeholder used when a team cannot be resolved.
    pub fn unknown() -> Self {
        Self {
            id: None,
            name: unknown::TEAM_NAME.to_string(),
            logo: unknown::TEAM_LOGO.to_string(),
            region: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.id.is_none()
    }

    /// Builds a team from an optional search hit, falling back to
    /// [`Team::unknown`] when there was no hit or the record is incomplete.
    pub fn from_search_hit(hit: Option<&Record>) -> Self {
        match hit.map(Team::try_from) {
            Some(Ok(team)) => team,
            Some(Err(e)) => {
                debug!("Team record unusable, substituting unknown team: {}", e);
                Team::unknown()
            }
            None => Team::unknown(),
        }
    }
}

impl TryFrom<&Record> for Team {
    type Error = AppError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        Ok(Team {
            id: Some(required_i64(record, "Team", "id")?),
            name: required_str(record, "Team", "name")?.to_string(),
            logo: required_str(record, "Team", "logo")?.to_string(),
            region: record.get("region").and_then(|v| v.as_i64()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tempo_storm() -> Record {
        json!({
            "id": 29,
            "region": 2,
            "logo": "https://c.masterleague.net/media/team/logo/1515844114.jpg.300x300_q85.jpg",
            "name": "Tempo Storm"
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_team_from_complete_record() {
        let team = Team::try_from(&tempo_storm()).unwrap();
        assert_eq!(team.id, Some(29));
        assert_eq!(team.name, "Tempo Storm");
        assert_eq!(team.region, Some(2));
        assert!(!team.is_unknown());
    }

    #[test]
    fn test_team_conversion_reports_missing_field() {
        let mut record = tempo_storm();
        record.remove("logo");

        let error = Team::try_from(&record).unwrap_err();
        assert!(matches!(error, AppError::EntityField { entity: "Team", .. }));
    }

    #[test]
    fn test_from_search_hit_falls_back_to_unknown() {
        assert_eq!(Team::from_search_hit(None), Team::unknown());

        let mut record = tempo_storm();
        record.remove("name");
        let team = Team::from_search_hit(Some(&record));
        assert!(team.is_unknown());
        assert_eq!(team.name, "NO NAME");
        assert_eq!(team.logo, "NO LOGO");
    }

    #[test]
    fn test_missing_region_is_tolerated() {
        let mut record = tempo_storm();
        record.remove("region");
        let team = Team::from_search_hit(Some(&record));
        assert_eq!(team.name, "Tempo Storm");
        assert_eq!(team.region, None);
    }
}
