use serde::{Deserialize, Serialize};

use super::fields::{required_i64, required_str};
use super::page::Record;
use super::team::Team;
use crate::constants::unknown;

/// One entry of a calendar day's `matches` list, before team lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledMatch {
    pub left_team_id: Option<i64>,
    pub right_team_id: Option<i64>,
    pub format: String,
    pub name: String,
    pub datetime: String,
}

impl ScheduledMatch {
    /// Reads a calendar match record. Missing text fields become `"unknown"`,
    /// missing team ids become `None` and resolve to [`Team::unknown`].
    pub fn from_record(record: &Record) -> Self {
        let text = |field: &str| {
            required_str(record, "Match", field)
                .map(str::to_string)
                .unwrap_or_else(|_| unknown::TEXT.to_string())
        };

        Self {
            left_team_id: required_i64(record, "Match", "left_team").ok(),
            right_team_id: required_i64(record, "Match", "right_team").ok(),
            format: text("format"),
            name: text("name"),
            datetime: text("datetime"),
        }
    }
}

/// A calendar match with both teams resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub left_team: Team,
    pub right_team: Team,
    pub format: String,
    pub name: String,
    pub when: String,
}

impl Match {
    pub fn new(scheduled: ScheduledMatch, left_team: Team, right_team: Team) -> Self {
        Self {
            left_team,
            right_team,
            format: scheduled.format,
            name: scheduled.name,
            when: scheduled.datetime,
        }
    }
}

/// Calendar day records whose `date` mentions `date` (YYYY-MM-DD).
pub fn is_calendar_day(record: &Record, date: &str) -> bool {
    record
        .get("date")
        .and_then(|v| v.as_str())
        .is_some_and(|d| d.contains(date))
}

/// Match records listed under a calendar day.
pub fn calendar_day_matches(record: &Record) -> impl Iterator<Item = &Record> {
    record
        .get("matches")
        .and_then(|v| v.as_array())
        .into_iter()
        .flatten()
        .filter_map(|m| m.as_object())
}
