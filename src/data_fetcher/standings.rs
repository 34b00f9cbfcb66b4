//! Win/loss records scraped from a tournament stage page.
//!
//! The stage page is plain HTML, fetched straight through the [`Fetcher`]
//! without touching the document cache. Parsing is best-effort: rows that do
//! not look like a team standing are skipped.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, instrument};

use crate::data_fetcher::api::Fetcher;
use crate::error::AppError;

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table tr").expect("invalid selector"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("invalid selector"));

/// One team's line in a standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads `(name, wins, losses)` from every table row shaped like a standing.
///
/// The name is the first non-numeric cell; wins and losses are the first two
/// numeric cells after it. A leading rank column is therefore skipped.
pub fn parse_standings(html: &str) -> Vec<StandingsRow> {
    let document = Html::parse_document(html);
    let mut rows = Vec::new();

    for row in document.select(&ROW_SELECTOR) {
        let cells: Vec<String> = row.select(&CELL_SELECTOR).map(cell_text).collect();

        let Some(name_idx) = cells
            .iter()
            .position(|c| !c.is_empty() && c.parse::<u32>().is_err())
        else {
            continue;
        };

        let mut numbers = cells[name_idx + 1..]
            .iter()
            .filter_map(|c| c.parse::<u32>().ok());

        if let (Some(wins), Some(losses)) = (numbers.next(), numbers.next()) {
            rows.push(StandingsRow {
                name: cells[name_idx].clone(),
                wins,
                losses,
            });
        }
    }

    debug!("Parsed {} standings rows", rows.len());
    rows
}

/// Row for `team_name`, compared case-insensitively.
pub fn find_row<'a>(rows: &'a [StandingsRow], team_name: &str) -> Option<&'a StandingsRow> {
    rows.iter()
        .find(|row| row.name.eq_ignore_ascii_case(team_name.trim()))
}

/// Fetches and parses the standings table at `url`.
#[instrument(skip(fetcher))]
pub async fn fetch_standings(
    fetcher: &dyn Fetcher,
    url: &str,
) -> Result<Vec<StandingsRow>, AppError> {
    let html = fetcher.fetch(url).await?;
    Ok(parse_standings(&html))
}
