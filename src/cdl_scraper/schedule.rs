use std::collections::HashSet;

use chrono::DateTime;
use itertools::Itertools;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::cdl_scraper::next_data::{self, Navigate};
use crate::cdl_scraper::standings::TeamCard;
use crate::cdl_scraper::{self, extract_next_data};
use crate::error::{CdlError, Result};
use crate::model::{Match, Schedule, ScheduleSection, TeamTheme};

const COMPLETED_STATUS: &str = "COMPLETED";
const UNKNOWN_TEAM: &str = "TBD";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MatchEntry {
    home_team_card: Option<TeamCard>,
    away_team_card: Option<TeamCard>,
    #[serde(rename = "match")]
    info: Option<MatchInfo>,
    result: Option<MatchResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MatchInfo {
    id: Option<i64>,
    play_time: Option<i64>,
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MatchResult {
    home_team_games_won: Option<i32>,
    away_team_games_won: Option<i32>,
}

/// Fetch the season schedule, newest first.
#[instrument(skip(client))]
pub(crate) async fn get_schedule(client: &reqwest::Client, url: &str) -> Result<Schedule> {
    let html = cdl_scraper::get_page(client, url).await?;
    let schedule = parse_schedule(&html)?;
    debug!(
        count = schedule.len(),
        completed = schedule.iter().filter(|m| m.is_completed).count(),
        "parsed schedule"
    );
    Ok(schedule)
}

pub(crate) fn parse_schedule(html: &str) -> Result<Schedule> {
    let raw = extract_next_data(html)?;
    decode_schedule(&raw)
}

pub(crate) fn decode_schedule(raw: &str) -> Result<Schedule> {
    let tree = next_data::parse_page_state(raw)?;
    let props = next_data::page_props(&tree)?;
    let cards = next_data::open_tab(props)?
        .find_child("blocks", "cdlEntireSeasonMatchCards")
        .ok_or(CdlError::Schema {
            step: "entire season match cards",
        })?;
    Ok(build_schedule(cards))
}

/// Walk the completed section, then the upcoming one, keeping the first copy
/// of every match id. The result is sorted by date, newest first.
fn build_schedule(cards: &Value) -> Schedule {
    let mut seen = HashSet::new();
    let mut matches = vec![];

    for (section, key) in [
        (ScheduleSection::Completed, "completedMatches"),
        (ScheduleSection::Upcoming, "upcomingMatches"),
    ] {
        let entries = cards
            .list(key)
            .unwrap_or_default()
            .iter()
            .flat_map(|group| group.list("matches").unwrap_or_default());
        let entries: Vec<MatchEntry> = next_data::project(entries, "match");

        for entry in entries {
            let Some(id) = entry.info.as_ref().and_then(|i| i.id) else {
                warn!(%section, "skipping match without an id");
                continue;
            };
            let id = id.to_string();
            if !seen.insert(id.clone()) {
                debug!(%id, %section, "skipping duplicate match");
                continue;
            }
            matches.push(to_match(id, entry, section));
        }
    }

    matches
        .into_iter()
        .sorted_by(|a, b| b.date.cmp(&a.date))
        .collect()
}

/// Upcoming entries never carry scores, even when the page includes a result.
fn to_match(id: String, entry: MatchEntry, section: ScheduleSection) -> Match {
    let team_name = |card: Option<TeamCard>| {
        card.and_then(|c| c.name)
            .unwrap_or_else(|| UNKNOWN_TEAM.to_string())
    };
    let team1_name = team_name(entry.home_team_card);
    let team2_name = team_name(entry.away_team_card);
    let info = entry.info.unwrap_or_default();

    let (is_completed, team1_score, team2_score) = match section {
        ScheduleSection::Completed => {
            let result = entry.result.unwrap_or_default();
            (
                info.status.as_deref() == Some(COMPLETED_STATUS),
                result.home_team_games_won,
                result.away_team_games_won,
            )
        }
        ScheduleSection::Upcoming => (false, None, None),
    };

    Match {
        id,
        team1_logo: TeamTheme::for_team(&team1_name).logo.to_string(),
        team2_logo: TeamTheme::for_team(&team2_name).logo.to_string(),
        team1_name,
        team2_name,
        team1_score,
        team2_score,
        date: DateTime::from_timestamp(info.play_time.unwrap_or_default(), 0).unwrap_or_default(),
        is_completed,
        match_title: None,
    }
}
