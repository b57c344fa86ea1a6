use serde::Deserialize;
use tracing::{debug, instrument};

use crate::cdl_scraper::next_data::{self, Navigate};
use crate::cdl_scraper::{self, extract_next_data};
use crate::error::{CdlError, Result};
use crate::model::{TeamStanding, TeamTheme};

const UNKNOWN_TEAM: &str = "Unknown Team";
const UNKNOWN_PLAYER: &str = "TBD";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TeamEntry {
    team_name: Option<String>,
    players: Option<Vec<PlayerEntry>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PlayerEntry {
    player_name: Option<String>,
}

/// Fetch the teams-and-players page and build one roster row per team.
#[instrument(skip(client))]
pub(crate) async fn get_rosters(client: &reqwest::Client, url: &str) -> Result<Vec<TeamStanding>> {
    let html = cdl_scraper::get_page(client, url).await?;
    let rosters = parse_rosters(&html)?;
    debug!(count = rosters.len(), "parsed team rosters");
    Ok(rosters)
}

pub(crate) fn parse_rosters(html: &str) -> Result<Vec<TeamStanding>> {
    let raw = extract_next_data(html)?;
    decode_rosters(&raw)
}

/// Rosters carry no league stats, so every stat is zero and `rank` is just
/// the team's 1-based position in the page. Undecodable teams are skipped but
/// still count towards the position of the teams after them.
pub(crate) fn decode_rosters(raw: &str) -> Result<Vec<TeamStanding>> {
    let tree = next_data::parse_page_state(raw)?;
    let teams = next_data::page_props(&tree)?
        .list("teams")
        .ok_or(CdlError::Schema { step: "teams" })?;

    Ok(teams
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let team: TeamEntry = next_data::decode_entry(entry, "roster team")?;
            let name = team.team_name.unwrap_or_else(|| UNKNOWN_TEAM.to_string());
            let roster = team
                .players
                .unwrap_or_default()
                .into_iter()
                .map(|p| p.player_name.unwrap_or_else(|| UNKNOWN_PLAYER.to_string()))
                .collect();
            Some(TeamStanding {
                rank: index as i32 + 1,
                logo: TeamTheme::for_team(&name).logo.to_string(),
                name,
                roster,
                ..Default::default()
            })
        })
        .collect())
}
