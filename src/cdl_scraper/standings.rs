use serde::Deserialize;
use tracing::{debug, instrument};

use crate::cdl_scraper::next_data::{self, Navigate};
use crate::cdl_scraper::{self, extract_next_data};
use crate::error::{CdlError, Result};
use crate::model::{TeamStanding, TeamTheme};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StandingEntry {
    standing: Option<StandingStats>,
    team_card: Option<TeamCard>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StandingStats {
    rank: Option<i32>,
    cdl_points: Option<i32>,
    match_win: Option<i32>,
    match_loss: Option<i32>,
    game_win: Option<i32>,
    game_loss: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct TeamCard {
    pub(crate) name: Option<String>,
}

/// Fetch the league standings page. Rosters are left empty.
#[instrument(skip(client))]
pub(crate) async fn get_standings(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<TeamStanding>> {
    let html = cdl_scraper::get_page(client, url).await?;
    let standings = parse_standings(&html)?;
    debug!(count = standings.len(), "parsed standings");
    Ok(standings)
}

pub(crate) fn parse_standings(html: &str) -> Result<Vec<TeamStanding>> {
    let raw = extract_next_data(html)?;
    decode_standings(&raw)
}

pub(crate) fn decode_standings(raw: &str) -> Result<Vec<TeamStanding>> {
    let tree = next_data::parse_page_state(raw)?;
    let props = next_data::page_props(&tree)?;
    let entries = next_data::open_tab(props)?
        .find_child("blocks", "cdlProStandings")
        .and_then(|block| block.list("standings"))
        .ok_or(CdlError::Schema {
            step: "pro standings",
        })?;

    let entries: Vec<StandingEntry> = next_data::project(entries, "standing");
    Ok(entries.into_iter().map(to_team_standing).collect())
}

fn to_team_standing(entry: StandingEntry) -> TeamStanding {
    let stats = entry.standing.unwrap_or_default();
    let name = entry.team_card.and_then(|c| c.name).unwrap_or_default();
    TeamStanding {
        rank: stats.rank.unwrap_or_default(),
        logo: TeamTheme::for_team(&name).logo.to_string(),
        name,
        points: stats.cdl_points.unwrap_or_default(),
        match_wins: stats.match_win.unwrap_or_default(),
        match_losses: stats.match_loss.unwrap_or_default(),
        map_wins: stats.game_win.unwrap_or_default(),
        map_losses: stats.game_loss.unwrap_or_default(),
        roster: vec![],
    }
}
