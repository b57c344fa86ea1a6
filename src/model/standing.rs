use serde::{Deserialize, Serialize};

/// The merged standings table.
pub type Standings = Vec<TeamStanding>;

/// One team's row in the standings, optionally with its roster.
///
/// Records are keyed by `name`; nothing else identifies a team across
/// refreshes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStanding {
    pub rank: i32,
    pub name: String,
    pub logo: String,
    pub points: i32,
    pub match_wins: i32,
    pub match_losses: i32,
    pub map_wins: i32,
    pub map_losses: i32,
    pub roster: Vec<String>,
}

impl TeamStanding {
    /// Match record formatted as `"W - L"`.
    pub fn record(&self) -> String {
        format!("{} - {}", self.match_wins, self.match_losses)
    }
}
