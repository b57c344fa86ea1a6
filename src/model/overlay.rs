use serde::{Deserialize, Serialize};

use super::theme::TeamTheme;

/// Static attributes of a lock-screen score overlay, fixed when it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOverlay {
    /// e.g. "Major 1 Grand Finals"
    pub match_name: String,
    pub team1_name: String,
    pub team2_name: String,
}

impl ScoreOverlay {
    pub fn themes(&self) -> (TeamTheme, TeamTheme) {
        (
            TeamTheme::for_team(&self.team1_name),
            TeamTheme::for_team(&self.team2_name),
        )
    }
}

/// The changing part of a score overlay.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlayState {
    pub team1_score: i32,
    pub team2_score: i32,
    pub map_name: String,
}

/// A started overlay and its most recent state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveOverlay {
    pub id: u64,
    pub overlay: ScoreOverlay,
    pub state: OverlayState,
}
