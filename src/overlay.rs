use tracing::{debug, info};

use crate::model::{ActiveOverlay, OverlayState, ScoreOverlay};

/// In-memory registry of manually started score overlays.
///
/// Rendering lives outside the crate; this only tracks what is showing.
#[derive(Debug, Default)]
pub struct OverlayRegistry {
    active: Vec<ActiveOverlay>,
    next_id: u64,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new overlay and return its id.
    pub fn start(&mut self, overlay: ScoreOverlay, state: OverlayState) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        info!(
            id,
            team1 = %overlay.team1_name,
            team2 = %overlay.team2_name,
            "score overlay started"
        );
        self.active.push(ActiveOverlay { id, overlay, state });
        id
    }

    /// Push a new state to every active overlay. Returns how many were updated.
    pub fn update(&mut self, state: OverlayState) -> usize {
        for active in &mut self.active {
            active.state = state.clone();
        }
        debug!(
            count = self.active.len(),
            team1_score = state.team1_score,
            team2_score = state.team2_score,
            "score overlays updated"
        );
        self.active.len()
    }

    /// End every active overlay. Returns how many were ended.
    pub fn end_all(&mut self) -> usize {
        let ended = self.active.len();
        self.active.clear();
        info!(count = ended, "score overlays ended");
        ended
    }

    pub fn active(&self) -> &[ActiveOverlay] {
        &self.active
    }

    pub fn get(&self, id: u64) -> Option<&ActiveOverlay> {
        self.active.iter().find(|a| a.id == id)
    }
}
