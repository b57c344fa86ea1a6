use chrono::{DateTime, Utc};
use serde::Serialize;

/// The full season schedule, newest first.
pub type Schedule = Vec<Match>;

/// Which half of the season schedule a match is listed under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum ScheduleSection {
    Completed,
    Upcoming,
}

/// Which side of a match a team played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Team1,
    Team2,
}

/// A single series between two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: String,
    pub team1_name: String,
    pub team2_name: String,
    pub team1_logo: String,
    pub team2_logo: String,
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
    pub date: DateTime<Utc>,
    pub is_completed: bool,
    pub match_title: Option<String>,
}

impl Match {
    pub fn involves(&self, team: &str) -> bool {
        self.team1_name == team || self.team2_name == team
    }

    pub fn section(&self) -> ScheduleSection {
        if self.is_completed {
            ScheduleSection::Completed
        } else {
            ScheduleSection::Upcoming
        }
    }

    /// The winning side, known only for completed matches carrying both scores.
    /// Ties go to team 2.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_completed {
            return None;
        }
        let (team1, team2) = (self.team1_score?, self.team2_score?);
        Some(if team1 > team2 { Side::Team1 } else { Side::Team2 })
    }

    /// Whether `team` won this match; `None` when there is no result yet.
    pub fn is_winner(&self, team: &str) -> Option<bool> {
        let (team1, team2) = (self.team1_score?, self.team2_score?);
        if !self.is_completed {
            return None;
        }
        if team == self.team1_name {
            Some(team1 > team2)
        } else {
            Some(team2 > team1)
        }
    }

    /// e.g. `Jan 5, 2026 at 3:00 PM`
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y at %-I:%M %p").to_string()
    }

    /// e.g. `Jan 5, 3:00 PM`
    pub fn short_display_date(&self) -> String {
        self.date.format("%b %-d, %-I:%M %p").to_string()
    }

    /// e.g. `3:00 PM`
    pub fn time_display(&self) -> String {
        self.date.format("%-I:%M %p").to_string()
    }
}

/// A tile from the live score strip shown in the schedule page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreStripMatch {
    pub status: String,
    pub link: String,
    pub start_time: Option<DateTime<Utc>>,
    pub competitors: Vec<Competitor>,
}

/// One side of a score strip tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Competitor {
    pub long_name: String,
    pub score: Option<i32>,
}
