//! Scrape Call of Duty League standings, rosters and schedules.
//!
//! [`CdlClient`] performs one fetch-and-decode cycle per call. [`League`]
//! keeps the latest result of each fetcher in an observable [`Feed`] and
//! exposes the merged standings and per-team schedule queries on top.

pub use client::{CdlClient, Endpoints};
pub use error::{CdlError, Result};
pub use league::{Feed, League, Snapshot};
pub use merge::merge_standings;
pub use model::*;
pub use overlay::OverlayRegistry;
pub use queries::{
    completed_matches_for_team, group_by_day, matches_for_team, upcoming_matches_for_team,
};

pub(crate) mod cdl_scraper;
pub mod client;
mod error;
pub mod league;
pub mod merge;
pub mod model;
pub mod overlay;
pub mod queries;
