use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use crate::client::CdlClient;
use crate::error::Result;
use crate::merge::merge_standings;
use crate::model::{Match, Schedule, ScoreStripMatch, Standings};
use crate::queries;

/// The latest state a [`Feed`] has published.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot<T> {
    pub data: T,
    /// When `data` was last replaced by a successful refresh.
    pub updated_at: Option<DateTime<Utc>>,
    /// The error from the most recent failed refresh, cleared on success.
    pub last_error: Option<String>,
    #[serde(skip)]
    ticket: u64,
}

impl<T> Snapshot<T> {
    /// True until the first successful refresh.
    pub fn is_empty(&self) -> bool {
        self.updated_at.is_none()
    }
}

/// Observable state owned by one fetcher.
///
/// A failed refresh leaves `data` untouched and only records the error. Each
/// refresh takes a ticket when it starts, and a response, successful or not,
/// is dropped if a refresh that started later has already published.
#[derive(Debug)]
pub struct Feed<T> {
    tx: watch::Sender<Snapshot<T>>,
    issued: AtomicU64,
}

impl<T: Default> Default for Feed<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Feed<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(Snapshot {
            data: initial,
            updated_at: None,
            last_error: None,
            ticket: 0,
        });
        Self {
            tx,
            issued: AtomicU64::new(0),
        }
    }

    /// Borrow the current snapshot. Do not hold the guard across an `.await`.
    pub fn borrow(&self) -> watch::Ref<'_, Snapshot<T>> {
        self.tx.borrow()
    }

    /// Receive a notification every time this feed changes.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.tx.subscribe()
    }

    /// Run `fetch` and publish its result.
    ///
    /// The outcome is also returned so callers can surface errors instead of
    /// keeping the stale data silently.
    pub async fn refresh<F>(&self, what: &'static str, fetch: F) -> Result<()>
    where
        F: Future<Output = Result<T>>,
    {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        match fetch.await {
            Ok(data) => {
                if !self.publish(ticket, data) {
                    debug!(what, ticket, "dropping response superseded by a newer refresh");
                }
                Ok(())
            }
            Err(e) => {
                warn!(what, error = %e, "refresh failed, keeping previous data");
                if !self.record_error(ticket, e.to_string()) {
                    debug!(what, ticket, "dropping error superseded by a newer refresh");
                }
                Err(e)
            }
        }
    }

    fn record_error(&self, ticket: u64, message: String) -> bool {
        self.tx.send_if_modified(|snapshot| {
            if ticket < snapshot.ticket {
                return false;
            }
            snapshot.last_error = Some(message);
            true
        })
    }

    fn publish(&self, ticket: u64, data: T) -> bool {
        self.tx.send_if_modified(|snapshot| {
            if ticket < snapshot.ticket {
                return false;
            }
            snapshot.data = data;
            snapshot.ticket = ticket;
            snapshot.updated_at = Some(Utc::now());
            snapshot.last_error = None;
            true
        })
    }
}

impl<T: Clone> Feed<T> {
    pub fn data(&self) -> T {
        self.tx.borrow().data.clone()
    }
}

/// Everything the presentation layer reads: one feed per fetcher plus the
/// derived views over them.
///
/// Each feed refreshes on its own. Reads like [`League::standings`] combine
/// whatever each feed last published, so stats and rosters may come from
/// different refresh cycles.
#[derive(Debug, Default)]
pub struct League {
    client: CdlClient,
    rosters: Feed<Standings>,
    standings: Feed<Standings>,
    schedule: Feed<Schedule>,
    score_strip: Feed<Vec<ScoreStripMatch>>,
    feed_standings: Feed<Standings>,
}

impl League {
    pub fn new(client: CdlClient) -> Self {
        Self {
            client,
            ..Default::default()
        }
    }

    pub fn client(&self) -> &CdlClient {
        &self.client
    }

    #[instrument(skip(self))]
    pub async fn refresh_rosters(&self) -> Result<()> {
        self.rosters
            .refresh("rosters", self.client.get_rosters())
            .await
    }

    #[instrument(skip(self))]
    pub async fn refresh_standings(&self) -> Result<()> {
        self.standings
            .refresh("standings", self.client.get_standings())
            .await
    }

    #[instrument(skip(self))]
    pub async fn refresh_schedule(&self) -> Result<()> {
        self.schedule
            .refresh("schedule", self.client.get_schedule())
            .await
    }

    #[instrument(skip(self))]
    pub async fn refresh_score_strip(&self) -> Result<()> {
        self.score_strip
            .refresh("score strip", self.client.get_score_strip())
            .await
    }

    #[instrument(skip(self))]
    pub async fn refresh_feed(&self) -> Result<()> {
        self.feed_standings
            .refresh("standings feed", self.client.get_feed_standings())
            .await
    }

    /// Refresh rosters, standings and schedule concurrently. Each feed keeps
    /// its own outcome; the first error, if any, is returned.
    pub async fn refresh_all(&self) -> Result<()> {
        let (rosters, standings, schedule) = tokio::join!(
            self.refresh_rosters(),
            self.refresh_standings(),
            self.refresh_schedule()
        );
        rosters.and(standings).and(schedule)
    }

    pub fn rosters(&self) -> &Feed<Standings> {
        &self.rosters
    }

    pub fn raw_standings(&self) -> &Feed<Standings> {
        &self.standings
    }

    pub fn schedule(&self) -> &Feed<Schedule> {
        &self.schedule
    }

    pub fn score_strip(&self) -> &Feed<Vec<ScoreStripMatch>> {
        &self.score_strip
    }

    pub fn feed_standings(&self) -> &Feed<Standings> {
        &self.feed_standings
    }

    /// Standings joined with rosters, recomputed on every call.
    pub fn standings(&self) -> Standings {
        let standings = self.standings.borrow();
        let rosters = self.rosters.borrow();
        merge_standings(&standings.data, &rosters.data)
    }

    /// The whole schedule, newest first.
    pub fn matches(&self) -> Schedule {
        self.schedule.data()
    }

    pub fn matches_for_team(&self, team: &str) -> Vec<Match> {
        let schedule = self.schedule.borrow();
        cloned(queries::matches_for_team(&schedule.data, team))
    }

    pub fn completed_matches_for_team(&self, team: &str) -> Vec<Match> {
        let schedule = self.schedule.borrow();
        cloned(queries::completed_matches_for_team(&schedule.data, team))
    }

    pub fn upcoming_matches_for_team(&self, team: &str) -> Vec<Match> {
        let schedule = self.schedule.borrow();
        cloned(queries::upcoming_matches_for_team(&schedule.data, team))
    }

    /// A team's `"W - L"` match record from the current standings.
    pub fn team_record(&self, team: &str) -> Option<String> {
        self.standings
            .borrow()
            .data
            .iter()
            .find(|t| t.name == team)
            .map(|t| t.record())
    }
}

fn cloned(matches: Vec<&Match>) -> Vec<Match> {
    matches.into_iter().cloned().collect()
}
