use tracing::instrument;

use crate::cdl_scraper;
use crate::error::Result;
use crate::model::*;

pub const ROSTER_URL: &str = "https://www.breakingpoint.gg/cdl/teams-and-players";
pub const STANDINGS_URL: &str = "https://callofdutyleague.com/en-us/standings";
pub const SCHEDULE_URL: &str = "https://callofdutyleague.com/en-us/schedule";
pub const FEED_URL: &str =
    "https://gist.githubusercontent.com/Devan-Desai/533a3630ffc404a541db9c38d1340c7f/raw/cdl_data.json";

/// The pages and feeds a [`CdlClient`] reads from.
///
/// `Default` points at the public league sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub roster: String,
    pub standings: String,
    pub schedule: String,
    pub feed: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            roster: ROSTER_URL.to_string(),
            standings: STANDINGS_URL.to_string(),
            schedule: SCHEDULE_URL.to_string(),
            feed: FEED_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Every endpoint rooted at `base`, using the same paths as the defaults.
    ///
    /// Handy for pointing the client at a mirror or a local test server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            roster: format!("{base}/cdl/teams-and-players"),
            standings: format!("{base}/en-us/standings"),
            schedule: format!("{base}/en-us/schedule"),
            feed: format!("{base}/raw/cdl_data.json"),
        }
    }
}

/// The main entry point for fetching CDL data.
///
/// `CdlClient` wraps a [`reqwest::Client`] and exposes one method per
/// fetch-and-decode cycle. Each call is an independent request; nothing is
/// cached between calls.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> cdl_scraper::Result<()> {
/// use cdl_scraper::CdlClient;
///
/// let client = CdlClient::new();
/// let standings = client.get_standings().await?;
/// println!("Found {} teams", standings.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CdlClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl CdlClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints: Endpoints::default(),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            endpoints: Endpoints::default(),
        }
    }

    /// Replace the endpoints this client reads from.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch every team with its roster. Stats are zero and `rank` is the
    /// team's position on the page.
    #[instrument(skip(self))]
    pub async fn get_rosters(&self) -> Result<Standings> {
        cdl_scraper::roster::get_rosters(&self.http, &self.endpoints.roster).await
    }

    /// Fetch the league standings. Rosters are empty.
    #[instrument(skip(self))]
    pub async fn get_standings(&self) -> Result<Standings> {
        cdl_scraper::standings::get_standings(&self.http, &self.endpoints.standings).await
    }

    /// Fetch the full season schedule, deduplicated and sorted newest first.
    #[instrument(skip(self))]
    pub async fn get_schedule(&self) -> Result<Schedule> {
        cdl_scraper::schedule::get_schedule(&self.http, &self.endpoints.schedule).await
    }

    /// Fetch the live score strip from the schedule page header.
    #[instrument(skip(self))]
    pub async fn get_score_strip(&self) -> Result<Vec<ScoreStripMatch>> {
        cdl_scraper::score_strip::get_score_strip(&self.http, &self.endpoints.schedule).await
    }

    /// Fetch the pre-built standings feed.
    #[instrument(skip(self))]
    pub async fn get_feed_standings(&self) -> Result<Standings> {
        cdl_scraper::feed::get_feed_standings(&self.http, &self.endpoints.feed).await
    }
}

impl Default for CdlClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_with_base() {
        let endpoints = Endpoints::with_base("http://127.0.0.1:1234/");
        assert_eq!(endpoints.standings, "http://127.0.0.1:1234/en-us/standings");
        assert_eq!(endpoints.roster, "http://127.0.0.1:1234/cdl/teams-and-players");
    }

    #[test]
    fn test_default_endpoints() {
        let client = CdlClient::default();
        assert_eq!(client.endpoints().schedule, SCHEDULE_URL);
        assert_eq!(client.endpoints().feed, FEED_URL);
    }
}
