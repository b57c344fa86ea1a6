use chrono::Utc;
use tracing::{debug, instrument};

use crate::cdl_scraper;
use crate::error::Result;
use crate::model::TeamStanding;

/// Fetch the pre-built standings feed. Every request carries a fresh `v`
/// cache-busting query token.
#[instrument(skip(client))]
pub(crate) async fn get_feed_standings(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<TeamStanding>> {
    let url = with_cache_buster(url, &cache_token());
    let body = cdl_scraper::get_page(client, &url).await?;
    let standings = parse_feed(&body)?;
    debug!(count = standings.len(), "parsed standings feed");
    Ok(standings)
}

pub(crate) fn parse_feed(body: &str) -> Result<Vec<TeamStanding>> {
    Ok(serde_json::from_str(body)?)
}

fn cache_token() -> String {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros())
        .to_string()
}

fn with_cache_buster(url: &str, token: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}v={token}")
}
