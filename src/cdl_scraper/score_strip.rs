use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::cdl_scraper::next_data::{self, Navigate};
use crate::cdl_scraper::{self, extract_next_data};
use crate::error::{CdlError, Result};
use crate::model::{Competitor, ScoreStripMatch};

/// Start times above this are epoch milliseconds rather than seconds.
const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StripEntry {
    status: Option<String>,
    link: Option<String>,
    date: Option<StripDate>,
    competitors: Option<Vec<StripCompetitor>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StripDate {
    start_time: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StripCompetitor {
    long_name: Option<String>,
    score: Option<i32>,
}

/// Fetch the score strip from the schedule page header.
#[instrument(skip(client))]
pub(crate) async fn get_score_strip(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<ScoreStripMatch>> {
    let html = cdl_scraper::get_page(client, url).await?;
    let strip = parse_score_strip(&html)?;
    debug!(count = strip.len(), "parsed score strip");
    Ok(strip)
}

pub(crate) fn parse_score_strip(html: &str) -> Result<Vec<ScoreStripMatch>> {
    let raw = extract_next_data(html)?;
    let tree = next_data::parse_page_state(&raw)?;
    let entries = next_data::page_props(&tree)?
        .find_child("blocks", "cdlHeader")
        .and_then(|header| header.get("scoreStripList"))
        .and_then(|list| list.get("scoreStrip"))
        .and_then(|strip| strip.list("matches"))
        .ok_or(CdlError::Schema { step: "score strip" })?;

    let entries: Vec<StripEntry> = next_data::project(entries, "score strip match");
    Ok(entries.into_iter().map(to_strip_match).collect())
}

fn to_strip_match(entry: StripEntry) -> ScoreStripMatch {
    ScoreStripMatch {
        status: entry.status.unwrap_or_default(),
        link: entry.link.unwrap_or_default(),
        start_time: entry.date.and_then(|d| d.start_time).and_then(from_epoch),
        competitors: entry
            .competitors
            .unwrap_or_default()
            .into_iter()
            .map(|c| Competitor {
                long_name: c.long_name.unwrap_or_default(),
                score: c.score,
            })
            .collect(),
    }
}

fn from_epoch(value: i64) -> Option<DateTime<Utc>> {
    if value > MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::cdl_scraper::fixtures;

    fn header_page(matches: serde_json::Value) -> String {
        let state = json!({
            "props": { "pageProps": { "blocks": [
                { "cdl_header": { "score_strip_list": { "score_strip": { "matches": matches } } } }
            ] } }
        });
        fixtures::page_with(&state.to_string())
    }

    #[test]
    fn test_parse_score_strip() {
        let html = header_page(json!([
            {
                "status": "LIVE",
                "link": "/en-us/match/9001",
                "date": { "start_time": 1_700_000_000_000_i64 },
                "competitors": [
                    { "long_name": "OpTic Texas", "score": 2 },
                    { "long_name": "FaZe Vegas", "score": 1 }
                ]
            },
            {
                "status": "UPCOMING",
                "date": { "start_time": 1_800_000_000 },
                "competitors": [ { "long_name": "Toronto KOI" }, {} ]
            }
        ]));

        let strip = parse_score_strip(&html).unwrap();
        assert_eq!(strip.len(), 2);

        let live = &strip[0];
        assert_eq!(live.status, "LIVE");
        assert_eq!(live.link, "/en-us/match/9001");
        assert_eq!(live.start_time.unwrap().timestamp(), 1_700_000_000);
        assert_eq!(live.competitors[0].long_name, "OpTic Texas");
        assert_eq!(live.competitors[1].score, Some(1));

        let upcoming = &strip[1];
        assert_eq!(upcoming.link, "");
        assert_eq!(upcoming.start_time.unwrap().timestamp(), 1_800_000_000);
        assert_eq!(upcoming.competitors[0].score, None);
        assert_eq!(upcoming.competitors[1].long_name, "");
    }

    #[test]
    fn test_missing_header() {
        let html = fixtures::page_with(r#"{"props":{"pageProps":{"blocks":[]}}}"#);
        let err = parse_score_strip(&html).unwrap_err();
        assert!(matches!(err, CdlError::Schema { step: "score strip" }));
    }
}
