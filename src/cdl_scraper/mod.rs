pub(crate) mod feed;
pub(crate) mod next_data;
pub(crate) mod roster;
pub(crate) mod schedule;
pub(crate) mod score_strip;
pub(crate) mod standings;

use ::scraper::{Html, Selector};
use tracing::debug;

use crate::error::{CdlError, Result};

/// Selector for the page-state script tag the site's server renderer embeds.
const NEXT_DATA_SELECTOR: &str = "script#__NEXT_DATA__";

/// Fetch a URL and return the response body as text.
pub(crate) async fn get_page(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| CdlError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CdlError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| CdlError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}

/// Return the raw JSON text of the first `script#__NEXT_DATA__` element.
pub(crate) fn extract_next_data(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(NEXT_DATA_SELECTOR)?;
    let text: String = document
        .select(&selector)
        .next()
        .ok_or(CdlError::ElementNotFound {
            context: "__NEXT_DATA__ script",
        })?
        .text()
        .collect();

    let text = text.trim();
    if text.is_empty() {
        return Err(CdlError::ElementNotFound {
            context: "__NEXT_DATA__ script content",
        });
    }
    Ok(text.to_string())
}
