use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while fetching and decoding CDL data.
#[derive(thiserror::Error, Debug)]
pub enum CdlError {
    /// A CDL page or the standings feed could not be requested.
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// The site answered, but not with a 2xx (maintenance pages, rate limits).
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The page body was cut off or was not text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The `__NEXT_DATA__` selector was rejected by the HTML parser.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// The page has no embedded page-state script, or it is empty.
    #[error("page has no {context}")]
    ElementNotFound { context: &'static str },

    /// The embedded page state or the feed body is not valid JSON.
    #[error("failed to decode json: {0}")]
    Json(#[from] serde_json::Error),

    /// A structural step through the page state found nothing.
    #[error("page state is missing {step}")]
    Schema { step: &'static str },
}

impl<'a> From<SelectorErrorKind<'a>> for CdlError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        CdlError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CdlError>;
