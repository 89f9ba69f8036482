use thiserror::Error;

/// Faults raised while fetching or reading a documentation page.
///
/// A page that loads but doesn't contain the expected markup is not a fault;
/// the extractor reports that as an empty result instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The server answered 404 or 410. Component-scoped operations treat this
    /// as "nothing documented" rather than a failure.
    #[error("Page not found: {url}")]
    NotFound { url: String },

    #[error("Failed to fetch URL: HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to fetch URL {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to parse selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

impl ScrapeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
