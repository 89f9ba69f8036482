use reqwest::{blocking::Client, StatusCode};
use tracing::{debug, error};

use super::error::{ScrapeError, ScrapeResult};

/// Trait for fetching HTML content from a URL
pub trait HtmlFetcher: Send + Sync {
    /// Fetches HTML content from a URL.
    ///
    /// Implementations must report a missing page as [`ScrapeError::NotFound`]
    /// so callers can tell it apart from other transport faults.
    fn fetch_html(&self, url: &str) -> ScrapeResult<String>;
}

/// Production implementation of HtmlFetcher backed by a blocking reqwest client
#[derive(Default)]
pub struct HttpHtmlFetcher {
    client: Client,
}

impl HttpHtmlFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl HtmlFetcher for HttpHtmlFetcher {
    fn fetch_html(&self, url: &str) -> ScrapeResult<String> {
        debug!("Fetching HTML from URL: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| ScrapeError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if matches!(status, StatusCode::NOT_FOUND | StatusCode::GONE) {
            debug!("Page does not exist: {}", url);
            return Err(ScrapeError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            error!("HTTP error response: {} for URL: {}", status, url);
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().map_err(|source| ScrapeError::Transport {
            url: url.to_string(),
            source,
        })?;

        debug!("Successfully fetched HTML ({} bytes)", html.len());
        Ok(html)
    }
}

/// Serves HTML from a fixed set of URL suffixes. Anything else is a 404.
#[cfg(test)]
#[derive(Default)]
pub struct FixtureFetcher {
    pages: Vec<(String, Result<String, u16>)>,
}

#[cfg(test)]
impl FixtureFetcher {
    pub fn page(mut self, url_suffix: &str, html: &str) -> Self {
        self.pages.push((url_suffix.to_string(), Ok(html.to_string())));
        self
    }

    pub fn status(mut self, url_suffix: &str, status: u16) -> Self {
        self.pages.push((url_suffix.to_string(), Err(status)));
        self
    }
}

#[cfg(test)]
impl HtmlFetcher for FixtureFetcher {
    fn fetch_html(&self, url: &str) -> ScrapeResult<String> {
        debug!("FixtureFetcher: Fetching HTML from URL: {}", url);
        match self.pages.iter().find(|(suffix, _)| url.ends_with(suffix.as_str())) {
            Some((_, Ok(html))) => Ok(html.clone()),
            Some((_, Err(status))) => Err(ScrapeError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(ScrapeError::NotFound {
                url: url.to_string(),
            }),
        }
    }
}
