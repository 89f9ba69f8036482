//! Fetching and extracting component documentation.

pub mod error;
pub mod fetch;
pub mod parse;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{is_dot_segment, DocsConfig};
pub use error::{ScrapeError, ScrapeResult};
pub use fetch::{HtmlFetcher, HttpHtmlFetcher};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentReference {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub code: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEvent {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Props and events documented for a component.
///
/// Never constructed with both lists empty: such a page is reported as having
/// no API documentation at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentApi {
    pub props: Vec<ApiProperty>,
    pub events: Vec<ApiEvent>,
}

/// Entry point for the three documentation queries.
pub struct ComponentDocs {
    config: DocsConfig,
    html_fetcher: Box<dyn HtmlFetcher>,
}

impl ComponentDocs {
    pub fn new(config: DocsConfig, html_fetcher: Box<dyn HtmlFetcher>) -> Self {
        Self {
            config,
            html_fetcher,
        }
    }

    /// Uses the production HTTP fetcher.
    pub fn from_config(config: DocsConfig) -> Self {
        Self::new(config, Box::new(HttpHtmlFetcher::new()))
    }

    /// Lists every component linked from the introduction page.
    ///
    /// An empty list means the page loaded but its navigation no longer
    /// matches the expected markup.
    ///
    /// # Errors
    ///
    /// Any fetch fault, including a missing introduction page.
    pub fn list_components(&self) -> ScrapeResult<Vec<ComponentReference>> {
        let url = self
            .config
            .introduction_url()
            .map_err(|e| ScrapeError::InvalidUrl {
                url: self.config.docs_root().to_string(),
                message: e.to_string(),
            })?;
        info!("Listing components from {}", url);

        let html = self.html_fetcher.fetch_html(url.as_str())?;
        parse::parse_component_list(&html, &self.config)
    }

    /// Code examples from a component's page, in document order. A component
    /// without a page has no examples.
    ///
    /// # Errors
    ///
    /// Fetch faults other than a missing page.
    pub fn get_examples(&self, component: &str) -> ScrapeResult<Vec<CodeExample>> {
        match self.fetch_component_page(component)? {
            Some(html) => parse::parse_examples(&html),
            None => Ok(Vec::new()),
        }
    }

    /// Props and events tables from a component's page, or `None` when the
    /// page doesn't exist or documents neither.
    ///
    /// # Errors
    ///
    /// Fetch faults other than a missing page.
    pub fn get_api(&self, component: &str) -> ScrapeResult<Option<ComponentApi>> {
        match self.fetch_component_page(component)? {
            Some(html) => parse::parse_api(&html),
            None => Ok(None),
        }
    }

    /// Fetches `{docs_root}/components/{id}`, mapping a missing page to `None`.
    fn fetch_component_page(&self, component: &str) -> ScrapeResult<Option<String>> {
        let component_id = component.trim().to_lowercase();
        if is_dot_segment(&component_id) {
            info!("No documentation page for component '{}'", component);
            return Ok(None);
        }

        let url = self
            .config
            .component_url(&component_id)
            .map_err(|e| ScrapeError::InvalidUrl {
                url: component_id.clone(),
                message: e.to_string(),
            })?;
        debug!("Component '{}' resolves to {}", component, url);

        match self.html_fetcher.fetch_html(url.as_str()) {
            Ok(html) => Ok(Some(html)),
            Err(e) if e.is_not_found() => {
                info!("No documentation page for component '{}'", component);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for ComponentDocs {
    fn default() -> Self {
        Self::from_config(DocsConfig::default())
    }
}
