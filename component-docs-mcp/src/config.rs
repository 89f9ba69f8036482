use anyhow::{anyhow, Context, Result};
use url::Url;

/// Origin used when `COMPONENT_DOCS_ORIGIN` is not set.
pub const DEFAULT_ORIGIN: &str = "https://heroui.com";

/// Path prefix of the documentation tree when `COMPONENT_DOCS_ROOT` is not set.
pub const DEFAULT_DOCS_ROOT: &str = "/docs";

/// Where the documentation site lives.
///
/// Every URL the extractor requests or accepts is derived from these two
/// values, so tests can point the whole server at a mock origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsConfig {
    origin: Url,
    docs_root: String,
}

impl DocsConfig {
    /// Builds a config from an origin such as `https://heroui.com` and a docs
    /// root such as `/docs` (an empty root means the site itself is the docs).
    ///
    /// # Errors
    ///
    /// Fails when `origin` is not an absolute http(s) URL.
    pub fn new(origin: &str, docs_root: &str) -> Result<Self> {
        let origin = Url::parse(origin).context(format!("Invalid docs origin: {origin}"))?;
        if !matches!(origin.scheme(), "http" | "https") || origin.cannot_be_a_base() {
            return Err(anyhow!("Docs origin must be an http(s) URL: {}", origin));
        }

        let trimmed = docs_root.trim().trim_matches('/');
        let docs_root = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };

        Ok(Self { origin, docs_root })
    }

    /// Reads `COMPONENT_DOCS_ORIGIN` and `COMPONENT_DOCS_ROOT`, falling back to
    /// the defaults for whichever is unset.
    ///
    /// # Errors
    ///
    /// Fails when the resulting origin is rejected by [`DocsConfig::new`].
    pub fn from_env() -> Result<Self> {
        let origin =
            std::env::var("COMPONENT_DOCS_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
        let docs_root =
            std::env::var("COMPONENT_DOCS_ROOT").unwrap_or_else(|_| DEFAULT_DOCS_ROOT.to_string());
        Self::new(&origin, &docs_root)
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    pub fn docs_root(&self) -> &str {
        &self.docs_root
    }

    /// Path every component page lives under, with a trailing slash.
    pub fn components_prefix(&self) -> String {
        format!("{}/components/", self.docs_root)
    }

    /// Page whose navigation lists every component.
    ///
    /// # Errors
    ///
    /// Fails when the docs root cannot be joined onto the origin.
    pub fn introduction_url(&self) -> Result<Url, url::ParseError> {
        self.origin
            .join(&format!("{}/guide/introduction", self.docs_root))
    }

    /// Page for a single component. The identifier is appended as one
    /// percent-encoded path segment.
    ///
    /// # Errors
    ///
    /// Fails for `.` and `..`, which `url` would drop instead of encoding and
    /// so resolve to the components index, and when the prefix cannot be
    /// joined onto the origin.
    pub fn component_url(&self, component_id: &str) -> Result<Url> {
        if is_dot_segment(component_id) {
            return Err(anyhow!("Invalid component identifier: '{component_id}'"));
        }

        let mut url = self.origin.join(&self.components_prefix())?;
        url.path_segments_mut()
            .map_err(|()| anyhow!("Docs origin cannot be a base: {}", self.origin))?
            .pop_if_empty()
            .push(component_id);
        Ok(url)
    }
}

/// `.` and `..` have no encoded form that survives URL normalization.
pub fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            origin: Url::parse(DEFAULT_ORIGIN).expect("DEFAULT_ORIGIN is a valid URL"),
            docs_root: DEFAULT_DOCS_ROOT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_urls() -> Result<()> {
        let config = DocsConfig::default();
        assert_eq!(
            config.introduction_url()?.as_str(),
            "https://heroui.com/docs/guide/introduction"
        );
        assert_eq!(
            config.component_url("button")?.as_str(),
            "https://heroui.com/docs/components/button"
        );
        assert_eq!(config.components_prefix(), "/docs/components/");
        Ok(())
    }

    #[test]
    fn test_docs_root_is_normalized() -> Result<()> {
        let config = DocsConfig::new("http://127.0.0.1:8080", "docs/")?;
        assert_eq!(config.docs_root(), "/docs");

        let config = DocsConfig::new("http://127.0.0.1:8080", "")?;
        assert_eq!(config.docs_root(), "");
        assert_eq!(
            config.component_url("switch")?.as_str(),
            "http://127.0.0.1:8080/components/switch"
        );
        Ok(())
    }

    #[test]
    fn test_component_id_cannot_escape_components_root() -> Result<()> {
        let config = DocsConfig::default();

        let url = config.component_url("../../etc/passwd")?;
        assert!(
            url.path().starts_with("/docs/components/"),
            "Unexpected path: {}",
            url.path()
        );

        let url = config.component_url("a b/c")?;
        assert_eq!(url.as_str(), "https://heroui.com/docs/components/a%20b%2Fc");
        Ok(())
    }

    #[test]
    fn test_dot_identifiers_are_rejected() -> Result<()> {
        let config = DocsConfig::default();
        assert!(config.component_url(".").is_err());
        assert!(config.component_url("..").is_err());

        // only exact dot segments are special
        assert_eq!(
            config.component_url("...")?.as_str(),
            "https://heroui.com/docs/components/..."
        );
        Ok(())
    }

    #[test]
    fn test_rejects_non_http_origin() {
        assert!(DocsConfig::new("file:///tmp", "/docs").is_err());
        assert!(DocsConfig::new("not a url", "/docs").is_err());
    }
}
