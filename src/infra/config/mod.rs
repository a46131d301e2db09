use anyhow::{Context, Error as AnyhowError, Result};
use derive_getters::Getters;
use reqwest::{Client, ClientBuilder};
use tracing::info;
use url::Url;

const SITE_BASE_URL: &str = "http://www.digitalwhisper.co.il";
const SITE_INDEX_URL: &str = "https://digitalwhisper.co.il/issues";
const ISSUE_LINK_HOST: &str = "www.digitalwhisper.co.il";
const FILE_PREFIX: &str = "DigitalWhisper";

/// Where issues live on the web.
///
/// The defaults are the only values the CLI uses.
#[derive(Debug, Clone, Getters)]
pub struct SiteConfig {
    /// Scheme and host the PDF paths are appended to.
    base_url: String,
    /// Page listing the published issues.
    index_url: String,
    /// Host as it appears in issue links on the index page, without scheme.
    issue_link_host: String,
    /// File name prefix of every issue PDF.
    file_prefix: String,
}

impl SiteConfig {
    pub fn new(
        base_url: impl Into<String>,
        index_url: impl Into<String>,
        issue_link_host: impl Into<String>,
        file_prefix: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            index_url: index_url.into(),
            issue_link_host: issue_link_host.into(),
            file_prefix: file_prefix.into(),
        }
    }

    /// Parsed index page url.
    pub fn index_page(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.index_url)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: SITE_BASE_URL.into(),
            index_url: SITE_INDEX_URL.into(),
            issue_link_host: ISSUE_LINK_HOST.into(),
            file_prefix: FILE_PREFIX.into(),
        }
    }
}

#[derive(Debug, Clone, Getters)]
pub struct HttpConfig {
    user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")) }
    }
}

impl TryFrom<HttpConfig> for Client {
    type Error = AnyhowError;

    /// Tries to convert an `HttpConfig` into a `reqwest::Client`.
    ///
    /// Timeouts and redirects stay at reqwest defaults.
    fn try_from(http_config: HttpConfig) -> Result<Self, Self::Error> {
        info!(user_agent = %http_config.user_agent, "Initialized client builder.");
        let client = ClientBuilder::new()
            .user_agent(http_config.user_agent)
            .build()
            .context("Can't create http client due to misconfiguration.")?;
        info!("Built HTTP client.");
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_site_points_at_digital_whisper() {
        let site = SiteConfig::default();
        assert_eq!(site.base_url(), "http://www.digitalwhisper.co.il");
        assert_eq!(site.index_url(), "https://digitalwhisper.co.il/issues");
        assert_eq!(site.issue_link_host(), "www.digitalwhisper.co.il");
        assert_eq!(site.file_prefix(), "DigitalWhisper");
    }

    #[test]
    fn user_agent_names_the_tool() {
        let config = HttpConfig::default();
        assert!(config.user_agent().starts_with("whisperer/"));
        assert!(Client::try_from(config).is_ok());
    }
}
