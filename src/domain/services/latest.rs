//! Discovery of the most recently published issue.

use colored::Colorize;
use regex::Regex;
use tracing::{debug, info, instrument};

use crate::domain::models::IssueId;
use crate::domain::ports::IssueSource;
use crate::infra::config::SiteConfig;
use crate::shared::{errors::WhispererError, progress_tracker::SilentTracker};

/// Scrapes the index page for the latest issue id and remembers it once found.
pub struct LatestIssueResolver<'a, S: IssueSource> {
    source: &'a S,
    site: &'a SiteConfig,
    cached: Option<IssueId>,
}

impl<'a, S: IssueSource> LatestIssueResolver<'a, S> {
    pub fn new(source: &'a S, site: &'a SiteConfig) -> Self {
        Self { source, site, cached: None }
    }

    /// Memoized value, `None` until a resolution succeeded.
    pub fn cached(&self) -> Option<IssueId> {
        self.cached
    }

    /// Latest issue id, fetching the index page only until it has been found once.
    ///
    /// Returns `Ok(None)` when the page has no issue link; that outcome is not cached.
    #[instrument(name = "resolve_latest_issue", skip(self))]
    pub async fn latest(&mut self) -> Result<Option<IssueId>, WhispererError> {
        if let Some(latest) = self.cached {
            debug!(%latest, "Using cached latest issue id.");
            return Ok(Some(latest));
        }
        println!("Fetching latest issue ID...");
        let index = self.site.index_page()?;
        let page = self.source.fetch(&index, &SilentTracker).await?;
        let body = String::from_utf8_lossy(&page.body);

        match find_issue_link(&body, self.site.issue_link_host())? {
            Some(latest) => {
                info!(%latest, "Resolved latest issue id.");
                self.cached = Some(latest);
            }
            None => {
                debug!(url = %index, "No issue link on index page.");
                eprintln!("{}", "Error: Can't find last issue ID".red());
            }
        }
        Ok(self.cached)
    }
}

/// First `<host>/issue<digits>` occurrence in a page.
fn find_issue_link(page: &str, host: &str) -> Result<Option<IssueId>, WhispererError> {
    let pattern = format!(r"{}/issue([0-9]+)", regex::escape(host));
    let regex_obj = Regex::new(&pattern)
        .map_err(|err| WhispererError::Fatal(format!("Can't compile issue link pattern: {err}")))?;
    Ok(regex_obj
        .captures(page)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
        .map(IssueId))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::testing::FakeSource;

    const INDEX_PAGE: &str = r#"<html><body>
        <a href="http://www.digitalwhisper.co.il/issue172">Latest</a>
        <a href="http://www.digitalwhisper.co.il/issue171">Previous</a>
        </body></html>"#;

    #[test]
    fn first_issue_link_wins() {
        let found = find_issue_link(INDEX_PAGE, "www.digitalwhisper.co.il").unwrap();
        assert_eq!(found, Some(IssueId(172)));
    }

    #[test]
    fn host_dots_are_literal() {
        let page = "wwwXdigitalwhisperXco.il/issue9 www.digitalwhisper.co.il/issue3";
        let found = find_issue_link(page, "www.digitalwhisper.co.il").unwrap();
        assert_eq!(found, Some(IssueId(3)));
    }

    #[tokio::test]
    async fn resolution_is_cached_after_success() {
        let site = SiteConfig::default();
        let source = FakeSource::new().with_page(site.index_url(), INDEX_PAGE);
        let mut resolver = LatestIssueResolver::new(&source, &site);

        assert_eq!(resolver.latest().await.unwrap(), Some(IssueId(172)));
        assert_eq!(resolver.latest().await.unwrap(), Some(IssueId(172)));
        assert_eq!(resolver.cached(), Some(IssueId(172)));
        assert_eq!(source.requests_for(site.index_url()), 1);
    }

    #[tokio::test]
    async fn missing_link_is_reported_and_retried() {
        let site = SiteConfig::default();
        let source = FakeSource::new().with_page(site.index_url(), "<html>maintenance</html>");
        let mut resolver = LatestIssueResolver::new(&source, &site);

        assert_eq!(resolver.latest().await.unwrap(), None);
        assert_eq!(resolver.cached(), None);
        assert_eq!(resolver.latest().await.unwrap(), None);
        assert_eq!(source.requests_for(site.index_url()), 2);
    }

    #[tokio::test]
    async fn index_fetch_failure_propagates() {
        let site = SiteConfig::default();
        let source = FakeSource::new();
        let mut resolver = LatestIssueResolver::new(&source, &site);
        assert!(matches!(resolver.latest().await, Err(WhispererError::Fetch(_))));
    }
}
