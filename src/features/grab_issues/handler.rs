use colored::Colorize;
use tracing::info;

use crate::domain::ports::{Confirm, IssueSource, IssueStore};
use crate::domain::services::{
    DownloadPolicy, DownloadReport, IssueDownloader, LatestIssueResolver, RunOutcome,
    expand_range_list,
};
use crate::infra::config::{HttpConfig, SiteConfig};
use crate::infra::network::HttpAdapter;
use crate::infra::storage::LocalStore;
use crate::interfaces::cli::{WhispererArgs, prompt::StdinConfirm};
use crate::shared::errors::WhispererError;

/// Entry point of a CLI run.
///
/// The download directory is validated before any network activity.
pub async fn handle(args: WhispererArgs) -> Result<DownloadReport, WhispererError> {
    let store = LocalStore::open(&args.directory)?;
    let source = HttpAdapter::new(HttpConfig::default())?;
    let confirm = StdinConfirm::new();
    let site = SiteConfig::default();
    grab_issues(&args.range, DownloadPolicy::from(&args), &source, &store, &confirm, &site).await
}

/// Expands the range list, then downloads the resulting queue.
pub async fn grab_issues<S, W, C>(
    range: &str,
    policy: DownloadPolicy,
    source: &S,
    store: &W,
    confirm: &C,
    site: &SiteConfig,
) -> Result<DownloadReport, WhispererError>
where
    S: IssueSource,
    W: IssueStore,
    C: Confirm,
{
    let mut resolver = LatestIssueResolver::new(source, site);
    let queue = expand_range_list(range, &mut resolver).await?;
    info!(range, queued = queue.len(), dir = %store.root().display(), "Starting downloads.");

    let report = IssueDownloader::new(source, store, confirm, site, policy).download(&queue).await?;
    match report.outcome() {
        RunOutcome::Completed => println!("{}", "All Done!".purple()),
        RunOutcome::Aborted { not_attempted } => {
            println!("{}", format!("Stopped: {not_attempted} issue(s) not attempted.").yellow())
        }
    }
    Ok(report)
}
