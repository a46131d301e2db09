//! This module contains the object that works through a download queue.

use colored::Colorize;
use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::domain::models::{DownloadQueue, IssueId, file_name_of};
use crate::domain::ports::{Confirm, IssueSource, IssueStore};
use crate::infra::config::SiteConfig;
use crate::shared::errors::WhispererError;
use crate::shared::progress_tracker::CliProgressTracker;

const OVERWRITE_PROMPT: &str = "Would you like to overwrite this file? [Y/n] ";
const CONTINUE_PROMPT: &str = "Would you like to continue? [Y/n] ";

/// What to do with issues already present in the download directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadPolicy {
    /// Replace existing files without asking. Takes precedence over `skip_existing`.
    pub overwrite: bool,
    /// Leave existing files alone without asking.
    pub skip_existing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every queued issue was processed.
    Completed,
    /// The user declined to continue after a failed fetch.
    Aborted { not_attempted: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct DownloadReport {
    total: usize,
    downloaded: usize,
    skipped: usize,
    failed: usize,
    outcome: RunOutcome,
}

impl DownloadReport {
    fn new(total: usize) -> Self {
        Self { total, downloaded: 0, skipped: 0, failed: 0, outcome: RunOutcome::Completed }
    }
}

enum IssueOutcome {
    Downloaded,
    Skipped,
}

pub struct IssueDownloader<'a, S, W, C> {
    source: &'a S,
    store: &'a W,
    confirm: &'a C,
    site: &'a SiteConfig,
    policy: DownloadPolicy,
}

impl<'a, S, W, C> IssueDownloader<'a, S, W, C>
where
    S: IssueSource,
    W: IssueStore,
    C: Confirm,
{
    pub fn new(
        source: &'a S,
        store: &'a W,
        confirm: &'a C,
        site: &'a SiteConfig,
        policy: DownloadPolicy,
    ) -> Self {
        Self { source, store, confirm, site, policy }
    }

    /// Downloads the queued issues one at a time in ascending order.
    ///
    /// HTTP and transport failures are reported and the user decides whether the
    /// rest of the queue is attempted. Write failures and other fetch errors end the run.
    #[instrument(name = "download_queue", skip_all, fields(total = queue.len()))]
    pub async fn download(&self, queue: &DownloadQueue) -> Result<DownloadReport, WhispererError> {
        let total = queue.len();
        let mut report = DownloadReport::new(total);

        for (index, issue_id) in queue.iter().enumerate() {
            println!("\n{}", progress_line(index + 1, total).bold());
            match self.download_issue(issue_id).await {
                Ok(IssueOutcome::Downloaded) => report.downloaded += 1,
                Ok(IssueOutcome::Skipped) => report.skipped += 1,
                Err(WhispererError::Fetch(err)) if err.is_recoverable() => {
                    report.failed += 1;
                    debug!(%issue_id, error = %err, "Issue fetch failed.");
                    eprintln!("{}", format!("Error while trying to fetch issue #{issue_id}").red());
                    if !self.confirm.confirm(CONTINUE_PROMPT).await? {
                        let not_attempted = total - index - 1;
                        info!(not_attempted, "User stopped the download queue.");
                        report.outcome = RunOutcome::Aborted { not_attempted };
                        break;
                    }
                }
                Err(err) => return Err(err),
            }
        }
        debug!(?report, "Download queue finished.");
        Ok(report)
    }

    async fn download_issue(&self, issue_id: IssueId) -> Result<IssueOutcome, WhispererError> {
        let url = self.site.issue_url(issue_id)?;
        let file_name = file_name_of(&url)
            .ok_or_else(|| WhispererError::Fatal(format!("Can't get a file name from {url}")))?
            .to_string();

        if !self.policy.overwrite && self.store.exists(&file_name).await? {
            if self.policy.skip_existing {
                println!("{}", format!("Skipping issue #{issue_id}").yellow());
                return Ok(IssueOutcome::Skipped);
            }
            println!("File \"{file_name}\" already exists!");
            if !self.confirm.confirm(OVERWRITE_PROMPT).await? {
                println!("{}", format!("Skipping issue #{issue_id}").yellow());
                return Ok(IssueOutcome::Skipped);
            }
        }

        println!("Downloading issue #{issue_id} < {file_name} >");
        let tracker = CliProgressTracker::new(file_name.clone());
        let fetched = self.source.fetch(&url, &tracker).await?;
        let size = fetched.size();
        self.store.write(&file_name, fetched.body).await?;
        info!(%issue_id, path = %self.store.path_of(&file_name).display(), size, "Issue saved.");
        println!(
            "{}",
            format!("Download successful! ({} MB)", format_megabytes(size)).green()
        );
        Ok(IssueOutcome::Downloaded)
    }
}

/// `Progress [current/total]`, counting from one.
pub fn progress_line(current: usize, total: usize) -> String {
    format!("Progress [{current}/{total}]")
}

/// Size in decimal megabytes with two decimals.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1_000_000.0)
}
