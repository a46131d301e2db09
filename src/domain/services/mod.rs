pub mod download;
pub mod latest;
pub mod range;

#[cfg(test)]
pub mod testing;

pub use download::{DownloadPolicy, DownloadReport, IssueDownloader, RunOutcome};
pub use latest::LatestIssueResolver;
pub use range::expand_range_list;
