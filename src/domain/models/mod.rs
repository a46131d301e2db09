pub mod issue;
pub mod queue;

pub use issue::{FIRST_ISSUE_ID, IssueId, file_name_of};
pub use queue::DownloadQueue;
