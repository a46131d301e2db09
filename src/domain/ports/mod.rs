pub mod confirm;
pub mod issue_source;
pub mod issue_store;

pub use confirm::Confirm;
pub use issue_source::{Fetched, IssueSource};
pub use issue_store::IssueStore;
