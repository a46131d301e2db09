use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use super::issue::IssueId;

/// Deduplicated set of issues waiting to be downloaded, iterated in ascending order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadQueue {
    issues: BTreeSet<IssueId>,
}

impl DownloadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue_id: IssueId) {
        self.issues.insert(issue_id);
    }

    /// Adds every id of an inclusive range. A range whose end is before its start adds nothing.
    pub fn add_range(&mut self, range: RangeInclusive<u32>) {
        self.issues.extend(range.map(IssueId));
    }

    pub fn clear(&mut self) {
        self.issues.clear();
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn contains(&self, issue_id: IssueId) -> bool {
        self.issues.contains(&issue_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = IssueId> + '_ {
        self.issues.iter().copied()
    }
}
