use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;

use crate::shared::errors::WhispererError;

/// Where downloaded issues are kept.
///
/// Names are file names relative to the store's download directory.
#[async_trait]
pub trait IssueStore: Send + Sync {
    /// Directory every file is written to.
    fn root(&self) -> &Path;

    /// Check whether a regular file with this name exists.
    async fn exists(&self, name: &str) -> Result<bool, WhispererError>;

    /// Write a buffer content to a file truncating the file(overwrite previous content).
    async fn write(&self, name: &str, content: Bytes) -> Result<(), WhispererError>;

    fn path_of(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }
}
