use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::shared::{errors::FetchError, progress_tracker::ProgressTracker};

/// Body of a successful fetch together with the size the server announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub body: Bytes,
    pub content_length: Option<u64>,
}

impl Fetched {
    /// Announced size, falling back to the number of bytes actually received.
    pub fn size(&self) -> u64 {
        self.content_length.unwrap_or(self.body.len() as u64)
    }
}

///trait for fetching a remote resource in one request.
/// ### Parameters:
/// * url : the resource url.
/// * progress : receives byte counts while the body is buffered.
#[async_trait]
pub trait IssueSource: Send + Sync {
    async fn fetch(&self, url: &Url, progress: &dyn ProgressTracker) -> Result<Fetched, FetchError>;
}
