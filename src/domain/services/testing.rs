//! In-memory doubles for the domain ports.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::domain::ports::{Confirm, Fetched, IssueSource};
use crate::shared::{
    errors::{FetchError, WhispererError},
    progress_tracker::ProgressTracker,
};

/// Serves canned bodies by URL, anything unknown is a 404.
#[derive(Default)]
pub struct FakeSource {
    responses: HashMap<String, Result<Bytes, FetchError>>,
    requests: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: impl Into<Bytes>) -> Self {
        self.responses.insert(url.to_string(), Ok(body.into()));
        self
    }

    pub fn with_failure(mut self, url: &str, err: FetchError) -> Self {
        self.responses.insert(url.to_string(), Err(err));
        self
    }

    pub fn requests_for(&self, url: &str) -> usize {
        self.requests.lock().unwrap().iter().filter(|seen| seen.as_str() == url).count()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueSource for FakeSource {
    async fn fetch(&self, url: &Url, progress: &dyn ProgressTracker) -> Result<Fetched, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.responses.get(url.as_str()) {
            Some(Ok(body)) => {
                progress.start(Some(body.len() as u64));
                progress.update(body.len());
                progress.finish();
                Ok(Fetched { body: body.clone(), content_length: Some(body.len() as u64) })
            }
            Some(Err(err)) => Err(err.clone()),
            None => Err(FetchError::Http { status: 404, reason: "Not Found".into() }),
        }
    }
}

/// Answers prompts from a script, a drained script answers no.
#[derive(Default)]
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self { answers: Mutex::new(answers.into_iter().collect()), asked: Mutex::default() }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, prompt: &str) -> Result<bool, WhispererError> {
        self.asked.lock().unwrap().push(prompt.to_string());
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or(false))
    }
}
