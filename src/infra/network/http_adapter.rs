use std::error::Error as StdError;

use anyhow::Result;
use async_trait::async_trait;
use bytes::BytesMut;
use colored::Colorize;
use reqwest::{Client, Response, header::CONTENT_LENGTH};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::domain::ports::{Fetched, IssueSource};
use crate::infra::config::HttpConfig;
use crate::shared::{errors::FetchError, progress_tracker::ProgressTracker};

/// http client wrapper for reqwest library.
pub struct HttpAdapter {
    client: ClientWithMiddleware,
}

impl HttpAdapter {
    #[instrument(name = "new_http_adapter", skip_all, fields(config = ?http_config))]
    pub fn new(http_config: HttpConfig) -> Result<Self> {
        let try_client = Client::try_from(http_config)?;
        let client: ClientWithMiddleware = ClientBuilder::new(try_client)
            .with(TracingMiddleware::default()) // Enable built-in http client tracing and logging.
            .build();
        Ok(Self { client })
    }

    async fn get(&self, url: &Url, progress: &dyn ProgressTracker) -> Result<Fetched, FetchError> {
        let mut resp = self.client.get(url.clone()).send().await.map_err(FetchError::from)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let content_length = Self::content_length(&resp);
        progress.start(content_length);
        let mut body = BytesMut::new();
        loop {
            match resp.chunk().await {
                Ok(Some(bytes)) => {
                    progress.update(bytes.len());
                    body.extend_from_slice(&bytes);
                }
                Ok(None) => {
                    break;
                }
                Err(err) => {
                    progress.finish();
                    return Err(err.into());
                }
            }
        }
        progress.finish();
        debug!(bytes = body.len(), "Response body buffered.");
        Ok(Fetched { body: body.freeze(), content_length })
    }

    /// Value of the Content-Length header, if present and numeric.
    fn content_length(resp: &Response) -> Option<u64> {
        let header = resp.headers().get(CONTENT_LENGTH)?;
        match header.to_str().ok().and_then(|value| value.trim().parse::<u64>().ok()) {
            Some(size) => Some(size),
            None => {
                warn!(?header, "Can't parse Content-Length header.");
                None
            }
        }
    }
}

#[async_trait]
impl IssueSource for HttpAdapter {
    #[instrument(name = "http_fetch", skip_all, fields(url = %url))]
    async fn fetch(&self, url: &Url, progress: &dyn ProgressTracker) -> Result<Fetched, FetchError> {
        match self.get(url, progress).await {
            Ok(fetched) => Ok(fetched),
            Err(err) => {
                debug!(error = ?err, "Could'nt fetch {url}");
                eprintln!("{}", err.to_string().red());
                Err(err)
            }
        }
    }
}

/// Joins an error with all of its sources, reqwest keeps the useful part in the chain.
fn error_chain(err: &dyn StdError) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    reason
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            };
        }
        if err.is_connect()
            || err.is_timeout()
            || err.is_request()
            || err.is_body()
            || err.is_redirect()
            || err.is_decode()
        {
            return FetchError::Transport { reason: error_chain(&err) };
        }
        FetchError::Other { message: error_chain(&err) }
    }
}

impl From<reqwest_middleware::Error> for FetchError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(err) => err.into(),
            reqwest_middleware::Error::Middleware(err) => {
                FetchError::Other { message: format!("{err:#}") }
            }
        }
    }
}
