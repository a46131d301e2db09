use std::path::PathBuf;

use thiserror::Error; // A popular crate for defining errors

/// Failures of a single HTTP fetch.
///
/// The `Display` output is the line shown to the user on the error stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Server answered with a non-success status.
    #[error("HTTP Error: {status} {reason}")]
    Http { status: u16, reason: String },

    /// DNS, connection, TLS, timeout or body transfer failure.
    #[error("URL Error: {reason}")]
    Transport { reason: String },

    #[error("Error: {message}")]
    Other { message: String },
}

impl FetchError {
    /// Whether the download loop may ask the user to carry on after this failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FetchError::Http { .. } | FetchError::Transport { .. })
    }
}

/// Errors raised while parsing a range list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("'all' cannot be used as part of a range")]
    AllInsideRange(String),

    #[error("Invalid issue range '{0}'")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum WhispererError {
    #[error("Directory {} does not exist!", .0.display())]
    InvalidDirectory(PathBuf),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("Can't find last issue ID")]
    LatestIssueUnavailable,

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("Filesystem error: {0}")]
    Storage(#[from] opendal::Error),

    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Can't read answer from standard input: {0}")]
    Prompt(std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Critical system failure: {0}")]
    Fatal(String),
}

impl From<anyhow::Error> for WhispererError {
    fn from(error: anyhow::Error) -> Self {
        WhispererError::Fatal(format!("{error:#}"))
    }
}

impl WhispererError {
    /// Errors whose message was already printed where they happened.
    pub fn already_reported(&self) -> bool {
        matches!(self, WhispererError::Fetch(_) | WhispererError::LatestIssueUnavailable)
    }

    /// Process exit status for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            WhispererError::InvalidDirectory(_)
            | WhispererError::Range(_)
            | WhispererError::LatestIssueUnavailable
            | WhispererError::Fetch(_)
            | WhispererError::Storage(_)
            | WhispererError::Io(_)
            | WhispererError::Prompt(_)
            | WhispererError::UrlParse(_)
            | WhispererError::Fatal(_) => 1,
        }
    }
}
