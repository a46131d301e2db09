//! Range list parsing and expansion.
//!
//! A range list is comma separated; each entry is an issue id, an inclusive
//! `start-finish` span, `last`, or `all`. `last` may also be a span bound.
//! Parsing never touches the network; keywords are resolved while expanding.

use tracing::{debug, instrument};

use crate::domain::models::{DownloadQueue, FIRST_ISSUE_ID, IssueId};
use crate::domain::ports::IssueSource;
use crate::domain::services::latest::LatestIssueResolver;
use crate::shared::errors::{RangeError, WhispererError};

const LAST_KEYWORD: &str = "last";
const ALL_KEYWORD: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Id(u32),
    /// The latest published issue.
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken {
    Single(Bound),
    /// Inclusive, empty when the finish is before the start.
    Span(Bound, Bound),
    /// Every issue from the first to the latest.
    All,
}

impl RangeToken {
    pub fn needs_latest(&self) -> bool {
        match self {
            RangeToken::All => true,
            RangeToken::Single(bound) => *bound == Bound::Last,
            RangeToken::Span(start, finish) => *start == Bound::Last || *finish == Bound::Last,
        }
    }
}

pub fn parse_range_list(range_list: &str) -> Result<Vec<RangeToken>, RangeError> {
    range_list.split(',').map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<RangeToken, RangeError> {
    let token = token.trim();
    if token == ALL_KEYWORD {
        return Ok(RangeToken::All);
    }
    if token.contains(ALL_KEYWORD) {
        return Err(RangeError::AllInsideRange(token.to_string()));
    }
    match token.split_once('-') {
        Some((start, finish)) => {
            Ok(RangeToken::Span(parse_bound(start, token)?, parse_bound(finish, token)?))
        }
        None => Ok(RangeToken::Single(parse_bound(token, token)?)),
    }
}

fn parse_bound(raw: &str, token: &str) -> Result<Bound, RangeError> {
    let raw = raw.trim();
    if raw == LAST_KEYWORD {
        return Ok(Bound::Last);
    }
    raw.parse::<u32>()
        .map(Bound::Id)
        .map_err(|_| RangeError::Malformed(token.to_string()))
}

/// Adds the ids of every token to the queue, left to right.
///
/// The resolver is only consulted for tokens using `last` or `all`, and caches its answer.
#[instrument(name = "expand_range_tokens", skip(resolver, queue))]
pub async fn expand_into<S: IssueSource>(
    tokens: &[RangeToken],
    resolver: &mut LatestIssueResolver<'_, S>,
    queue: &mut DownloadQueue,
) -> Result<(), WhispererError> {
    debug!(
        needs_latest = tokens.iter().any(RangeToken::needs_latest),
        "Expanding range list."
    );
    for token in tokens {
        match *token {
            RangeToken::Single(bound) => {
                queue.add(IssueId(resolve(bound, resolver).await?));
            }
            RangeToken::Span(start, finish) => {
                let start = resolve(start, resolver).await?;
                let finish = resolve(finish, resolver).await?;
                queue.add_range(start..=finish);
            }
            RangeToken::All => {
                let latest = resolve(Bound::Last, resolver).await?;
                queue.add_range(FIRST_ISSUE_ID.get()..=latest);
            }
        }
    }
    debug!(queued = queue.len(), "Range list expanded.");
    Ok(())
}

/// Parses and expands a range list into a fresh queue.
pub async fn expand_range_list<S: IssueSource>(
    range_list: &str,
    resolver: &mut LatestIssueResolver<'_, S>,
) -> Result<DownloadQueue, WhispererError> {
    let tokens = parse_range_list(range_list)?;
    let mut queue = DownloadQueue::new();
    expand_into(&tokens, resolver, &mut queue).await?;
    Ok(queue)
}

async fn resolve<S: IssueSource>(
    bound: Bound,
    resolver: &mut LatestIssueResolver<'_, S>,
) -> Result<u32, WhispererError> {
    match bound {
        Bound::Id(id) => Ok(id),
        Bound::Last => resolver
            .latest()
            .await?
            .map(IssueId::get)
            .ok_or(WhispererError::LatestIssueUnavailable),
    }
}
