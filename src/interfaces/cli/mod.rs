use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::domain::services::DownloadPolicy;

pub mod prompt;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Whisperer - Grab DigitalWhisper Issues Easily", long_about = None)]
pub struct WhispererArgs {
    /// Output directory for downloaded issues [Default: current working directory]
    #[arg(short, long, default_value = "./")]
    pub directory: PathBuf,
    /// Overwrite existing files without confirmation
    #[arg(short, long)]
    pub overwrite: bool,
    /// Skip issues that already exist
    #[arg(short, long)]
    pub skip: bool,
    /// Comma separated list of the following: Issue ID, Range of ID's (Example: 13-last),
    /// 'last' (Latest issue), 'all' (From 1 to 'last')
    #[arg(short, long, value_name = "RANGE_LIST", default_value = "last")]
    pub range: String,
    /// Log more, -v for info and -vv for debug. RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<&WhispererArgs> for DownloadPolicy {
    fn from(value: &WhispererArgs) -> Self {
        DownloadPolicy { overwrite: value.overwrite, skip_existing: value.skip }
    }
}
