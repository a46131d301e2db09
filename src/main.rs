//! # Whisperer
//!
//! Grab Digital Whisper magazine issues easily.
//!
//! This module contains the main entry point. It parses command-line arguments,
//! sets up logging, and hands the run over to the issue grabbing handler.

mod domain;
mod features;
mod infra;
mod interfaces;
mod shared;
mod utils;

use clap::Parser;
use colored::Colorize;
use std::process::exit;
use tracing::debug;

use features::grab_issues::handler;
use interfaces::cli::WhispererArgs;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    human_panic::setup_panic!();
    let args = WhispererArgs::parse();
    utils::init_logging(args.verbose);

    if let Err(err) = handler::handle(args).await {
        debug!(error = ?err, "Run failed.");
        if !err.already_reported() {
            eprintln!("{}", format!("Error: {err}").red());
        }
        exit(err.exit_code());
    }
}
