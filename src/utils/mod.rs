//! utitlity module
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Log level picked by the number of `-v` flags.
pub fn verbosity_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

///Intialize the logger, logs go to stderr so stdout stays for user messages.
/// # Arguements:
/// * verbose :number of `-v` flags given on the command line.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_level(verbose).into())
        .from_env_lossy(); // respects RUST_LOG if user set it

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true) // colors in terminal
                .with_target(false) // cleaner output
                .with_file(false)
                .with_line_number(false)
                .compact(),
        ) // one-line format, perfect for CLIs
        .init();
}
