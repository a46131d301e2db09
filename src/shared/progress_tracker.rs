use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Trait for progress tracking that any UI/interface can implement
/// This allows decoupling fetch logic from specific UI implementations (indicatif, tests, etc.)
pub trait ProgressTracker: Send + Sync {
    /// Called once the response headers are in, with the announced body size.
    fn start(&self, total_bytes: Option<u64>);

    /// Update progress with bytes received for the current transfer.
    fn update(&self, bytes_received: usize);

    /// Mark the transfer as complete.
    fn finish(&self);
}

pub struct CliProgressTracker {
    progress: ProgressBar,
    download_name: String,
}

impl CliProgressTracker {
    /// Create a new progress tracker, nothing is drawn before `start`.
    /// # Parameters
    /// * `download_name` - Name shown next to the bar.
    pub fn new(download_name: impl Into<String>) -> Self {
        Self { progress: ProgressBar::hidden(), download_name: download_name.into() }
    }
}

impl ProgressTracker for CliProgressTracker {
    fn start(&self, total_bytes: Option<u64>) {
        let template = match total_bytes {
            Some(total) => {
                self.progress.set_length(total);
                "[{elapsed_precise}] {bar:40.cyan/blue} {bytes:>9}/{total_bytes:9} {msg}"
            }
            None => "[{elapsed_precise}] {spinner:.green} {bytes:>9} {msg}",
        };
        // Templates are literals, a parse failure keeps the default style.
        if let Ok(style) = ProgressStyle::with_template(template) {
            self.progress.set_style(style.progress_chars("##-"));
        }
        self.progress.set_message(self.download_name.clone());
        self.progress.set_draw_target(indicatif::ProgressDrawTarget::stderr());
    }

    fn update(&self, bytes_received: usize) {
        self.progress.inc(bytes_received as u64);
    }

    fn finish(&self) {
        self.progress.finish_and_clear();
        debug!(
            download_name = %self.download_name,
            bytes = self.progress.position(),
            "Transfer finished"
        );
    }
}

/// Tracker that draws nothing, used for page fetches and tests.
pub struct SilentTracker;

impl ProgressTracker for SilentTracker {
    fn start(&self, _total_bytes: Option<u64>) {}

    fn update(&self, _bytes_received: usize) {}

    fn finish(&self) {}
}
