pub mod errors;
pub mod progress_tracker;
