use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::ports::{Confirm, confirm::is_affirmative};
use crate::shared::errors::WhispererError;

/// Asks questions on stdout and reads the answer line from stdin.
pub struct StdinConfirm {
    reader: Mutex<BufReader<Stdin>>,
}

impl StdinConfirm {
    pub fn new() -> Self {
        Self { reader: Mutex::new(BufReader::new(tokio::io::stdin())) }
    }
}

impl Default for StdinConfirm {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, prompt: &str) -> Result<bool, WhispererError> {
        let mut stdout = std::io::stdout();
        stdout.write_all(prompt.as_bytes()).map_err(WhispererError::Prompt)?;
        stdout.flush().map_err(WhispererError::Prompt)?;

        let mut answer = String::new();
        let read = self
            .reader
            .lock()
            .await
            .read_line(&mut answer)
            .await
            .map_err(WhispererError::Prompt)?;
        if read == 0 {
            // Closed stdin can't say yes.
            debug!("End of input while waiting for an answer.");
            println!();
            return Ok(false);
        }
        Ok(is_affirmative(&answer))
    }
}
