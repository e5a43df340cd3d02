//! Speech capture seam
//!
//! Recognition is non-continuous: one utterance per capture session. The
//! session handle must be torn down (`stop`) before a new capture starts;
//! `stop` is idempotent.
//!
//! Recognition quality is the host engine's business. The shipped
//! implementation reads a typed line, which is the same seam a real
//! recognizer plugs into.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use voxtab_common::HostError;

/// One-shot speech capture session source.
#[async_trait]
pub trait SpeechCapture: Send {
    /// Capture one utterance. `Ok(None)` means the session ended without
    /// input (engine closed, or `stop` was called).
    async fn capture(&mut self) -> Result<Option<String>, HostError>;

    /// Tear down the active session. Safe to call repeatedly.
    async fn stop(&mut self);
}

/// Capture source reading one line from standard input.
pub struct LinePrompt {
    stopped: bool,
}

impl LinePrompt {
    pub fn new() -> Self {
        Self { stopped: false }
    }
}

impl Default for LinePrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechCapture for LinePrompt {
    async fn capture(&mut self) -> Result<Option<String>, HostError> {
        if self.stopped {
            return Ok(None);
        }
        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        let read = reader.read_line(&mut line).await?;
        if read == 0 {
            // EOF: the session is over.
            self.stopped = true;
            return Ok(None);
        }
        Ok(Some(line))
    }

    async fn stop(&mut self) {
        self.stopped = true;
    }
}
