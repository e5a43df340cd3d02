//! Speech synthesis seam
//!
//! `speak` resolves when the message has finished playing, which is what
//! lets the executor sequence "announce, then act" without timers.

use async_trait::async_trait;
use tokio::process::Command;
use tokio::sync::{Mutex, Notify};
use voxtab_common::HostError;

/// Speech synthesis engine.
#[async_trait]
pub trait SpeechSynth: Send + Sync {
    /// Speak a message, resolving once playback completes (or is
    /// cancelled).
    async fn speak(&self, message: &str) -> Result<(), HostError>;

    /// Cancel in-progress speech. Idempotent; cancelling when nothing is
    /// playing is a no-op.
    async fn cancel(&self);
}

/// Synthesizer backed by an external program (`espeak` by default).
pub struct ProcessSynth {
    command: String,
    rate: u32,
    cancel: Notify,
    speaking: Mutex<()>,
}

impl ProcessSynth {
    pub fn new(command: impl Into<String>, rate: u32) -> Self {
        Self {
            command: command.into(),
            rate,
            cancel: Notify::new(),
            speaking: Mutex::new(()),
        }
    }
}

#[async_trait]
impl SpeechSynth for ProcessSynth {
    async fn speak(&self, message: &str) -> Result<(), HostError> {
        // One message at a time; a second speak waits for the first.
        let _guard = self.speaking.lock().await;

        let mut child = Command::new(&self.command)
            .arg("-s")
            .arg(self.rate.to_string())
            .arg(message)
            .spawn()
            .map_err(|e| HostError::Speech(format!("{}: {}", self.command, e)))?;

        let finished = tokio::select! {
            status = child.wait() => Some(status.map_err(HostError::speech)?),
            _ = self.cancel.notified() => None,
        };

        match finished {
            Some(status) if status.success() => Ok(()),
            Some(status) => Err(HostError::Speech(format!(
                "{} exited with {}",
                self.command, status
            ))),
            // Cancelled mid-utterance: kill playback, not an error.
            None => {
                let _ = child.kill().await;
                Ok(())
            }
        }
    }

    async fn cancel(&self) {
        self.cancel.notify_waiters();
    }
}

/// Degraded synthesizer that prints instead of speaking, for hosts with no
/// synthesis engine and for `--quiet` runs.
pub struct ConsoleSynth;

#[async_trait]
impl SpeechSynth for ConsoleSynth {
    async fn speak(&self, message: &str) -> Result<(), HostError> {
        println!("{}", message);
        Ok(())
    }

    async fn cancel(&self) {}
}
