//! Voice session lifecycle
//!
//! One `VoiceSession` owns the capture handle, the executor, and the
//! privileged bridge. Recognition is non-continuous: `run_once` performs
//! a single capture → route → execute cycle and returns; the caller
//! decides whether to start another. `stop` tears everything down and is
//! idempotent.

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::action_executor::{ActionExecutor, Flow};
use crate::bridge::Bridge;
use crate::command_router::route_command;
use crate::host::{SpeechCapture, SpeechSynth};

pub struct VoiceSession {
    capture: Box<dyn SpeechCapture>,
    executor: ActionExecutor,
    synth: Arc<dyn SpeechSynth>,
    bridge: Option<Bridge>,
    stopped: bool,
}

impl VoiceSession {
    pub fn new(
        capture: Box<dyn SpeechCapture>,
        executor: ActionExecutor,
        synth: Arc<dyn SpeechSynth>,
        bridge: Bridge,
    ) -> Self {
        Self {
            capture,
            executor,
            synth,
            bridge: Some(bridge),
            stopped: false,
        }
    }

    /// One capture cycle. Returns `Flow::Stop` when the session is over
    /// (user said "stop", capture source closed, or `stop` was called).
    pub async fn run_once(&mut self) -> Result<Flow> {
        if self.stopped {
            return Ok(Flow::Stop);
        }

        let Some(raw) = self.capture.capture().await? else {
            self.stop().await;
            return Ok(Flow::Stop);
        };

        self.handle_utterance(&raw).await
    }

    /// Route and execute one utterance. Empty utterances are a silent
    /// no-op: no action, no spoken response.
    pub async fn handle_utterance(&mut self, raw: &str) -> Result<Flow> {
        let Some(action) = route_command(raw) else {
            debug!("empty utterance, nothing to do");
            return Ok(Flow::Continue);
        };

        info!(%action, "executing command");
        let flow = self.executor.execute(action).await?;
        if flow == Flow::Stop {
            self.stop().await;
        }
        Ok(flow)
    }

    /// Tear down speech output, the capture session and the bridge.
    /// Safe to call repeatedly.
    pub async fn stop(&mut self) {
        self.synth.cancel().await;
        self.capture.stop().await;
        if let Some(bridge) = self.bridge.take() {
            bridge.shutdown().await;
        }
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{
        BrowserHost, EffectLog, FakeAnswerService, FakeBrowser, FakeCapture, FakeEntityExtractor,
        FakeSynth,
    };
    use voxtab_common::VoxtabConfig;

    fn session(log: EffectLog, utterances: &[&str]) -> VoiceSession {
        let browser: Arc<dyn BrowserHost> = Arc::new(FakeBrowser::new(log.clone()));
        let synth: Arc<dyn SpeechSynth> = Arc::new(FakeSynth::new(log.clone()));
        let bridge = Bridge::spawn(browser.clone());
        let executor = ActionExecutor::new(
            &VoxtabConfig::default(),
            browser,
            synth.clone(),
            bridge.handle(),
            Arc::new(FakeEntityExtractor::with_entities(Vec::new())),
            Arc::new(FakeAnswerService::empty()),
        );
        VoiceSession::new(
            Box::new(FakeCapture::new(log, utterances)),
            executor,
            synth,
            bridge,
        )
    }

    #[tokio::test]
    async fn test_one_cycle_routes_and_executes() {
        let log = EffectLog::new();
        let mut session = session(log.clone(), &["open example"]);
        assert_eq!(session.run_once().await.unwrap(), Flow::Continue);
        session.stop().await;
        assert!(log.position("speak: Opening example.com").is_some());
        assert!(log.position("open_url: https://example.com").is_some());
    }

    #[tokio::test]
    async fn test_empty_utterance_is_silent() {
        let log = EffectLog::new();
        let mut session = session(log.clone(), &["   "]);
        assert_eq!(session.run_once().await.unwrap(), Flow::Continue);
        session.stop().await;
        // No speech, no browser effect; only the teardown marker.
        assert_eq!(
            log.entries()
                .iter()
                .filter(|e| e.starts_with("speak") || e.starts_with("open_url"))
                .count(),
            0
        );
    }

    #[tokio::test]
    async fn test_stop_command_ends_the_session() {
        let log = EffectLog::new();
        let mut session = session(log.clone(), &["stop", "open example"]);
        assert_eq!(session.run_once().await.unwrap(), Flow::Stop);
        // The session is torn down; the queued second utterance never runs.
        assert_eq!(session.run_once().await.unwrap(), Flow::Stop);
        assert!(log.position("open_url: https://example.com").is_none());
        assert!(log.position("capture_stopped").is_some());
    }

    #[tokio::test]
    async fn test_stop_twice_does_not_raise() {
        let log = EffectLog::new();
        let mut session = session(log, &[]);
        session.stop().await;
        session.stop().await;
    }

    #[tokio::test]
    async fn test_exhausted_capture_ends_session() {
        let log = EffectLog::new();
        let mut session = session(log, &[]);
        assert_eq!(session.run_once().await.unwrap(), Flow::Stop);
    }
}
