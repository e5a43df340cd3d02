//! Fake host implementations for deterministic tests
//!
//! Every fake records its effects into a shared [`EffectLog`], so tests can
//! assert cross-seam ordering (speech completes before navigation) as well
//! as individual calls. No system calls, no network.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use voxtab_common::entities::Entity;
use voxtab_common::{HostError, ScrollDirection};

use crate::host::{BrowserHost, SpeechCapture, SpeechSynth};
use crate::services::{AnswerService, EntityExtractor};

/// Shared, ordered record of every effect the fakes perform.
#[derive(Clone, Default)]
pub struct EffectLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Index of the first entry equal to `needle`, for ordering asserts.
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.entries().iter().position(|e| e == needle)
    }
}

/// Browser fake. `page_text: None` models "no active tab".
pub struct FakeBrowser {
    log: EffectLog,
    page_text: Option<String>,
}

impl FakeBrowser {
    pub fn new(log: EffectLog) -> Self {
        Self {
            log,
            page_text: Some("Fake page text".to_string()),
        }
    }

    pub fn with_page_text(log: EffectLog, text: impl Into<String>) -> Self {
        Self {
            log,
            page_text: Some(text.into()),
        }
    }

    pub fn without_active_tab(log: EffectLog) -> Self {
        Self {
            log,
            page_text: None,
        }
    }
}

#[async_trait]
impl BrowserHost for FakeBrowser {
    async fn open_url(&self, url: &str) -> Result<(), HostError> {
        self.log.record(format!("open_url: {}", url));
        Ok(())
    }

    async fn close_active_tab(&self) -> Result<(), HostError> {
        self.log.record("close_active_tab");
        Ok(())
    }

    async fn close_all_tabs(&self) -> Result<(), HostError> {
        self.log.record("close_all_tabs");
        Ok(())
    }

    async fn capture_visible_tab(&self) -> Result<Vec<u8>, HostError> {
        self.log.record("capture_visible_tab");
        Ok(vec![0x89, b'P', b'N', b'G'])
    }

    async fn save_download(&self, _bytes: &[u8], filename: &str) -> Result<(), HostError> {
        self.log.record(format!("save_download: {}", filename));
        Ok(())
    }

    async fn open_private_window(&self) -> Result<(), HostError> {
        self.log.record("open_private_window");
        Ok(())
    }

    async fn extract_page_text(&self) -> Result<String, HostError> {
        match &self.page_text {
            Some(text) => {
                self.log.record("extract_page_text");
                Ok(text.clone())
            }
            None => Err(HostError::NoActiveTab),
        }
    }

    async fn scroll(&self, direction: ScrollDirection) -> Result<(), HostError> {
        self.log.record(match direction {
            ScrollDirection::Down => "scroll: down",
            ScrollDirection::Up => "scroll: up",
        });
        Ok(())
    }
}

/// Synthesizer fake; speech "completes" instantly but is logged in order.
pub struct FakeSynth {
    log: EffectLog,
}

impl FakeSynth {
    pub fn new(log: EffectLog) -> Self {
        Self { log }
    }
}

#[async_trait]
impl SpeechSynth for FakeSynth {
    async fn speak(&self, message: &str) -> Result<(), HostError> {
        self.log.record(format!("speak: {}", message));
        Ok(())
    }

    async fn cancel(&self) {
        self.log.record("cancel_speech");
    }
}

/// Capture fake fed from a queue of utterances.
pub struct FakeCapture {
    queue: VecDeque<String>,
    stopped: bool,
    log: EffectLog,
}

impl FakeCapture {
    pub fn new(log: EffectLog, utterances: &[&str]) -> Self {
        Self {
            queue: utterances.iter().map(|u| u.to_string()).collect(),
            stopped: false,
            log,
        }
    }
}

#[async_trait]
impl SpeechCapture for FakeCapture {
    async fn capture(&mut self) -> Result<Option<String>, HostError> {
        if self.stopped {
            return Ok(None);
        }
        Ok(self.queue.pop_front())
    }

    async fn stop(&mut self) {
        self.stopped = true;
        self.log.record("capture_stopped");
    }
}

/// Entity-extraction fake: canned entities or a transport failure.
pub struct FakeEntityExtractor {
    entities: Option<Vec<Entity>>,
}

impl FakeEntityExtractor {
    pub fn with_entities(entities: Vec<Entity>) -> Self {
        Self {
            entities: Some(entities),
        }
    }

    pub fn failing() -> Self {
        Self { entities: None }
    }
}

#[async_trait]
impl EntityExtractor for FakeEntityExtractor {
    async fn analyze(&self, _text: &str) -> Result<Vec<Entity>, HostError> {
        match &self.entities {
            Some(entities) => Ok(entities.clone()),
            None => Err(HostError::Remote("fake extraction failure".to_string())),
        }
    }
}

/// Question-answering fake: canned abstract, empty result, or failure.
pub struct FakeAnswerService {
    answer: Option<String>,
    fail: bool,
}

impl FakeAnswerService {
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            fail: false,
        }
    }

    pub fn empty() -> Self {
        Self {
            answer: None,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            fail: true,
        }
    }
}

#[async_trait]
impl AnswerService for FakeAnswerService {
    async fn ask(&self, _query: &str) -> Result<Option<String>, HostError> {
        if self.fail {
            return Err(HostError::Remote("fake answer failure".to_string()));
        }
        Ok(self.answer.clone())
    }
}
