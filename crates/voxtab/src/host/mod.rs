//! Host capability seams
//!
//! Trait abstractions over everything the host platform provides: the
//! browser surface (tabs, page scripting, capture, downloads), speech
//! synthesis and speech capture.
//!
//! Production code uses the `Desktop*`/`Process*` implementations; test
//! code uses the fakes, which record every effect in order.

mod browser;
mod capture;
mod fakes;
mod speech;

pub use browser::{BrowserHost, DesktopBrowser};
pub use capture::{LinePrompt, SpeechCapture};
pub use fakes::{EffectLog, FakeAnswerService, FakeBrowser, FakeCapture, FakeEntityExtractor, FakeSynth};
pub use speech::{ConsoleSynth, ProcessSynth, SpeechSynth};
