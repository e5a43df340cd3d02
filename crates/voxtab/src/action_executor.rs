//! Action executor - one classified action, one browser effect
//!
//! The executor announces what it is about to do through the synthesizer
//! and performs the effect only after the announcement has finished
//! playing. Remote failures and missing tabs become spoken apologies;
//! capabilities the host does not offer are logged and the command cycle
//! aborts. Nothing is retried.

use anyhow::Result;
use reqwest::Url;
use std::sync::Arc;
use tracing::{error, warn};
use voxtab_common::{Action, BridgeRequest, HostError, ScrollDirection, VoxtabConfig};

use crate::bridge::BridgeHandle;
use crate::host::{BrowserHost, SpeechSynth};
use crate::services::{AnswerService, EntityExtractor};
use crate::summary::compose_summary;

/// What the session should do after an action completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The user said "stop": tear down the capture session.
    Stop,
}

/// Executes actions against the host surface and remote services.
pub struct ActionExecutor {
    browser: Arc<dyn BrowserHost>,
    synth: Arc<dyn SpeechSynth>,
    bridge: BridgeHandle,
    entities: Arc<dyn EntityExtractor>,
    answers: Arc<dyn AnswerService>,
    search_url: String,
    music_url: String,
}

impl ActionExecutor {
    pub fn new(
        config: &VoxtabConfig,
        browser: Arc<dyn BrowserHost>,
        synth: Arc<dyn SpeechSynth>,
        bridge: BridgeHandle,
        entities: Arc<dyn EntityExtractor>,
        answers: Arc<dyn AnswerService>,
    ) -> Self {
        Self {
            browser,
            synth,
            bridge,
            entities,
            answers,
            search_url: config.search.url.clone(),
            music_url: config.media.music_url.clone(),
        }
    }

    /// Perform the effect for one action.
    pub async fn execute(&self, action: Action) -> Result<Flow> {
        match action {
            Action::StopAll => {
                self.synth.cancel().await;
                self.speak("Stopping all actions and answers.").await?;
                return Ok(Flow::Stop);
            }
            Action::OpenSite { site } => {
                self.speak(&format!("Opening {}", site)).await?;
                let url = format!("https://{}", site);
                self.bridge.send(BridgeRequest::open_tab(url)).await?;
            }
            Action::OpenSystemPage(page) => {
                self.speak(&format!("Opening {}.", page.spoken_name()))
                    .await?;
                self.host_effect(self.browser.open_url(page.url()).await)
                    .await?;
            }
            Action::ReadSummary => {
                self.speak("Fetching the summary of the current page.")
                    .await?;
                self.read_summary().await?;
            }
            Action::ReadText => {
                self.speak("Reading the content of the page.").await?;
                self.read_text().await?;
            }
            Action::Search { query } => {
                self.speak(&format!("Searching Google for: {}", query))
                    .await?;
                let url = self.build_search_url(&query)?;
                self.bridge.send(BridgeRequest::open_tab(url)).await?;
            }
            Action::ScrollDown => {
                self.host_effect(self.browser.scroll(ScrollDirection::Down).await)
                    .await?;
                self.speak("Scrolling down.").await?;
            }
            Action::ScrollUp => {
                self.host_effect(self.browser.scroll(ScrollDirection::Up).await)
                    .await?;
                self.speak("Scrolling up.").await?;
            }
            Action::PlayMedia => {
                self.speak("Playing music on Spotify.").await?;
                let url = self.music_url.clone();
                self.host_effect(self.browser.open_url(&url).await).await?;
            }
            Action::CloseThisTab => {
                self.speak("Closing this tab.").await?;
                self.bridge.send(BridgeRequest::close_this_tab()).await?;
            }
            Action::CloseAllTabs => {
                self.bridge.send(BridgeRequest::close_all_tabs()).await?;
            }
            Action::Screenshot => {
                self.speak("Taking a screenshot.").await?;
                self.bridge.send(BridgeRequest::screenshot()).await?;
            }
            Action::OpenIncognito => {
                self.speak("Opening a new incognito window.").await?;
                self.host_effect(self.browser.open_private_window().await)
                    .await?;
            }
            Action::GenericQuery { text } => {
                self.speak("Searching for an answer.").await?;
                self.answer_query(&text).await?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn read_summary(&self) -> Result<()> {
        let text = match self.browser.extract_page_text().await {
            Ok(text) => text,
            Err(err) => return self.page_unavailable(err).await,
        };
        if text.trim().is_empty() {
            self.speak("No relevant content found on this page.").await?;
            return Ok(());
        }

        match self.entities.analyze(&text).await {
            Ok(entities) if entities.is_empty() => {
                self.speak("Sorry, no summary available.").await?;
            }
            Ok(entities) => {
                self.speak(&compose_summary(&entities)).await?;
            }
            Err(err) => {
                error!(%err, "entity extraction failed");
                self.speak("Error fetching summary.").await?;
            }
        }
        Ok(())
    }

    async fn read_text(&self) -> Result<()> {
        let text = match self.browser.extract_page_text().await {
            Ok(text) => text,
            Err(err) => return self.page_unavailable(err).await,
        };
        if text.trim().is_empty() {
            self.speak("No relevant content found on this page.").await?;
        } else {
            self.speak(&text).await?;
        }
        Ok(())
    }

    async fn answer_query(&self, query: &str) -> Result<()> {
        match self.answers.ask(query).await {
            Ok(Some(answer)) => self.speak(&answer).await?,
            Ok(None) => self.speak("Sorry, I couldn't find an answer.").await?,
            Err(err) => {
                error!(%err, "answer service failed");
                self.speak("Error retrieving information.").await?;
            }
        }
        Ok(())
    }

    /// Spoken fallback for a page that cannot be read.
    async fn page_unavailable(&self, err: HostError) -> Result<()> {
        match err {
            HostError::NoActiveTab => self.speak("No active tab found.").await?,
            other => warn!(err = %other, "page access aborted"),
        }
        Ok(())
    }

    /// Direct host effect. An unavailable capability aborts the cycle with
    /// a log line; a missing tab gets the spoken apology; everything else
    /// propagates.
    async fn host_effect(&self, result: Result<(), HostError>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(HostError::CapabilityUnavailable(what)) => {
                warn!(capability = what, "host capability unavailable, command aborted");
                Ok(())
            }
            Err(HostError::NoActiveTab) => {
                self.speak("No active tab found.").await?;
                Ok(())
            }
            Err(other) => Err(other.into()),
        }
    }

    fn build_search_url(&self, query: &str) -> Result<String> {
        let url = Url::parse_with_params(&self.search_url, &[("q", query)])?;
        Ok(url.into())
    }

    async fn speak(&self, message: &str) -> Result<()> {
        self.synth.speak(message).await?;
        Ok(())
    }
}
