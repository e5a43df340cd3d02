//! Bridge to the privileged context
//!
//! Tab manipulation and screenshot persistence run in a privileged context
//! reached over a message channel, never called directly from the UI side.
//! The wire shape is `{action, url?}` with four recognized actions; unknown
//! actions are logged and dropped.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use voxtab_common::{
    BridgeRequest, HostError, BRIDGE_CLOSE_ALL_TABS, BRIDGE_CLOSE_THIS_TAB, BRIDGE_OPEN_TAB,
    BRIDGE_SCREENSHOT,
};

use crate::host::BrowserHost;

/// Filename screenshots are persisted under.
pub const SCREENSHOT_FILENAME: &str = "screenshot.png";

const BRIDGE_QUEUE_DEPTH: usize = 16;

enum BridgeMessage {
    Request(BridgeRequest),
    Shutdown,
}

/// Sender half handed to the action executor.
#[derive(Clone)]
pub struct BridgeHandle {
    tx: mpsc::Sender<BridgeMessage>,
}

impl BridgeHandle {
    pub async fn send(&self, request: BridgeRequest) -> Result<(), HostError> {
        self.tx
            .send(BridgeMessage::Request(request))
            .await
            .map_err(|_| HostError::BridgeClosed)
    }
}

/// The privileged context: a task owning the browser surface, fed by a
/// message channel.
pub struct Bridge {
    handle: BridgeHandle,
    task: JoinHandle<()>,
}

impl Bridge {
    /// Spawn the privileged task over the given browser surface.
    pub fn spawn(browser: Arc<dyn BrowserHost>) -> Self {
        let (tx, mut rx) = mpsc::channel::<BridgeMessage>(BRIDGE_QUEUE_DEPTH);
        let task = tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                let request = match message {
                    BridgeMessage::Request(request) => request,
                    BridgeMessage::Shutdown => break,
                };
                if let Err(err) = handle_request(&request, browser.as_ref()).await {
                    warn!(action = %request.action, %err, "bridge request failed");
                }
            }
            debug!("privileged bridge task exiting");
        });
        Self {
            handle: BridgeHandle { tx },
            task,
        }
    }

    pub fn handle(&self) -> BridgeHandle {
        self.handle.clone()
    }

    /// Drain queued requests and stop the privileged task. Requests sent
    /// afterwards fail with [`HostError::BridgeClosed`].
    pub async fn shutdown(self) {
        // Queued requests sit ahead of the shutdown message, so they still
        // run before the task exits.
        let _ = self.handle.tx.send(BridgeMessage::Shutdown).await;
        let _ = self.task.await;
    }
}

async fn handle_request(
    request: &BridgeRequest,
    browser: &dyn BrowserHost,
) -> Result<(), HostError> {
    match request.action.as_str() {
        BRIDGE_OPEN_TAB => {
            let url = request
                .url
                .as_deref()
                .ok_or_else(|| HostError::Remote("open_tab without url".to_string()))?;
            browser.open_url(url).await
        }
        BRIDGE_CLOSE_ALL_TABS => browser.close_all_tabs().await,
        BRIDGE_CLOSE_THIS_TAB => browser.close_active_tab().await,
        BRIDGE_SCREENSHOT => {
            let png = browser.capture_visible_tab().await?;
            browser.save_download(&png, SCREENSHOT_FILENAME).await
        }
        other => {
            warn!(action = %other, "unrecognized bridge action dropped");
            Ok(())
        }
    }
}
