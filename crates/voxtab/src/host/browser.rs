//! Browser capability surface
//!
//! The trait covers the full surface the action executor needs; the
//! desktop implementation provides what a plain desktop can (URL
//! navigation through the system opener, download persistence) and
//! reports everything else as unavailable. A real browser embedding
//! implements the same trait.

use async_trait::async_trait;
use tokio::process::Command;
use voxtab_common::{HostError, ScrollDirection};

/// Browser surface consumed by the executor and the bridge.
#[async_trait]
pub trait BrowserHost: Send + Sync {
    /// Navigate to a URL in a new tab.
    async fn open_url(&self, url: &str) -> Result<(), HostError>;

    /// Close the active tab.
    async fn close_active_tab(&self) -> Result<(), HostError>;

    /// Close every open tab.
    async fn close_all_tabs(&self) -> Result<(), HostError>;

    /// Capture the visible tab as PNG bytes.
    async fn capture_visible_tab(&self) -> Result<Vec<u8>, HostError>;

    /// Persist bytes as a download under the given filename.
    async fn save_download(&self, bytes: &[u8], filename: &str) -> Result<(), HostError>;

    /// Open a private browsing window.
    async fn open_private_window(&self) -> Result<(), HostError>;

    /// Visible text of the active page: paragraph and heading content in
    /// document order, space-joined.
    async fn extract_page_text(&self) -> Result<String, HostError>;

    /// Smooth-scroll the active viewport by one viewport height.
    async fn scroll(&self, direction: ScrollDirection) -> Result<(), HostError>;
}

/// Desktop implementation backed by the system URL opener.
pub struct DesktopBrowser {
    opener: String,
}

impl DesktopBrowser {
    pub fn new() -> Self {
        Self {
            opener: default_opener().to_string(),
        }
    }

    /// Override the opener program (tests, unusual desktops).
    pub fn with_opener(opener: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
        }
    }
}

impl Default for DesktopBrowser {
    fn default() -> Self {
        Self::new()
    }
}

fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

#[async_trait]
impl BrowserHost for DesktopBrowser {
    async fn open_url(&self, url: &str) -> Result<(), HostError> {
        let status = Command::new(&self.opener).arg(url).status().await?;
        if status.success() {
            Ok(())
        } else {
            Err(HostError::Remote(format!(
                "{} exited with {}",
                self.opener, status
            )))
        }
    }

    async fn close_active_tab(&self) -> Result<(), HostError> {
        Err(HostError::CapabilityUnavailable("tab close"))
    }

    async fn close_all_tabs(&self) -> Result<(), HostError> {
        Err(HostError::CapabilityUnavailable("tab close"))
    }

    async fn capture_visible_tab(&self) -> Result<Vec<u8>, HostError> {
        Err(HostError::CapabilityUnavailable("tab capture"))
    }

    async fn save_download(&self, bytes: &[u8], filename: &str) -> Result<(), HostError> {
        let dir = dirs_download_dir().ok_or(HostError::CapabilityUnavailable("download dir"))?;
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(filename), bytes).await?;
        Ok(())
    }

    async fn open_private_window(&self) -> Result<(), HostError> {
        Err(HostError::CapabilityUnavailable("private window"))
    }

    async fn extract_page_text(&self) -> Result<String, HostError> {
        Err(HostError::CapabilityUnavailable("page scripting"))
    }

    async fn scroll(&self, _direction: ScrollDirection) -> Result<(), HostError> {
        Err(HostError::CapabilityUnavailable("page scripting"))
    }
}

fn dirs_download_dir() -> Option<std::path::PathBuf> {
    dirs::download_dir().or_else(dirs::home_dir)
}
