//! Browser actions - the classified intent behind one utterance
//!
//! One utterance produces at most one `Action`; the executor turns it into
//! exactly one host effect.

use std::fmt;

/// Internal browser page reachable by a bare spoken keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemPage {
    Bookmarks,
    Downloads,
    Settings,
}

impl SystemPage {
    /// The internal URL the browser navigates to for this page.
    pub fn url(&self) -> &'static str {
        match self {
            SystemPage::Bookmarks => "chrome://bookmarks/",
            SystemPage::Downloads => "chrome://downloads/",
            SystemPage::Settings => "chrome://settings/",
        }
    }

    /// Name used in spoken announcements ("Opening bookmarks.").
    pub fn spoken_name(&self) -> &'static str {
        match self {
            SystemPage::Bookmarks => "bookmarks",
            SystemPage::Downloads => "downloads",
            SystemPage::Settings => "settings",
        }
    }
}

/// Scroll direction for the active page viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

/// Action classified from one normalized utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Cancel in-progress speech and halt the capture session.
    StopAll,
    /// Open a website. `site` is the final host (".com" already appended
    /// when the spoken remainder had no domain suffix).
    OpenSite { site: String },
    /// Open a fixed internal browser page.
    OpenSystemPage(SystemPage),
    /// Summarize the active page via the entity-extraction service.
    ReadSummary,
    /// Read the active page's visible text verbatim.
    ReadText,
    /// Web search for the spoken query.
    Search { query: String },
    ScrollDown,
    ScrollUp,
    /// Navigate to the configured media URL.
    PlayMedia,
    CloseThisTab,
    CloseAllTabs,
    /// Capture the visible tab and persist it as a download.
    Screenshot,
    /// Open a private browsing window.
    OpenIncognito,
    /// Anything else non-empty: ask the question-answering service.
    GenericQuery { text: String },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::StopAll => write!(f, "stop"),
            Action::OpenSite { site } => write!(f, "open {}", site),
            Action::OpenSystemPage(page) => write!(f, "open {}", page.spoken_name()),
            Action::ReadSummary => write!(f, "read summary"),
            Action::ReadText => write!(f, "read text"),
            Action::Search { query } => write!(f, "search {}", query),
            Action::ScrollDown => write!(f, "scroll down"),
            Action::ScrollUp => write!(f, "scroll up"),
            Action::PlayMedia => write!(f, "play music"),
            Action::CloseThisTab => write!(f, "close this tab"),
            Action::CloseAllTabs => write!(f, "close all tabs"),
            Action::Screenshot => write!(f, "screenshot"),
            Action::OpenIncognito => write!(f, "incognito"),
            Action::GenericQuery { text } => write!(f, "query: {}", text),
        }
    }
}
