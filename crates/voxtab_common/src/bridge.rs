//! Wire protocol between the UI context and the privileged bridge context
//!
//! Message shape: `{action: string, url?: string}`. The bridge recognizes
//! four action names; anything else is logged and dropped on the receiving
//! side.

use serde::{Deserialize, Serialize};

pub const BRIDGE_OPEN_TAB: &str = "open_tab";
pub const BRIDGE_CLOSE_ALL_TABS: &str = "close_all_tabs";
pub const BRIDGE_CLOSE_THIS_TAB: &str = "close_this_tab";
pub const BRIDGE_SCREENSHOT: &str = "screenshot";

/// One request sent to the privileged context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeRequest {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl BridgeRequest {
    pub fn open_tab(url: impl Into<String>) -> Self {
        Self {
            action: BRIDGE_OPEN_TAB.to_string(),
            url: Some(url.into()),
        }
    }

    pub fn close_all_tabs() -> Self {
        Self {
            action: BRIDGE_CLOSE_ALL_TABS.to_string(),
            url: None,
        }
    }

    pub fn close_this_tab() -> Self {
        Self {
            action: BRIDGE_CLOSE_THIS_TAB.to_string(),
            url: None,
        }
    }

    pub fn screenshot() -> Self {
        Self {
            action: BRIDGE_SCREENSHOT.to_string(),
            url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tab_wire_shape() {
        let req = BridgeRequest::open_tab("https://example.com");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["action"], "open_tab");
        assert_eq!(json["url"], "https://example.com");
    }

    #[test]
    fn test_url_omitted_when_absent() {
        let req = BridgeRequest::close_all_tabs();
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("url"));
    }

    #[test]
    fn test_round_trip() {
        let req = BridgeRequest::screenshot();
        let back: BridgeRequest =
            serde_json::from_str(&serde_json::to_string(&req).unwrap()).unwrap();
        assert_eq!(back, req);
    }
}
