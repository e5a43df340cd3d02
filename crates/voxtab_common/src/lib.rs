//! Voxtab shared types
//!
//! Vocabulary shared by the command router, the action executor and the
//! privileged bridge context: actions, wire messages, remote service
//! payloads, configuration and the error taxonomy.

pub mod action;
pub mod bridge;
pub mod config;
pub mod entities;
pub mod error;

pub use action::{Action, ScrollDirection, SystemPage};
pub use bridge::{BridgeRequest, BRIDGE_CLOSE_ALL_TABS, BRIDGE_CLOSE_THIS_TAB, BRIDGE_OPEN_TAB, BRIDGE_SCREENSHOT};
pub use config::VoxtabConfig;
pub use entities::{Entity, EntityCategory, EntityDocument, EntityRequest, EntityResponse};
pub use error::HostError;
