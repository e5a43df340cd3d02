//! Voxtab - voice-driven browser assistant
//!
//! One capture cycle: the speech engine yields an utterance, the command
//! router classifies it into an [`voxtab_common::Action`], and the action
//! executor performs the matching browser effect, announcing it through the
//! speech synthesizer first.

pub mod action_executor;
pub mod bridge;
pub mod command_router;
pub mod host;
pub mod services;
pub mod session;
pub mod summary;
