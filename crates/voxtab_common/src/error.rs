//! Error taxonomy for host capabilities and remote services

/// Failures surfaced by host capabilities and remote services.
///
/// The executor maps these onto the user-facing outcomes: a spoken apology
/// for missing tabs and remote failures, a logged abort for capabilities
/// the host does not offer. Nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The host platform does not provide this capability at all.
    #[error("host capability not available: {0}")]
    CapabilityUnavailable(&'static str),

    /// No active page/tab to operate on.
    #[error("no active tab found")]
    NoActiveTab,

    /// A remote service call failed (transport or status).
    #[error("remote service failure: {0}")]
    Remote(String),

    /// The remote service answered but with nothing usable.
    #[error("remote service returned an empty result")]
    EmptyResult,

    /// The privileged bridge context has gone away.
    #[error("bridge channel closed")]
    BridgeClosed,

    /// Speech synthesis or capture failed below the trait seam.
    #[error("speech engine failure: {0}")]
    Speech(String),

    /// Host-side I/O (process spawn, download persistence).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HostError {
    pub fn remote(err: impl std::fmt::Display) -> Self {
        HostError::Remote(err.to_string())
    }

    pub fn speech(err: impl std::fmt::Display) -> Self {
        HostError::Speech(err.to_string())
    }
}
