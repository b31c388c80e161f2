//! Error type shared by the adapter layer and the typed API.

/// Failure while talking to a backend.
///
/// Application-level failures (`{ok: false, error: ...}`) are not errors at
/// this layer; they surface as [`super::types::WriteOutcome::Rejected`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("transport failure: {0}")]
    Transport(String),
    /// A response arrived but did not have the expected JSON shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The backend cannot run in this environment (server-side rendering).
    #[error("backend unavailable: {0}")]
    Unavailable(&'static str),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Static text shown in place of a result when a request fails.
pub const REQUEST_FAILED: &str = "Request failed.";

impl ApiError {
    /// Log the failure and return the text the UI shows instead.
    #[must_use]
    pub fn user_message(&self, context: &str) -> &'static str {
        log::warn!("{context}: {self}");
        REQUEST_FAILED
    }
}
