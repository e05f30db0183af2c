use reqwest::StatusCode;
use shelfmark_keystore::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Any non-2xx answer the refresh flow does not absorb.
    #[error("request failed: {status} {body}")]
    Status { status: StatusCode, body: String },
    /// The session could not be refreshed; stored tokens have been cleared.
    #[error("authentication required; log in again")]
    AuthenticationRequired,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_authentication_required(&self) -> bool {
        matches!(self, Self::AuthenticationRequired)
    }
}
