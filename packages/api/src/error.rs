//! Error type shared by every client call.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the QuoteShelf client.
///
/// Nothing here is fatal: transport failures and backend rejections are both
/// recoverable by retrying or re-logging-in, and the client never swallows
/// them on the way to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The call never completed: connection refused, DNS failure, or a broken
    /// response body inside the transport.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `Display` is the
    /// backend-supplied message, so a login rejection like "Invalid login"
    /// renders to the user as-is.
    #[error("{message}")]
    Backend { status: StatusCode, message: String },
}

impl ApiError {
    /// True when the backend rejected the caller's authentication (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Backend { status, .. } if *status == StatusCode::UNAUTHORIZED
        )
    }
}
