// ============================================================================
// ERRORS - Failure taxonomy of the board client
// ============================================================================

use thiserror::Error;

pub type BoardResult<T> = Result<T, BoardError>;

/// Every failure the board can surface. None of them is fatal: each one ends
/// the current operation and is reported through a toast.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Bad email/password, or a mutation attempted while signed out
    #[error("{0}")]
    Unauthorized(String),

    /// Missing form input, rejected before any network call
    #[error("{0}")]
    Validation(String),

    /// Transport failure or non-2xx status
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON envelope
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The endpoint answered `success: false`
    #[error("Request rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl BoardError {
    /// Text shown to the user. Server rejections surface their own message;
    /// transport and protocol failures collapse to `fallback`.
    pub fn user_message(&self, rejected_fallback: &str, fallback: &str) -> String {
        match self {
            BoardError::Unauthorized(msg)
            | BoardError::Validation(msg)
            | BoardError::NotFound(msg) => msg.clone(),
            BoardError::Rejected(Some(msg)) if !msg.is_empty() => msg.clone(),
            BoardError::Rejected(_) => rejected_fallback.to_string(),
            BoardError::Network(_) | BoardError::Protocol(_) | BoardError::Storage(_) => {
                fallback.to_string()
            }
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::Protocol(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_prefers_server_message() {
        let err = BoardError::Rejected(Some("Invalid token".into()));
        assert_eq!(err.user_message("Failed to save link.", "Error uploading link."), "Invalid token");

        let err = BoardError::Rejected(None);
        assert_eq!(err.user_message("Failed to save link.", "Error uploading link."), "Failed to save link.");
    }

    #[test]
    fn transport_failures_use_generic_text() {
        let err = BoardError::Network("HTTP 500".into());
        assert_eq!(err.user_message("Failed to delete link", "Error deleting link"), "Error deleting link");

        let err = BoardError::Protocol("Invalid JSON response: <html>".into());
        assert_eq!(err.user_message("Failed to delete link", "Error deleting link"), "Error deleting link");
    }
}
