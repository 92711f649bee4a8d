//! Error types for the sync engine

use thiserror::Error;

/// Result type for SyncKit OT operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors raised by the OT engine and the client session
#[derive(Error, Debug)]
pub enum SyncError {
    /// Two operations were combined whose lengths do not line up
    ///
    /// Raised by `transform` (base lengths differ) and `compose` (target
    /// length of the first differs from the base length of the second).
    #[error("{operation}: length mismatch (expected {expected}, got {actual})")]
    LengthMismatch {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An operation was applied to a document of the wrong length
    #[error("invalid operation: document length {document} != operation base length {base}")]
    InvalidOperation { document: usize, base: usize },

    /// Malformed or unexpected wire message
    #[error("protocol error: {0}")]
    Protocol(String),

    /// JSON encoding or decoding failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The transport collaborator could not deliver a message
    #[error("transport error: {0}")]
    Transport(String),
}

impl SyncError {
    /// Whether recovering from this error needs a fresh document snapshot.
    ///
    /// Transport failures are recovered by reconnecting, which re-joins the
    /// document anyway.
    pub fn requires_resync(&self) -> bool {
        match self {
            SyncError::LengthMismatch { .. }
            | SyncError::InvalidOperation { .. }
            | SyncError::Protocol(_)
            | SyncError::Serialization(_) => true,
            SyncError::Transport(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = SyncError::LengthMismatch {
            operation: "transform",
            expected: 5,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "transform: length mismatch (expected 5, got 3)"
        );
        assert!(err.requires_resync());
    }

    #[test]
    fn test_serialization_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SyncError = json_err.into();
        assert!(matches!(err, SyncError::Serialization(_)));
        assert!(err.requires_resync());
    }

    #[test]
    fn test_transport_error_needs_no_resync() {
        let err = SyncError::Transport("connection closed".to_string());
        assert_eq!(err.to_string(), "transport error: connection closed");
        assert!(!err.requires_resync());
        assert!(SyncError::Protocol("bad".to_string()).requires_resync());
    }
}
