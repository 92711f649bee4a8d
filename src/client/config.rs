//! Session configuration

use crate::{new_document_id, DocumentID};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default delay before the connection collaborator reconnects
pub const DEFAULT_RECONNECT_DELAY_MS: u64 = 2000;

/// Settings for a collaborative editing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Document to join; a random token when not given
    pub doc_id: DocumentID,

    /// Request a fresh snapshot as soon as the engine detects divergence
    pub resync_on_error: bool,

    /// Advisory delay before reconnecting after the transport drops
    pub reconnect_delay_ms: u64,
}

impl SessionConfig {
    /// Configuration for a specific document
    pub fn for_document(doc_id: impl Into<DocumentID>) -> Self {
        Self {
            doc_id: doc_id.into(),
            ..Self::default()
        }
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            doc_id: new_document_id(),
            resync_on_error: true,
            reconnect_delay_ms: DEFAULT_RECONNECT_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.doc_id.len(), 8);
        assert!(config.resync_on_error);
        assert_eq!(config.reconnect_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"docId": "notes", "resyncOnError": false}"#).unwrap();
        assert_eq!(config.doc_id, "notes");
        assert!(!config.resync_on_error);
        assert_eq!(config.reconnect_delay_ms, DEFAULT_RECONNECT_DELAY_MS);
    }

    #[test]
    fn test_for_document() {
        let config = SessionConfig::for_document("abc");
        assert_eq!(config.doc_id, "abc");
        assert!(config.resync_on_error);
    }
}
