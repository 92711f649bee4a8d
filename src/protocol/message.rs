//! Wire messages exchanged with the collaboration server
//!
//! Messages are JSON objects discriminated by a `type` field. Field names
//! are fixed for interoperability with existing clients and servers.

use crate::ot::Operation;
use crate::{DocumentID, Revision};
use serde::{Deserialize, Serialize};

/// A connected user, as listed in a document snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Message sent from a client to the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    /// Subscribe to a document and request its snapshot
    Join {
        #[serde(rename = "docId")]
        doc_id: DocumentID,
    },

    /// Submit a local operation made against `revision`
    Op {
        #[serde(rename = "docId")]
        doc_id: DocumentID,
        revision: Revision,
        op: Operation,
    },
}

/// Message sent from the server to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    /// Full document snapshot; resets client state
    Doc {
        revision: Revision,
        #[serde(default)]
        content: String,
        #[serde(default)]
        clients: Vec<ClientInfo>,
    },

    /// Our pending operation was applied as `revision`
    Ack { revision: Revision },

    /// Another client's operation, producing `revision`
    Op { op: Operation, revision: Revision },

    /// A user joined the document
    Join {
        #[serde(rename = "clientId")]
        client_id: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        color: String,
    },

    /// A user left the document
    Leave {
        #[serde(rename = "clientId")]
        client_id: String,
    },

    /// The server rejected something we sent
    Error {
        #[serde(default)]
        message: String,
    },
}

impl ServerMessage {
    /// The `type` tag of this message
    pub fn kind(&self) -> &'static str {
        match self {
            ServerMessage::Doc { .. } => "doc",
            ServerMessage::Ack { .. } => "ack",
            ServerMessage::Op { .. } => "op",
            ServerMessage::Join { .. } => "join",
            ServerMessage::Leave { .. } => "leave",
            ServerMessage::Error { .. } => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_shape() {
        let msg = ClientMessage::Join {
            doc_id: "abc123".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"type": "join", "docId": "abc123"})
        );
    }

    #[test]
    fn test_op_shape() {
        let msg = ClientMessage::Op {
            doc_id: "abc123".to_string(),
            revision: 4,
            op: Operation::new().retain(2).insert("x"),
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "type": "op",
                "docId": "abc123",
                "revision": 4,
                "op": {"ops": [{"retain": 2}, {"insert": "x"}]}
            })
        );
    }

    #[test]
    fn test_parse_doc_snapshot() {
        let msg: ServerMessage = serde_json::from_value(json!({
            "type": "doc",
            "docId": "abc123",
            "revision": 7,
            "content": "hello",
            "clients": [{"id": "c1", "name": "Alice", "color": "#e91e63"}]
        }))
        .unwrap();

        assert_eq!(
            msg,
            ServerMessage::Doc {
                revision: 7,
                content: "hello".to_string(),
                clients: vec![ClientInfo {
                    id: "c1".to_string(),
                    name: "Alice".to_string(),
                    color: "#e91e63".to_string(),
                }],
            }
        );
        assert_eq!(msg.kind(), "doc");
    }

    #[test]
    fn test_parse_empty_snapshot_defaults() {
        let msg: ServerMessage =
            serde_json::from_value(json!({"type": "doc", "revision": 0})).unwrap();
        assert_eq!(
            msg,
            ServerMessage::Doc {
                revision: 0,
                content: String::new(),
                clients: Vec::new(),
            }
        );
    }

    #[test]
    fn test_parse_ack_ignores_extra_fields() {
        let msg: ServerMessage =
            serde_json::from_value(json!({"type": "ack", "content": "", "revision": 3})).unwrap();
        assert_eq!(msg, ServerMessage::Ack { revision: 3 });
    }

    #[test]
    fn test_parse_remote_op() {
        let msg: ServerMessage = serde_json::from_value(json!({
            "type": "op",
            "docId": "abc123",
            "clientId": "c2",
            "revision": 9,
            "op": {"ops": [{"delete": 1}, {"retain": 4}]}
        }))
        .unwrap();
        assert_eq!(
            msg,
            ServerMessage::Op {
                op: Operation::new().delete(1).retain(4),
                revision: 9,
            }
        );
    }

    #[test]
    fn test_parse_remote_op_with_null_ops() {
        // Two peers deleted the same span: the rebased op compacts to nothing
        let msg: ServerMessage = serde_json::from_str(
            r#"{"type":"op","docId":"d","content":"","revision":1,"op":{"ops":null},"clientId":"c2"}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            ServerMessage::Op {
                op: Operation::new(),
                revision: 1,
            }
        );
    }

    #[test]
    fn test_parse_presence_and_error() {
        let join: ServerMessage = serde_json::from_value(
            json!({"type": "join", "clientId": "c3", "name": "Bob", "color": "#2196f3"}),
        )
        .unwrap();
        assert_eq!(join.kind(), "join");

        let leave: ServerMessage =
            serde_json::from_value(json!({"type": "leave", "clientId": "c3"})).unwrap();
        assert_eq!(
            leave,
            ServerMessage::Leave {
                client_id: "c3".to_string()
            }
        );

        let error: ServerMessage =
            serde_json::from_value(json!({"type": "error", "message": "transform error"})).unwrap();
        assert_eq!(
            error,
            ServerMessage::Error {
                message: "transform error".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result = serde_json::from_value::<ServerMessage>(json!({"type": "bogus"}));
        assert!(result.is_err());
    }
}
