//! Client synchronization state machine
//!
//! Keeps at most one local operation in flight to the server. Edits made
//! while waiting for the acknowledgment are composed into a buffer and sent
//! as a single operation once the ack arrives. Remote operations are
//! transformed against all unacknowledged local work before being applied.
//!
//! | State                 | Local edit          | Ack                  | Remote op                  |
//! |-----------------------|---------------------|----------------------|----------------------------|
//! | Synchronized          | send, await ack     | -                    | apply as-is                |
//! | AwaitingAck           | start buffer        | synchronized         | transform against pending  |
//! | AwaitingAckWithBuffer | compose into buffer | send buffer          | transform against both     |

use crate::error::Result;
use crate::ot::{compose, transform, Operation};
use crate::Revision;

/// Local work not yet confirmed by the server
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncState {
    /// Nothing outstanding
    #[default]
    Synchronized,

    /// `pending` was sent and is waiting for its ack
    AwaitingAck { pending: Operation },

    /// `pending` is in flight; `buffer` collects later local edits
    AwaitingAckWithBuffer {
        pending: Operation,
        buffer: Operation,
    },
}

impl SyncState {
    /// Short name, used in logs and bindings
    pub fn name(&self) -> &'static str {
        match self {
            SyncState::Synchronized => "synchronized",
            SyncState::AwaitingAck { .. } => "awaitingAck",
            SyncState::AwaitingAckWithBuffer { .. } => "awaitingAckWithBuffer",
        }
    }

    /// Operation currently in flight, if any
    pub fn pending(&self) -> Option<&Operation> {
        match self {
            SyncState::Synchronized => None,
            SyncState::AwaitingAck { pending }
            | SyncState::AwaitingAckWithBuffer { pending, .. } => Some(pending),
        }
    }

    /// Locally composed operation waiting to be sent, if any
    pub fn buffer(&self) -> Option<&Operation> {
        match self {
            SyncState::AwaitingAckWithBuffer { buffer, .. } => Some(buffer),
            _ => None,
        }
    }
}

/// Per-document client state: last confirmed revision plus unacknowledged work
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Client {
    revision: Revision,
    state: SyncState,
}

impl Client {
    /// Create a synchronized client at the given server revision
    pub fn new(revision: Revision) -> Self {
        Self {
            revision,
            state: SyncState::Synchronized,
        }
    }

    /// Last server-confirmed revision
    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    /// Discard all local work after a fresh snapshot
    pub fn reset(&mut self, revision: Revision) {
        self.revision = revision;
        self.state = SyncState::Synchronized;
    }

    /// Adopt the revision the server reported alongside a remote operation
    pub fn set_revision(&mut self, revision: Revision) {
        self.revision = revision;
    }

    /// Register a local edit
    ///
    /// Returns the operation to send now, if any. The edit must be based on
    /// the document as the editor currently shows it.
    pub fn apply_client(&mut self, op: Operation) -> Result<Option<Operation>> {
        let (next, outgoing) = match std::mem::take(&mut self.state) {
            SyncState::Synchronized => (SyncState::AwaitingAck { pending: op.clone() }, Some(op)),
            SyncState::AwaitingAck { pending } => (
                SyncState::AwaitingAckWithBuffer {
                    pending,
                    buffer: op,
                },
                None,
            ),
            SyncState::AwaitingAckWithBuffer { pending, buffer } => {
                match compose(&buffer, &op) {
                    Ok(buffer) => (SyncState::AwaitingAckWithBuffer { pending, buffer }, None),
                    Err(err) => {
                        self.state = SyncState::AwaitingAckWithBuffer { pending, buffer };
                        return Err(err);
                    }
                }
            }
        };

        self.state = next;
        Ok(outgoing)
    }

    /// The server acknowledged our pending operation as `revision`
    ///
    /// Returns the buffered operation to send next, if any.
    pub fn server_ack(&mut self, revision: Revision) -> Option<Operation> {
        self.revision = revision;

        match std::mem::take(&mut self.state) {
            SyncState::Synchronized => {
                log::warn!("ack for revision {} with nothing pending", revision);
                None
            }
            SyncState::AwaitingAck { .. } => None,
            SyncState::AwaitingAckWithBuffer { buffer, .. } => {
                self.state = SyncState::AwaitingAck {
                    pending: buffer.clone(),
                };
                Some(buffer)
            }
        }
    }

    /// Receive an operation from another client
    ///
    /// Returns the operation to apply to the local document. On error the
    /// state is left untouched.
    pub fn apply_server(&mut self, op: Operation) -> Result<Operation> {
        let (next, to_apply) = match &self.state {
            SyncState::Synchronized => (SyncState::Synchronized, op),
            SyncState::AwaitingAck { pending } => {
                let (pending, op) = transform(pending, &op)?;
                (SyncState::AwaitingAck { pending }, op)
            }
            SyncState::AwaitingAckWithBuffer { pending, buffer } => {
                let (pending, op) = transform(pending, &op)?;
                let (buffer, op) = transform(buffer, &op)?;
                (SyncState::AwaitingAckWithBuffer { pending, buffer }, op)
            }
        };

        self.state = next;
        self.revision += 1;
        Ok(to_apply)
    }
}
