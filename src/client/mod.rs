//! Client-side synchronization
//!
//! - [`Client`] / [`SyncState`]: the three-state optimistic concurrency
//!   protocol (synchronized, awaiting ack, awaiting ack with buffer)
//! - [`Session`]: wires the protocol to an editor surface and a transport,
//!   and recovers from divergence by requesting a fresh snapshot
//!
//! Events are handled one at a time, each to completion. The network round
//! trip is modelled as state, never as a blocking call.
//!
//! # Example
//!
//! ```
//! use synckit_ot::client::{Client, SyncState};
//! use synckit_ot::Operation;
//!
//! let mut client = Client::new(0);
//!
//! // First edit goes straight out
//! let sent = client.apply_client(Operation::new().insert("a")).unwrap();
//! assert!(sent.is_some());
//!
//! // Second edit waits for the ack
//! let sent = client.apply_client(Operation::new().retain(1).insert("b")).unwrap();
//! assert!(sent.is_none());
//!
//! // Ack releases the buffer
//! let next = client.server_ack(1);
//! assert_eq!(next, Some(Operation::new().retain(1).insert("b")));
//! assert!(matches!(client.state(), SyncState::AwaitingAck { .. }));
//! ```

mod config;
mod session;
mod state;

pub use config::{SessionConfig, DEFAULT_RECONNECT_DELAY_MS};
pub use session::{EditorSurface, Session, Transport};
pub use state::{Client, SyncState};
