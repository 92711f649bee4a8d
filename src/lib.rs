//! SyncKit OT - Operational-transform sync engine
//!
//! This crate lets several editors change one plain-text document at the
//! same time and converge on identical text without a central lock.
//! It implements:
//! - Operations made of retain/insert/delete components
//! - `transform`, `compose` and `apply` over those operations
//! - The client synchronization state machine (one operation in flight)
//! - The JSON wire protocol and a session wiring it all to an editor
//! - A reference server document that rebases incoming operations
//!
//! # Examples
//!
//! ```rust
//! use synckit_ot::{apply, transform, Operation};
//!
//! // Two clients edit "hello" concurrently
//! let a = Operation::new().retain(5).insert(" world");
//! let b = Operation::new().insert("say ").retain(5);
//!
//! let (a_prime, b_prime) = transform(&a, &b).unwrap();
//! let on_a = apply(&apply("hello", &a).unwrap(), &b_prime).unwrap();
//! let on_b = apply(&apply("hello", &b).unwrap(), &a_prime).unwrap();
//!
//! assert_eq!(on_a, "say hello world");
//! assert_eq!(on_a, on_b);
//! ```

pub mod client;
pub mod error;
pub mod ot;
pub mod presence;
pub mod protocol;
pub mod server;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use client::{Client, Session, SessionConfig, SyncState};
pub use error::{Result, SyncError};
pub use ot::{apply, compose, transform, transform_index, Component, Operation, TextChange};

/// Document identifier type (opaque, session-scoped token)
pub type DocumentID = String;

/// Server-assigned document version
pub type Revision = u64;

/// Generate a fresh random document token
///
/// Tokens are 8 lowercase hex characters, short enough to share in a URL.
pub fn new_document_id() -> DocumentID {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}
