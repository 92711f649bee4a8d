//! Server-side authority
//!
//! The same transform primitives the client uses also serialize edits on the
//! server: each incoming operation is rebased over the history the sender
//! had not seen yet, applied, and appended. The resulting revision is what
//! the sender receives as its ack.
//!
//! Persistence and history compaction are left to the embedding server.

mod document;
mod engine;

pub use document::ServerDocument;
pub use engine::{Engine, JupiterEngine};
