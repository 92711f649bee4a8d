//! WASM bindings for SyncKit OT
//!
//! This module provides JavaScript-friendly bindings for the OT engine.
//! Operations cross the boundary as JSON strings in the wire format.

pub mod bindings;
pub mod utils;

// Re-export main types
pub use bindings::WasmClient;
