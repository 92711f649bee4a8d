//! JavaScript bindings for SyncKit OT core types

use crate::client::Client;
use crate::ot::{self, Operation};
use wasm_bindgen::prelude::*;

fn parse_op(op_json: &str) -> Result<Operation, JsValue> {
    serde_json::from_str(op_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid operation JSON: {}", e)))
}

fn to_json(op: &Operation) -> Result<String, JsValue> {
    serde_json::to_string(op)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization failed: {}", e)))
}

fn js_error(err: crate::SyncError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JavaScript-friendly wrapper for the client state machine
#[wasm_bindgen]
pub struct WasmClient {
    inner: Client,
}

#[wasm_bindgen]
impl WasmClient {
    /// Create a synchronized client at the given revision
    #[wasm_bindgen(constructor)]
    pub fn new(revision: u64) -> Self {
        Self {
            inner: Client::new(revision),
        }
    }

    /// Get the last confirmed revision
    #[wasm_bindgen(js_name = revision)]
    pub fn revision(&self) -> u64 {
        self.inner.revision()
    }

    /// Get the state name ("synchronized", "awaitingAck", "awaitingAckWithBuffer")
    #[wasm_bindgen(js_name = state)]
    pub fn state(&self) -> String {
        self.inner.state().name().to_string()
    }

    /// Reset after a snapshot
    #[wasm_bindgen(js_name = reset)]
    pub fn reset(&mut self, revision: u64) {
        self.inner.reset(revision);
    }

    /// Register a local edit; returns the operation JSON to send, if any
    #[wasm_bindgen(js_name = applyClient)]
    pub fn apply_client(&mut self, op_json: String) -> Result<Option<String>, JsValue> {
        let op = parse_op(&op_json)?;
        match self.inner.apply_client(op).map_err(js_error)? {
            Some(outgoing) => to_json(&outgoing).map(Some),
            None => Ok(None),
        }
    }

    /// Handle an ack; returns the buffered operation JSON to send, if any
    #[wasm_bindgen(js_name = serverAck)]
    pub fn server_ack(&mut self, revision: u64) -> Result<Option<String>, JsValue> {
        match self.inner.server_ack(revision) {
            Some(outgoing) => to_json(&outgoing).map(Some),
            None => Ok(None),
        }
    }

    /// Handle a remote operation; returns the operation JSON to apply locally
    #[wasm_bindgen(js_name = applyServer)]
    pub fn apply_server(&mut self, op_json: String) -> Result<String, JsValue> {
        let op = parse_op(&op_json)?;
        let to_apply = self.inner.apply_server(op).map_err(js_error)?;
        to_json(&to_apply)
    }
}

/// Transform two concurrent operations; returns `[a', b']` as JSON
#[wasm_bindgen(js_name = transform)]
pub fn transform(a_json: String, b_json: String) -> Result<String, JsValue> {
    let a = parse_op(&a_json)?;
    let b = parse_op(&b_json)?;
    let pair = ot::transform(&a, &b).map_err(js_error)?;
    serde_json::to_string(&pair)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization failed: {}", e)))
}

/// Compose two sequential operations
#[wasm_bindgen(js_name = compose)]
pub fn compose(a_json: String, b_json: String) -> Result<String, JsValue> {
    let a = parse_op(&a_json)?;
    let b = parse_op(&b_json)?;
    let ab = ot::compose(&a, &b).map_err(js_error)?;
    to_json(&ab)
}

/// Apply an operation to a document
#[wasm_bindgen(js_name = apply)]
pub fn apply(doc: String, op_json: String) -> Result<String, JsValue> {
    let op = parse_op(&op_json)?;
    ot::apply(&doc, &op).map_err(js_error)
}

/// Map a cursor index through an operation
#[wasm_bindgen(js_name = transformIndex)]
pub fn transform_index(index: usize, op_json: String) -> Result<usize, JsValue> {
    let op = parse_op(&op_json)?;
    Ok(ot::transform_index(index, &op))
}
