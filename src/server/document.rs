//! Authoritative document state on the server

use super::engine::{Engine, JupiterEngine};
use crate::error::Result;
use crate::ot::{apply, Operation};
use crate::Revision;

/// A document together with every operation applied to it
///
/// The revision always equals the number of operations in the history.
#[derive(Debug, Clone)]
pub struct ServerDocument<G = JupiterEngine> {
    content: String,
    history: Vec<Operation>,
    engine: G,
}

impl ServerDocument<JupiterEngine> {
    /// Create a document at revision 0
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_engine(content, JupiterEngine)
    }
}

impl<G: Engine> ServerDocument<G> {
    pub fn with_engine(content: impl Into<String>, engine: G) -> Self {
        Self {
            content: content.into(),
            history: Vec::new(),
            engine,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn revision(&self) -> Revision {
        self.history.len() as Revision
    }

    pub fn history(&self) -> &[Operation] {
        &self.history
    }

    /// Accept a client operation made against `revision`
    ///
    /// Returns the operation as applied (to broadcast to the other clients)
    /// and the new revision (to acknowledge to the sender). On error the
    /// document is unchanged.
    ///
    /// An operation that rebases to a no-op is not recorded: the revision
    /// stays where it was.
    pub fn receive(&mut self, op: Operation, revision: Revision) -> Result<(Operation, Revision)> {
        let op = self.engine.transform_incoming(op, revision, &self.history)?;
        let content = apply(&self.content, &op)?;
        if op.is_noop() {
            log::trace!("no-op left document at revision {}", self.revision());
            return Ok((op, self.revision()));
        }

        self.content = content;
        self.history.push(op.clone());

        log::trace!("document now at revision {}", self.revision());
        Ok((op, self.revision()))
    }
}
