//! Rebasing incoming client operations onto server history

use crate::error::{Result, SyncError};
use crate::ot::{transform, Operation};
use crate::Revision;

/// Strategy for bringing a client operation up to the current revision
pub trait Engine {
    /// Transform `op`, created against `revision`, over every entry of
    /// `history` the client had not seen. The result applies to the
    /// document at revision `history.len()`.
    fn transform_incoming(
        &self,
        op: Operation,
        revision: Revision,
        history: &[Operation],
    ) -> Result<Operation>;
}

/// Jupiter-style engine: transform against each missed operation in order
#[derive(Debug, Clone, Copy, Default)]
pub struct JupiterEngine;

impl Engine for JupiterEngine {
    fn transform_incoming(
        &self,
        op: Operation,
        revision: Revision,
        history: &[Operation],
    ) -> Result<Operation> {
        let start = usize::try_from(revision)
            .ok()
            .filter(|&start| start <= history.len())
            .ok_or_else(|| {
                SyncError::Protocol(format!(
                    "invalid revision {} (history length {})",
                    revision,
                    history.len()
                ))
            })?;

        history[start..].iter().try_fold(op, |op, concurrent| {
            transform(&op, concurrent).map(|(op, _)| op)
        })
    }
}
