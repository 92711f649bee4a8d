//! Compose: collapse two sequential operations into one
//!
//! `compose(a, b)` produces `ab` with `apply(doc, ab) == apply(apply(doc, a), b)`.
//! The client uses it to fold new local edits into the buffered operation
//! while an earlier edit is still waiting for its acknowledgment.

use super::iter::OpIter;
use super::operation::{Component, ComponentKind, Operation};
use crate::error::{Result, SyncError};

/// Compose `a` followed by `b`
///
/// Requires `a.target_len() == b.base_len()`.
///
/// # Example
///
/// ```
/// use synckit_ot::{compose, Operation};
///
/// let a = Operation::new().delete(3);
/// let b = Operation::new().insert("x");
/// let ab = compose(&a, &b).unwrap();
///
/// assert_eq!(ab, Operation::new().delete(3).insert("x"));
/// assert_eq!(ab.base_len(), 3);
/// ```
pub fn compose(a: &Operation, b: &Operation) -> Result<Operation> {
    if a.target_len() != b.base_len() {
        return Err(SyncError::LengthMismatch {
            operation: "compose",
            expected: a.target_len(),
            actual: b.base_len(),
        });
    }

    let mut result = Operation::new();
    let mut ia = OpIter::new(a);
    let mut ib = OpIter::new(b);

    use ComponentKind::{Delete, Insert, Retain};

    loop {
        match (ia.peek_kind(), ib.peek_kind()) {
            (None, None) => break,

            // Deleted by `a`: never reaches `b`'s input
            (Some(Delete), _) => {
                if let Some(component) = ia.take_all() {
                    result.push(component);
                }
            }
            // Inserted by `b`: consumes nothing from `a`'s output
            (_, Some(Insert)) => {
                if let Some(component) = ib.take_all() {
                    result.push(component);
                }
            }

            (None, Some(_)) | (Some(_), None) => {
                return Err(SyncError::LengthMismatch {
                    operation: "compose",
                    expected: ia.peek_len(),
                    actual: ib.peek_len(),
                });
            }

            (Some(Retain), Some(Retain)) => {
                let n = ia.peek_len().min(ib.peek_len());
                ia.take(n);
                ib.take(n);
                result.push(Component::Retain(n));
            }
            (Some(Retain), Some(Delete)) => {
                let n = ia.peek_len().min(ib.peek_len());
                ia.take(n);
                ib.take(n);
                result.push(Component::Delete(n));
            }
            (Some(Insert), Some(Retain)) => {
                let n = ia.peek_len().min(ib.peek_len());
                ib.take(n);
                if let Some(inserted) = ia.take(n) {
                    result.push(inserted);
                }
            }
            // Text inserted by `a` and removed again by `b` cancels out
            (Some(Insert), Some(Delete)) => {
                let n = ia.peek_len().min(ib.peek_len());
                ia.take(n);
                ib.take(n);
            }
        }
    }

    Ok(result)
}
