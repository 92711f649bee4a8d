//! Transform: rebase two concurrent operations onto each other
//!
//! Given `a` and `b` made against the same document, `transform(a, b)`
//! returns `(a', b')` such that
//!
//! ```text
//! apply(apply(doc, a), b') == apply(apply(doc, b), a')
//! ```
//!
//! When both sides insert at the same position, `a`'s text is placed first.
//! Every peer must use the same convention for the result to be identical.

use super::iter::OpIter;
use super::operation::{Component, ComponentKind, Operation};
use crate::error::{Result, SyncError};

/// Transform two concurrent operations with equal base length
///
/// # Example
///
/// ```
/// use synckit_ot::{apply, transform, Operation};
///
/// let a = Operation::new().retain(5).insert(" world");
/// let b = Operation::new().insert("say ").retain(5);
/// let (a_prime, b_prime) = transform(&a, &b).unwrap();
///
/// let left = apply(&apply("hello", &a).unwrap(), &b_prime).unwrap();
/// let right = apply(&apply("hello", &b).unwrap(), &a_prime).unwrap();
/// assert_eq!(left, "say hello world");
/// assert_eq!(left, right);
/// ```
pub fn transform(a: &Operation, b: &Operation) -> Result<(Operation, Operation)> {
    if a.base_len() != b.base_len() {
        return Err(SyncError::LengthMismatch {
            operation: "transform",
            expected: a.base_len(),
            actual: b.base_len(),
        });
    }

    let mut a_prime = Operation::new();
    let mut b_prime = Operation::new();
    let mut ia = OpIter::new(a);
    let mut ib = OpIter::new(b);

    use ComponentKind::{Delete, Insert, Retain};

    loop {
        match (ia.peek_kind(), ib.peek_kind()) {
            (None, None) => break,

            // An insert on one side is skipped over by the other
            (Some(Insert), _) => {
                if let Some(component) = ia.take_all() {
                    b_prime.push(Component::Retain(component.len()));
                    a_prime.push(component);
                }
            }
            (_, Some(Insert)) => {
                if let Some(component) = ib.take_all() {
                    a_prime.push(Component::Retain(component.len()));
                    b_prime.push(component);
                }
            }

            (None, Some(_)) | (Some(_), None) => {
                return Err(SyncError::LengthMismatch {
                    operation: "transform",
                    expected: ia.peek_len(),
                    actual: ib.peek_len(),
                });
            }

            (Some(Retain), Some(Retain)) => {
                let n = take_span(&mut ia, &mut ib);
                a_prime.push(Component::Retain(n));
                b_prime.push(Component::Retain(n));
            }
            (Some(Delete), Some(Retain)) => {
                let n = take_span(&mut ia, &mut ib);
                a_prime.push(Component::Delete(n));
            }
            (Some(Retain), Some(Delete)) => {
                let n = take_span(&mut ia, &mut ib);
                b_prime.push(Component::Delete(n));
            }
            // Both sides already removed the span
            (Some(Delete), Some(Delete)) => {
                take_span(&mut ia, &mut ib);
            }
        }
    }

    Ok((a_prime, b_prime))
}

/// Consume the shorter of the two current components from both cursors
fn take_span(ia: &mut OpIter<'_>, ib: &mut OpIter<'_>) -> usize {
    let n = ia.peek_len().min(ib.peek_len());
    ia.take(n);
    ib.take(n);
    n
}
