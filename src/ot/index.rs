//! Map a cursor offset through an operation

use super::operation::{Component, Operation};

/// Map `index` in the document before `op` to the same place after it
///
/// Inserts at or before the cursor push it forward; inserts after it do not.
/// A delete spanning the cursor pulls it back to the start of the deletion.
/// The result always lies in `0..=op.target_len()`.
pub fn transform_index(index: usize, op: &Operation) -> usize {
    let mut pos = 0;
    let mut inserted = 0;
    let mut removed = 0;

    for component in op.components() {
        if pos > index {
            break;
        }
        match component {
            Component::Retain(n) => pos += n,
            Component::Insert(text) => inserted += text.chars().count(),
            Component::Delete(n) => {
                if pos + n <= index {
                    removed += n;
                } else {
                    removed += index - pos;
                }
                pos += n;
            }
        }
    }

    (index + inserted - removed).min(op.target_len())
}
