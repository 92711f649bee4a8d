//! Apply an operation to a document string

use super::operation::{Component, Operation};
use crate::error::{Result, SyncError};

/// Apply `op` to `doc`, producing the new document
///
/// The document must be exactly `op.base_len()` characters long; anything
/// else means the operation was computed against a different document.
pub fn apply(doc: &str, op: &Operation) -> Result<String> {
    let doc_len = doc.chars().count();
    let base = op.base_len();
    if doc_len != base {
        return Err(SyncError::InvalidOperation {
            document: doc_len,
            base,
        });
    }

    let mut output = String::with_capacity(doc.len());
    let mut chars = doc.chars();

    for component in op.components() {
        match component {
            Component::Retain(n) => output.extend(chars.by_ref().take(*n)),
            Component::Insert(text) => output.push_str(text),
            Component::Delete(n) => chars.by_ref().take(*n).for_each(drop),
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_insert() {
        let op = Operation::insert_at(5, " world", 5);
        assert_eq!(apply("hello", &op).unwrap(), "hello world");
    }

    #[test]
    fn test_apply_delete() {
        let op = Operation::delete_at(0, 1, 3);
        assert_eq!(apply("abc", &op).unwrap(), "bc");
    }

    #[test]
    fn test_apply_replace_multibyte() {
        let op = Operation::new().retain(1).delete(1).insert("ü").retain(2);
        assert_eq!(apply("Mxll", &op).unwrap(), "Müll");
        assert_eq!(apply("Mäll", &op).unwrap(), "Müll");
    }

    #[test]
    fn test_apply_empty_operation_to_empty_document() {
        assert_eq!(apply("", &Operation::new()).unwrap(), "");
    }

    #[test]
    fn test_apply_length_mismatch() {
        let op = Operation::new().retain(4);
        let err = apply("abc", &op).unwrap_err();
        assert!(matches!(
            err,
            SyncError::InvalidOperation {
                document: 3,
                base: 4
            }
        ));
    }

    #[test]
    fn test_apply_target_len() {
        let op = Operation::new().delete(2).insert("xyz").retain(1);
        let result = apply("abc", &op).unwrap();
        assert_eq!(result.chars().count(), op.target_len());
    }
}
