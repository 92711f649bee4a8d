//! Cursor over an operation that can split components on demand
//!
//! Transform and compose walk two operations whose component boundaries do
//! not line up. The iterator hands out prefixes of the current component,
//! so both sides can consume matching spans without pre-aligning.

use super::operation::{Component, ComponentKind, Operation};

/// Scratch cursor over one operation
///
/// Invariant: `offset` is strictly less than the length of the component at
/// `index`, or the cursor is exhausted.
#[derive(Debug, Clone)]
pub struct OpIter<'a> {
    ops: &'a [Component],
    index: usize,
    offset: usize,
}

impl<'a> OpIter<'a> {
    pub fn new(op: &'a Operation) -> Self {
        Self {
            ops: op.components(),
            index: 0,
            offset: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.index < self.ops.len()
    }

    /// Kind of the current component, `None` once exhausted
    pub fn peek_kind(&self) -> Option<ComponentKind> {
        self.ops.get(self.index).map(Component::kind)
    }

    /// Remaining length of the current component, 0 once exhausted
    pub fn peek_len(&self) -> usize {
        self.ops
            .get(self.index)
            .map(|c| c.len() - self.offset)
            .unwrap_or(0)
    }

    /// Consume up to `n` units of the current component
    ///
    /// `n == 0` takes the whole remainder. Returns a component of the same
    /// kind holding exactly the units taken, or `None` when exhausted.
    pub fn take(&mut self, n: usize) -> Option<Component> {
        let component = self.ops.get(self.index)?;
        let remaining = component.len() - self.offset;
        let count = if n == 0 || n >= remaining { remaining } else { n };

        let taken = match component {
            Component::Retain(_) => Component::Retain(count),
            Component::Delete(_) => Component::Delete(count),
            Component::Insert(text) => Component::Insert(char_slice(text, self.offset, count)),
        };

        if count == remaining {
            self.index += 1;
            self.offset = 0;
        } else {
            self.offset += count;
        }

        Some(taken)
    }

    /// Take the whole remainder of the current component
    pub fn take_all(&mut self) -> Option<Component> {
        self.take(0)
    }
}

/// `len` characters of `text` starting at character `start`
fn char_slice(text: &str, start: usize, len: usize) -> String {
    let mut indices = text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len()));
    let begin = indices.nth(start).unwrap_or(text.len());
    let end = if len == 0 {
        begin
    } else {
        indices.nth(len - 1).unwrap_or(text.len())
    };
    text[begin..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_iterator() {
        let op = Operation::new();
        let mut iter = OpIter::new(&op);
        assert!(!iter.has_next());
        assert_eq!(iter.peek_kind(), None);
        assert_eq!(iter.peek_len(), 0);
        assert_eq!(iter.take(3), None);
    }

    #[test]
    fn test_split_retain() {
        let op = Operation::new().retain(5).delete(2);
        let mut iter = OpIter::new(&op);

        assert_eq!(iter.take(2), Some(Component::Retain(2)));
        assert_eq!(iter.peek_kind(), Some(ComponentKind::Retain));
        assert_eq!(iter.peek_len(), 3);

        // Asking for more than remains only takes the remainder
        assert_eq!(iter.take(10), Some(Component::Retain(3)));
        assert_eq!(iter.peek_kind(), Some(ComponentKind::Delete));
        assert_eq!(iter.take_all(), Some(Component::Delete(2)));
        assert!(!iter.has_next());
    }

    #[test]
    fn test_split_insert_text() {
        let op = Operation::new().insert("abcdef");
        let mut iter = OpIter::new(&op);

        assert_eq!(iter.take(2), Some(Component::Insert("ab".to_string())));
        assert_eq!(iter.take(3), Some(Component::Insert("cde".to_string())));
        assert_eq!(iter.peek_len(), 1);
        assert_eq!(iter.take_all(), Some(Component::Insert("f".to_string())));
        assert!(!iter.has_next());
    }

    #[test]
    fn test_split_insert_multibyte() {
        let op = Operation::new().insert("héllo wörld");
        let mut iter = OpIter::new(&op);

        assert_eq!(iter.take(2), Some(Component::Insert("hé".to_string())));
        assert_eq!(iter.take(7), Some(Component::Insert("llo wör".to_string())));
        assert_eq!(iter.take_all(), Some(Component::Insert("ld".to_string())));
    }

    #[test]
    fn test_take_zero_after_partial() {
        let op = Operation::new().delete(4).retain(1);
        let mut iter = OpIter::new(&op);

        iter.take(1);
        assert_eq!(iter.take(0), Some(Component::Delete(3)));
        assert_eq!(iter.peek_kind(), Some(ComponentKind::Retain));
    }

    #[test]
    fn test_char_slice() {
        assert_eq!(char_slice("日本語テキスト", 2, 3), "語テキ");
        assert_eq!(char_slice("abc", 3, 0), "");
        assert_eq!(char_slice("abc", 0, 3), "abc");
    }
}
