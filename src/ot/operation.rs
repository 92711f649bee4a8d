//! Operation: an ordered sequence of retain/insert/delete components
//!
//! Components walk a cursor through the base document from left to right:
//! - `Retain(n)` copies the next `n` characters
//! - `Insert(s)` emits `s` without consuming anything
//! - `Delete(n)` skips the next `n` characters
//!
//! Every producer keeps operations *compacted*: no zero-length components and
//! no two adjacent components of the same kind.

use serde::{Deserialize, Serialize};

/// Kind of a component, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Retain,
    Insert,
    Delete,
}

/// A single step of an operation
///
/// Serializes as `{"retain": n}`, `{"insert": "text"}` or `{"delete": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    /// Keep the next `n` characters of the base document
    Retain(usize),
    /// Insert text at the cursor
    Insert(String),
    /// Remove the next `n` characters of the base document
    Delete(usize),
}

impl Component {
    /// Kind of this component
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Retain(_) => ComponentKind::Retain,
            Component::Insert(_) => ComponentKind::Insert,
            Component::Delete(_) => ComponentKind::Delete,
        }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        match self {
            Component::Retain(n) | Component::Delete(n) => *n,
            Component::Insert(text) => text.chars().count(),
        }
    }

    /// Zero-length components never survive compaction
    pub fn is_empty(&self) -> bool {
        match self {
            Component::Retain(n) | Component::Delete(n) => *n == 0,
            Component::Insert(text) => text.is_empty(),
        }
    }
}

/// A single editor change expressed as a range replacement
///
/// `from` and `removed` are in characters of the document before the change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextChange {
    pub from: usize,
    pub removed: usize,
    pub inserted: String,
}

/// An edit to a plain-text document
///
/// # Example
///
/// ```
/// use synckit_ot::{apply, Operation};
///
/// let op = Operation::new().retain(5).insert(" world");
/// assert_eq!(op.base_len(), 5);
/// assert_eq!(op.target_len(), 11);
/// assert_eq!(apply("hello", &op).unwrap(), "hello world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawOperation")]
pub struct Operation {
    ops: Vec<Component>,
}

/// Wire shape accepted before normalization
///
/// Peers send `"ops": null` for an operation that compacted to nothing.
#[derive(Deserialize)]
struct RawOperation {
    #[serde(default)]
    ops: Option<Vec<Component>>,
}

impl From<RawOperation> for Operation {
    fn from(raw: RawOperation) -> Self {
        Operation::from(raw.ops.unwrap_or_default())
    }
}

impl From<Vec<Component>> for Operation {
    fn from(components: Vec<Component>) -> Self {
        Self {
            ops: compact(components),
        }
    }
}

impl FromIterator<Component> for Operation {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        let mut op = Operation::new();
        for component in iter {
            op.push(component);
        }
        op
    }
}

impl Operation {
    /// Create an empty operation (base and target length 0)
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Append a retain, merging with a trailing retain
    pub fn retain(mut self, n: usize) -> Self {
        self.push(Component::Retain(n));
        self
    }

    /// Append an insert, merging with a trailing insert
    pub fn insert(mut self, text: impl Into<String>) -> Self {
        self.push(Component::Insert(text.into()));
        self
    }

    /// Append a delete, merging with a trailing delete
    pub fn delete(mut self, n: usize) -> Self {
        self.push(Component::Delete(n));
        self
    }

    /// Append a component, keeping the operation compacted
    ///
    /// Zero-length components are dropped silently.
    pub fn push(&mut self, component: Component) {
        if component.is_empty() {
            return;
        }

        if let Some(last) = self.ops.last_mut() {
            match (last, &component) {
                (Component::Retain(last), Component::Retain(n))
                | (Component::Delete(last), Component::Delete(n)) => {
                    *last += n;
                    return;
                }
                (Component::Insert(last), Component::Insert(text)) => {
                    last.push_str(text);
                    return;
                }
                _ => {}
            }
        }
        self.ops.push(component);
    }

    /// Operation inserting `text` at `pos` in a document of `doc_len` characters
    pub fn insert_at(pos: usize, text: impl Into<String>, doc_len: usize) -> Self {
        Operation::new()
            .retain(pos)
            .insert(text)
            .retain(doc_len.saturating_sub(pos))
    }

    /// Operation deleting `count` characters at `pos` in a document of `doc_len` characters
    pub fn delete_at(pos: usize, count: usize, doc_len: usize) -> Self {
        Operation::new()
            .retain(pos)
            .delete(count)
            .retain(doc_len.saturating_sub(pos + count))
    }

    /// Build the operation for one editor change against a `base_len` document
    ///
    /// The removed span is deleted before the inserted text is emitted.
    pub fn from_change(change: &TextChange, base_len: usize) -> Self {
        Operation::new()
            .retain(change.from)
            .delete(change.removed)
            .insert(change.inserted.as_str())
            .retain(base_len.saturating_sub(change.from + change.removed))
    }

    /// Components in order
    pub fn components(&self) -> &[Component] {
        &self.ops
    }

    /// Consume the operation, returning its components
    pub fn into_components(self) -> Vec<Component> {
        self.ops
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True for the empty operation
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Length of the document this operation expects as input
    pub fn base_len(&self) -> usize {
        self.ops
            .iter()
            .map(|c| match c {
                Component::Retain(n) | Component::Delete(n) => *n,
                Component::Insert(_) => 0,
            })
            .sum()
    }

    /// Length of the document this operation produces
    pub fn target_len(&self) -> usize {
        self.ops
            .iter()
            .map(|c| match c {
                Component::Retain(n) => *n,
                Component::Insert(text) => text.chars().count(),
                Component::Delete(_) => 0,
            })
            .sum()
    }

    /// True if applying the operation leaves every document unchanged
    pub fn is_noop(&self) -> bool {
        self.ops
            .iter()
            .all(|c| matches!(c, Component::Retain(_)))
    }
}

/// Merge adjacent components of the same kind and drop empty ones
///
/// Idempotent: compacting an already compacted list returns it unchanged.
pub fn compact(components: Vec<Component>) -> Vec<Component> {
    let mut op = Operation {
        ops: Vec::with_capacity(components.len()),
    };
    for component in components {
        op.push(component);
    }
    op.ops
}
