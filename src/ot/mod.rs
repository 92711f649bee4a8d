//! Operational transformation for plain text
//!
//! This module contains the pure OT primitives shared by client and server:
//!
//! - **Operation:** retain/insert/delete components, always compacted
//! - **Iterator:** splits components on demand so two operations can be
//!   walked in lockstep
//! - **Transform:** rebases concurrent operations so they commute
//! - **Compose:** folds two sequential operations into one
//! - **Apply / transform_index:** run an operation against a document or a cursor
//!
//! All lengths are counted in Unicode scalar values.
//!
//! # Properties
//!
//! - **Convergence:** `apply(apply(d, a), b') == apply(apply(d, b), a')`
//! - **Composition:** `apply(d, compose(a, b)) == apply(apply(d, a), b)`
//!
//! # References
//!
//! - "High-latency, low-bandwidth windowing in the Jupiter collaboration system"
//!   (Nichols et al., UIST 1995)

mod apply;
mod compose;
mod index;
mod iter;
mod operation;
mod transform;

pub use apply::apply;
pub use compose::compose;
pub use index::transform_index;
pub use iter::OpIter;
pub use operation::{compact, Component, ComponentKind, Operation, TextChange};
pub use transform::transform;
