//! # Schema Enforcement
//!
//! The final step of every parse. `enforce` repairs a block tree so it
//! satisfies the document schema; `check` reports the first violation in a
//! tree without changing it.
//!
//! Violations are located by a node path such as `[2].content[0]`.

pub mod check;
pub mod enforce;

pub use check::check;
pub use enforce::enforce;

use crate::models::MarkKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("{path}: {node} has no content")]
    EmptyContainer { path: String, node: &'static str },
    #[error("{path}: heading level {level} outside 1..=6")]
    HeadingLevel { path: String, level: u8 },
    #[error("{path}: empty text node")]
    EmptyText { path: String },
    #[error("{path}: text node has the same marks as the one before it")]
    UnmergedText { path: String },
    #[error("{path}: mark {mark:?} applied more than once")]
    DuplicateMark { path: String, mark: MarkKind },
}
