//! # Document Model
//!
//! Typed nodes of the rich-text document schema. Every type serializes to
//! the editor's JSON shape (`type`, `attrs`, `content`, `text`, `marks`)
//! through serde, so a built tree needs no separate rendering pass.

pub mod block;
pub mod document;
pub mod inline;
pub mod marks;

pub use block::{
    BlockNode, CodeBlockAttrs, HeadingAttrs, ImageAttrs, ListItem, TaskItem, TaskItemAttrs,
};
pub use document::{Document, TiptapDoc};
pub use inline::{InlineImageAttrs, InlineNode, MathAttrs, merge_adjacent_text};
pub use marks::{LinkAttrs, Mark, MarkKind, MarkSet};
