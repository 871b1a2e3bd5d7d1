//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser calls
//! these; it never hardcodes `` ` ``, `[`, `$` or emphasis runs itself.

pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod link;
pub mod math;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use escape::Escape;
pub use link::{Link, LinkParts};
pub use math::InlineMath;
