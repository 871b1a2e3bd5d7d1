//! # Block Parsing
//!
//! Two-phase block parsing with recursive re-entry for containers.
//!
//! ## Parsing Phases
//!
//! 1. **Scanning** (`classify`, `scan`): each line is classified on local
//!    facts, then consecutive lines are grouped into tagged `Candidate`s
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` turns each
//!    candidate into a `BlockNode`. Blockquotes and list items strip their
//!    markers and feed the inner text back through the whole block parser.
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`scan`**: `scan()` groups lines into candidates
//! - **`builder`**: `BlockBuilder` and the `parse_blocks()` entry point
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Nesting recurses up to `ParseOptions::max_nesting_depth`

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod scan;

pub use builder::{BlockBuilder, parse_blocks};
pub use classify::{LineClass, LineOpener, MarkdownLineClassifier};
pub use scan::{BlockTag, Candidate, scan};
