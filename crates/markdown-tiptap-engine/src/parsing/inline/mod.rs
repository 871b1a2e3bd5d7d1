//! # Inline Parsing
//!
//! Cursor-based inline parsing over the text of one leaf block (paragraph,
//! heading, or the first line of a list item after marker stripping).
//!
//! ## Architecture
//!
//! A single left-to-right scan carries a buffer of pending text and the set
//! of currently open marks:
//! - `**`/`__` toggle bold, `*`/`_` toggle italic, `~~` toggles strike
//! - an opener commits only if a closer exists later on the line
//! - code spans are raw zones: nothing inside them is scanned
//! - links recurse into their label, then add a `link` mark to every run
//! - images and `$math$` become standalone inline nodes
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` main entry point with `try_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
