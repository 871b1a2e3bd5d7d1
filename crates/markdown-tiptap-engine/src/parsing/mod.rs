//! # Parsing
//!
//! Markdown text in, schema-valid [`Document`] out. Parsing never fails:
//! anything that does not match a construct degrades to plain text.
//!
//! ## Pipeline
//!
//! 1. Line endings are normalized to `\n`
//! 2. `blocks::scan` groups lines into tagged candidates
//! 3. `blocks::BlockBuilder` builds block nodes, re-entering the pipeline
//!    for blockquote and list item content
//! 4. `inline::parse_inline` turns leaf text into marked runs
//! 5. `schema::enforce` repairs anything the schema forbids

pub mod blocks;
pub mod inline;
pub mod schema;
pub mod snapshot;

use crate::models::Document;

/// Tunables for a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// How many container levels (blockquotes, list items) get their
    /// content parsed as blocks. Deeper content becomes one paragraph.
    pub max_nesting_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

pub fn parse_markdown(text: &str) -> Document {
    parse_markdown_with(text, &ParseOptions::default())
}

pub fn parse_markdown_with(text: &str, options: &ParseOptions) -> Document {
    let text = normalize_newlines(text);
    let blocks = blocks::parse_blocks(&text, options, 0);
    let blocks = schema::enforce(blocks);
    log::debug!("parsed {} bytes into {} blocks", text.len(), blocks.len());
    Document::new(blocks)
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
