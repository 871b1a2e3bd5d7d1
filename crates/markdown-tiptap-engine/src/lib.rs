pub mod io;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use io::{IoError, read_markdown, read_markdown_from};
pub use models::*;
pub use parsing::{ParseOptions, parse_markdown, parse_markdown_with};
