use crate::models::ImageAttrs;
use crate::parsing::inline::kinds::Link;

/// A line holding nothing but `![alt](src "title")`.
pub struct BlockImage;

impl BlockImage {
    pub const OPEN: &'static str = "![";

    pub fn parse(line: &str) -> Option<ImageAttrs> {
        let t = line.trim();
        if !t.starts_with(Self::OPEN) {
            return None;
        }
        let parts = Link::scan(t, 1)?;
        if parts.end != t.len() {
            return None;
        }
        Some(ImageAttrs {
            src: parts.href,
            alt: parts.label.to_string(),
            title: parts.title,
        })
    }
}
