use std::sync::LazyLock;

use regex::Regex;

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)([-*+])(?:[ \t]+|$)").expect("bullet regex"));
static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)(\d{1,9})\.(?:[ \t]+|$)").expect("ordered regex"));
static CHECKBOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([ xX]?)\](?:[ \t]+|$)").expect("checkbox regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Bullet(char),
    Ordered(u32),
}

impl MarkerKind {
    pub fn is_ordered(self) -> bool {
        matches!(self, MarkerKind::Ordered(_))
    }

    /// Bullets and ordered numbers form separate list families.
    pub fn same_family(self, other: MarkerKind) -> bool {
        self.is_ordered() == other.is_ordered()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkbox {
    pub checked: bool,
    /// Byte offset of the item text after the checkbox.
    pub content_offset: usize,
}

/// A list item marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    /// Indentation width before the marker (tab = 4).
    pub indent: usize,
    pub kind: MarkerKind,
    /// Byte offset of the item text after the marker.
    pub content_offset: usize,
    /// Present only on bullet items.
    pub checkbox: Option<Checkbox>,
}

impl ListMarker {
    pub fn is_task(&self) -> bool {
        self.checkbox.is_some()
    }
}

pub struct List;

impl List {
    pub const TAB_WIDTH: usize = 4;

    pub fn marker(line: &str) -> Option<ListMarker> {
        if let Some(caps) = BULLET.captures(line) {
            let bullet = caps[2].chars().next()?;
            let content_offset = caps.get(0)?.end();
            let checkbox = CHECKBOX
                .captures(&line[content_offset..])
                .and_then(|c| {
                    Some(Checkbox {
                        checked: matches!(&c[1], "x" | "X"),
                        content_offset: content_offset + c.get(0)?.end(),
                    })
                });
            return Some(ListMarker {
                indent: Self::indent_width(&caps[1]),
                kind: MarkerKind::Bullet(bullet),
                content_offset,
                checkbox,
            });
        }
        let caps = ORDERED.captures(line)?;
        Some(ListMarker {
            indent: Self::indent_width(&caps[1]),
            kind: MarkerKind::Ordered(caps[2].parse().ok()?),
            content_offset: caps.get(0)?.end(),
            checkbox: None,
        })
    }

    /// Width of leading whitespace, counting a tab as four columns.
    pub fn indent_width(line: &str) -> usize {
        line.chars()
            .take_while(|c| matches!(c, ' ' | '\t'))
            .map(|c| if c == '\t' { Self::TAB_WIDTH } else { 1 })
            .sum()
    }

    /// Removes `width` columns of leading whitespace.
    pub fn dedent(line: &str, width: usize) -> &str {
        let mut col = 0;
        for (idx, c) in line.char_indices() {
            if col >= width {
                return &line[idx..];
            }
            match c {
                ' ' => col += 1,
                '\t' => col += Self::TAB_WIDTH,
                _ => return &line[idx..],
            }
        }
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", MarkerKind::Bullet('-'), 0, 2)]
    #[case("* item", MarkerKind::Bullet('*'), 0, 2)]
    #[case("+ item", MarkerKind::Bullet('+'), 0, 2)]
    #[case("  - nested", MarkerKind::Bullet('-'), 2, 4)]
    #[case("\t- tabbed", MarkerKind::Bullet('-'), 4, 3)]
    #[case("1. first", MarkerKind::Ordered(1), 0, 3)]
    #[case("42.  spaced", MarkerKind::Ordered(42), 0, 5)]
    fn detects_markers(
        #[case] line: &str,
        #[case] kind: MarkerKind,
        #[case] indent: usize,
        #[case] offset: usize,
    ) {
        let m = List::marker(line).unwrap();
        assert_eq!(m.kind, kind);
        assert_eq!(m.indent, indent);
        assert_eq!(m.content_offset, offset);
    }

    #[rstest]
    #[case("plain text")]
    #[case("*emphasis* start")]
    #[case("**bold** start")]
    #[case("-1 degrees")]
    #[case("1) paren")]
    #[case("1.5 million")]
    fn rejects_non_markers(#[case] line: &str) {
        assert_eq!(List::marker(line), None);
    }

    #[test]
    fn bare_marker_is_empty_item() {
        let m = List::marker("2.").unwrap();
        assert_eq!(m.content_offset, 2);
        assert_eq!(List::marker("-").unwrap().kind, MarkerKind::Bullet('-'));
    }

    #[rstest]
    #[case("- [ ] todo", false)]
    #[case("- [x] done", true)]
    #[case("- [X] done", true)]
    #[case("- [] empty", false)]
    fn detects_checkboxes(#[case] line: &str, #[case] checked: bool) {
        let m = List::marker(line).unwrap();
        let cb = m.checkbox.unwrap();
        assert_eq!(cb.checked, checked);
        assert!(line[cb.content_offset..].starts_with(char::is_alphabetic));
    }

    #[test]
    fn checkbox_text_offset() {
        let line = "- [x] Second item";
        let cb = List::marker(line).unwrap().checkbox.unwrap();
        assert_eq!(&line[cb.content_offset..], "Second item");
    }

    #[test]
    fn ordered_items_never_carry_checkboxes() {
        assert_eq!(List::marker("1. [x] not a task").unwrap().checkbox, None);
    }

    #[test]
    fn bracket_text_is_not_a_checkbox() {
        assert_eq!(List::marker("- [link](x)").unwrap().checkbox, None);
    }

    #[test]
    fn dedent_counts_tabs() {
        assert_eq!(List::dedent("    text", 2), "  text");
        assert_eq!(List::dedent("\ttext", 4), "text");
        assert_eq!(List::dedent("  text", 4), "text");
        assert_eq!(List::indent_width(" \t x"), 6);
    }
}
