/// Link and image syntax: `[label](href "title")` and `![alt](src "title")`.
pub struct Link;

/// The pieces of a bracketed link or image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParts<'a> {
    /// Raw text between the brackets.
    pub label: &'a str,
    pub href: String,
    pub title: Option<String>,
    /// Byte offset just past the closing `)`.
    pub end: usize,
}

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
    pub const IMAGE_BANG: u8 = b'!';
    /// Link labels nested deeper than this are kept as literal text.
    pub const MAX_LABEL_DEPTH: usize = 32;

    /// Scans a link whose `[` sits at byte `open` of `s`.
    ///
    /// Brackets and parentheses may nest; a backslash escapes the next byte.
    /// Returns `None` unless the label is closed and immediately followed by
    /// a closed destination.
    pub fn scan(s: &str, open: usize) -> Option<LinkParts<'_>> {
        let b = s.as_bytes();
        if b.get(open) != Some(&Self::OPEN) {
            return None;
        }
        let label_end = Self::matching(b, open, Self::OPEN, Self::CLOSE)?;
        let dest_open = label_end + 1;
        if b.get(dest_open) != Some(&Self::DEST_OPEN) {
            return None;
        }
        let dest_end = Self::matching(b, dest_open, Self::DEST_OPEN, Self::DEST_CLOSE)?;
        let (href, title) = Self::split_destination(&s[dest_open + 1..dest_end]);
        Some(LinkParts {
            label: &s[open + 1..label_end],
            href,
            title,
            end: dest_end + 1,
        })
    }

    fn matching(b: &[u8], open_at: usize, open: u8, close: u8) -> Option<usize> {
        let mut depth = 0usize;
        let mut i = open_at;
        while i < b.len() {
            match b[i] {
                b'\\' => i += 1,
                c if c == open => depth += 1,
                c if c == close => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        None
    }

    /// Splits `url "title"` into its parts. `<url>` loses its angle brackets.
    fn split_destination(raw: &str) -> (String, Option<String>) {
        let raw = raw.trim();
        let (url, rest) = match raw.find(char::is_whitespace) {
            Some(idx) => (&raw[..idx], raw[idx..].trim()),
            None => (raw, ""),
        };
        let url = url
            .strip_prefix('<')
            .and_then(|u| u.strip_suffix('>'))
            .unwrap_or(url);
        let title = [('"', '"'), ('\'', '\''), ('(', ')')]
            .iter()
            .find_map(|&(l, r)| rest.strip_prefix(l)?.strip_suffix(r))
            .map(str::to_string);
        (url.to_string(), title)
    }
}
