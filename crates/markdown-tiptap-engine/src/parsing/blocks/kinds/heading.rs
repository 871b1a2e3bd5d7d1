/// ATX heading: `#` to `######` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses a heading line into its level and raw text.
    ///
    /// More than six markers fold into level 6; the markers past the sixth
    /// stay in the text. A closing run of `#` after a space is dropped.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let t = line.trim_start();
        let n = t.bytes().take_while(|&b| b == Self::MARKER).count();
        if n == 0 {
            return None;
        }
        let rest = &t[n..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }
        let level = n.min(Self::MAX_LEVEL);
        let text = t[level..].trim();
        let text = if n > Self::MAX_LEVEL {
            text
        } else {
            Self::strip_closing(text)
        };
        Some((level as u8, text))
    }

    fn strip_closing(text: &str) -> &str {
        let without = text.trim_end_matches(Self::MARKER as char);
        if without.len() == text.len() {
            return text;
        }
        if without.is_empty() {
            return "";
        }
        if without.ends_with([' ', '\t']) {
            without.trim_end()
        } else {
            text
        }
    }
}
