/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not in the scanner.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether the line begins (after indentation) with a quote marker.
    pub fn is_quoted(line: &str) -> bool {
        line.trim_start().starts_with(Self::PREFIX)
    }

    /// Strips one level of quote marker and at most one following space.
    ///
    /// Returns `None` for lines without a marker. Deeper levels (`>> a`,
    /// `> > a`) keep their remaining markers for the nested parse.
    pub fn strip_marker(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_marker("hello"), None);
        assert!(!BlockQuote::is_quoted("hello > there"));
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_marker("> hello"), Some("hello"));
    }

    #[test]
    fn strip_keeps_nested_levels() {
        assert_eq!(BlockQuote::strip_marker("> > hello"), Some("> hello"));
        assert_eq!(BlockQuote::strip_marker(">> hello"), Some("> hello"));
    }

    #[test]
    fn strip_removes_only_one_space() {
        assert_eq!(BlockQuote::strip_marker(">   code"), Some("  code"));
        assert_eq!(BlockQuote::strip_marker(">"), Some(""));
        assert_eq!(BlockQuote::strip_marker("  > indented"), Some("indented"));
    }
}
