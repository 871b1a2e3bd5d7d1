/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters: they are the default leaf block when no
/// other block opener matches.
pub struct Paragraph;

impl Paragraph {
    /// Joins the lines of a paragraph into one inline source string.
    ///
    /// Each line is trimmed and the soft line breaks collapse to one space.
    pub fn join<S: AsRef<str>>(lines: &[S]) -> String {
        lines
            .iter()
            .map(|l| l.as_ref().trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_space() {
        assert_eq!(Paragraph::join(&["one  ", "  two", "three"]), "one two three");
    }

    #[test]
    fn single_line() {
        assert_eq!(Paragraph::join(&["  only "]), "only");
    }
}
