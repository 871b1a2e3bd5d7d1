use super::kinds::{
    BlockImage, BlockQuote, CodeFence, FenceSig, Heading, List, ListMarker, MathBlock,
    ThematicBreak,
};

/// The kind of block a line could open, if read on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOpener {
    Fence(FenceSig),
    Math { compact: bool },
    ThematicBreak,
    BlockQuote,
    Heading,
    Image,
    ListItem(ListMarker),
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Leading whitespace width, tabs counting as four columns.
    pub indent: usize,
    pub opener: Option<LineOpener>,
}

impl LineClass<'_> {
    pub fn list_marker(&self) -> Option<&ListMarker> {
        match &self.opener {
            Some(LineOpener::ListItem(m)) => Some(m),
            _ => None,
        }
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Openers are tried in precedence order, so `- - -` is a rule rather
    /// than a list item and a `$$` line is math rather than a paragraph.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let is_blank = line.trim().is_empty();
        LineClass {
            text: line,
            is_blank,
            indent: List::indent_width(line),
            opener: if is_blank { None } else { Self::opener(line) },
        }
    }

    fn opener(line: &str) -> Option<LineOpener> {
        if let Some(sig) = CodeFence::sig(line) {
            return Some(LineOpener::Fence(sig));
        }
        if MathBlock::is_compact(line) {
            return Some(LineOpener::Math { compact: true });
        }
        if MathBlock::opens(line) {
            return Some(LineOpener::Math { compact: false });
        }
        if ThematicBreak::matches(line) {
            return Some(LineOpener::ThematicBreak);
        }
        if BlockQuote::is_quoted(line) {
            return Some(LineOpener::BlockQuote);
        }
        if Heading::parse(line).is_some() {
            return Some(LineOpener::Heading);
        }
        if BlockImage::parse(line).is_some() {
            return Some(LineOpener::Image);
        }
        List::marker(line).map(LineOpener::ListItem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn opener(line: &str) -> Option<LineOpener> {
        MarkdownLineClassifier.classify(line).opener
    }

    #[test]
    fn blank_line() {
        let lc = MarkdownLineClassifier.classify("   \t");
        assert!(lc.is_blank);
        assert_eq!(lc.opener, None);
    }

    #[test]
    fn fence_line() {
        assert!(matches!(opener("```python"), Some(LineOpener::Fence(_))));
    }

    #[rstest]
    #[case("$$x^2$$", true)]
    #[case("$$", false)]
    #[case("$$ a + b", false)]
    fn math_lines(#[case] line: &str, #[case] compact: bool) {
        assert_eq!(opener(line), Some(LineOpener::Math { compact }));
    }

    #[rstest]
    #[case("---")]
    #[case("* * *")]
    #[case("- - -")]
    #[case("___")]
    fn rule_beats_list(#[case] line: &str) {
        assert_eq!(opener(line), Some(LineOpener::ThematicBreak));
    }

    #[rstest]
    #[case("> quoted", LineOpener::BlockQuote)]
    #[case("## Heading", LineOpener::Heading)]
    #[case("![alt](src.png)", LineOpener::Image)]
    fn single_line_openers(#[case] line: &str, #[case] expected: LineOpener) {
        assert_eq!(opener(line), Some(expected));
    }

    #[test]
    fn list_item_line() {
        let lc = MarkdownLineClassifier.classify("  - [x] done");
        assert_eq!(lc.indent, 2);
        let m = lc.list_marker().unwrap();
        assert!(m.is_task());
    }

    #[rstest]
    #[case("Plain text")]
    #[case("#hashtag")]
    #[case("Costs $5 and $$ later")]
    #[case("![inline](x.png) with text")]
    #[case("$$a$$ is famous")]
    fn paragraph_lines(#[case] line: &str) {
        assert_eq!(opener(line), None);
    }
}
