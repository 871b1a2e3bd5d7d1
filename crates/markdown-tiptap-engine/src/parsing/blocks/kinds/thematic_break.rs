/// Horizontal rule: three or more of `-`, `*` or `_`, optionally spaced.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_COUNT: usize = 3;

    pub fn matches(line: &str) -> bool {
        let mut marks = line.chars().filter(|c| !matches!(c, ' ' | '\t'));
        let Some(first) = marks.next() else {
            return false;
        };
        if !Self::CHARS.contains(&first) {
            return false;
        }
        let mut count = 1;
        for c in marks {
            if c != first {
                return false;
            }
            count += 1;
        }
        count >= Self::MIN_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rules() {
        assert!(ThematicBreak::matches("---"));
        assert!(ThematicBreak::matches("***"));
        assert!(ThematicBreak::matches("___"));
        assert!(ThematicBreak::matches("-----"));
    }

    #[test]
    fn spaced_rules() {
        assert!(ThematicBreak::matches("- - -"));
        assert!(ThematicBreak::matches(" *  *  * "));
    }

    #[test]
    fn not_rules() {
        assert!(!ThematicBreak::matches("--"));
        assert!(!ThematicBreak::matches("-*-"));
        assert!(!ThematicBreak::matches("- item"));
        assert!(!ThematicBreak::matches("***bold***"));
        assert!(!ThematicBreak::matches(""));
    }
}
