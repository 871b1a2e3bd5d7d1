/// Inline math delimited by single dollars: `$latex$`.
///
/// `$$` is only meaningful at block scope and is literal text inline.
pub struct InlineMath;

impl InlineMath {
    pub const DOLLAR: u8 = b'$';

    /// Given the text after an opening `$`, returns the byte offset of the
    /// closing `$`.
    ///
    /// The opener must be followed by a non-space character. A closer must be
    /// preceded by a non-space character, must not be escaped, and must not be
    /// followed by a digit (so `$5 and $10` stays text).
    pub fn find_close(after: &str) -> Option<usize> {
        let first = after.chars().next()?;
        if first.is_whitespace() || first == '$' {
            return None;
        }
        let b = after.as_bytes();
        let mut i = 1;
        while i < b.len() {
            match b[i] {
                b'\\' => i += 1,
                Self::DOLLAR => {
                    let before_ok = after[..i]
                        .chars()
                        .next_back()
                        .is_some_and(|c| !c.is_whitespace());
                    let after_ok = !b.get(i + 1).is_some_and(u8::is_ascii_digit);
                    if before_ok && after_ok {
                        return Some(i);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_close() {
        assert_eq!(InlineMath::find_close("x^2$ rest"), Some(3));
    }

    #[test]
    fn single_char_math() {
        assert_eq!(InlineMath::find_close("x$"), Some(1));
    }

    #[test]
    fn prices_are_not_math() {
        assert_eq!(InlineMath::find_close("5 and $10"), None);
        assert_eq!(InlineMath::find_close(" x$"), None);
    }

    #[test]
    fn escaped_dollar_does_not_close() {
        assert_eq!(InlineMath::find_close(r"a\$b$"), Some(4));
    }
}
