/// A cursor for byte-by-byte inline scanning.
///
/// All delimiters are ASCII, so every position the parser stops at is a
/// char boundary; multi-byte characters are only ever consumed whole via
/// [`Cursor::bump_char`].
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Number of consecutive `b` bytes starting at the current position.
    pub fn run_len(&self, b: u8) -> usize {
        self.s.as_bytes()[self.i.min(self.s.len())..]
            .iter()
            .take_while(|&&c| c == b)
            .count()
    }

    /// The character immediately before the current position.
    pub fn prev_char(&self) -> Option<char> {
        self.s.get(..self.i)?.chars().next_back()
    }

    /// The character starting `n` bytes ahead, if `n` lands on a char boundary.
    pub fn char_at(&self, n: usize) -> Option<char> {
        self.s.get(self.i + n..)?.chars().next()
    }

    /// Advances past one whole character, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves to an absolute byte position.
    pub fn jump(&mut self, pos: usize) {
        self.i = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump_char(), Some('h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.prev_char(), Some('h'));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.prev_char(), None);
        assert_eq!(cur.rest(), "");
    }

    #[test]
    fn bump_char_consumes_multibyte() {
        let mut cur = Cursor::new("éa");
        assert_eq!(cur.bump_char(), Some('é'));
        assert_eq!(cur.pos(), 2);
        assert_eq!(cur.peek(), Some(b'a'));
        assert_eq!(cur.prev_char(), Some('é'));
    }

    #[test]
    fn run_len_counts_repeats() {
        let mut cur = Cursor::new("a***b");
        assert_eq!(cur.run_len(b'*'), 0);
        cur.bump_n(1);
        assert_eq!(cur.run_len(b'*'), 3);
    }

    #[test]
    fn run_len_at_end_is_zero() {
        let mut cur = Cursor::new("ab");
        cur.bump_n(2);
        assert_eq!(cur.rest(), "");
        assert_eq!(cur.run_len(b'a'), 0);
    }

    #[test]
    fn char_at_off_boundary_is_none() {
        let cur = Cursor::new("éa");
        assert_eq!(cur.char_at(1), None);
        assert_eq!(cur.char_at(2), Some('a'));
    }

    #[test]
    fn bump_past_end_yields_nothing() {
        let mut cur = Cursor::new("hi");
        cur.bump_n(10);
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.rest(), "");
        assert_eq!(cur.bump_char(), None);
    }
}
