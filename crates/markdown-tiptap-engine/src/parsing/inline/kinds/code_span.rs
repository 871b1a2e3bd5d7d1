/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Finds the closing run for an opening run of `ticks` backticks.
    ///
    /// `after` is the text following the opening run. Returns the byte offset
    /// (into `after`) of a closing run of exactly `ticks` backticks.
    pub fn find_close(after: &str, ticks: usize) -> Option<usize> {
        let b = after.as_bytes();
        let mut i = 0;
        while i < b.len() {
            if b[i] == Self::TICK {
                let run = b[i..].iter().take_while(|&&c| c == Self::TICK).count();
                if run == ticks {
                    return Some(i);
                }
                i += run;
            } else {
                i += 1;
            }
        }
        None
    }
}
