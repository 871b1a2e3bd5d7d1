/// Backslash escapes: `\*` is a literal `*`.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Whether `b` may follow a backslash to be taken literally.
    pub fn escapable(b: u8) -> bool {
        b.is_ascii_punctuation()
    }
}
