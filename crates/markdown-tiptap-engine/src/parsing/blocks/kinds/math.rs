/// Display math delimited by `$$`.
///
/// Either compact on one line (`$$x^2$$`) or spanning lines, with the
/// opening line starting and the closing line ending with the only `$$`
/// on that line.
pub struct MathBlock;

impl MathBlock {
    pub const DELIM: &'static str = "$$";

    /// `$$...$$` on a single line, with at least the two delimiters.
    pub fn is_compact(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 2 * Self::DELIM.len() && t.starts_with(Self::DELIM) && t.ends_with(Self::DELIM)
    }

    /// Opens a multi-line block: `$$` alone, or `$$` followed by LaTeX
    /// holding no further `$$`.
    pub fn opens(line: &str) -> bool {
        line.trim()
            .strip_prefix(Self::DELIM)
            .is_some_and(|rest| !rest.contains(Self::DELIM))
    }

    /// Closes a multi-line block: ends with the line's only `$$`.
    pub fn closes(line: &str) -> bool {
        line.trim()
            .strip_suffix(Self::DELIM)
            .is_some_and(|rest| !rest.contains(Self::DELIM))
    }

    /// Extracts the LaTeX source between the delimiters of a math block.
    pub fn latex<S: AsRef<str>>(lines: &[S]) -> String {
        let joined = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\n");
        let t = joined.trim();
        let t = t.strip_prefix(Self::DELIM).unwrap_or(t);
        let t = t.strip_suffix(Self::DELIM).unwrap_or(t);
        t.trim().to_string()
    }
}
