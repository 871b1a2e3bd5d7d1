#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// An opening or closing fence line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Number of fence characters (at least three).
    pub len: usize,
    /// Leading spaces before the fence.
    pub indent: usize,
    /// First word of the info string, if any.
    pub language: Option<String>,
    /// Whether nothing but the fence run is on the line (a valid closer).
    pub bare: bool,
}

pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;

    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim_start_matches(' ');
        let indent = line.len() - t.len();
        let kind = match t.as_bytes().first()? {
            b'`' => FenceKind::Backticks,
            b'~' => FenceKind::Tildes,
            _ => return None,
        };
        let ch = t.as_bytes()[0];
        let len = t.bytes().take_while(|&b| b == ch).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = t[len..].trim();
        // A backtick info string cannot itself contain backticks.
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            indent,
            language: info.split_whitespace().next().map(str::to_string),
            bare: info.is_empty(),
        })
    }

    /// Whether `line` closes a fence opened by `open`.
    pub fn closes(open: &FenceSig, line: &str) -> bool {
        Self::sig(line)
            .is_some_and(|s| s.bare && s.kind == open.kind && s.len >= open.len)
    }

    /// Removes up to `indent` leading spaces from a content line.
    pub fn dedent(line: &str, indent: usize) -> &str {
        let spaces = line.bytes().take(indent).take_while(|&b| b == b' ').count();
        &line[spaces..]
    }
}
