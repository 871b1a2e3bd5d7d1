use crate::models::{Mark, MarkKind};

/// A toggling emphasis delimiter (`**`, `__`, `*`, `_`, `~~`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    pub delim: &'static str,
    pub kind: MarkKind,
}

impl Emphasis {
    pub const STRONG_STAR: Emphasis = Emphasis {
        delim: "**",
        kind: MarkKind::Bold,
    };
    pub const STRONG_UNDERSCORE: Emphasis = Emphasis {
        delim: "__",
        kind: MarkKind::Bold,
    };
    pub const EM_STAR: Emphasis = Emphasis {
        delim: "*",
        kind: MarkKind::Italic,
    };
    pub const EM_UNDERSCORE: Emphasis = Emphasis {
        delim: "_",
        kind: MarkKind::Italic,
    };
    pub const STRIKE: Emphasis = Emphasis {
        delim: "~~",
        kind: MarkKind::Strike,
    };

    /// Picks the delimiter starting with byte `b`, given the length of the
    /// run of `b` at the cursor. Doubled forms win over single ones.
    pub fn from_run(b: u8, run: usize) -> Option<Emphasis> {
        match (b, run >= 2) {
            (b'*', true) => Some(Self::STRONG_STAR),
            (b'*', false) => Some(Self::EM_STAR),
            (b'_', true) => Some(Self::STRONG_UNDERSCORE),
            (b'_', false) => Some(Self::EM_UNDERSCORE),
            (b'~', true) => Some(Self::STRIKE),
            _ => None,
        }
    }

    pub fn mark(self) -> Mark {
        match self.kind {
            MarkKind::Italic => Mark::Italic,
            MarkKind::Strike => Mark::Strike,
            _ => Mark::Bold,
        }
    }

    pub fn len(self) -> usize {
        self.delim.len()
    }

    pub fn is_underscore(self) -> bool {
        self.delim.starts_with('_')
    }

    /// Whether a closing delimiter exists in `after` (the text following an
    /// opener). A closer must be preceded by a non-whitespace character.
    pub fn has_closer(self, after: &str) -> bool {
        after.match_indices(self.delim).any(|(idx, _)| {
            after[..idx]
                .chars()
                .next_back()
                .is_some_and(|c| !c.is_whitespace())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubled_runs_prefer_strong() {
        assert_eq!(Emphasis::from_run(b'*', 3), Some(Emphasis::STRONG_STAR));
        assert_eq!(Emphasis::from_run(b'_', 1), Some(Emphasis::EM_UNDERSCORE));
        assert_eq!(Emphasis::from_run(b'~', 1), None);
    }

    #[test]
    fn closer_needs_non_space_before_it() {
        assert!(Emphasis::STRONG_STAR.has_closer("bold** rest"));
        assert!(!Emphasis::STRONG_STAR.has_closer("bold ** rest"));
        assert!(!Emphasis::STRONG_STAR.has_closer("**"));
        assert!(!Emphasis::EM_STAR.has_closer("nothing here"));
    }
}
