use serde::Serialize;

/// Attributes carried by a `link` mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkAttrs {
    pub href: String,
}

/// A style applied to a run of text.
///
/// Serializes as `{"type": "bold"}`, or `{"type": "link", "attrs": {"href": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Bold,
    Italic,
    Strike,
    Code,
    Link { attrs: LinkAttrs },
}

/// The kind of a [`Mark`], ignoring any attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MarkKind {
    Bold,
    Italic,
    Strike,
    Code,
    Link,
}

impl Mark {
    pub fn link(href: impl Into<String>) -> Self {
        Mark::Link {
            attrs: LinkAttrs { href: href.into() },
        }
    }

    pub fn kind(&self) -> MarkKind {
        match self {
            Mark::Bold => MarkKind::Bold,
            Mark::Italic => MarkKind::Italic,
            Mark::Strike => MarkKind::Strike,
            Mark::Code => MarkKind::Code,
            Mark::Link { .. } => MarkKind::Link,
        }
    }
}

/// A set of marks with at most one mark per [`MarkKind`].
///
/// Marks are kept in canonical kind order, so two sets holding the same
/// marks compare equal regardless of the order they were applied in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MarkSet(Vec<Mark>);

impl MarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.0.iter()
    }

    pub fn contains(&self, kind: MarkKind) -> bool {
        self.0.iter().any(|m| m.kind() == kind)
    }

    /// Adds `mark`, replacing any existing mark of the same kind.
    pub fn insert(&mut self, mark: Mark) {
        let kind = mark.kind();
        match self.0.binary_search_by_key(&kind, Mark::kind) {
            Ok(idx) => self.0[idx] = mark,
            Err(idx) => self.0.insert(idx, mark),
        }
    }

    pub fn remove(&mut self, kind: MarkKind) {
        self.0.retain(|m| m.kind() != kind);
    }

    /// Returns a copy of this set with `mark` added.
    #[must_use]
    pub fn with(&self, mark: Mark) -> Self {
        let mut set = self.clone();
        set.insert(mark);
        set
    }

    /// Returns a copy of this set extended with every mark from `other`.
    ///
    /// Marks in `other` win over marks of the same kind in `self`.
    #[must_use]
    pub fn union(&self, other: &MarkSet) -> Self {
        let mut set = self.clone();
        for m in other.iter() {
            set.insert(m.clone());
        }
        set
    }
}

impl FromIterator<Mark> for MarkSet {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        let mut set = MarkSet::new();
        for m in iter {
            set.insert(m);
        }
        set
    }
}
