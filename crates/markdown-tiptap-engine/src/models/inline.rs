use serde::Serialize;

use super::marks::MarkSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineImageAttrs {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MathAttrs {
    pub latex: String,
}

/// Text-level content of a paragraph, heading or code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineNode {
    /// A run of text sharing one mark set. Never empty.
    Text {
        text: String,
        #[serde(skip_serializing_if = "MarkSet::is_empty")]
        marks: MarkSet,
    },
    /// `![alt](src)` inside running text. Carries no marks.
    Image { attrs: InlineImageAttrs },
    /// `$latex$`
    Mathematics { attrs: MathAttrs },
}

impl InlineNode {
    pub fn text(text: impl Into<String>) -> Self {
        InlineNode::Text {
            text: text.into(),
            marks: MarkSet::new(),
        }
    }

    pub fn marked(text: impl Into<String>, marks: MarkSet) -> Self {
        InlineNode::Text {
            text: text.into(),
            marks,
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        InlineNode::Image {
            attrs: InlineImageAttrs {
                src: src.into(),
                alt: alt.into(),
            },
        }
    }

    pub fn math(latex: impl Into<String>) -> Self {
        InlineNode::Mathematics {
            attrs: MathAttrs {
                latex: latex.into(),
            },
        }
    }

    /// The text of a `text` node, `None` for other variants.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InlineNode::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The marks of a `text` node, `None` for other variants.
    pub fn marks(&self) -> Option<&MarkSet> {
        match self {
            InlineNode::Text { marks, .. } => Some(marks),
            _ => None,
        }
    }
}

/// Drops empty text nodes and merges neighbouring text nodes whose mark
/// sets are equal.
pub fn merge_adjacent_text(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    let mut out: Vec<InlineNode> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let InlineNode::Text { text, marks } = node {
            if text.is_empty() {
                continue;
            }
            if let Some(InlineNode::Text {
                text: prev_text,
                marks: prev_marks,
            }) = out.last_mut()
                && *prev_marks == marks
            {
                prev_text.push_str(&text);
                continue;
            }
            out.push(InlineNode::Text { text, marks });
        } else {
            out.push(node);
        }
    }
    out
}
