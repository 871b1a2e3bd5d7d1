use serde::Serialize;

use super::inline::{InlineNode, MathAttrs};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageAttrs {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlockAttrs {
    /// Info string of the opening fence; `null` when absent.
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskItemAttrs {
    pub checked: bool,
}

/// An item of a `bulletList` or `orderedList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "listItem")]
pub struct ListItem {
    pub content: Vec<BlockNode>,
}

/// An item of a `taskList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "taskItem")]
pub struct TaskItem {
    pub attrs: TaskItemAttrs,
    pub content: Vec<BlockNode>,
}

/// A structural unit of the document.
///
/// Serializes with a `type` tag in camelCase (`horizontalRule`, `taskList`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BlockNode {
    Paragraph {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        content: Vec<InlineNode>,
    },
    Heading {
        attrs: HeadingAttrs,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        content: Vec<InlineNode>,
    },
    Blockquote {
        content: Vec<BlockNode>,
    },
    HorizontalRule,
    Image {
        attrs: ImageAttrs,
    },
    Mathematics {
        attrs: MathAttrs,
    },
    CodeBlock {
        attrs: CodeBlockAttrs,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        content: Vec<InlineNode>,
    },
    BulletList {
        content: Vec<ListItem>,
    },
    OrderedList {
        content: Vec<ListItem>,
    },
    TaskList {
        content: Vec<TaskItem>,
    },
}

impl BlockNode {
    pub fn paragraph(content: Vec<InlineNode>) -> Self {
        BlockNode::Paragraph { content }
    }

    pub fn heading(level: u8, content: Vec<InlineNode>) -> Self {
        BlockNode::Heading {
            attrs: HeadingAttrs { level },
            content,
        }
    }

    pub fn math(latex: impl Into<String>) -> Self {
        BlockNode::Mathematics {
            attrs: MathAttrs {
                latex: latex.into(),
            },
        }
    }

    /// The `type` tag this node serializes with.
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockNode::Paragraph { .. } => "paragraph",
            BlockNode::Heading { .. } => "heading",
            BlockNode::Blockquote { .. } => "blockquote",
            BlockNode::HorizontalRule => "horizontalRule",
            BlockNode::Image { .. } => "image",
            BlockNode::Mathematics { .. } => "mathematics",
            BlockNode::CodeBlock { .. } => "codeBlock",
            BlockNode::BulletList { .. } => "bulletList",
            BlockNode::OrderedList { .. } => "orderedList",
            BlockNode::TaskList { .. } => "taskList",
        }
    }

    /// Inline content of leaf blocks that hold text.
    pub fn inline_content(&self) -> Option<&[InlineNode]> {
        match self {
            BlockNode::Paragraph { content }
            | BlockNode::Heading { content, .. }
            | BlockNode::CodeBlock { content, .. } => Some(content),
            _ => None,
        }
    }
}
