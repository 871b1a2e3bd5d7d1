use serde::Serialize;

use super::block::BlockNode;

/// The converter's output: block nodes in source order.
///
/// Serializes as a bare JSON array, even when it holds a single block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    pub blocks: Vec<BlockNode>,
}

/// A full editor document: `{"type": "doc", "content": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "doc")]
pub struct TiptapDoc {
    pub content: Vec<BlockNode>,
}

impl Document {
    pub fn new(blocks: Vec<BlockNode>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Wraps the blocks in a `doc` node.
    pub fn to_tiptap_doc(&self) -> TiptapDoc {
        TiptapDoc {
            content: self.blocks.clone(),
        }
    }
}

impl From<Document> for TiptapDoc {
    fn from(doc: Document) -> Self {
        TiptapDoc {
            content: doc.blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_block_still_serializes_as_array() {
        let doc = Document::new(vec![BlockNode::HorizontalRule]);
        assert_eq!(doc.to_value().unwrap(), json!([{"type": "horizontalRule"}]));
    }

    #[test]
    fn empty_document_is_empty_array() {
        assert_eq!(Document::default().to_json().unwrap(), "[]");
    }

    #[test]
    fn doc_wrapper_shape() {
        let doc = Document::new(vec![BlockNode::HorizontalRule]);
        assert_eq!(
            serde_json::to_value(doc.to_tiptap_doc()).unwrap(),
            json!({"type": "doc", "content": [{"type": "horizontalRule"}]})
        );
    }
}
