use crate::models::{
    BlockNode, HeadingAttrs, InlineNode, ListItem, TaskItem, merge_adjacent_text,
};

/// Repairs a block tree so every node satisfies the schema.
///
/// Empty blockquotes and lists are dropped, empty list items gain an empty
/// paragraph, heading levels are clamped to 1..=6, and inline content has
/// its empty text removed and equal-mark neighbours merged.
pub fn enforce(blocks: Vec<BlockNode>) -> Vec<BlockNode> {
    blocks.into_iter().filter_map(repair_block).collect()
}

fn repair_block(block: BlockNode) -> Option<BlockNode> {
    match block {
        BlockNode::Paragraph { content } => Some(BlockNode::Paragraph {
            content: repair_inline(content),
        }),
        BlockNode::Heading { attrs, content } => {
            let level = attrs.level.clamp(1, 6);
            if level != attrs.level {
                log::debug!("clamping heading level {} to {level}", attrs.level);
            }
            Some(BlockNode::Heading {
                attrs: HeadingAttrs { level },
                content: repair_inline(content),
            })
        }
        BlockNode::CodeBlock { attrs, content } => Some(BlockNode::CodeBlock {
            attrs,
            content: repair_inline(content),
        }),
        BlockNode::Blockquote { content } => {
            let content = enforce(content);
            if content.is_empty() {
                log::debug!("dropping empty blockquote");
                return None;
            }
            Some(BlockNode::Blockquote { content })
        }
        BlockNode::BulletList { content } => {
            repair_items(content).map(|content| BlockNode::BulletList { content })
        }
        BlockNode::OrderedList { content } => {
            repair_items(content).map(|content| BlockNode::OrderedList { content })
        }
        BlockNode::TaskList { content } => {
            if content.is_empty() {
                log::debug!("dropping empty taskList");
                return None;
            }
            let content = content
                .into_iter()
                .map(|item| TaskItem {
                    attrs: item.attrs,
                    content: repair_item(item.content),
                })
                .collect();
            Some(BlockNode::TaskList { content })
        }
        other => Some(other),
    }
}

fn repair_items(items: Vec<ListItem>) -> Option<Vec<ListItem>> {
    if items.is_empty() {
        log::debug!("dropping empty list");
        return None;
    }
    Some(
        items
            .into_iter()
            .map(|item| ListItem {
                content: repair_item(item.content),
            })
            .collect(),
    )
}

fn repair_item(content: Vec<BlockNode>) -> Vec<BlockNode> {
    let content = enforce(content);
    if content.is_empty() {
        log::debug!("filling empty list item with an empty paragraph");
        return vec![BlockNode::paragraph(vec![])];
    }
    content
}

fn repair_inline(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    let before = nodes.len();
    let merged = merge_adjacent_text(nodes);
    if merged.len() != before {
        log::debug!("merged inline content from {before} to {} nodes", merged.len());
    }
    merged
}
