use crate::models::{BlockNode, Document, InlineNode, ListItem, MarkSet, TaskItem};

use super::SchemaError;

pub fn check(doc: &Document) -> Result<(), SchemaError> {
    check_blocks(&doc.blocks, "")
}

fn check_blocks(blocks: &[BlockNode], parent: &str) -> Result<(), SchemaError> {
    for (i, block) in blocks.iter().enumerate() {
        check_block(block, &format!("{parent}[{i}]"))?;
    }
    Ok(())
}

fn check_block(block: &BlockNode, path: &str) -> Result<(), SchemaError> {
    match block {
        BlockNode::Paragraph { content } | BlockNode::CodeBlock { content, .. } => {
            check_inline(content, path)
        }
        BlockNode::Heading { attrs, content } => {
            if !(1..=6).contains(&attrs.level) {
                return Err(SchemaError::HeadingLevel {
                    path: path.to_string(),
                    level: attrs.level,
                });
            }
            check_inline(content, path)
        }
        BlockNode::Blockquote { content } => {
            non_empty(content, path, "blockquote")?;
            check_blocks(content, &format!("{path}.content"))
        }
        BlockNode::BulletList { content } | BlockNode::OrderedList { content } => {
            non_empty(content, path, block.type_name())?;
            for (i, ListItem { content }) in content.iter().enumerate() {
                check_item(content, &format!("{path}.content[{i}]"), "listItem")?;
            }
            Ok(())
        }
        BlockNode::TaskList { content } => {
            non_empty(content, path, "taskList")?;
            for (i, TaskItem { content, .. }) in content.iter().enumerate() {
                check_item(content, &format!("{path}.content[{i}]"), "taskItem")?;
            }
            Ok(())
        }
        BlockNode::HorizontalRule | BlockNode::Image { .. } | BlockNode::Mathematics { .. } => {
            Ok(())
        }
    }
}

fn check_item(content: &[BlockNode], path: &str, node: &'static str) -> Result<(), SchemaError> {
    non_empty(content, path, node)?;
    check_blocks(content, &format!("{path}.content"))
}

fn non_empty<T>(content: &[T], path: &str, node: &'static str) -> Result<(), SchemaError> {
    if content.is_empty() {
        return Err(SchemaError::EmptyContainer {
            path: path.to_string(),
            node,
        });
    }
    Ok(())
}

fn check_inline(nodes: &[InlineNode], parent: &str) -> Result<(), SchemaError> {
    let mut prev: Option<&MarkSet> = None;
    for (i, node) in nodes.iter().enumerate() {
        let InlineNode::Text { text, marks } = node else {
            prev = None;
            continue;
        };
        let path = format!("{parent}.content[{i}]");
        if text.is_empty() {
            return Err(SchemaError::EmptyText { path });
        }
        if prev == Some(marks) {
            return Err(SchemaError::UnmergedText { path });
        }
        let kinds: Vec<_> = marks.iter().map(|m| m.kind()).collect();
        if let Some(pair) = kinds.windows(2).find(|w| w[0] == w[1]) {
            return Err(SchemaError::DuplicateMark {
                path,
                mark: pair[0],
            });
        }
        prev = Some(marks);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mark, TaskItemAttrs};
    use crate::parse_markdown;
    use pretty_assertions::assert_eq;

    fn doc(blocks: Vec<BlockNode>) -> Document {
        Document::new(blocks)
    }

    #[test]
    fn parsed_documents_pass() {
        let parsed = parse_markdown(
            "# T\n\n> q **b**\n\n- [x] done\n- [ ] todo\n\n1. one\n   - two\n\n$$x$$\n\n---",
        );
        assert_eq!(check(&parsed), Ok(()));
    }

    #[test]
    fn heading_level_out_of_range() {
        let d = doc(vec![BlockNode::heading(7, vec![])]);
        assert_eq!(
            check(&d),
            Err(SchemaError::HeadingLevel {
                path: "[0]".into(),
                level: 7
            })
        );
    }

    #[test]
    fn empty_blockquote() {
        let d = doc(vec![
            BlockNode::HorizontalRule,
            BlockNode::Blockquote { content: vec![] },
        ]);
        assert_eq!(
            check(&d),
            Err(SchemaError::EmptyContainer {
                path: "[1]".into(),
                node: "blockquote"
            })
        );
    }

    #[test]
    fn empty_task_item() {
        let d = doc(vec![BlockNode::TaskList {
            content: vec![TaskItem {
                attrs: TaskItemAttrs { checked: true },
                content: vec![],
            }],
        }]);
        assert_eq!(
            check(&d),
            Err(SchemaError::EmptyContainer {
                path: "[0].content[0]".into(),
                node: "taskItem"
            })
        );
    }

    #[test]
    fn empty_text_inside_list() {
        let d = doc(vec![BlockNode::BulletList {
            content: vec![ListItem {
                content: vec![BlockNode::paragraph(vec![InlineNode::text("")])],
            }],
        }]);
        assert_eq!(
            check(&d),
            Err(SchemaError::EmptyText {
                path: "[0].content[0].content[0].content[0]".into()
            })
        );
    }

    #[test]
    fn unmerged_text() {
        let bold = MarkSet::from_iter([Mark::Bold]);
        let d = doc(vec![BlockNode::paragraph(vec![
            InlineNode::marked("a", bold.clone()),
            InlineNode::marked("b", bold),
        ])]);
        assert_eq!(
            check(&d),
            Err(SchemaError::UnmergedText {
                path: "[0].content[1]".into()
            })
        );
    }

    #[test]
    fn text_split_by_inline_math_is_fine() {
        let d = doc(vec![BlockNode::paragraph(vec![
            InlineNode::text("a "),
            InlineNode::math("x"),
            InlineNode::text(" b"),
        ])]);
        assert_eq!(check(&d), Ok(()));
    }

    #[test]
    fn error_message_names_the_path() {
        let err = SchemaError::EmptyText {
            path: "[3].content[0]".into(),
        };
        assert_eq!(err.to_string(), "[3].content[0]: empty text node");
    }
}
