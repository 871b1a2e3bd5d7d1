//! # Snapshot Testing Support
//!
//! Renders a parsed [`Document`] as an indented outline, one node per line,
//! for `insta` snapshot assertions. Much easier to review in a diff than
//! the JSON form.
//!
//! ```text
//! heading(2)
//!   text "Title"
//! taskList
//!   taskItem(x)
//!     paragraph
//!       text[bold] "done"
//! ```

use std::fmt::Write;

use crate::models::{BlockNode, Document, InlineNode, Mark};

pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        block_lines(&mut out, block, 0);
    }
    out.truncate(out.trim_end().len());
    out
}

fn line(out: &mut String, depth: usize, text: &str) {
    let _ = writeln!(out, "{:indent$}{text}", "", indent = depth * 2);
}

fn block_lines(out: &mut String, block: &BlockNode, depth: usize) {
    let label = match block {
        BlockNode::Heading { attrs, .. } => format!("heading({})", attrs.level),
        BlockNode::Image { attrs } => format!("image {:?} alt={:?}", attrs.src, attrs.alt),
        BlockNode::Mathematics { attrs } => format!("mathematics {:?}", attrs.latex),
        BlockNode::CodeBlock { attrs, .. } => match &attrs.language {
            Some(lang) => format!("codeBlock({lang})"),
            None => "codeBlock".to_string(),
        },
        other => other.type_name().to_string(),
    };
    line(out, depth, &label);

    match block {
        BlockNode::Blockquote { content } => {
            for child in content {
                block_lines(out, child, depth + 1);
            }
        }
        BlockNode::BulletList { content } | BlockNode::OrderedList { content } => {
            for item in content {
                line(out, depth + 1, "listItem");
                for child in &item.content {
                    block_lines(out, child, depth + 2);
                }
            }
        }
        BlockNode::TaskList { content } => {
            for item in content {
                let label = if item.attrs.checked {
                    "taskItem(x)"
                } else {
                    "taskItem( )"
                };
                line(out, depth + 1, label);
                for child in &item.content {
                    block_lines(out, child, depth + 2);
                }
            }
        }
        other => {
            for node in other.inline_content().unwrap_or_default() {
                line(out, depth + 1, &inline_label(node));
            }
        }
    }
}

fn inline_label(node: &InlineNode) -> String {
    match node {
        InlineNode::Text { text, marks } if marks.is_empty() => format!("text {text:?}"),
        InlineNode::Text { text, marks } => {
            let names = marks
                .iter()
                .map(|m| match m {
                    Mark::Bold => "bold".to_string(),
                    Mark::Italic => "italic".to_string(),
                    Mark::Strike => "strike".to_string(),
                    Mark::Code => "code".to_string(),
                    Mark::Link { attrs } => format!("link={}", attrs.href),
                })
                .collect::<Vec<_>>()
                .join(",");
            format!("text[{names}] {text:?}")
        }
        InlineNode::Image { attrs } => format!("image {:?} alt={:?}", attrs.src, attrs.alt),
        InlineNode::Mathematics { attrs } => format!("mathematics {:?}", attrs.latex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_markdown;

    #[test]
    fn outline_of_nested_structure() {
        let doc = parse_markdown("> # Quoted\n>\n> - [x] **done**");
        insta::assert_snapshot!(outline(&doc), @r#"
        blockquote
          heading(1)
            text "Quoted"
          taskList
            taskItem(x)
              paragraph
                text[bold] "done"
        "#);
    }
}
