use crate::models::{
    BlockNode, CodeBlockAttrs, InlineNode, ListItem, TaskItem, TaskItemAttrs,
};
use crate::parsing::ParseOptions;
use crate::parsing::inline::parse_inline;

use super::kinds::{
    BlockImage, BlockQuote, CodeFence, Heading, List, ListMarker, MathBlock, Paragraph,
};
use super::scan::{BlockTag, Candidate, scan};

/// Parses normalized text (`\n` line endings) into block nodes.
///
/// `depth` is the container nesting level of `text`; the top level is 0.
pub fn parse_blocks(text: &str, options: &ParseOptions, depth: usize) -> Vec<BlockNode> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut builder = BlockBuilder::new(options, depth);
    for candidate in scan(&lines) {
        builder.push(candidate);
    }
    builder.finish()
}

/// Turns candidates into block nodes, re-entering the whole parser for the
/// inner text of blockquotes and list items.
pub struct BlockBuilder<'o> {
    options: &'o ParseOptions,
    depth: usize,
    out: Vec<BlockNode>,
}

impl<'o> BlockBuilder<'o> {
    pub fn new(options: &'o ParseOptions, depth: usize) -> Self {
        Self {
            options,
            depth,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: Candidate<'_>) {
        let node = match c.tag {
            BlockTag::Paragraph => Some(Self::paragraph(&c.lines)),
            BlockTag::Heading => Some(Self::heading(&c.lines)),
            BlockTag::HorizontalRule => Some(BlockNode::HorizontalRule),
            BlockTag::Image => Some(Self::image(&c.lines)),
            BlockTag::Math => Some(BlockNode::math(MathBlock::latex(&c.lines))),
            BlockTag::CodeFence => Some(Self::code_block(&c.lines)),
            BlockTag::BlockQuote => self.blockquote(&c.lines),
            BlockTag::BulletList | BlockTag::OrderedList | BlockTag::TaskList => {
                Some(self.list(c.tag, &c.lines))
            }
        };
        if let Some(node) = node {
            log::trace!("block {} at depth {}", node.type_name(), self.depth);
            self.out.push(node);
        }
    }

    pub fn finish(self) -> Vec<BlockNode> {
        self.out
    }

    fn paragraph(lines: &[&str]) -> BlockNode {
        BlockNode::paragraph(parse_inline(&Paragraph::join(lines)))
    }

    fn heading(lines: &[&str]) -> BlockNode {
        let line = lines.first().copied().unwrap_or_default();
        match Heading::parse(line) {
            Some((level, text)) => BlockNode::heading(level, parse_inline(text)),
            None => Self::paragraph(lines),
        }
    }

    fn image(lines: &[&str]) -> BlockNode {
        let line = lines.first().copied().unwrap_or_default();
        match BlockImage::parse(line) {
            Some(attrs) => BlockNode::Image { attrs },
            None => Self::paragraph(lines),
        }
    }

    fn code_block(lines: &[&str]) -> BlockNode {
        let Some((opener, rest)) = lines.split_first() else {
            return BlockNode::CodeBlock {
                attrs: CodeBlockAttrs { language: None },
                content: vec![],
            };
        };
        let Some(sig) = CodeFence::sig(opener) else {
            return Self::paragraph(lines);
        };
        let body = match rest.split_last() {
            Some((last, body)) if CodeFence::closes(&sig, last) => body,
            _ => rest,
        };
        let code = body
            .iter()
            .map(|l| CodeFence::dedent(l, sig.indent))
            .collect::<Vec<_>>()
            .join("\n");
        BlockNode::CodeBlock {
            attrs: CodeBlockAttrs {
                language: sig.language,
            },
            content: if code.is_empty() {
                vec![]
            } else {
                vec![InlineNode::text(code)]
            },
        }
    }

    fn blockquote(&self, lines: &[&str]) -> Option<BlockNode> {
        let inner = lines
            .iter()
            .filter_map(|l| BlockQuote::strip_marker(l))
            .collect::<Vec<_>>()
            .join("\n");
        if inner.trim().is_empty() {
            log::debug!("dropping blockquote with no content");
            return None;
        }
        let content = self.nested(&inner);
        (!content.is_empty()).then_some(BlockNode::Blockquote { content })
    }

    fn list(&self, tag: BlockTag, lines: &[&str]) -> BlockNode {
        let items = Self::split_items(lines);
        match tag {
            BlockTag::TaskList => BlockNode::TaskList {
                content: items
                    .into_iter()
                    .map(|(marker, item)| {
                        let (checked, offset) = match marker.checkbox {
                            Some(cb) => (cb.checked, cb.content_offset),
                            None => (false, marker.content_offset),
                        };
                        TaskItem {
                            attrs: TaskItemAttrs { checked },
                            content: self.item_content(&item, offset),
                        }
                    })
                    .collect(),
            },
            _ => {
                let content = items
                    .into_iter()
                    .map(|(marker, item)| ListItem {
                        content: self.item_content(&item, marker.content_offset),
                    })
                    .collect();
                if tag == BlockTag::OrderedList {
                    BlockNode::OrderedList { content }
                } else {
                    BlockNode::BulletList { content }
                }
            }
        }
    }

    /// Splits a list run at every marker no deeper than the first one.
    fn split_items<'a>(lines: &[&'a str]) -> Vec<(ListMarker, Vec<&'a str>)> {
        let base = lines
            .first()
            .and_then(|l| List::marker(l))
            .map_or(0, |m| m.indent);
        let mut items: Vec<(ListMarker, Vec<&'a str>)> = vec![];
        for &line in lines {
            match List::marker(line) {
                Some(m) if m.indent <= base => items.push((m, vec![line])),
                _ => {
                    if let Some((_, item)) = items.last_mut() {
                        item.push(line);
                    }
                }
            }
        }
        items
    }

    /// The first line after its marker, then the continuation lines
    /// dedented by their common indentation, parsed as blocks.
    fn item_content(&self, item: &[&str], offset: usize) -> Vec<BlockNode> {
        let Some((first, rest)) = item.split_first() else {
            return vec![BlockNode::paragraph(vec![])];
        };
        let common = rest
            .iter()
            .filter(|l| !l.trim().is_empty())
            .map(|l| List::indent_width(l))
            .min()
            .unwrap_or(0);
        let mut text = first.get(offset..).unwrap_or_default().to_string();
        for line in rest {
            text.push('\n');
            text.push_str(List::dedent(line, common));
        }
        let content = self.nested(&text);
        if content.is_empty() {
            vec![BlockNode::paragraph(vec![])]
        } else {
            content
        }
    }

    /// Parses the inner text of a container one level deeper.
    ///
    /// Past the nesting limit the text is kept as a single paragraph.
    fn nested(&self, text: &str) -> Vec<BlockNode> {
        if self.depth >= self.options.max_nesting_depth {
            log::debug!(
                "nesting limit {} reached; keeping inner text as a paragraph",
                self.options.max_nesting_depth
            );
            let lines: Vec<&str> = text.split('\n').collect();
            let joined = Paragraph::join(&lines);
            if joined.is_empty() {
                return vec![];
            }
            return vec![BlockNode::paragraph(parse_inline(&joined))];
        }
        parse_blocks(text, self.options, self.depth + 1)
    }
}
