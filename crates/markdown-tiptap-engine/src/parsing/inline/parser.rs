use std::collections::BTreeSet;

use crate::models::{InlineNode, Mark, MarkSet, merge_adjacent_text};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Escape, InlineMath, Link},
};

/// Parses one logical line of inline content into [`InlineNode`]s.
///
/// A single forward scan toggles bold/italic/strike on their delimiters,
/// looking ahead for a closer before opening. Code spans, links, images
/// and inline math are consumed whole. Any emphasis opener still unclosed
/// at the end is marked literal and the line is rescanned, so a stray `**`
/// always comes out as text.
///
/// Adjacent text runs with equal marks are merged and empty runs dropped.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    parse_nested(s, 0)
}

/// `depth` counts the link labels enclosing `s`.
fn parse_nested(s: &str, depth: usize) -> Vec<InlineNode> {
    let mut literal = BTreeSet::new();
    loop {
        let mut p = InlineParser::new(s, &literal, depth);
        p.run();
        let unclosed: Vec<usize> = p.open.iter().map(|o| o.pos).collect();
        if unclosed.is_empty() {
            return merge_adjacent_text(p.out);
        }
        literal.extend(unclosed);
    }
}

/// An emphasis delimiter that opened a mark and awaits its closer.
#[derive(Debug, Clone, Copy)]
struct Opener {
    emphasis: Emphasis,
    pos: usize,
}

struct InlineParser<'a, 'l> {
    cur: Cursor<'a>,
    /// Opener positions to treat as literal text on this pass.
    literal: &'l BTreeSet<usize>,
    buf: String,
    marks: MarkSet,
    open: Vec<Opener>,
    out: Vec<InlineNode>,
    depth: usize,
}

impl<'a, 'l> InlineParser<'a, 'l> {
    fn new(s: &'a str, literal: &'l BTreeSet<usize>, depth: usize) -> Self {
        Self {
            cur: Cursor::new(s),
            literal,
            depth,
            buf: String::new(),
            marks: MarkSet::new(),
            open: vec![],
            out: vec![],
        }
    }

    fn run(&mut self) {
        while let Some(b) = self.cur.peek() {
            let handled = match b {
                Escape::BACKSLASH => self.try_escape(),
                CodeSpan::TICK => self.try_code_span(),
                Link::IMAGE_BANG => self.try_image(),
                Link::OPEN => self.try_link(),
                InlineMath::DOLLAR => self.try_math(),
                b'*' | b'_' | b'~' => self.try_emphasis(b),
                _ => false,
            };
            if !handled {
                self.push_char();
            }
        }
        self.flush();
    }

    /// Emits buffered text with the marks active before the current position.
    fn flush(&mut self) {
        if !self.buf.is_empty() {
            let text = std::mem::take(&mut self.buf);
            self.out.push(InlineNode::marked(text, self.marks.clone()));
        }
    }

    fn push_char(&mut self) {
        if let Some(c) = self.cur.bump_char() {
            self.buf.push(c);
        }
    }

    fn push_literal(&mut self, n: usize) {
        let end = (self.cur.pos() + n).min(self.cur.s.len());
        self.buf.push_str(&self.cur.s[self.cur.pos()..end]);
        self.cur.jump(end);
    }

    fn try_escape(&mut self) -> bool {
        match self.cur.peek_at(1) {
            Some(b) if Escape::escapable(b) => {
                self.cur.bump_n(1);
                self.push_char();
                true
            }
            _ => false,
        }
    }

    fn try_code_span(&mut self) -> bool {
        let s = self.cur.s;
        let ticks = self.cur.run_len(CodeSpan::TICK);
        let inner_start = self.cur.pos() + ticks;
        let Some(close) = CodeSpan::find_close(&s[inner_start..], ticks) else {
            // An unmatched run is literal as a whole.
            self.push_literal(ticks);
            return true;
        };
        let inner = &s[inner_start..inner_start + close];
        self.flush();
        self.out
            .push(InlineNode::marked(inner, self.marks.with(Mark::Code)));
        self.cur.jump(inner_start + close + ticks);
        true
    }

    fn try_image(&mut self) -> bool {
        if self.cur.peek_at(1) != Some(Link::OPEN) {
            return false;
        }
        let Some(parts) = Link::scan(self.cur.s, self.cur.pos() + 1) else {
            return false;
        };
        self.flush();
        self.out.push(InlineNode::image(parts.href, parts.label));
        self.cur.jump(parts.end);
        true
    }

    fn try_link(&mut self) -> bool {
        let Some(parts) = Link::scan(self.cur.s, self.cur.pos()) else {
            return false;
        };
        let label = if parts.label.trim().is_empty() {
            vec![InlineNode::text(parts.href.clone())]
        } else if self.depth >= Link::MAX_LABEL_DEPTH {
            vec![InlineNode::text(parts.label)]
        } else {
            parse_nested(parts.label, self.depth + 1)
        };
        let link = Mark::link(parts.href);

        self.flush();
        for node in label {
            match node {
                InlineNode::Text { text, marks } => {
                    let marks = self.marks.union(&marks).with(link.clone());
                    self.out.push(InlineNode::marked(text, marks));
                }
                other => self.out.push(other),
            }
        }
        self.cur.jump(parts.end);
        true
    }

    fn try_math(&mut self) -> bool {
        if self.cur.peek_at(1) == Some(InlineMath::DOLLAR) {
            self.push_literal(2);
            return true;
        }
        let s = self.cur.s;
        let start = self.cur.pos() + 1;
        let Some(close) = InlineMath::find_close(&s[start..]) else {
            return false;
        };
        self.flush();
        self.out.push(InlineNode::math(&s[start..start + close]));
        self.cur.jump(start + close + 1);
        true
    }

    fn try_emphasis(&mut self, b: u8) -> bool {
        let run = self.cur.run_len(b);
        let Some(em) = Emphasis::from_run(b, run) else {
            return false;
        };
        let pos = self.cur.pos();

        // Underscores inside a word never toggle anything.
        if em.is_underscore()
            && self.cur.prev_char().is_some_and(char::is_alphanumeric)
            && self.cur.char_at(run).is_some_and(char::is_alphanumeric)
        {
            self.push_literal(run);
            return true;
        }

        if let Some(idx) = self.open.iter().rposition(|o| o.emphasis.kind == em.kind) {
            let closes = self.open[idx].emphasis == em
                && self.cur.prev_char().is_some_and(|c| !c.is_whitespace());
            if closes {
                self.flush();
                self.marks.remove(em.kind);
                self.open.remove(idx);
                self.cur.bump_n(em.len());
            } else {
                self.push_literal(em.len());
            }
            return true;
        }

        let opens = !self.literal.contains(&pos)
            && self
                .cur
                .char_at(em.len())
                .is_some_and(|c| !c.is_whitespace())
            && em.has_closer(&self.cur.s[pos + em.len()..]);
        if opens {
            self.flush();
            self.marks.insert(em.mark());
            self.open.push(Opener { emphasis: em, pos });
            self.cur.bump_n(em.len());
        } else {
            self.push_literal(em.len());
        }
        true
    }
}
