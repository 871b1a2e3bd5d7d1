use super::classify::{LineClass, LineOpener, MarkdownLineClassifier};
use super::kinds::{CodeFence, FenceSig, MarkerKind, MathBlock};

/// The block kind a candidate was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    Paragraph,
    Heading,
    BlockQuote,
    HorizontalRule,
    Image,
    Math,
    CodeFence,
    BulletList,
    OrderedList,
    TaskList,
}

/// A tagged run of consecutive source lines forming one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub tag: BlockTag,
    pub lines: Vec<&'a str>,
}

/// Groups lines into block candidates.
///
/// Blank lines separate candidates and are never part of one, except
/// inside fences, math blocks and list items that continue after them.
pub fn scan<'a>(lines: &[&'a str]) -> Vec<Candidate<'a>> {
    let classes: Vec<LineClass<'a>> = lines
        .iter()
        .map(|l| MarkdownLineClassifier.classify(l))
        .collect();
    let mut scanner = Scanner {
        classes: &classes,
        i: 0,
        out: vec![],
    };
    scanner.run();
    log::debug!(
        "scanned {} lines into {} candidates",
        lines.len(),
        scanner.out.len()
    );
    scanner.out
}

struct Scanner<'c, 'a> {
    classes: &'c [LineClass<'a>],
    i: usize,
    out: Vec<Candidate<'a>>,
}

impl<'a> Scanner<'_, 'a> {
    fn run(&mut self) {
        while self.i < self.classes.len() {
            let c = &self.classes[self.i];
            if c.is_blank {
                self.i += 1;
                continue;
            }
            match c.opener.clone() {
                Some(LineOpener::Fence(sig)) => self.take_fence(&sig),
                Some(LineOpener::Math { compact: true }) => self.take(BlockTag::Math, 1),
                Some(LineOpener::Math { compact: false }) => match self.math_end(self.i) {
                    Some(end) => self.take(BlockTag::Math, end + 1 - self.i),
                    None => self.take_paragraph(),
                },
                Some(LineOpener::ThematicBreak) => self.take(BlockTag::HorizontalRule, 1),
                Some(LineOpener::BlockQuote) => self.take_quote(),
                Some(LineOpener::Heading) => self.take(BlockTag::Heading, 1),
                Some(LineOpener::Image) => self.take(BlockTag::Image, 1),
                Some(LineOpener::ListItem(_)) => self.take_list(),
                None => self.take_paragraph(),
            }
        }
    }

    fn take(&mut self, tag: BlockTag, count: usize) {
        let end = (self.i + count).min(self.classes.len());
        let lines = self.classes[self.i..end].iter().map(|c| c.text).collect();
        self.out.push(Candidate { tag, lines });
        self.i = end;
    }

    /// Everything up to the closing fence, or to the end of input.
    fn take_fence(&mut self, sig: &FenceSig) {
        let close = (self.i + 1..self.classes.len())
            .find(|&j| CodeFence::closes(sig, self.classes[j].text));
        let count = match close {
            Some(j) => j + 1 - self.i,
            None => self.classes.len() - self.i,
        };
        self.take(BlockTag::CodeFence, count);
    }

    /// Index of the line closing a multi-line math block opened at `start`.
    ///
    /// The search gives up at a blank line or at a line opening another
    /// math block.
    fn math_end(&self, start: usize) -> Option<usize> {
        for (j, c) in self.classes.iter().enumerate().skip(start + 1) {
            if c.is_blank {
                return None;
            }
            if MathBlock::closes(c.text) {
                return Some(j);
            }
            if matches!(c.opener, Some(LineOpener::Math { .. })) {
                return None;
            }
        }
        None
    }

    fn take_quote(&mut self) {
        let count = self.classes[self.i..]
            .iter()
            .take_while(|c| matches!(c.opener, Some(LineOpener::BlockQuote)))
            .count();
        self.take(BlockTag::BlockQuote, count);
    }

    fn take_list(&mut self) {
        let Some(first) = self.classes[self.i].list_marker().copied() else {
            return self.take_paragraph();
        };
        let tag = if first.is_task() {
            BlockTag::TaskList
        } else if first.kind.is_ordered() {
            BlockTag::OrderedList
        } else {
            BlockTag::BulletList
        };
        let continues = |c: &LineClass<'_>| {
            c.indent > first.indent
                || c
                    .list_marker()
                    .is_some_and(|m| m.kind.same_family(first.kind))
        };
        let continues_after_blank = |c: &LineClass<'_>| c.indent > first.indent;

        let mut j = self.i + 1;
        while j < self.classes.len() {
            let c = &self.classes[j];
            if !c.is_blank {
                if !continues(c) {
                    break;
                }
                j += 1;
                continue;
            }
            let next = (j..self.classes.len()).find(|&k| !self.classes[k].is_blank);
            match next {
                Some(k) if continues_after_blank(&self.classes[k]) => j = k,
                _ => break,
            }
        }
        self.take(tag, j - self.i);
    }

    fn take_paragraph(&mut self) {
        let count = 1 + (self.i + 1..self.classes.len())
            .take_while(|&j| !self.classes[j].is_blank && !self.interrupts_paragraph(j))
            .count();
        self.take(BlockTag::Paragraph, count);
    }

    /// Ordered items interrupt a paragraph only when numbered `1.`, so a
    /// wrapped line starting `2024.` stays prose.
    fn interrupts_paragraph(&self, j: usize) -> bool {
        match &self.classes[j].opener {
            None => false,
            Some(LineOpener::Math { compact: false }) => self.math_end(j).is_some(),
            Some(LineOpener::ListItem(m)) => {
                !m.kind.is_ordered() || m.kind == MarkerKind::Ordered(1)
            }
            Some(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tags(src: &str) -> Vec<(BlockTag, usize)> {
        let lines: Vec<&str> = src.lines().collect();
        scan(&lines)
            .into_iter()
            .map(|c| (c.tag, c.lines.len()))
            .collect()
    }

    #[test]
    fn blank_lines_separate_paragraphs() {
        assert_eq!(
            tags("one\ntwo\n\n\nthree"),
            vec![(BlockTag::Paragraph, 2), (BlockTag::Paragraph, 1)]
        );
    }

    #[test]
    fn list_marker_interrupts_paragraph() {
        assert_eq!(
            tags("Intro line\n- Item one\n- Item two"),
            vec![(BlockTag::Paragraph, 1), (BlockTag::BulletList, 2)]
        );
    }

    #[test]
    fn heading_interrupts_paragraph() {
        assert_eq!(
            tags("text\n# Title\nmore"),
            vec![
                (BlockTag::Paragraph, 1),
                (BlockTag::Heading, 1),
                (BlockTag::Paragraph, 1)
            ]
        );
    }

    #[test]
    fn fence_keeps_blank_lines_and_markers() {
        assert_eq!(
            tags("```\n# not heading\n\n- not list\n```\nafter"),
            vec![(BlockTag::CodeFence, 5), (BlockTag::Paragraph, 1)]
        );
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        assert_eq!(tags("```\ncode\n\nmore"), vec![(BlockTag::CodeFence, 4)]);
    }

    #[test]
    fn multi_line_math() {
        assert_eq!(
            tags("$$\na = b\n$$\ntext"),
            vec![(BlockTag::Math, 3), (BlockTag::Paragraph, 1)]
        );
    }

    #[test]
    fn unterminated_math_is_paragraph() {
        assert_eq!(tags("$$\na = b"), vec![(BlockTag::Paragraph, 2)]);
    }

    #[test]
    fn quote_run() {
        assert_eq!(
            tags("> a\n> b\nc"),
            vec![(BlockTag::BlockQuote, 2), (BlockTag::Paragraph, 1)]
        );
    }

    #[test]
    fn first_item_decides_list_kind() {
        assert_eq!(tags("- [ ] a\n- b"), vec![(BlockTag::TaskList, 2)]);
        assert_eq!(tags("- a\n- [x] b"), vec![(BlockTag::BulletList, 2)]);
        assert_eq!(tags("1. a\n2. b"), vec![(BlockTag::OrderedList, 2)]);
    }

    #[test]
    fn list_family_change_splits_lists() {
        assert_eq!(
            tags("- a\n1. b"),
            vec![(BlockTag::BulletList, 1), (BlockTag::OrderedList, 1)]
        );
    }

    #[test]
    fn list_keeps_indented_continuation_after_blank() {
        assert_eq!(
            tags("- a\n\n  more a\n- b\n\nafter"),
            vec![(BlockTag::BulletList, 4), (BlockTag::Paragraph, 1)]
        );
    }

    #[test]
    fn blank_line_between_items_splits_lists() {
        assert_eq!(
            tags("1. a\n\n2. b"),
            vec![(BlockTag::OrderedList, 1), (BlockTag::OrderedList, 1)]
        );
    }

    #[test]
    fn only_first_number_interrupts_paragraph() {
        assert_eq!(tags("The year was\n2024. Great"), vec![(BlockTag::Paragraph, 2)]);
        assert_eq!(
            tags("Steps:\n1. one\n2. two"),
            vec![(BlockTag::Paragraph, 1), (BlockTag::OrderedList, 2)]
        );
    }

    #[test]
    fn inline_dollars_in_prose_do_not_open_math() {
        assert_eq!(
            tags("$$a$$ is famous\n\nA paragraph here.\n\n$$\nx\n$$"),
            vec![
                (BlockTag::Paragraph, 1),
                (BlockTag::Paragraph, 1),
                (BlockTag::Math, 3)
            ]
        );
    }

    #[test]
    fn math_search_stops_at_blank_line_and_next_opener() {
        assert_eq!(
            tags("$$\na\n\nb $$"),
            vec![(BlockTag::Paragraph, 2), (BlockTag::Paragraph, 1)]
        );
        assert_eq!(
            tags("$$ a\n$$y$$"),
            vec![(BlockTag::Paragraph, 1), (BlockTag::Math, 1)]
        );
    }

    #[test]
    fn rule_ends_list() {
        assert_eq!(
            tags("- a\n---"),
            vec![(BlockTag::BulletList, 1), (BlockTag::HorizontalRule, 1)]
        );
    }

    #[test]
    fn nested_markers_stay_in_run() {
        assert_eq!(
            tags("- a\n  1. inner\n  2. inner\n- b"),
            vec![(BlockTag::BulletList, 4)]
        );
    }
}
