//! Splits raw input into whitespace, punctuation and word segments.
//!
//! Concatenating the segment texts in order always reconstructs the input
//! exactly; downstream stages only ever rewrite `Word` segments.

use crate::rules::RuleSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Whitespace,
    Punctuation,
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
    /// Byte offset of the segment in the original input.
    pub offset: usize,
}

/// Lazily iterate over the segments of `text`.
///
/// Whitespace groups into maximal runs, each punctuation character from the
/// rule set is its own segment, and everything else forms word runs.
pub fn segments<'a>(text: &'a str, rules: &'a RuleSet) -> Segments<'a> {
    Segments {
        text,
        rules,
        pos: 0,
    }
}

pub struct Segments<'a> {
    text: &'a str,
    rules: &'a RuleSet,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let rest = &self.text[self.pos..];
        let mut chars = rest.chars();
        let first = chars.next()?;

        let (kind, len) = if first.is_whitespace() {
            let mut len = first.len_utf8();
            for c in chars {
                if !c.is_whitespace() {
                    break;
                }
                len += c.len_utf8();
            }
            (SegmentKind::Whitespace, len)
        } else if self.rules.is_punctuation(first) {
            // Punctuation never groups into runs
            (SegmentKind::Punctuation, first.len_utf8())
        } else {
            let mut len = first.len_utf8();
            for c in chars {
                if c.is_whitespace() || self.rules.is_punctuation(c) {
                    break;
                }
                len += c.len_utf8();
            }
            (SegmentKind::Word, len)
        };

        let offset = self.pos;
        self.pos += len;
        Some(Segment {
            kind,
            text: &self.text[offset..offset + len],
            offset,
        })
    }
}
