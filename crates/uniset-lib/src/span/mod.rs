//! Scanning text with a set.
//!
//! Offsets are byte offsets into `&str` and must lie on char boundaries; an
//! offset that does not is treated as the end of the span.
//!
//! A code point element matches one char. A string element matches where the
//! text starts with it. When several elements match at one position, the
//! longest wins. Distinct strings matching at the same position differ in
//! length, so the longest match is unique.

mod spanner;

#[cfg(test)]
mod span_tests;
#[cfg(test)]
mod spanner_tests;

use serde::{Deserialize, Serialize};

pub use spanner::{CountMethod, Spanner, TrimOption};

use crate::UnicodeSet;

/// How a span decides whether to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanCondition {
    /// Continue while no element begins at the position (backward: ends there).
    NotContained,
    /// Longest prefix that is a concatenation of elements.
    Contained,
    /// Continue while an element matches, taking the longest each time.
    #[default]
    Simple,
}

impl UnicodeSet {
    /// Byte length of the longest element matching at `pos`.
    pub fn matches_at(&self, text: &str, pos: usize) -> Option<usize> {
        let mut longest = None;
        self.each_match(text, pos, |len| longest = longest.max(Some(len)));
        longest
    }

    /// Byte length of the longest element ending at `pos`.
    pub fn matches_back_at(&self, text: &str, pos: usize) -> Option<usize> {
        let mut longest = None;
        self.each_match_back(text, pos, |len| longest = longest.max(Some(len)));
        longest
    }

    /// End of the span starting at `start`.
    pub fn span(&self, text: &str, start: usize, condition: SpanCondition) -> usize {
        self.span_and_count(text, start, condition).0
    }

    /// Start of the span ending at `limit`.
    pub fn span_back(&self, text: &str, limit: usize, condition: SpanCondition) -> usize {
        self.span_back_and_count(text, limit, condition).0
    }

    /// End of the span with an element count.
    ///
    /// The count is the fewest elements covering the span for
    /// [`Contained`](SpanCondition::Contained), the number of greedy steps for
    /// [`Simple`](SpanCondition::Simple) and the number of code points for
    /// [`NotContained`](SpanCondition::NotContained).
    pub fn span_and_count(
        &self,
        text: &str,
        start: usize,
        condition: SpanCondition,
    ) -> (usize, usize) {
        if !text.is_char_boundary(start) {
            return (start, 0);
        }
        match condition {
            SpanCondition::Simple => {
                let (mut pos, mut count) = (start, 0);
                while let Some(len) = self.matches_at(text, pos) {
                    pos += len;
                    count += 1;
                }
                (pos, count)
            }
            SpanCondition::NotContained => {
                let (mut pos, mut count) = (start, 0);
                while let Some(c) = text[pos..].chars().next() {
                    if self.matches_at(text, pos).is_some() {
                        break;
                    }
                    pos += c.len_utf8();
                    count += 1;
                }
                (pos, count)
            }
            SpanCondition::Contained => {
                if !self.has_strings() {
                    return self.span_and_count(text, start, SpanCondition::Simple);
                }
                self.contained_forward(text, start)
            }
        }
    }

    /// Start of the span ending at `limit`, with an element count as in
    /// [`span_and_count`](Self::span_and_count).
    pub fn span_back_and_count(
        &self,
        text: &str,
        limit: usize,
        condition: SpanCondition,
    ) -> (usize, usize) {
        if !text.is_char_boundary(limit) {
            return (limit, 0);
        }
        match condition {
            SpanCondition::Simple => {
                let (mut pos, mut count) = (limit, 0);
                while let Some(len) = self.matches_back_at(text, pos) {
                    pos -= len;
                    count += 1;
                }
                (pos, count)
            }
            SpanCondition::NotContained => {
                let (mut pos, mut count) = (limit, 0);
                while let Some(c) = text[..pos].chars().next_back() {
                    if self.matches_back_at(text, pos).is_some() {
                        break;
                    }
                    pos -= c.len_utf8();
                    count += 1;
                }
                (pos, count)
            }
            SpanCondition::Contained => {
                if !self.has_strings() {
                    return self.span_back_and_count(text, limit, SpanCondition::Simple);
                }
                self.contained_backward(text, limit)
            }
        }
    }

    /// Whether `text` is a concatenation of elements.
    pub fn contains_all_text(&self, text: &str) -> bool {
        self.span(text, 0, SpanCondition::Contained) == text.len()
    }

    /// Whether no element occurs anywhere in `text`.
    pub fn contains_none_text(&self, text: &str) -> bool {
        self.span(text, 0, SpanCondition::NotContained) == text.len()
    }

    pub fn contains_some_text(&self, text: &str) -> bool {
        !self.contains_none_text(text)
    }

    pub fn spanner(&self) -> Spanner<'_> {
        Spanner::new(self)
    }

    /// Call `f` with the byte length of every element matching at `pos`.
    fn each_match(&self, text: &str, pos: usize, mut f: impl FnMut(usize)) {
        let Some(rest) = text.get(pos..) else {
            return;
        };
        let Some(c) = rest.chars().next() else {
            return;
        };
        if self.contains(c) {
            f(c.len_utf8());
        }
        for s in self.string_list().starting_with(c) {
            if rest.starts_with(s) {
                f(s.len());
            }
        }
    }

    fn each_match_back(&self, text: &str, pos: usize, mut f: impl FnMut(usize)) {
        let Some(head) = text.get(..pos) else {
            return;
        };
        let Some(c) = head.chars().next_back() else {
            return;
        };
        if self.contains(c) {
            f(c.len_utf8());
        }
        for s in self.strings() {
            if head.ends_with(s) {
                f(s.len());
            }
        }
    }

    /// Fewest-elements paths over byte positions, forward.
    fn contained_forward(&self, text: &str, start: usize) -> (usize, usize) {
        let (furthest, count) = fewest_elements(self.longest_element(), |offset, f| {
            self.each_match(text, start + offset, f)
        });
        (start + furthest, count)
    }

    /// Fewest-elements paths over byte positions, backward.
    fn contained_backward(&self, text: &str, limit: usize) -> (usize, usize) {
        let (furthest, count) = fewest_elements(self.longest_element(), |offset, f| {
            self.each_match_back(text, limit - offset, f)
        });
        (limit - furthest, count)
    }

    /// Upper bound on the byte length of one element match.
    fn longest_element(&self) -> usize {
        self.string_list().max_len().max(char::MAX.len_utf8())
    }
}

/// Furthest offset reachable by whole elements, and the fewest elements that
/// reach it. `each_from(offset, f)` calls `f` with the length of every element
/// matching at `offset`; no length exceeds `longest`.
fn fewest_elements(
    longest: usize,
    mut each_from: impl FnMut(usize, &mut dyn FnMut(usize)),
) -> (usize, usize) {
    // Ring of counts for offsets `offset..=offset + longest`.
    let window = longest + 1;
    let mut steps: Vec<Option<usize>> = vec![None; window];
    steps[0] = Some(0);
    let (mut furthest, mut best) = (0, 0);
    let mut offset = 0;
    while offset <= furthest {
        if let Some(count) = steps[offset % window].take() {
            best = count;
            each_from(offset, &mut |len| {
                let to = offset + len;
                let slot = &mut steps[to % window];
                if slot.is_none_or(|known| count + 1 < known) {
                    *slot = Some(count + 1);
                }
                furthest = furthest.max(to);
            });
        }
        offset += 1;
    }
    (furthest, best)
}
