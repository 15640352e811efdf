//! Whole-text operations built on spans: count, replace, delete, trim.

use serde::{Deserialize, Serialize};

use super::SpanCondition;
use crate::UnicodeSet;

/// What counts as one match when counting or replacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountMethod {
    /// Each maximal span counts once.
    WholeSpan,
    /// Each span counts as the fewest elements that cover it.
    #[default]
    MinElements,
}

/// Which ends of the text to trim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimOption {
    Leading,
    Trailing,
    #[default]
    Both,
}

/// Borrowed view of a set for text rewriting.
#[derive(Debug, Clone, Copy)]
pub struct Spanner<'a> {
    set: &'a UnicodeSet,
}

impl<'a> Spanner<'a> {
    pub fn new(set: &'a UnicodeSet) -> Self {
        Self { set }
    }

    pub fn set(&self) -> &'a UnicodeSet {
        self.set
    }

    /// Number of matches of `condition` in `text`.
    pub fn count_in(&self, text: &str, method: CountMethod, condition: SpanCondition) -> usize {
        let skip = skip_condition(condition);
        let mut count = 0;
        let mut start = 0;
        while start < text.len() {
            let end_of_skip = self.set.span(text, start, skip);
            if end_of_skip == text.len() {
                break;
            }
            let (next, elements) = self.set.span_and_count(text, end_of_skip, condition);
            if next == end_of_skip {
                break;
            }
            count += match method {
                CountMethod::WholeSpan => 1,
                CountMethod::MinElements => elements,
            };
            start = next;
        }
        count
    }

    /// Copy `text`, replacing each match with `replacement`.
    ///
    /// With [`CountMethod::MinElements`], a match covered by `n` elements is
    /// replaced by `n` copies.
    pub fn replace_from(
        &self,
        text: &str,
        replacement: &str,
        method: CountMethod,
        condition: SpanCondition,
    ) -> String {
        let copy = skip_condition(condition);
        let mut out = String::with_capacity(text.len());
        let mut end_copy = 0;
        while end_copy < text.len() {
            let (end_modify, elements) = self.set.span_and_count(text, end_copy, condition);
            if end_modify > end_copy && !replacement.is_empty() {
                let copies = match method {
                    CountMethod::WholeSpan => 1,
                    CountMethod::MinElements => elements,
                };
                out.extend(std::iter::repeat_n(replacement, copies));
            }
            if end_modify >= text.len() {
                break;
            }
            end_copy = self.set.span(text, end_modify, copy);
            if end_copy == end_modify {
                // Neither condition advances; keep the rest untouched.
                out.push_str(&text[end_modify..]);
                break;
            }
            out.push_str(&text[end_modify..end_copy]);
        }
        out
    }

    /// Copy `text` without any match.
    pub fn delete_from(&self, text: &str, condition: SpanCondition) -> String {
        self.replace_from(text, "", CountMethod::WholeSpan, condition)
    }

    /// Strip matches from the ends of `text`.
    pub fn trim<'t>(&self, text: &'t str, option: TrimOption, condition: SpanCondition) -> &'t str {
        let start = match option {
            TrimOption::Trailing => 0,
            TrimOption::Leading | TrimOption::Both => self.set.span(text, 0, condition),
        };
        if start == text.len() {
            return "";
        }
        let end = match option {
            TrimOption::Leading => text.len(),
            TrimOption::Trailing | TrimOption::Both => {
                self.set.span_back(text, text.len(), condition)
            }
        };
        &text[start..end.max(start)]
    }
}

/// The condition that steps over text between matches.
fn skip_condition(condition: SpanCondition) -> SpanCondition {
    match condition {
        SpanCondition::NotContained => SpanCondition::Simple,
        SpanCondition::Contained | SpanCondition::Simple => SpanCondition::NotContained,
    }
}
