//! Total orders over sets, and between code points and strings.

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uniset_core::InversionList;

use crate::UnicodeSet;

/// How [`UnicodeSet::compare_with`] orders sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStyle {
    /// Fewer elements first, then element order.
    #[default]
    ShorterFirst,
    /// More elements first, then element order.
    LongerFirst,
    /// Element order only.
    Lexicographic,
}

/// Order a code point against a string by its first code point.
///
/// On a tie the longer side is greater, so `'a' < "ab"` and `'a' == "a"`.
pub fn compare_code_point_str(cp: u32, text: &str) -> Ordering {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return Ordering::Greater;
    };
    cp.cmp(&u32::from(first)).then_with(|| {
        if chars.next().is_some() {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    })
}

pub fn compare_str_code_point(text: &str, cp: u32) -> Ordering {
    compare_code_point_str(cp, text).reverse()
}

impl UnicodeSet {
    /// Compare two sets under `style`.
    ///
    /// Element order lists code points ascending, then strings ascending.
    pub fn compare_with(&self, other: &Self, style: ComparisonStyle) -> Ordering {
        let by_size = match style {
            ComparisonStyle::ShorterFirst => self.len().cmp(&other.len()),
            ComparisonStyle::LongerFirst => other.len().cmp(&self.len()),
            ComparisonStyle::Lexicographic => Ordering::Equal,
        };
        by_size.then_with(|| self.compare_elements(other))
    }

    fn compare_elements(&self, other: &Self) -> Ordering {
        let mut left = Walk::new(self.inversion_list());
        let mut right = Walk::new(other.inversion_list());
        loop {
            match (left.current(), right.current()) {
                (None, None) => return self.strings().cmp(other.strings()),
                (None, Some(cp)) => {
                    return self
                        .strings()
                        .next()
                        .map_or(Ordering::Less, |s| compare_str_code_point(s, cp));
                }
                (Some(cp), None) => {
                    return other
                        .strings()
                        .next()
                        .map_or(Ordering::Greater, |s| compare_code_point_str(cp, s));
                }
                (Some(a), Some(b)) if a != b => return a.cmp(&b),
                (Some(_), Some(_)) => {
                    let step = left.remaining().min(right.remaining());
                    left.skip(step);
                    right.skip(step);
                }
            }
        }
    }
}

impl PartialOrd for UnicodeSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnicodeSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_with(other, ComparisonStyle::ShorterFirst)
    }
}

/// Position in the code points of an inversion list, one range at a time.
struct Walk<'a> {
    ranges: &'a InversionList,
    index: usize,
    at: u32,
}

impl<'a> Walk<'a> {
    fn new(ranges: &'a InversionList) -> Self {
        let at = ranges.range(0).map_or(0, |r| *r.start());
        Self { ranges, index: 0, at }
    }

    fn current(&self) -> Option<u32> {
        self.ranges.range(self.index).map(|_| self.at)
    }

    /// Code points left in the current range, including the current one.
    fn remaining(&self) -> u32 {
        self.ranges
            .range(self.index)
            .map_or(0, |r| *r.end() - self.at + 1)
    }

    fn skip(&mut self, count: u32) {
        if count < self.remaining() {
            self.at += count;
            return;
        }
        self.index += 1;
        self.at = self.ranges.range(self.index).map_or(0, |r| *r.start());
    }
}
