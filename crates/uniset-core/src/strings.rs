//! Sorted storage for the multi-code-point members of a set.

use std::collections::BTreeSet;
use std::ops::Bound;

use crate::utils;

/// Strings of two or more code points, ordered by code point sequence.
///
/// Rust string ordering is byte-wise UTF-8, which agrees with code point order,
/// so a `BTreeSet<String>` keeps the members sorted the way set order requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringList {
    strings: BTreeSet<String>,
}

impl StringList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `s` if it holds two or more code points.
    ///
    /// Returns `true` if the list changed.
    pub fn insert(&mut self, s: &str) -> bool {
        if !utils::is_multi_code_point(s) || self.strings.contains(s) {
            return false;
        }
        self.strings.insert(s.to_owned())
    }

    pub fn insert_owned(&mut self, s: String) -> bool {
        if !utils::is_multi_code_point(&s) {
            return false;
        }
        self.strings.insert(s)
    }

    pub fn remove(&mut self, s: &str) -> bool {
        self.strings.remove(s)
    }

    pub fn contains(&self, s: &str) -> bool {
        self.strings.contains(s)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn clear(&mut self) {
        self.strings.clear();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.strings.iter().map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.strings.first().map(String::as_str)
    }

    /// Members whose first code point is `c`, in order.
    pub fn starting_with(&self, c: char) -> impl Iterator<Item = &str> + '_ {
        let mut buf = [0u8; 4];
        let prefix: &str = c.encode_utf8(&mut buf);
        self.strings
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |s| s.starts_with(c))
            .map(String::as_str)
    }

    /// Length in bytes of the longest member.
    pub fn max_len(&self) -> usize {
        self.strings.iter().map(String::len).max().unwrap_or(0)
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            strings: self.strings.union(&other.strings).cloned().collect(),
        }
    }

    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            strings: self.strings.intersection(&other.strings).cloned().collect(),
        }
    }

    pub fn difference(&self, other: &Self) -> Self {
        Self {
            strings: self.strings.difference(&other.strings).cloned().collect(),
        }
    }

    pub fn symmetric_difference(&self, other: &Self) -> Self {
        Self {
            strings: self
                .strings
                .symmetric_difference(&other.strings)
                .cloned()
                .collect(),
        }
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        self.strings.is_superset(&other.strings)
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.strings.is_disjoint(&other.strings)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.strings.retain(|s| keep(s));
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for s in iter {
            list.insert_owned(s.into());
        }
        list.assert_multi_code_point();
        list
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::collections::btree_set::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.strings.iter().map(String::as_str as fn(&String) -> &str)
    }
}
