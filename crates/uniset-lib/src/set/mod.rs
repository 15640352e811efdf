//! The set type: code point ranges plus multi-code-point strings.
//!
//! Storage is shared through `Arc` and separated on first write, so cloning
//! a set is cheap and a frozen set can be sent across threads.

mod edit;
mod entries;

#[cfg(test)]
mod edit_tests;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use uniset_core::{InversionList, StringList, utils};

use crate::oracle::{PropertyId, PropertyOracle};
use crate::pattern::PatternParser;
use crate::{Error, Result};

pub use entries::SetEntry;

/// A set of code points and strings.
///
/// Equality and hashing consider members only, never the frozen flag.
#[derive(Clone, Default)]
pub struct UnicodeSet {
    ranges: Arc<InversionList>,
    strings: Arc<StringList>,
    frozen: bool,
}

impl UnicodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every code point, no strings.
    pub fn all() -> Self {
        Self::from_parts(InversionList::all(), StringList::new())
    }

    pub(crate) fn from_parts(ranges: InversionList, strings: StringList) -> Self {
        Self {
            ranges: Arc::new(ranges),
            strings: Arc::new(strings),
            frozen: false,
        }
    }

    /// Parse a pattern with default options and oracles.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        PatternParser::new(pattern).parse()
    }

    pub fn from_range(start: impl Into<u32>, end: impl Into<u32>) -> Result<Self> {
        let ranges = InversionList::from_range(start.into(), end.into())?;
        Ok(Self::from_parts(ranges, StringList::new()))
    }

    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ranges = InversionList::new();
        for c in chars {
            // char code points are always in range
            let _ = ranges.add(c as u32);
        }
        Self::from_parts(ranges, StringList::new())
    }

    /// Strings of one code point become code points; empty strings are ignored.
    pub fn from_strs<I>(strs: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut ranges = InversionList::new();
        let mut strings = StringList::new();
        for s in strs {
            let s = s.as_ref();
            match utils::single_code_point(s) {
                Some(cp) => {
                    // char code points are always in range
                    let _ = ranges.add(cp);
                }
                None => {
                    strings.insert(s);
                }
            }
        }
        Self::from_parts(ranges, strings)
    }

    pub fn from_boundaries(boundaries: Vec<u32>) -> Result<Self> {
        let ranges = InversionList::from_boundaries(boundaries)?;
        Ok(Self::from_parts(ranges, StringList::new()))
    }

    /// Code points whose `property` has `value`.
    ///
    /// For binary properties any non-zero `value` selects code points that
    /// have the property. An invalid `property` yields the empty set.
    pub fn from_property(oracle: &dyn PropertyOracle, property: PropertyId, value: i32) -> Self {
        if !property.is_valid() {
            return Self::new();
        }
        let binary = oracle.is_binary(property);
        let matches = |cp: u32| {
            if binary {
                oracle.has_binary_property(cp, property) == (value != 0)
            } else {
                oracle.value_matches(cp, property, value)
            }
        };

        let mut boundaries = Vec::new();
        let mut inside = false;
        let mut flip = |at: u32, now: bool| {
            if now != inside {
                boundaries.push(at);
                inside = now;
            }
        };
        match oracle.inclusions(property) {
            Some(starts) => {
                for start in starts.into_iter().filter(|&s| s <= uniset_core::MAX_CODE_POINT) {
                    flip(start, matches(start));
                }
            }
            None => {
                for cp in 0..=uniset_core::MAX_CODE_POINT {
                    flip(cp, matches(cp));
                }
            }
        }
        if inside {
            boundaries.push(uniset_core::HIGH);
        }

        let ranges = InversionList::from_boundaries(boundaries).unwrap_or_default();
        Self::from_parts(ranges, StringList::new())
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Number of code points plus number of strings.
    pub fn len(&self) -> usize {
        self.ranges.size() + self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty() && self.strings.is_empty()
    }

    pub fn range_count(&self) -> usize {
        self.ranges.range_count()
    }

    pub fn has_strings(&self) -> bool {
        !self.strings.is_empty()
    }

    pub fn contains(&self, cp: impl Into<u32>) -> bool {
        self.ranges.contains(cp.into())
    }

    pub fn contains_range(&self, start: impl Into<u32>, end: impl Into<u32>) -> Result<bool> {
        Ok(self.ranges.contains_range(start.into(), end.into())?)
    }

    pub fn contains_none_range(&self, start: impl Into<u32>, end: impl Into<u32>) -> Result<bool> {
        Ok(self.ranges.contains_none_range(start.into(), end.into())?)
    }

    pub fn contains_some_range(&self, start: impl Into<u32>, end: impl Into<u32>) -> Result<bool> {
        Ok(self.ranges.contains_some_range(start.into(), end.into())?)
    }

    /// Membership of a one-code-point string as a code point, otherwise as a string.
    pub fn contains_str(&self, s: &str) -> bool {
        match utils::single_code_point(s) {
            Some(cp) => self.ranges.contains(cp),
            None => self.strings.contains(s),
        }
    }

    pub fn contains_all(&self, other: &Self) -> bool {
        self.ranges.contains_all(&other.ranges) && self.strings.is_superset(&other.strings)
    }

    pub fn contains_none(&self, other: &Self) -> bool {
        self.ranges.contains_none(&other.ranges) && self.strings.is_disjoint(&other.strings)
    }

    pub fn contains_some(&self, other: &Self) -> bool {
        !self.contains_none(other)
    }

    /// Whether every item is a member, per [`contains_str`](Self::contains_str).
    pub fn contains_all_of<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        items.into_iter().all(|s| self.contains_str(s.as_ref()))
    }

    pub fn contains_none_of<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        !items.into_iter().any(|s| self.contains_str(s.as_ref()))
    }

    pub fn contains_some_of<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        items.into_iter().any(|s| self.contains_str(s.as_ref()))
    }

    /// Position of `cp` among the code points in ascending order.
    pub fn index_of(&self, cp: impl Into<u32>) -> Option<usize> {
        self.ranges.index_of(cp.into())
    }

    /// The `index`-th code point in ascending order. Strings are not indexed.
    pub fn char_at(&self, index: usize) -> Option<u32> {
        self.ranges.char_at(index)
    }

    pub(crate) fn inversion_list(&self) -> &InversionList {
        &self.ranges
    }

    pub(crate) fn string_list(&self) -> &StringList {
        &self.strings
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Make the set immutable. Every later mutator fails with
    /// [`Error::FrozenMutation`]. There is no way back; see
    /// [`clone_as_thawed`](Self::clone_as_thawed).
    pub fn freeze(&mut self) -> &mut Self {
        if !self.frozen {
            tracing::trace!(len = self.len(), "freeze");
        }
        self.frozen = true;
        self
    }

    /// Consuming variant of [`freeze`](Self::freeze).
    pub fn frozen(mut self) -> Self {
        self.freeze();
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// A mutable copy sharing storage until the first write.
    pub fn clone_as_thawed(&self) -> Self {
        Self {
            ranges: Arc::clone(&self.ranges),
            strings: Arc::clone(&self.strings),
            frozen: false,
        }
    }

    fn ensure_mutable(&self) -> Result<()> {
        if self.frozen {
            return Err(Error::FrozenMutation);
        }
        Ok(())
    }

    /// Writable ranges, separated from any other set sharing them.
    fn ranges_mut(&mut self) -> Result<&mut InversionList> {
        self.ensure_mutable()?;
        Ok(Arc::make_mut(&mut self.ranges))
    }

    fn strings_mut(&mut self) -> Result<&mut StringList> {
        self.ensure_mutable()?;
        Ok(Arc::make_mut(&mut self.strings))
    }
}

impl PartialEq for UnicodeSet {
    fn eq(&self, other: &Self) -> bool {
        self.ranges == other.ranges && self.strings == other.strings
    }
}

impl Eq for UnicodeSet {}

impl Hash for UnicodeSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ranges.hash(state);
        self.strings.hash(state);
    }
}

impl fmt::Debug for UnicodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnicodeSet")
            .field("pattern", &self.to_pattern(false))
            .field("frozen", &self.frozen)
            .finish()
    }
}

impl fmt::Display for UnicodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pattern(false))
    }
}

impl FromStr for UnicodeSet {
    type Err = Error;

    fn from_str(pattern: &str) -> Result<Self> {
        Self::from_pattern(pattern)
    }
}

impl FromIterator<char> for UnicodeSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}

impl<'a> FromIterator<&'a str> for UnicodeSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::from_strs(iter)
    }
}
