//! Mutators. Each fails with [`Error::FrozenMutation`](crate::Error) on a
//! frozen set and leaves the set unchanged on any error.

use std::sync::Arc;

use uniset_core::{InversionList, StringList, utils};

use super::UnicodeSet;
use crate::Result;
use crate::oracle::CaseClosure;
use crate::pattern::PatternParser;

impl UnicodeSet {
    pub fn add(&mut self, cp: impl Into<u32>) -> Result<&mut Self> {
        let cp = cp.into();
        self.ranges_mut()?.add(cp)?;
        Ok(self)
    }

    pub fn add_range(&mut self, start: impl Into<u32>, end: impl Into<u32>) -> Result<&mut Self> {
        let (start, end) = (start.into(), end.into());
        self.ranges_mut()?.add_range(start, end)?;
        Ok(self)
    }

    /// Add a string. One code point is added as a code point; empty is ignored.
    pub fn add_str(&mut self, s: &str) -> Result<&mut Self> {
        match utils::single_code_point(s) {
            Some(cp) => self.add(cp),
            None => {
                self.strings_mut()?.insert(s);
                Ok(self)
            }
        }
    }

    pub fn add_all_strs<I>(&mut self, strs: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.add_all(&Self::from_strs(strs))
    }

    /// Add every code point of `text`, each as a single code point.
    pub fn add_chars_of(&mut self, text: &str) -> Result<&mut Self> {
        self.add_all(&Self::from_chars(text.chars()))
    }

    pub fn add_all(&mut self, other: &Self) -> Result<&mut Self> {
        self.ensure_mutable()?;
        self.replace(
            self.ranges.union(&other.ranges),
            self.strings.union(&other.strings),
        );
        Ok(self)
    }

    /// Keep only `cp`. Strings are dropped.
    pub fn retain(&mut self, cp: impl Into<u32>) -> Result<&mut Self> {
        let cp = cp.into();
        self.retain_range(cp, cp)
    }

    /// Keep only code points inside `start..=end`. Strings are dropped.
    pub fn retain_range(&mut self, start: impl Into<u32>, end: impl Into<u32>) -> Result<&mut Self> {
        let (start, end) = (start.into(), end.into());
        uniset_core::check_range(start, end)?;
        self.ranges_mut()?.retain_range(start, end)?;
        self.strings_mut()?.clear();
        Ok(self)
    }

    /// Keep only `s` if it is a member; otherwise the set becomes empty.
    pub fn retain_str(&mut self, s: &str) -> Result<&mut Self> {
        if let Some(cp) = utils::single_code_point(s) {
            return self.retain(cp);
        }
        self.ensure_mutable()?;
        let mut strings = StringList::new();
        if self.strings.contains(s) {
            strings.insert(s);
        }
        self.replace(InversionList::new(), strings);
        Ok(self)
    }

    pub fn retain_all(&mut self, other: &Self) -> Result<&mut Self> {
        self.ensure_mutable()?;
        self.replace(
            self.ranges.intersection(&other.ranges),
            self.strings.intersection(&other.strings),
        );
        Ok(self)
    }

    pub fn remove(&mut self, cp: impl Into<u32>) -> Result<&mut Self> {
        let cp = cp.into();
        self.remove_range(cp, cp)
    }

    pub fn remove_range(&mut self, start: impl Into<u32>, end: impl Into<u32>) -> Result<&mut Self> {
        let (start, end) = (start.into(), end.into());
        self.ranges_mut()?.remove_range(start, end)?;
        Ok(self)
    }

    pub fn remove_str(&mut self, s: &str) -> Result<&mut Self> {
        match utils::single_code_point(s) {
            Some(cp) => self.remove(cp),
            None => {
                self.strings_mut()?.remove(s);
                Ok(self)
            }
        }
    }

    pub fn remove_all(&mut self, other: &Self) -> Result<&mut Self> {
        self.ensure_mutable()?;
        self.replace(
            self.ranges.difference(&other.ranges),
            self.strings.difference(&other.strings),
        );
        Ok(self)
    }

    pub fn remove_all_strings(&mut self) -> Result<&mut Self> {
        self.strings_mut()?.clear();
        Ok(self)
    }

    /// Complement the code points. Strings are untouched, so applying this
    /// twice restores the set.
    pub fn complement(&mut self) -> Result<&mut Self> {
        self.ranges_mut()?.complement();
        Ok(self)
    }

    pub fn complement_range(
        &mut self,
        start: impl Into<u32>,
        end: impl Into<u32>,
    ) -> Result<&mut Self> {
        let (start, end) = (start.into(), end.into());
        self.ranges_mut()?.complement_range(start, end)?;
        Ok(self)
    }

    /// Toggle membership of one string (or code point).
    pub fn complement_str(&mut self, s: &str) -> Result<&mut Self> {
        if let Some(cp) = utils::single_code_point(s) {
            return self.complement_range(cp, cp);
        }
        let strings = self.strings_mut()?;
        if !strings.remove(s) {
            strings.insert(s);
        }
        Ok(self)
    }

    /// Symmetric difference with `other`.
    pub fn complement_all(&mut self, other: &Self) -> Result<&mut Self> {
        self.ensure_mutable()?;
        self.replace(
            self.ranges.symmetric_difference(&other.ranges),
            self.strings.symmetric_difference(&other.strings),
        );
        Ok(self)
    }

    /// Make the set exactly `start..=end`.
    pub fn set_range(&mut self, start: impl Into<u32>, end: impl Into<u32>) -> Result<&mut Self> {
        self.ensure_mutable()?;
        let ranges = InversionList::from_range(start.into(), end.into())?;
        self.replace(ranges, StringList::new());
        Ok(self)
    }

    pub fn clear(&mut self) -> Result<&mut Self> {
        self.ensure_mutable()?;
        self.replace(InversionList::new(), StringList::new());
        Ok(self)
    }

    /// Replace the contents with a parsed pattern, using default options.
    pub fn apply_pattern(&mut self, pattern: &str) -> Result<&mut Self> {
        self.ensure_mutable()?;
        let parsed = PatternParser::new(pattern).parse()?;
        self.ranges = parsed.ranges;
        self.strings = parsed.strings;
        Ok(self)
    }

    /// Add every case-equivalent form of every member.
    pub fn close_over(&mut self, closure: &dyn CaseClosure) -> Result<&mut Self> {
        self.ensure_mutable()?;
        let mut added = Self::new();
        for cp in self.code_points() {
            for form in closure.code_point_closure(cp) {
                added.add_str(&form)?;
            }
        }
        for s in self.strings() {
            for form in closure.string_closure(s) {
                added.add_str(&form)?;
            }
        }
        tracing::debug!(before = self.len(), forms = added.len(), "close over case");
        self.add_all(&added)
    }

    fn replace(&mut self, ranges: InversionList, strings: StringList) {
        self.ranges = Arc::new(ranges);
        self.strings = Arc::new(strings);
    }
}
