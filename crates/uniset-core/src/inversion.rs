//! Inversion list: canonical encoding of a union of code point intervals.
//!
//! The list is a strictly increasing sequence of boundaries `b0 < b1 < ... < bn`
//! of even length. A code point `x` is a member iff the number of boundaries
//! `<= x` is odd, so boundaries alternate between "set turns on" and "set turns
//! off". Each pair `[b(2i), b(2i+1))` is one half-open range.
//!
//! Because adjacent ranges would share a boundary that cancels out, the encoding
//! is canonical by construction: sorted, disjoint, never adjacent.
//!
//! Complement toggles a leading `0` and a trailing `HIGH`. Union, intersection,
//! difference and symmetric difference are a single merge of two boundary
//! sequences that tracks the parity of each input.

use std::ops::RangeInclusive;

use crate::{HIGH, InvalidRangeError, MAX_CODE_POINT, check_range};

/// Canonical sorted list of range boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InversionList {
    list: Vec<u32>,
}

impl InversionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every code point, `0..=0x10FFFF`.
    pub fn all() -> Self {
        Self { list: vec![0, HIGH] }
    }

    pub fn from_range(start: u32, end: u32) -> Result<Self, InvalidRangeError> {
        check_range(start, end)?;
        Ok(Self {
            list: vec![start, end + 1],
        })
    }

    /// Union of `ranges`. The first reversed or out-of-domain range fails
    /// the whole call.
    pub fn from_ranges<I>(ranges: I) -> Result<Self, InvalidRangeError>
    where
        I: IntoIterator<Item = RangeInclusive<u32>>,
    {
        let mut list = Self::new();
        for range in ranges {
            list.add_range(*range.start(), *range.end())?;
        }
        Ok(list)
    }

    /// Adopt raw boundaries, rejecting anything that is not already canonical.
    pub fn from_boundaries(list: Vec<u32>) -> Result<Self, InvalidRangeError> {
        if list.len() % 2 != 0 {
            return Err(InvalidRangeError::NotCanonical { index: list.len() });
        }
        for (index, pair) in list.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(InvalidRangeError::NotCanonical { index: index + 1 });
            }
        }
        if let Some(&last) = list.last()
            && last > HIGH
        {
            return Err(InvalidRangeError::NotCanonical {
                index: list.len() - 1,
            });
        }
        Ok(Self { list })
    }

    /// Raw boundaries. Even length; the last one may be `HIGH`.
    #[inline]
    pub fn boundaries(&self) -> &[u32] {
        &self.list
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn range_count(&self) -> usize {
        self.list.len() / 2
    }

    /// The `index`-th range as a closed interval.
    pub fn range(&self, index: usize) -> Option<RangeInclusive<u32>> {
        let start = *self.list.get(2 * index)?;
        let limit = *self.list.get(2 * index + 1)?;
        Some(start..=limit - 1)
    }

    /// First code point of the `index`-th range.
    ///
    /// # Panics
    /// Panics if `index >= range_count()`.
    #[inline]
    pub fn range_start(&self, index: usize) -> u32 {
        self.list[2 * index]
    }

    /// Last code point of the `index`-th range.
    ///
    /// # Panics
    /// Panics if `index >= range_count()`.
    #[inline]
    pub fn range_end(&self, index: usize) -> u32 {
        self.list[2 * index + 1] - 1
    }

    /// Number of code points in the list.
    pub fn size(&self) -> usize {
        self.list
            .chunks_exact(2)
            .map(|pair| (pair[1] - pair[0]) as usize)
            .sum()
    }

    pub fn iter_ranges(&self) -> impl ExactSizeIterator<Item = RangeInclusive<u32>> + '_ {
        self.list.chunks_exact(2).map(|pair| pair[0]..=pair[1] - 1)
    }

    pub fn iter_code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.iter_ranges().flatten()
    }

    /// Number of boundaries `<= cp`. Odd means `cp` is a member.
    #[inline]
    fn find(&self, cp: u32) -> usize {
        self.list.partition_point(|&boundary| boundary <= cp)
    }

    pub fn contains(&self, cp: u32) -> bool {
        cp <= MAX_CODE_POINT && self.find(cp) % 2 == 1
    }

    /// Whether every code point of `start..=end` is a member.
    pub fn contains_range(&self, start: u32, end: u32) -> Result<bool, InvalidRangeError> {
        check_range(start, end)?;
        let i = self.find(start);
        Ok(i % 2 == 1 && end < self.list[i])
    }

    /// Whether no code point of `start..=end` is a member.
    pub fn contains_none_range(&self, start: u32, end: u32) -> Result<bool, InvalidRangeError> {
        check_range(start, end)?;
        let i = self.find(start);
        Ok(i % 2 == 0 && self.list.get(i).is_none_or(|&next_start| end < next_start))
    }

    pub fn contains_some_range(&self, start: u32, end: u32) -> Result<bool, InvalidRangeError> {
        Ok(!self.contains_none_range(start, end)?)
    }

    /// Whether every member of `other` is a member of `self`.
    pub fn contains_all(&self, other: &Self) -> bool {
        other.difference(self).is_empty()
    }

    /// Whether `self` and `other` share no member.
    pub fn contains_none(&self, other: &Self) -> bool {
        self.intersection(other).is_empty()
    }

    /// Position of `cp` among the members in ascending order.
    pub fn index_of(&self, cp: u32) -> Option<usize> {
        let i = self.find(cp);
        if i % 2 == 0 {
            return None;
        }
        let before: usize = self.list[..i - 1]
            .chunks_exact(2)
            .map(|pair| (pair[1] - pair[0]) as usize)
            .sum();
        Some(before + (cp - self.list[i - 1]) as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn char_at(&self, mut index: usize) -> Option<u32> {
        for pair in self.list.chunks_exact(2) {
            let len = (pair[1] - pair[0]) as usize;
            if index < len {
                return Some(pair[0] + index as u32);
            }
            index -= len;
        }
        None
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    pub fn add(&mut self, cp: u32) -> Result<(), InvalidRangeError> {
        self.add_range(cp, cp)
    }

    pub fn add_range(&mut self, start: u32, end: u32) -> Result<(), InvalidRangeError> {
        check_range(start, end)?;
        self.splice(start, end + 1, true);
        self.assert_canonical();
        Ok(())
    }

    pub fn remove_range(&mut self, start: u32, end: u32) -> Result<(), InvalidRangeError> {
        check_range(start, end)?;
        self.splice(start, end + 1, false);
        self.assert_canonical();
        Ok(())
    }

    /// Keep only the members inside `start..=end`.
    pub fn retain_range(&mut self, start: u32, end: u32) -> Result<(), InvalidRangeError> {
        check_range(start, end)?;
        if start > 0 {
            self.splice(0, start, false);
        }
        if end < MAX_CODE_POINT {
            self.splice(end + 1, HIGH, false);
        }
        self.assert_canonical();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Invert membership of every code point.
    pub fn complement(&mut self) {
        if self.list.first() == Some(&0) {
            self.list.remove(0);
        } else {
            self.list.insert(0, 0);
        }
        if self.list.last() == Some(&HIGH) {
            self.list.pop();
        } else {
            self.list.push(HIGH);
        }
        self.assert_canonical();
    }

    /// Invert membership inside `start..=end`.
    ///
    /// Toggling a half-open range is the symmetric difference of the boundary
    /// set with `{start, end + 1}`.
    pub fn complement_range(&mut self, start: u32, end: u32) -> Result<(), InvalidRangeError> {
        check_range(start, end)?;
        for boundary in [start, end + 1] {
            match self.list.binary_search(&boundary) {
                Ok(at) => {
                    self.list.remove(at);
                }
                Err(at) => self.list.insert(at, boundary),
            }
        }
        self.assert_canonical();
        Ok(())
    }

    /// Set membership of the half-open range `start..limit` to `on`.
    ///
    /// Boundaries strictly inside the range are dropped; a boundary is kept at
    /// either edge only where membership actually changes there.
    fn splice(&mut self, start: u32, limit: u32, on: bool) {
        debug_assert!(start < limit && limit <= HIGH);
        let lo = self.list.partition_point(|&b| b < start);
        let hi = self.list.partition_point(|&b| b <= limit);
        let on_before = lo % 2 == 1;
        let on_after = hi % 2 == 1;

        let mut edges = Vec::with_capacity(2);
        if on_before != on {
            edges.push(start);
        }
        if on != on_after {
            edges.push(limit);
        }
        self.list.splice(lo..hi, edges);
    }

    // ------------------------------------------------------------------------
    // Algebra
    // ------------------------------------------------------------------------

    pub fn union(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a || b)
    }

    pub fn intersection(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a && b)
    }

    pub fn difference(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a && !b)
    }

    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a != b)
    }

    /// Merge two boundary sequences, emitting a boundary wherever the combined
    /// membership `op(in_self, in_other)` flips.
    ///
    /// `op(false, false)` must be `false`, so the output ends "off".
    fn combine(&self, other: &Self, op: impl Fn(bool, bool) -> bool) -> Self {
        let (a, b) = (&self.list, &other.list);
        let mut out = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);
        let (mut in_a, mut in_b, mut inside) = (false, false, false);

        while i < a.len() || j < b.len() {
            let x = a.get(i).copied().unwrap_or(u32::MAX);
            let y = b.get(j).copied().unwrap_or(u32::MAX);
            let at = x.min(y);
            if x == at {
                in_a = !in_a;
                i += 1;
            }
            if y == at {
                in_b = !in_b;
                j += 1;
            }
            let now = op(in_a, in_b);
            if now != inside {
                out.push(at);
                inside = now;
            }
        }

        let result = Self { list: out };
        result.assert_canonical();
        result
    }
}
