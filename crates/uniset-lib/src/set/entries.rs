use std::ops::RangeInclusive;

use super::UnicodeSet;

/// One element group of a set, in canonical order: ranges ascending, then
/// strings ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetEntry<'a> {
    Range { start: u32, end: u32 },
    String(&'a str),
}

impl UnicodeSet {
    pub fn entries(&self) -> impl Iterator<Item = SetEntry<'_>> + '_ {
        let ranges = self.ranges().map(|r| SetEntry::Range {
            start: *r.start(),
            end: *r.end(),
        });
        ranges.chain(self.strings().map(SetEntry::String))
    }

    pub fn ranges(&self) -> impl ExactSizeIterator<Item = RangeInclusive<u32>> + '_ {
        self.inversion_list().iter_ranges()
    }

    /// Every code point, expanded. Strings are skipped.
    pub fn code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.inversion_list().iter_code_points()
    }

    pub fn strings(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.string_list().iter()
    }
}
