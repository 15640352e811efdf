//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{HIGH, InversionList, StringList, utils};

impl InversionList {
    /// Boundaries must be strictly increasing, even in number, and within `HIGH`.
    #[inline]
    pub(crate) fn assert_canonical(&self) {
        let list = self.boundaries();
        debug_assert!(
            list.len() % 2 == 0,
            "InversionList: odd boundary count {}",
            list.len()
        );
        debug_assert!(
            list.windows(2).all(|pair| pair[0] < pair[1]),
            "InversionList: boundaries not strictly increasing: {list:?}"
        );
        debug_assert!(
            list.last().is_none_or(|&last| last <= HIGH),
            "InversionList: boundary past {HIGH:#X}: {list:?}"
        );
    }
}

impl StringList {
    /// Every stored string must hold at least two code points.
    #[inline]
    pub(crate) fn assert_multi_code_point(&self) {
        debug_assert!(
            self.iter().all(utils::is_multi_code_point),
            "StringList: holds a string shorter than two code points"
        );
    }
}
