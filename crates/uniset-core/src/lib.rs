#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core storage for uniset: code point ranges and multi-code-point strings.
//!
//! Two containers:
//! - **Ranges** (`InversionList`): canonical boundary encoding of disjoint
//!   code point intervals, with merge-based boolean algebra
//! - **Strings** (`StringList`): sorted strings of two or more code points
//!
//! Neither container knows about the other; `uniset-lib` pairs them into a set.

mod invariants;
pub mod inversion;
pub mod strings;
pub mod utils;

#[cfg(test)]
mod strings_tests;

pub use inversion::InversionList;
pub use strings::StringList;

// ============================================================================
// Code Point Domain
// ============================================================================

/// Smallest code point.
pub const MIN_CODE_POINT: u32 = 0;

/// Largest code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// One past the largest code point. Used as the final "off" boundary.
pub const HIGH: u32 = 0x110000;

/// Validate a closed interval of code points.
pub fn check_range(start: u32, end: u32) -> Result<(), InvalidRangeError> {
    if start > MAX_CODE_POINT {
        return Err(InvalidRangeError::OutOfRange(start));
    }
    if end > MAX_CODE_POINT {
        return Err(InvalidRangeError::OutOfRange(end));
    }
    if start > end {
        return Err(InvalidRangeError::Reversed { start, end });
    }
    Ok(())
}

// ============================================================================
// Errors
// ============================================================================

/// A malformed numeric range or an out-of-domain code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRangeError {
    #[error("code point {0:#06X} is outside 0x0000..=0x10FFFF")]
    OutOfRange(u32),

    #[error("range start {start:#06X} is greater than end {end:#06X}")]
    Reversed { start: u32, end: u32 },

    /// Raw boundaries were not strictly increasing, odd in number, or past `HIGH`.
    #[error("inversion list is not canonical at boundary {index}")]
    NotCanonical { index: usize },
}
