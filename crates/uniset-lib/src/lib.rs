//! uniset: sets of Unicode code points and strings.
//!
//! A [`UnicodeSet`] holds code point ranges and multi-code-point strings. Sets
//! come from patterns like `[a-z\p{Lu}{ch}]`, support the full boolean
//! algebra, and scan text: span, count, replace, delete and trim.
//!
//! # Example
//!
//! ```
//! use uniset_lib::{SpanCondition, UnicodeSet};
//!
//! let vowels: UnicodeSet = "[aeiou{ai}]".parse().unwrap();
//! assert!(vowels.contains('e'));
//! assert_eq!(vowels.span("aixyz", 0, SpanCondition::Simple), 2);
//! assert_eq!(vowels.to_pattern(false), "[aeiou{ai}]");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod oracle;
pub mod ordering;
pub mod pattern;
pub mod set;
pub mod span;

pub use ordering::ComparisonStyle;
pub use pattern::{ParseOptions, PatternError, PatternErrorKind, PatternParser};
pub use set::{SetEntry, UnicodeSet};
pub use span::{CountMethod, SpanCondition, Spanner, TrimOption};
pub use uniset_core::{InvalidRangeError, MAX_CODE_POINT, MIN_CODE_POINT};

/// Errors from building or changing a set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A code point outside `0..=0x10FFFF` or a reversed range.
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),

    #[error("invalid pattern: {0}")]
    PatternSyntax(#[from] PatternError),

    /// A mutator was called on a frozen set. The set is unchanged.
    #[error("set is frozen")]
    FrozenMutation,
}

/// Result type for set operations.
pub type Result<T> = std::result::Result<T, Error>;
