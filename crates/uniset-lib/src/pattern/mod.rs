//! Pattern syntax: parsing `[a-z\p{Lu}{ch}]`-style text into sets and back.
//!
//! The parser walks the pattern once with one token of lookahead. Nested
//! sets push a frame on an explicit stack, so nesting depth is bounded by
//! [`ParseOptions::recursion_limit`] rather than by the host stack.

mod cursor;
mod error;
mod escape;
mod format;
mod parser;
mod property;

#[cfg(test)]
mod parser_tests;

use serde::{Deserialize, Serialize};

pub use error::{PatternError, PatternErrorKind};

use crate::oracle::{
    CaseClosure, PropertyOracle, StdCaseClosure, StdProperties, SymbolTable,
};
use crate::{Result, UnicodeSet};

/// Most strings a `{ax}-{bz}` string range may expand to.
pub const MAX_STRING_RANGE_EXPANSION: u64 = 65_536;

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Skip unescaped Pattern_White_Space between tokens.
    pub ignore_space: bool,
    /// Close every bracketed set over case before applying its `^`.
    pub case_insensitive: bool,
    /// Deepest allowed set nesting.
    pub recursion_limit: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            ignore_space: true,
            case_insensitive: false,
            recursion_limit: 100,
        }
    }
}

impl ParseOptions {
    pub fn with_ignore_space(mut self, value: bool) -> Self {
        self.ignore_space = value;
        self
    }

    pub fn with_case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }
}

/// Builder for parsing one pattern.
///
/// ```
/// use uniset_lib::PatternParser;
///
/// let set = PatternParser::new("[a-c{ch}]").parse().unwrap();
/// assert!(set.contains('b'));
/// assert!(set.contains_str("ch"));
/// ```
pub struct PatternParser<'p> {
    pattern: &'p str,
    options: ParseOptions,
    properties: &'p dyn PropertyOracle,
    symbols: Option<&'p dyn SymbolTable>,
    case_closure: &'p dyn CaseClosure,
}

impl<'p> PatternParser<'p> {
    pub fn new(pattern: &'p str) -> Self {
        Self {
            pattern,
            options: ParseOptions::default(),
            properties: &StdProperties,
            symbols: None,
            case_closure: &StdCaseClosure,
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_properties(mut self, properties: &'p dyn PropertyOracle) -> Self {
        self.properties = properties;
        self
    }

    /// Enable `$name` variables. Without a table, `$` is an ordinary character.
    pub fn with_symbols(mut self, symbols: &'p dyn SymbolTable) -> Self {
        self.symbols = Some(symbols);
        self
    }

    pub fn with_case_closure(mut self, closure: &'p dyn CaseClosure) -> Self {
        self.case_closure = closure;
        self
    }

    /// Parse the whole pattern. Only ignorable white space may follow the set.
    pub fn parse(&self) -> Result<UnicodeSet> {
        let (set, end) = self.parse_at(0)?;
        if end < self.pattern.len() {
            let err = PatternError::new(
                PatternErrorKind::TrailingGarbage,
                end,
                &self.pattern[end..],
            );
            tracing::debug!(pattern = self.pattern, %err, "pattern rejected");
            return Err(err.into());
        }
        Ok(set)
    }

    /// Parse one set starting at byte `start`, returning it with the byte
    /// offset just past it (and past any ignorable white space).
    pub fn parse_at(&self, start: usize) -> Result<(UnicodeSet, usize)> {
        if !self.pattern.is_char_boundary(start) {
            let kind = PatternErrorKind::MissingOpenBracket;
            return Err(PatternError::new(kind, start, "").into());
        }
        let result = parser::Machine::new(self, start).run();
        match &result {
            Ok((set, end)) => {
                let len = set.len();
                tracing::debug!(pattern = self.pattern, start, end, len, "parsed pattern");
            }
            Err(err) => tracing::debug!(pattern = self.pattern, start, %err, "pattern rejected"),
        }
        result
    }
}
