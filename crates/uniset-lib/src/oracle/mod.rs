//! Narrow interfaces to the outside knowledge a set needs.
//!
//! Three capabilities are injected as trait objects rather than looked up in
//! global tables:
//! - [`PropertyOracle`]: Unicode character properties, for `\p{...}` and `[:...:]`
//! - [`SymbolTable`]: `$name` variables for patterns
//! - [`CaseClosure`]: case-equivalent forms for case-insensitive sets
//!
//! Each has a `std`-backed default so simple patterns parse without setup.

mod case;
mod properties;
mod symbols;


pub use case::StdCaseClosure;
pub use properties::StdProperties;
pub use symbols::MapSymbolTable;

use crate::UnicodeSet;

/// Opaque property identifier issued by a [`PropertyOracle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(pub i32);

impl PropertyId {
    /// Returned for names the oracle does not know.
    pub const INVALID: Self = Self(-1);

    pub fn is_valid(self) -> bool {
        self.0 >= 0
    }
}

/// Sentinel for an unknown property value.
pub const INVALID_VALUE: i32 = -1;

/// Source of Unicode character properties.
///
/// Lookups of unknown names return [`PropertyId::INVALID`] or
/// [`INVALID_VALUE`]; per-code-point queries on invalid ids return `0` or
/// `false`, which turn into empty sets rather than errors.
pub trait PropertyOracle {
    /// Property id for a name or alias.
    fn property_enum(&self, alias: &str) -> PropertyId;

    /// Value id for a value name or alias of `property`.
    fn property_value_enum(&self, property: PropertyId, alias: &str) -> i32;

    fn property_value_name(&self, property: PropertyId, value: i32) -> Option<String>;

    fn is_binary(&self, property: PropertyId) -> bool;

    fn has_binary_property(&self, cp: u32, property: PropertyId) -> bool;

    fn int_property_value(&self, cp: u32, property: PropertyId) -> i32;

    fn int_property_min_value(&self, property: PropertyId) -> i32;

    fn int_property_max_value(&self, property: PropertyId) -> i32;

    /// Whether `cp` has `value` for `property`.
    ///
    /// Equality by default; oracles with grouped values (a general category
    /// such as `L` covering `Lu`, `Ll`, ...) override this with a mask test.
    fn value_matches(&self, cp: u32, property: PropertyId, value: i32) -> bool {
        self.int_property_value(cp, property) == value
    }

    /// Sorted starts of runs over which `property` is constant, beginning at 0.
    ///
    /// `None` makes set construction test every code point.
    fn inclusions(&self, _property: PropertyId) -> Option<Vec<u32>> {
        None
    }

    /// Code point for a character name, for `\N{...}`.
    fn char_from_name(&self, _name: &str) -> Option<u32> {
        None
    }

    fn general_category(&self) -> PropertyId {
        self.property_enum("General_Category")
    }

    fn script(&self) -> PropertyId {
        self.property_enum("Script")
    }
}

/// Named variables available to a pattern as `$name`.
pub trait SymbolTable {
    /// Replacement text for a variable name.
    fn lookup(&self, name: &str) -> Option<String>;

    /// The set a stand-in code point represents, if any.
    fn lookup_matcher(&self, cp: u32) -> Option<UnicodeSet>;

    /// Scan a variable name starting at byte `pos` of `text`, not past `limit`.
    ///
    /// Returns the name and the byte offset after it.
    fn parse_reference(&self, text: &str, pos: usize, limit: usize) -> Option<(String, usize)> {
        let len = scan_identifier(text.get(pos..limit)?)?;
        Some((text[pos..pos + len].to_owned(), pos + len))
    }
}

/// Case-equivalent forms of code points and strings.
pub trait CaseClosure {
    /// Every form case-equivalent to `cp`, as strings; may include `cp` itself.
    fn code_point_closure(&self, cp: u32) -> Vec<String>;

    fn string_closure(&self, s: &str) -> Vec<String>;
}

/// Byte length of the identifier at the start of `s`.
pub(crate) fn scan_identifier(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;
    if !(first.is_alphabetic() || first == '_') {
        return None;
    }
    let end = chars
        .find(|&(_, c)| !(c.is_alphanumeric() || c == '_'))
        .map_or(s.len(), |(at, _)| at);
    Some(end)
}

/// Loose name comparison: ASCII case, spaces, `_` and `-` are ignored.
pub fn loose_eq(a: &str, b: &str) -> bool {
    let key = |s: &str| {
        s.chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect::<Vec<_>>()
    };
    key(a) == key(b)
}
