use indexmap::IndexMap;

use super::SymbolTable;
use crate::UnicodeSet;

/// First code point handed out as a stand-in for a set-valued variable.
pub const STAND_IN_START: u32 = 0xF0000;

/// Last usable stand-in (plane 15 private use area).
pub const STAND_IN_END: u32 = 0xFFFFD;

/// A [`SymbolTable`] backed by maps.
///
/// Text variables expand to their text. Set variables expand to a private
/// use stand-in code point that [`lookup_matcher`](SymbolTable::lookup_matcher)
/// resolves back to the set.
#[derive(Debug, Clone, Default)]
pub struct MapSymbolTable {
    variables: IndexMap<String, String>,
    matchers: IndexMap<u32, UnicodeSet>,
}

impl MapSymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `$name` as pattern text.
    pub fn define(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.variables.insert(name.into(), text.into());
        self
    }

    /// Define `$name` as a set. Returns the stand-in code point, or `None`
    /// once the private use range is used up.
    pub fn define_set(&mut self, name: impl Into<String>, set: UnicodeSet) -> Option<u32> {
        let stand_in = STAND_IN_START + self.matchers.len() as u32;
        if stand_in > STAND_IN_END {
            return None;
        }
        let text = char::from_u32(stand_in)?.to_string();
        self.variables.insert(name.into(), text);
        self.matchers.insert(stand_in, set);
        Some(stand_in)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }
}

impl SymbolTable for MapSymbolTable {
    fn lookup(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }

    fn lookup_matcher(&self, cp: u32) -> Option<UnicodeSet> {
        self.matchers.get(&cp).cloned()
    }
}
