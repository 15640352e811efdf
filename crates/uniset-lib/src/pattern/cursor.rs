//! Token reader over pattern text.
//!
//! Reads one code point at a time, decoding escapes, skipping ignorable white
//! space and splicing in `$name` variable text. Expansion is one level deep:
//! a `$` inside a variable's text is an ordinary character.

use uniset_core::utils;

use super::error::{PatternError, PatternErrorKind};
use super::escape;
use crate::oracle::SymbolTable;

/// One code point read from the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Token {
    pub cp: u32,
    /// Written as an escape; never syntax.
    pub escaped: bool,
    /// Byte span in the pattern. Tokens from a variable report the reference.
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Unescaped `c`.
    pub fn is(&self, c: char) -> bool {
        !self.escaped && self.cp == c as u32
    }
}

/// Text of an expanded variable being read.
#[derive(Debug)]
struct Expansion {
    text: String,
    pos: usize,
    /// Span of the `$name` reference in the pattern.
    start: usize,
    end: usize,
}

pub(super) struct Cursor<'p> {
    pattern: &'p str,
    pos: usize,
    expansion: Option<Expansion>,
    symbols: Option<&'p dyn SymbolTable>,
    ignore_space: bool,
}

impl<'p> Cursor<'p> {
    pub fn new(
        pattern: &'p str,
        pos: usize,
        symbols: Option<&'p dyn SymbolTable>,
        ignore_space: bool,
    ) -> Self {
        Self {
            pattern,
            pos,
            expansion: None,
            symbols,
            ignore_space,
        }
    }

    /// Byte offset in the pattern. Inside a variable, the end of its reference.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Offset for errors about the upcoming text.
    pub fn error_offset(&self) -> usize {
        self.expansion.as_ref().map_or(self.pos, |e| e.start)
    }

    /// Unread raw text of the current source.
    pub fn rest(&self) -> &str {
        match &self.expansion {
            Some(e) => &e.text[e.pos..],
            None => &self.pattern[self.pos..],
        }
    }

    /// Span a raw read of `len` bytes would report.
    pub fn span_of(&self, len: usize) -> (usize, usize) {
        match &self.expansion {
            Some(e) => (e.start, e.end),
            None => (self.pos, self.pos + len),
        }
    }

    /// Consume `len` raw bytes of the current source.
    pub fn advance(&mut self, len: usize) {
        match &mut self.expansion {
            Some(e) => e.pos += len,
            None => self.pos += len,
        }
    }

    /// Skip ignorable white space, finish spent variables and expand a
    /// variable reference if one is next.
    pub fn settle(&mut self) -> Result<(), PatternError> {
        loop {
            if self.expansion.as_ref().is_some_and(|e| e.pos >= e.text.len()) {
                self.expansion = None;
                continue;
            }
            let Some(c) = self.rest().chars().next() else {
                return Ok(());
            };
            if self.ignore_space && utils::is_pattern_white_space(c as u32) {
                self.advance(c.len_utf8());
                continue;
            }
            if c == '$' && self.expansion.is_none() && self.expand_variable()? {
                continue;
            }
            return Ok(());
        }
    }

    /// Replace `$name` at the cursor with the variable's text.
    fn expand_variable(&mut self) -> Result<bool, PatternError> {
        let Some(symbols) = self.symbols else {
            return Ok(false);
        };
        let reference = symbols.parse_reference(self.pattern, self.pos + 1, self.pattern.len());
        let Some((name, end)) = reference else {
            return Ok(false);
        };
        let Some(text) = symbols.lookup(&name) else {
            return Err(PatternError::new(
                PatternErrorKind::UndefinedVariable,
                self.pos,
                &self.pattern[self.pos..end],
            ));
        };
        tracing::trace!(%name, %text, "expand variable");
        self.expansion = Some(Expansion {
            text,
            pos: 0,
            start: self.pos,
            end,
        });
        self.pos = end;
        Ok(true)
    }

    /// Skip trailing white space after a complete set and return the offset
    /// past it. Unread variable text is an error: it cannot be resumed.
    pub fn finish(&mut self) -> Result<usize, PatternError> {
        if let Some(e) = &self.expansion {
            let rest = &e.text[e.pos..];
            let unread = if self.ignore_space {
                rest.trim_start_matches(|c: char| utils::is_pattern_white_space(c as u32))
            } else {
                rest
            };
            if !unread.is_empty() {
                return Err(PatternError::new(
                    PatternErrorKind::TrailingGarbage,
                    e.start,
                    &self.pattern[e.start..e.end],
                ));
            }
            self.expansion = None;
        }
        if self.ignore_space {
            let rest = &self.pattern[self.pos..];
            let trimmed = rest.trim_start_matches(|c: char| utils::is_pattern_white_space(c as u32));
            self.pos += rest.len() - trimmed.len();
        }
        Ok(self.pos)
    }

    pub fn at_end(&mut self) -> Result<bool, PatternError> {
        self.settle()?;
        Ok(self.rest().is_empty())
    }

    /// Whether a property expression (`[:`, `\p`, `\P`, `\N`) starts here.
    pub fn at_property(&mut self) -> Result<bool, PatternError> {
        self.settle()?;
        let rest = self.rest();
        Ok(rest.starts_with("[:") || ["\\p", "\\P", "\\N"].iter().any(|p| rest.starts_with(p)))
    }

    /// Whether the next raw character is the unescaped `c`.
    pub fn at(&mut self, c: char) -> Result<bool, PatternError> {
        self.settle()?;
        Ok(self.rest().starts_with(c))
    }

    pub fn next(&mut self) -> Result<Option<Token>, PatternError> {
        self.settle()?;
        let rest = self.rest();
        let Some(c) = rest.chars().next() else {
            return Ok(None);
        };

        let (cp, len, escaped) = if c == '\\' {
            match escape::unescape(&rest[1..]) {
                Some((cp, len)) => (cp, 1 + len, true),
                None => {
                    let (start, end) = self.span_of(rest.len().min(2));
                    return Err(PatternError::new(
                        PatternErrorKind::InvalidEscape,
                        start,
                        self.slice(start, end),
                    ));
                }
            }
        } else {
            (c as u32, c.len_utf8(), false)
        };

        let (start, end) = self.span_of(len);
        self.advance(len);
        Ok(Some(Token {
            cp,
            escaped,
            start,
            end,
        }))
    }

    /// Pattern text between two byte offsets, clamped to char boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &'p str {
        let mut end = end.min(self.pattern.len());
        while !self.pattern.is_char_boundary(end) {
            end += 1;
        }
        self.pattern.get(start..end).unwrap_or_default()
    }
}
