//! The set parser state machine.
//!
//! Each open `[` owns a [`Frame`] holding the set built so far and what the
//! previous item was. A nested `[` parks the current frame on a stack; its
//! `]` seals the child (case closure, then `^`) and folds it into the parent
//! with the pending operator.

use std::mem;

use super::cursor::{Cursor, Token};
use super::error::{PatternError, PatternErrorKind};
use super::{MAX_STRING_RANGE_EXPANSION, PatternParser};
use crate::{Error, Result, UnicodeSet};

/// Code point added by a `$` anchor right before `]`.
const ANCHOR: u32 = 0xFFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Last {
    #[default]
    None,
    /// A character not yet added, since it may start a range. Carries its offset.
    Char(u32, usize),
    Set,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Difference,
    Intersection,
}

#[derive(Debug, Default)]
struct Frame {
    set: UnicodeSet,
    /// Offset of this frame's `[`; `None` before the outermost one.
    open: Option<usize>,
    invert: bool,
    last: Last,
    op: Option<Op>,
    /// Last `{string}`, the possible start of a string range.
    last_string: Option<String>,
}

pub(super) struct Machine<'a, 'p> {
    parser: &'a PatternParser<'p>,
    cursor: Cursor<'p>,
    frame: Frame,
    parents: Vec<Frame>,
}

impl<'a, 'p> Machine<'a, 'p> {
    pub fn new(parser: &'a PatternParser<'p>, start: usize) -> Self {
        Self {
            parser,
            cursor: Cursor::new(
                parser.pattern,
                start,
                parser.symbols,
                parser.options.ignore_space,
            ),
            frame: Frame::default(),
            parents: Vec::new(),
        }
    }

    pub fn run(mut self) -> Result<(UnicodeSet, usize)> {
        loop {
            if self.cursor.at_end()? {
                return Err(self.unfinished());
            }
            if let Some(set) = self.step()? {
                let end = self.cursor.finish()?;
                return Ok((set, end));
            }
        }
    }

    /// Consume one item. Returns the finished set once the outermost set closes.
    fn step(&mut self) -> Result<Option<UnicodeSet>> {
        if self.cursor.at_property()? {
            let (set, start, end) = self.property()?;
            return self.set_term(set, start, end);
        }

        let Some(tok) = self.cursor.next()? else {
            return Err(self.unfinished());
        };
        if tok.is('[') {
            self.open(tok)?;
            return Ok(None);
        }
        if !tok.escaped
            && let Some(symbols) = self.parser.symbols
            && let Some(set) = symbols.lookup_matcher(tok.cp)
        {
            return self.set_term(set, tok.start, tok.end);
        }
        if self.frame.open.is_none() {
            return Err(self.error(PatternErrorKind::MissingOpenBracket, tok.start, tok.end));
        }
        if tok.escaped {
            self.literal(tok.cp, tok)?;
            return Ok(None);
        }

        match char::from_u32(tok.cp) {
            Some(']') => self.close(),
            Some('-') => self.hyphen(tok),
            Some('&') => {
                if self.frame.last != Last::Set || self.frame.op.is_some() {
                    return Err(self.error(PatternErrorKind::MisplacedAmpersand, tok.start, tok.end));
                }
                self.frame.op = Some(Op::Intersection);
                Ok(None)
            }
            Some('^') => Err(self.error(PatternErrorKind::MisplacedCaret, tok.start, tok.end)),
            Some('{') => {
                self.string(tok)?;
                Ok(None)
            }
            Some('$') => self.dollar(tok),
            _ => {
                self.literal(tok.cp, tok)?;
                Ok(None)
            }
        }
    }

    /// `[` starts the outermost set or pushes a nested one.
    fn open(&mut self, tok: Token) -> Result<()> {
        if self.frame.open.is_some() {
            let depth = self.parents.len() + 2;
            if depth > self.parser.options.recursion_limit as usize {
                return Err(self.error(PatternErrorKind::NestingTooDeep, tok.start, tok.end));
            }
            self.before_set(tok.start, tok.end)?;
            let parent = mem::take(&mut self.frame);
            self.parents.push(parent);
            tracing::trace!(depth, offset = tok.start, "push set");
        }
        self.frame.open = Some(tok.start);

        if self.cursor.at('^')? {
            self.cursor.advance(1);
            self.frame.invert = true;
        }
        // `-` right after `[` or `[^` is literal.
        if self.cursor.at('-')? {
            let (start, end) = self.cursor.span_of(1);
            self.cursor.advance(1);
            let tok = Token {
                cp: '-' as u32,
                escaped: true,
                start,
                end,
            };
            self.literal(tok.cp, tok)?;
        }
        Ok(())
    }

    /// `]` seals the current frame.
    fn close(&mut self) -> Result<Option<UnicodeSet>> {
        if let Last::Char(c, _) = self.frame.last {
            self.frame.set.add(c)?;
        }
        match self.frame.op {
            Some(Op::Difference) => {
                self.frame.set.add('-')?;
            }
            Some(Op::Intersection) => {
                let at = self.cursor.offset().saturating_sub(1);
                return Err(self.error(PatternErrorKind::TrailingAmpersand, at, at + 1));
            }
            None => {}
        }

        let child = match self.parents.pop() {
            Some(parent) => mem::replace(&mut self.frame, parent),
            None => mem::take(&mut self.frame),
        };
        let sealed = self.seal(child.set, child.invert)?;
        if self.frame.open.is_none() {
            return Ok(Some(sealed));
        }
        tracing::trace!(depth = self.parents.len() + 1, "pop set");
        self.combine(sealed)?;
        Ok(None)
    }

    /// Apply case closure, then inversion.
    fn seal(&self, mut set: UnicodeSet, invert: bool) -> Result<UnicodeSet> {
        if self.parser.options.case_insensitive {
            set.close_over(self.parser.case_closure)?;
        }
        if invert {
            set.complement()?.remove_all_strings()?;
        }
        Ok(set)
    }

    /// A complete set-valued term: property, stand-in, or outermost property.
    fn set_term(&mut self, set: UnicodeSet, start: usize, end: usize) -> Result<Option<UnicodeSet>> {
        if self.frame.open.is_none() {
            // Stand-in sets may be frozen.
            return self.seal(set.clone_as_thawed(), false).map(Some);
        }
        self.before_set(start, end)?;
        self.combine(set)?;
        Ok(None)
    }

    /// Flush a pending character before a set term and check operand order.
    fn before_set(&mut self, start: usize, end: usize) -> Result<()> {
        match self.frame.last {
            Last::Char(c, _) => {
                if self.frame.op.is_some() {
                    return Err(self.error(PatternErrorKind::CharExpectedAfterOperator, start, end));
                }
                self.frame.set.add(c)?;
                self.frame.last = Last::None;
            }
            Last::None if self.frame.op.is_some() => {
                return Err(self.error(PatternErrorKind::MissingOperand, start, end));
            }
            _ => {}
        }
        Ok(())
    }

    fn combine(&mut self, set: UnicodeSet) -> Result<()> {
        let frame = &mut self.frame;
        match frame.op.take() {
            Some(Op::Difference) => frame.set.remove_all(&set)?,
            Some(Op::Intersection) => frame.set.retain_all(&set)?,
            None => frame.set.add_all(&set)?,
        };
        frame.last = Last::Set;
        frame.last_string = None;
        Ok(())
    }

    fn literal(&mut self, cp: u32, tok: Token) -> Result<()> {
        let frame = &mut self.frame;
        frame.last_string = None;
        match frame.last {
            Last::None => {
                if frame.op.is_some() {
                    return Err(self.error(PatternErrorKind::InvalidStringRange, tok.start, tok.end));
                }
                frame.last = Last::Char(cp, tok.start);
            }
            Last::Char(prev, prev_at) => {
                if frame.op == Some(Op::Difference) {
                    if prev >= cp {
                        return Err(self.error(PatternErrorKind::InvalidRange, prev_at, tok.end));
                    }
                    frame.set.add_range(prev, cp)?;
                    frame.op = None;
                    frame.last = Last::None;
                } else {
                    frame.set.add(prev)?;
                    frame.last = Last::Char(cp, tok.start);
                }
            }
            Last::Set => {
                if frame.op.is_some() {
                    return Err(self.error(
                        PatternErrorKind::SetExpectedAfterOperator,
                        tok.start,
                        tok.end,
                    ));
                }
                frame.last = Last::Char(cp, tok.start);
            }
        }
        Ok(())
    }

    fn hyphen(&mut self, tok: Token) -> Result<Option<UnicodeSet>> {
        let frame = &mut self.frame;
        if frame.op.is_none() {
            if frame.last != Last::None || frame.last_string.is_some() {
                frame.op = Some(Op::Difference);
                return Ok(None);
            }
            // A literal `-` after a range or string is only allowed last.
            frame.set.add('-')?;
            if self.cursor.at(']')? {
                self.cursor.advance(1);
                return self.close();
            }
        }
        Err(self.error(PatternErrorKind::MisplacedHyphen, tok.start, tok.end))
    }

    fn dollar(&mut self, tok: Token) -> Result<Option<UnicodeSet>> {
        let anchor = self.cursor.at(']')?;
        if !anchor && self.parser.symbols.is_none() {
            self.literal(tok.cp, tok)?;
            return Ok(None);
        }
        if anchor && self.frame.op.is_none() {
            if let Last::Char(c, _) = self.frame.last {
                self.frame.set.add(c)?;
            }
            self.frame.set.add(ANCHOR)?;
            self.frame.last = Last::None;
            self.cursor.advance(1);
            return self.close();
        }
        Err(self.error(PatternErrorKind::UnquotedDollar, tok.start, tok.end))
    }

    /// `{...}`: a string, or the end of a `{ab}-{cd}` string range.
    fn string(&mut self, open: Token) -> Result<()> {
        if self.frame.op == Some(Op::Intersection) {
            return Err(self.error(PatternErrorKind::MissingOperand, open.start, open.end));
        }
        if let Last::Char(c, _) = self.frame.last {
            self.frame.set.add(c)?;
        }
        self.frame.last = Last::None;

        let mut cps = Vec::new();
        let close = loop {
            match self.cursor.next()? {
                Some(tok) if tok.is('}') => break tok,
                Some(tok) => cps.push(tok.cp),
                None => {
                    return Err(self.error(PatternErrorKind::UnclosedString, open.start, open.end));
                }
            }
        };
        let (start, end) = (open.start, close.end);
        if cps.is_empty() {
            return Err(self.error(PatternErrorKind::EmptyString, start, end));
        }
        let Some(text) = cps.iter().map(|&cp| char::from_u32(cp)).collect::<Option<String>>()
        else {
            return Err(self.error(PatternErrorKind::InvalidString, start, end));
        };

        if self.frame.op == Some(Op::Difference) {
            let Some(first) = self.frame.last_string.take() else {
                return Err(self.error(PatternErrorKind::InvalidStringRange, start, end));
            };
            self.string_range(&first, &text, start, end)?;
            self.frame.op = None;
        } else {
            self.frame.set.add_str(&text)?;
            self.frame.last_string = Some(text);
        }
        Ok(())
    }

    /// Add every string between `first` and `last`, position by position.
    fn string_range(&mut self, first: &str, last: &str, start: usize, end: usize) -> Result<()> {
        let lo: Vec<char> = first.chars().collect();
        let hi: Vec<char> = last.chars().collect();
        let invalid = || self.error(PatternErrorKind::InvalidStringRange, start, end);

        if lo.len() != hi.len() || lo.iter().zip(&hi).any(|(l, h)| l > h) {
            return Err(invalid());
        }
        if lo.len() == 1 {
            self.frame.set.add_range(lo[0], hi[0])?;
            return Ok(());
        }

        let count = lo
            .iter()
            .zip(&hi)
            .map(|(&l, &h)| u64::from(h as u32 - l as u32 + 1))
            .try_fold(1u64, u64::checked_mul);
        if count.is_none_or(|n| n > MAX_STRING_RANGE_EXPANSION) {
            return Err(self.error(PatternErrorKind::StringRangeTooLarge, start, end));
        }

        let mut current = lo.clone();
        let mut expanded = UnicodeSet::new();
        'outer: loop {
            expanded.add_str(&current.iter().collect::<String>())?;
            for i in (0..current.len()).rev() {
                if let Some(next) = next_char(current[i], hi[i]) {
                    current[i] = next;
                    continue 'outer;
                }
                current[i] = lo[i];
            }
            break;
        }
        self.frame.set.add_all(&expanded)?;
        Ok(())
    }

    /// Error for input that ended inside a set or before one started.
    fn unfinished(&self) -> Error {
        match self.frame.open {
            Some(at) => self.error(PatternErrorKind::UnclosedSet, at, at + 1),
            None => {
                let at = self.cursor.error_offset();
                self.error(PatternErrorKind::MissingOpenBracket, at, at)
            }
        }
    }

    pub(super) fn error(&self, kind: PatternErrorKind, start: usize, end: usize) -> Error {
        PatternError::new(kind, start, self.cursor.slice(start, end)).into()
    }

    pub(super) fn cursor(&mut self) -> &mut Cursor<'p> {
        &mut self.cursor
    }

    pub(super) fn parser(&self) -> &'a PatternParser<'p> {
        self.parser
    }
}

/// Successor of `c` not past `max`, skipping surrogates.
fn next_char(c: char, max: char) -> Option<char> {
    let mut cp = c as u32 + 1;
    while cp <= max as u32 {
        if let Some(next) = char::from_u32(cp) {
            return Some(next);
        }
        cp += 1;
    }
    None
}
