//! Pattern syntax errors and their rendering.

use std::fmt;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

/// What went wrong while parsing a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternErrorKind {
    // Set structure
    MissingOpenBracket,
    UnclosedSet,
    NestingTooDeep,
    TrailingGarbage,

    // Operators
    CharExpectedAfterOperator,
    SetExpectedAfterOperator,
    MissingOperand,
    MisplacedHyphen,
    MisplacedAmpersand,
    TrailingAmpersand,
    MisplacedCaret,
    UnquotedDollar,

    // Elements
    InvalidRange,
    InvalidEscape,
    UnclosedString,
    EmptyString,
    InvalidString,
    InvalidStringRange,
    StringRangeTooLarge,

    // Names
    UndefinedVariable,
    InvalidProperty,
    UnknownProperty,
    UnknownPropertyValue,
    MissingPropertyValue,
    UnknownCharacterName,
}

impl PatternErrorKind {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::MissingOpenBracket => "missing `[` at start of set",
            Self::UnclosedSet => "missing closing `]`",
            Self::NestingTooDeep => "sets nested too deeply",
            Self::TrailingGarbage => "unexpected text after set",

            Self::CharExpectedAfterOperator => "character expected after `-`",
            Self::SetExpectedAfterOperator => "set expected after operator",
            Self::MissingOperand => "missing operand after operator",
            Self::MisplacedHyphen => "misplaced `-`",
            Self::MisplacedAmpersand => "`&` not after a set",
            Self::TrailingAmpersand => "trailing `&`",
            Self::MisplacedCaret => "`^` not after `[`",
            Self::UnquotedDollar => "unquoted `$`",

            Self::InvalidRange => "invalid range",
            Self::InvalidEscape => "malformed escape",
            Self::UnclosedString => "missing closing `}`",
            Self::EmptyString => "empty string `{}`",
            Self::InvalidString => "string contains an unpaired surrogate",
            Self::InvalidStringRange => "invalid string range",
            Self::StringRangeTooLarge => "string range too large",

            Self::UndefinedVariable => "undefined variable",
            Self::InvalidProperty => "malformed property expression",
            Self::UnknownProperty => "unknown property",
            Self::UnknownPropertyValue => "unknown property value",
            Self::MissingPropertyValue => "property requires a value",
            Self::UnknownCharacterName => "unknown character name",
        }
    }

    /// Hint shown under the offending token.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingOpenBracket => Some("sets start with `[` or a property like `\\p{L}`"),
            Self::CharExpectedAfterOperator => Some("subtract sets with `[[a-z]-[aeiou]]`"),
            Self::MisplacedHyphen => Some("a literal `-` goes first or last, or escape it as `\\-`"),
            Self::MisplacedAmpersand => Some("intersect sets with `[[a-z]&[aeiou]]`"),
            Self::MisplacedCaret => Some("escape it as `\\^`"),
            Self::UnquotedDollar => Some("escape it as `\\$`"),
            Self::InvalidRange => Some("the end of a range must be greater than its start"),
            Self::InvalidStringRange => {
                Some("ends need equal length and each start character at most the end one")
            }
            Self::MissingPropertyValue => Some("write `\\p{name=value}`"),
            _ => None,
        }
    }
}

impl fmt::Display for PatternErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fallback_message())
    }
}

/// A pattern that could not be parsed.
///
/// `offset` is the byte offset of `token` in the pattern. Tokens produced by a
/// variable expansion report the `$name` reference that introduced them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at byte {offset}")]
pub struct PatternError {
    pub kind: PatternErrorKind,
    pub offset: usize,
    pub token: String,
}

impl PatternError {
    pub fn new(kind: PatternErrorKind, offset: usize, token: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            token: token.into(),
        }
    }

    /// Draw the error under the pattern it came from.
    pub fn render(&self, pattern: &str, colored: bool) -> String {
        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let label = self.kind.default_hint().unwrap_or("here");
        let snippet = Snippet::source(pattern)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(self.span(pattern)).label(label));
        let report = [Level::ERROR
            .primary_title(self.kind.fallback_message())
            .element(snippet)];

        renderer.render(&report).to_string()
    }

    /// Byte range to underline. Zero-width errors at the end still get one column.
    fn span(&self, pattern: &str) -> std::ops::Range<usize> {
        let start = self.offset.min(pattern.len());
        let end = (start + self.token.len()).min(pattern.len());
        if start == end {
            return start..(start + 1).min(pattern.len());
        }
        start..end
    }
}
