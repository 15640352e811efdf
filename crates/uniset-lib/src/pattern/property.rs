//! Property expressions: `\p{name}`, `\P{name=value}`, `[:^name:]`, `\N{name}`.

use super::error::PatternErrorKind;
use super::parser::Machine;
use super::PatternParser;
use crate::oracle::{INVALID_VALUE, PropertyOracle, loose_eq};
use crate::{Error, Result, UnicodeSet};

/// POSIX class names and the expressions they stand for.
const POSIX_CLASSES: &[(&str, &str)] = &[
    ("alpha", r"\p{Alphabetic}"),
    ("lower", r"\p{Lowercase}"),
    ("upper", r"\p{Uppercase}"),
    ("punct", r"\p{gc=Punctuation}"),
    ("digit", r"\p{gc=Decimal_Number}"),
    ("xdigit", r"[\p{gc=Decimal_Number}\p{Hex_Digit}]"),
    ("alnum", r"[\p{Alphabetic}\p{gc=Decimal_Number}]"),
    ("space", r"\p{White_Space}"),
    ("blank", r"[\p{gc=Space_Separator}\u0009]"),
    ("cntrl", r"\p{gc=Control}"),
    (
        "graph",
        r"[^\p{White_Space}\p{gc=Control}\p{gc=Surrogate}\p{gc=Unassigned}]",
    ),
    ("print", r"[[:graph:][:blank:]-[:cntrl:]]"),
    (
        "word",
        r"[\p{Alphabetic}\p{gc=Mark}\p{gc=Decimal_Number}\p{gc=Connector_Punctuation}\p{Join_Control}]",
    ),
];

/// Raw pieces of one property expression.
struct Expression {
    body: String,
    invert: bool,
    by_name: bool,
    len: usize,
}

impl<'a, 'p> Machine<'a, 'p> {
    /// Parse the property expression at the cursor into a set.
    ///
    /// Returns the set with the span of the expression.
    pub(super) fn property(&mut self) -> Result<(UnicodeSet, usize, usize)> {
        let rest = self.cursor().rest();
        let expression = split_expression(rest);
        let fallback_len = rest.find([']', '}']).map_or(rest.len(), |at| at + 1);

        let Some(expression) = expression else {
            let (start, end) = self.cursor().span_of(fallback_len);
            return Err(self.error(PatternErrorKind::InvalidProperty, start, end));
        };
        let (start, end) = self.cursor().span_of(expression.len);
        self.cursor().advance(expression.len);

        let parser = self.parser();
        let resolved = if expression.by_name {
            resolve_name(parser.properties, expression.body.trim())
        } else {
            resolve_expression(parser, &expression.body)
        };
        let mut set = resolved.map_err(|kind| self.error(kind, start, end))?;
        if expression.invert {
            set.complement()?.remove_all_strings()?;
        }
        Ok((set, start, end))
    }
}

/// Recognize the delimiters of the expression at the start of `rest`.
fn split_expression(rest: &str) -> Option<Expression> {
    if let Some(inner) = rest.strip_prefix("[:") {
        let close = inner.find(":]")?;
        let body = &inner[..close];
        let (invert, body) = match body.strip_prefix('^') {
            Some(body) => (true, body),
            None => (false, body),
        };
        return Some(Expression {
            body: body.to_owned(),
            invert,
            by_name: false,
            len: 2 + close + 2,
        });
    }

    let kind = rest.strip_prefix('\\')?.chars().next()?;
    let inner = rest[2..].strip_prefix('{')?;
    let close = inner.find('}')?;
    Some(Expression {
        body: inner[..close].to_owned(),
        invert: kind == 'P',
        by_name: kind == 'N',
        len: 3 + close + 1,
    })
}

/// `\N{name}`: a single named character.
fn resolve_name(
    properties: &dyn PropertyOracle,
    name: &str,
) -> std::result::Result<UnicodeSet, PatternErrorKind> {
    let cp = properties
        .char_from_name(name)
        .ok_or(PatternErrorKind::UnknownCharacterName)?;
    UnicodeSet::from_range(cp, cp).map_err(|_| PatternErrorKind::UnknownCharacterName)
}

/// `name`, `name=value` or `name≠value`.
fn resolve_expression(
    parser: &PatternParser<'_>,
    body: &str,
) -> std::result::Result<UnicodeSet, PatternErrorKind> {
    let Some(at) = body.find(['=', '\u{2260}']) else {
        let name = body.trim();
        if name.is_empty() {
            return Err(PatternErrorKind::InvalidProperty);
        }
        return resolve_bare(parser, name);
    };

    let name = body[..at].trim();
    let negated = body[at..].starts_with('\u{2260}');
    let separator_len = if negated { '\u{2260}'.len_utf8() } else { 1 };
    let value = body[at + separator_len..].trim();
    if name.is_empty() {
        return Err(PatternErrorKind::InvalidProperty);
    }
    if value.is_empty() {
        return Err(PatternErrorKind::MissingPropertyValue);
    }

    let mut set = resolve_valued(parser.properties, name, value)?;
    if negated {
        set.complement().map_err(|_| PatternErrorKind::InvalidProperty)?;
    }
    Ok(set)
}

fn resolve_valued(
    properties: &dyn PropertyOracle,
    name: &str,
    value: &str,
) -> std::result::Result<UnicodeSet, PatternErrorKind> {
    let property = properties.property_enum(name);
    if !property.is_valid() {
        return Err(PatternErrorKind::UnknownProperty);
    }

    let value_id = if properties.is_binary(property) {
        binary_value(value).or_else(|| known(properties.property_value_enum(property, value)))
    } else {
        known(properties.property_value_enum(property, value)).or_else(|| {
            let numeric: i32 = value.parse().ok()?;
            let min = properties.int_property_min_value(property);
            let max = properties.int_property_max_value(property);
            (min..=max).contains(&numeric).then_some(numeric)
        })
    };
    let value_id = value_id.ok_or(PatternErrorKind::UnknownPropertyValue)?;
    Ok(UnicodeSet::from_property(properties, property, value_id))
}

/// A name without a value: POSIX class, category, script, binary property,
/// then `Any`, `ASCII` and `Assigned`.
fn resolve_bare(
    parser: &PatternParser<'_>,
    name: &str,
) -> std::result::Result<UnicodeSet, PatternErrorKind> {
    let properties = parser.properties;

    if let Some((_, expansion)) = POSIX_CLASSES.iter().find(|(posix, _)| loose_eq(posix, name)) {
        return PatternParser::new(expansion)
            .with_properties(properties)
            .parse()
            .map_err(|err| match err {
                Error::PatternSyntax(inner) => inner.kind,
                _ => PatternErrorKind::InvalidProperty,
            });
    }

    for property in [properties.general_category(), properties.script()] {
        if property.is_valid()
            && let Some(value) = known(properties.property_value_enum(property, name))
        {
            return Ok(UnicodeSet::from_property(properties, property, value));
        }
    }

    let property = properties.property_enum(name);
    if property.is_valid() {
        if properties.is_binary(property) {
            return Ok(UnicodeSet::from_property(properties, property, 1));
        }
        return Err(PatternErrorKind::MissingPropertyValue);
    }

    if loose_eq(name, "Any") {
        return Ok(UnicodeSet::all());
    }
    if loose_eq(name, "ASCII") {
        let ascii = UnicodeSet::from_range(0u32, 0x7Fu32);
        return ascii.map_err(|_| PatternErrorKind::InvalidProperty);
    }
    if loose_eq(name, "Assigned") {
        let gc = properties.general_category();
        let unassigned = if gc.is_valid() {
            known(properties.property_value_enum(gc, "Cn"))
        } else {
            None
        };
        let mut set = unassigned
            .map(|value| UnicodeSet::from_property(properties, gc, value))
            .unwrap_or_default();
        set.complement().map_err(|_| PatternErrorKind::InvalidProperty)?;
        return Ok(set);
    }

    Err(PatternErrorKind::UnknownProperty)
}

fn binary_value(value: &str) -> Option<i32> {
    match value.to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" => Some(1),
        "n" | "no" | "f" | "false" => Some(0),
        _ => None,
    }
}

fn known(value: i32) -> Option<i32> {
    (value != INVALID_VALUE).then_some(value)
}
