use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use super::{INVALID_VALUE, PropertyId, PropertyOracle, loose_eq};

/// Properties from the Unicode Character Database tables of
/// `unicode-properties`, plus the `char` predicates of `std`.
///
/// Binary: `Alphabetic`, `Lowercase`, `Uppercase`, `White_Space`,
/// `ASCII_Hex_Digit`, `Hex_Digit`, `Join_Control`. `General_Category` covers
/// every two-letter category and the groups `L`, `LC`, `M`, `N`, `P`, `S`,
/// `Z` and `C`. Scripts and character names are not known.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdProperties;

const ALPHABETIC: PropertyId = PropertyId(0);
const LOWERCASE: PropertyId = PropertyId(1);
const UPPERCASE: PropertyId = PropertyId(2);
const WHITE_SPACE: PropertyId = PropertyId(3);
const ASCII_HEX_DIGIT: PropertyId = PropertyId(4);
const HEX_DIGIT: PropertyId = PropertyId(5);
const JOIN_CONTROL: PropertyId = PropertyId(6);
const GENERAL_CATEGORY: PropertyId = PropertyId(7);

const PROPERTY_ALIASES: &[(PropertyId, &[&str])] = &[
    (ALPHABETIC, &["Alphabetic", "Alpha"]),
    (LOWERCASE, &["Lowercase", "Lower"]),
    (UPPERCASE, &["Uppercase", "Upper"]),
    (WHITE_SPACE, &["White_Space", "WSpace", "space"]),
    (ASCII_HEX_DIGIT, &["ASCII_Hex_Digit", "AHex"]),
    (HEX_DIGIT, &["Hex_Digit", "Hex"]),
    (JOIN_CONTROL, &["Join_Control", "Join_C"]),
    (GENERAL_CATEGORY, &["General_Category", "gc"]),
];

/// General_Category values, indexed by value id: long name, short name.
const CATEGORIES: [(&str, &str); 30] = [
    ("Unassigned", "Cn"),
    ("Uppercase_Letter", "Lu"),
    ("Lowercase_Letter", "Ll"),
    ("Titlecase_Letter", "Lt"),
    ("Modifier_Letter", "Lm"),
    ("Other_Letter", "Lo"),
    ("Nonspacing_Mark", "Mn"),
    ("Enclosing_Mark", "Me"),
    ("Spacing_Mark", "Mc"),
    ("Decimal_Number", "Nd"),
    ("Letter_Number", "Nl"),
    ("Other_Number", "No"),
    ("Space_Separator", "Zs"),
    ("Line_Separator", "Zl"),
    ("Paragraph_Separator", "Zp"),
    ("Control", "Cc"),
    ("Format", "Cf"),
    ("Private_Use", "Co"),
    ("Surrogate", "Cs"),
    ("Dash_Punctuation", "Pd"),
    ("Open_Punctuation", "Ps"),
    ("Close_Punctuation", "Pe"),
    ("Connector_Punctuation", "Pc"),
    ("Other_Punctuation", "Po"),
    ("Math_Symbol", "Sm"),
    ("Currency_Symbol", "Sc"),
    ("Modifier_Symbol", "Sk"),
    ("Other_Symbol", "So"),
    ("Initial_Punctuation", "Pi"),
    ("Final_Punctuation", "Pf"),
];

/// Category groups, value ids following [`CATEGORIES`]. A group holds the
/// categories whose short name starts with its own, except `LC`.
const GROUPS: [(&str, &str); 8] = [
    ("Letter", "L"),
    ("Cased_Letter", "LC"),
    ("Mark", "M"),
    ("Number", "N"),
    ("Punctuation", "P"),
    ("Symbol", "S"),
    ("Separator", "Z"),
    ("Other", "C"),
];

const FIRST_GROUP: i32 = CATEGORIES.len() as i32;
const SURROGATE: i32 = 18;

fn category_of(cp: u32) -> i32 {
    let Some(c) = char::from_u32(cp) else {
        return if (0xD800..=0xDFFF).contains(&cp) { SURROGATE } else { 0 };
    };
    match c.general_category() {
        GeneralCategory::Unassigned => 0,
        GeneralCategory::UppercaseLetter => 1,
        GeneralCategory::LowercaseLetter => 2,
        GeneralCategory::TitlecaseLetter => 3,
        GeneralCategory::ModifierLetter => 4,
        GeneralCategory::OtherLetter => 5,
        GeneralCategory::NonspacingMark => 6,
        GeneralCategory::EnclosingMark => 7,
        GeneralCategory::SpacingMark => 8,
        GeneralCategory::DecimalNumber => 9,
        GeneralCategory::LetterNumber => 10,
        GeneralCategory::OtherNumber => 11,
        GeneralCategory::SpaceSeparator => 12,
        GeneralCategory::LineSeparator => 13,
        GeneralCategory::ParagraphSeparator => 14,
        GeneralCategory::Control => 15,
        GeneralCategory::Format => 16,
        GeneralCategory::PrivateUse => 17,
        GeneralCategory::Surrogate => SURROGATE,
        GeneralCategory::DashPunctuation => 19,
        GeneralCategory::OpenPunctuation => 20,
        GeneralCategory::ClosePunctuation => 21,
        GeneralCategory::ConnectorPunctuation => 22,
        GeneralCategory::OtherPunctuation => 23,
        GeneralCategory::MathSymbol => 24,
        GeneralCategory::CurrencySymbol => 25,
        GeneralCategory::ModifierSymbol => 26,
        GeneralCategory::OtherSymbol => 27,
        GeneralCategory::InitialPunctuation => 28,
        GeneralCategory::FinalPunctuation => 29,
    }
}

fn in_group(category: i32, group: &str) -> bool {
    let Some((_, short)) = usize::try_from(category).ok().and_then(|i| CATEGORIES.get(i)) else {
        return false;
    };
    match group {
        "LC" => matches!(*short, "Lu" | "Ll" | "Lt"),
        _ => short.starts_with(group),
    }
}

fn is_hex_digit(cp: u32) -> bool {
    matches!(
        cp,
        0x30..=0x39 | 0x41..=0x46 | 0x61..=0x66 | 0xFF10..=0xFF19 | 0xFF21..=0xFF26 | 0xFF41..=0xFF46
    )
}

impl PropertyOracle for StdProperties {
    fn property_enum(&self, alias: &str) -> PropertyId {
        PROPERTY_ALIASES
            .iter()
            .find(|(_, names)| names.iter().any(|name| loose_eq(name, alias)))
            .map_or(PropertyId::INVALID, |&(id, _)| id)
    }

    fn property_value_enum(&self, property: PropertyId, alias: &str) -> i32 {
        if property != GENERAL_CATEGORY {
            return INVALID_VALUE;
        }
        let named = |&(long, short): &(&str, &str)| loose_eq(long, alias) || short == alias;
        if let Some(at) = CATEGORIES.iter().position(named) {
            return at as i32;
        }
        GROUPS
            .iter()
            .position(named)
            .map_or(INVALID_VALUE, |at| FIRST_GROUP + at as i32)
    }

    fn property_value_name(&self, property: PropertyId, value: i32) -> Option<String> {
        if property != GENERAL_CATEGORY {
            return None;
        }
        let index = usize::try_from(value).ok()?;
        let (long, _) = CATEGORIES
            .get(index)
            .or_else(|| GROUPS.get(index.checked_sub(CATEGORIES.len())?))?;
        Some((*long).to_owned())
    }

    fn is_binary(&self, property: PropertyId) -> bool {
        (ALPHABETIC.0..=JOIN_CONTROL.0).contains(&property.0)
    }

    fn has_binary_property(&self, cp: u32, property: PropertyId) -> bool {
        let Some(c) = char::from_u32(cp) else {
            return false;
        };
        match property {
            ALPHABETIC => c.is_alphabetic(),
            LOWERCASE => c.is_lowercase(),
            UPPERCASE => c.is_uppercase(),
            WHITE_SPACE => c.is_whitespace(),
            ASCII_HEX_DIGIT => c.is_ascii_hexdigit(),
            HEX_DIGIT => is_hex_digit(cp),
            JOIN_CONTROL => matches!(cp, 0x200C..=0x200D),
            _ => false,
        }
    }

    fn int_property_value(&self, cp: u32, property: PropertyId) -> i32 {
        if self.is_binary(property) {
            return self.has_binary_property(cp, property) as i32;
        }
        match property {
            GENERAL_CATEGORY => category_of(cp),
            _ => 0,
        }
    }

    fn int_property_min_value(&self, _property: PropertyId) -> i32 {
        0
    }

    fn int_property_max_value(&self, property: PropertyId) -> i32 {
        match property {
            GENERAL_CATEGORY => FIRST_GROUP - 1,
            p if self.is_binary(p) => 1,
            _ => -1,
        }
    }

    /// Group values match every category in the group.
    fn value_matches(&self, cp: u32, property: PropertyId, value: i32) -> bool {
        let actual = self.int_property_value(cp, property);
        if property != GENERAL_CATEGORY || value < FIRST_GROUP {
            return actual == value;
        }
        usize::try_from(value - FIRST_GROUP)
            .ok()
            .and_then(|at| GROUPS.get(at))
            .is_some_and(|(_, group)| in_group(actual, group))
    }
}
