use indoc::indoc;

use crate::oracle::MapSymbolTable;
use crate::{Error, ParseOptions, PatternError, PatternErrorKind, PatternParser, UnicodeSet};

fn set(pattern: &str) -> UnicodeSet {
    PatternParser::new(pattern).parse().expect("valid pattern")
}

fn parse_err(pattern: &str) -> PatternError {
    parse_err_with(PatternParser::new(pattern))
}

fn parse_err_with(parser: PatternParser<'_>) -> PatternError {
    match parser.parse() {
        Err(Error::PatternSyntax(err)) => err,
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn ranges_and_singles() {
    let s = set("[a-cA]");

    for c in ['a', 'b', 'c', 'A'] {
        assert!(s.contains(c), "{c}");
    }
    assert!(!s.contains('d'));
    assert_eq!(s.len(), 4);
}

#[test]
fn strings_are_separate_from_code_points() {
    let mut s = set("[a-z{ab}{cd}]");
    assert!(s.contains_str("ab"));
    assert_eq!(s.len(), 28);

    s.remove_all_strings().unwrap();
    assert_eq!(s, set("[a-z]"));
}

#[test]
fn chained_intersection() {
    assert_eq!(set("[[a-m]&[d-z]&[k-y]]"), set("[k-m]"));
}

#[test]
fn difference_and_union_of_nested_sets() {
    let consonants = set("[[a-z]-[aeiou]]");
    assert!(consonants.contains('b'));
    assert!(!consonants.contains('e'));
    assert_eq!(consonants.len(), 21);

    assert_eq!(set("[[a-c][x-z]]"), set("[a-cx-z]"));
    assert_eq!(set("[[a-z]-[b-y]&[a-m]]"), set("[a]"));
}

#[test]
fn string_range_expands_component_wise() {
    let expected = UnicodeSet::from_strs(["ax", "ay", "az", "bx", "by", "bz"]);
    assert_eq!(set("[{ax}-{bz}]"), expected);
    assert_eq!(set("[{a}-{c}]"), set("[a-c]"));
    assert_eq!(parse_err("[{bx}-{az}]").kind, PatternErrorKind::InvalidStringRange);
}

#[test]
fn complement_of_letters() {
    let s = set("[^a-z]");
    assert_eq!(s.inversion_list().boundaries(), [0, 0x61, 0x7B, 0x110000]);
    assert!(s.contains('\u{0}'));
    assert!(s.contains('`'));
    assert!(!s.contains('m'));
    assert!(s.contains('{'));
    assert!(s.contains(0x10FFFFu32));

    let mut manual = set("[a-z]");
    manual.complement().unwrap();
    assert_eq!(s, manual);
}

#[test]
fn caret_drops_strings() {
    let s = set("[^a{bc}]");
    assert!(!s.has_strings());
    assert!(!s.contains('a'));
}

#[test]
fn white_space_is_ignored_by_default() {
    assert_eq!(set("[ a - c ]"), set("[a-c]"));
    assert_eq!(
        set(indoc! {"
            [
              a-c
              {ch}
            ]
        "}),
        set("[a-c{ch}]")
    );

    let literal = PatternParser::new("[ a]")
        .with_options(ParseOptions::default().with_ignore_space(false))
        .parse()
        .unwrap();
    assert!(literal.contains(' '));
}

#[test]
fn escapes() {
    let s = set(r"[A\x42\x{43}\-\U0001F600\n]");
    for cp in [0x41, 0x42, 0x43, 0x2D, 0x1F600, 0x0A] {
        assert!(s.contains(cp as u32), "{cp:#X}");
    }
    assert_eq!(s.len(), 6);

    // An escaped surrogate pair is one code point.
    assert_eq!(set(r"[\uD83D\uDE00]"), set("[😀]"));
    assert!(set(r"[\uD800]").contains(0xD800u32));
    assert_eq!(set(r"[\]\[\^\{]").len(), 4);
}

#[test]
fn literal_hyphens() {
    assert_eq!(set("[-a]"), set(r"[a\-]"));
    assert_eq!(set("[a-]"), set(r"[a\-]"));
    assert_eq!(set("[^-a]"), {
        let mut s = set(r"[a\-]");
        s.complement().unwrap();
        s
    });
    assert_eq!(set("[a-c-]"), set(r"[a-c\-]"));
}

#[test]
fn dollar_without_symbols() {
    assert_eq!(set("[a$]"), UnicodeSet::from_chars(['a', '\u{FFFF}']));
    assert_eq!(set("[$]"), UnicodeSet::from_chars(['\u{FFFF}']));
    assert_eq!(set("[$a]"), UnicodeSet::from_chars(['$', 'a']));
}

#[test]
fn top_level_property() {
    let upper = set(r"\p{Uppercase}");
    assert!(upper.contains('Q'));
    assert!(!upper.contains('q'));

    assert_eq!(set(r"[\p{Uppercase}&[A-Z]]"), set("[A-Z]"));
    assert_eq!(set(r"[[:Uppercase:]&[A-Z]]"), set("[A-Z]"));
}

#[test]
fn variables() {
    let mut symbols = MapSymbolTable::new();
    symbols.define("vowel", "[aeiou]").define("x", "q");
    let greek = UnicodeSet::from_range('α', 'ω').unwrap();
    symbols.define_set("greek", greek);

    let parse = |pattern| PatternParser::new(pattern).with_symbols(&symbols).parse();

    assert_eq!(parse("[$vowel$x]").unwrap(), set("[aeiouq]"));
    assert_eq!(parse("$vowel").unwrap(), set("[aeiou]"));

    let mixed = parse("[$greek a]").unwrap();
    assert!(mixed.contains('β'));
    assert!(mixed.contains('a'));
    assert_eq!(parse("$greek").unwrap(), set("[α-ω]"));

    // Anchor still works with a table.
    assert!(parse("[a$]").unwrap().contains(0xFFFFu32));
}

#[test]
fn variable_errors() {
    let mut symbols = MapSymbolTable::new();
    symbols.define("two", "[a][b]");

    let err = parse_err_with(PatternParser::new("[$nope]").with_symbols(&symbols));
    assert_eq!(err.kind, PatternErrorKind::UndefinedVariable);
    assert_eq!((err.offset, err.token.as_str()), (1, "$nope"));

    let err = parse_err_with(PatternParser::new("[$-]").with_symbols(&symbols));
    assert_eq!(err.kind, PatternErrorKind::UnquotedDollar);

    let err = parse_err_with(PatternParser::new("$two").with_symbols(&symbols));
    assert_eq!(err.kind, PatternErrorKind::TrailingGarbage);
    assert_eq!(err.offset, 0);
}

#[test]
fn case_insensitive() {
    let options = ParseOptions::default().with_case_insensitive(true);
    let parse = |pattern| PatternParser::new(pattern).with_options(options).parse().unwrap();

    let s = parse("[a-c]");
    assert!(s.contains('B'));
    assert!(s.contains('b'));

    let inverted = parse("[^a]");
    assert!(!inverted.contains('a'));
    assert!(!inverted.contains('A'));
    assert!(inverted.contains('b'));

    assert!(parse("[{ch}]").contains_str("CH"));
}

#[test]
fn parse_at_offset() {
    let parser = PatternParser::new("xx[a] tail");
    let (s, end) = parser.parse_at(2).unwrap();
    assert_eq!(s, set("[a]"));
    assert_eq!(end, 6);

    let err = PatternParser::new("é[a]").parse_at(1).unwrap_err();
    assert!(matches!(
        err,
        Error::PatternSyntax(PatternError {
            kind: PatternErrorKind::MissingOpenBracket,
            ..
        })
    ));
}

#[test]
fn nesting_limit() {
    fn limited(pattern: &str) -> PatternParser<'_> {
        PatternParser::new(pattern).with_options(ParseOptions::default().with_recursion_limit(3))
    }

    assert_eq!(limited("[[[a]]]").parse().unwrap(), set("[a]"));
    assert_eq!(
        parse_err_with(limited("[[[[a]]]]")).kind,
        PatternErrorKind::NestingTooDeep
    );

    let deep = format!("{}a{}", "[".repeat(500), "]".repeat(500));
    assert_eq!(parse_err(&deep).kind, PatternErrorKind::NestingTooDeep);
}

#[test]
fn syntax_errors() {
    let cases = [
        ("", PatternErrorKind::MissingOpenBracket),
        ("a", PatternErrorKind::MissingOpenBracket),
        ("[a", PatternErrorKind::UnclosedSet),
        ("[[a]", PatternErrorKind::UnclosedSet),
        ("[a]x", PatternErrorKind::TrailingGarbage),
        ("[z-a]", PatternErrorKind::InvalidRange),
        ("[a-a]", PatternErrorKind::InvalidRange),
        ("[a-b-c]", PatternErrorKind::MisplacedHyphen),
        ("[a-[b]]", PatternErrorKind::CharExpectedAfterOperator),
        ("[[a]-b]", PatternErrorKind::SetExpectedAfterOperator),
        ("[[a]&{ab}]", PatternErrorKind::MissingOperand),
        ("[a&b]", PatternErrorKind::MisplacedAmpersand),
        ("[[a]&]", PatternErrorKind::TrailingAmpersand),
        ("[a^]", PatternErrorKind::MisplacedCaret),
        ("[{ab]", PatternErrorKind::UnclosedString),
        ("[{}]", PatternErrorKind::EmptyString),
        ("[{ab}-{abc}]", PatternErrorKind::InvalidStringRange),
        ("[{ab}-c]", PatternErrorKind::InvalidStringRange),
        ("[{aaaa}-{zzzz}]", PatternErrorKind::StringRangeTooLarge),
        (r"[\uZZZZ]", PatternErrorKind::InvalidEscape),
        (r"[\x{110000}]", PatternErrorKind::InvalidEscape),
        (r"[{a\uD800}]", PatternErrorKind::InvalidString),
    ];
    for (pattern, kind) in cases {
        assert_eq!(parse_err(pattern).kind, kind, "{pattern:?}");
    }
}

#[test]
fn error_positions() {
    let err = parse_err("[z-a]");
    assert_eq!((err.offset, err.token.as_str()), (1, "z-a"));

    let err = parse_err("[a]  junk");
    assert_eq!((err.offset, err.token.as_str()), (5, "junk"));

    let err = parse_err("[abc");
    assert_eq!(err.offset, 0);
    assert_eq!(err.to_string(), "missing closing `]` at byte 0");
}
