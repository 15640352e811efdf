use crate::{CountMethod, SpanCondition, TrimOption, UnicodeSet};

fn set(pattern: &str) -> UnicodeSet {
    pattern.parse().expect("valid pattern")
}

#[test]
fn replace_whole_span_and_min_elements() {
    let ab = set("[{ab}]");
    let spanner = ab.spanner();
    let text = "ababc acb";

    assert_eq!(
        spanner.replace_from(text, "X", CountMethod::WholeSpan, SpanCondition::Simple),
        "Xc acb"
    );
    assert_eq!(
        spanner.replace_from(text, "X", CountMethod::MinElements, SpanCondition::Simple),
        "XXc acb"
    );
}

#[test]
fn replace_keeps_leading_unmatched_text() {
    let ab = set("[{ab}]");

    assert_eq!(
        ab.spanner()
            .replace_from("xab", "X", CountMethod::WholeSpan, SpanCondition::Simple),
        "xX"
    );
}

#[test]
fn replace_not_contained_runs() {
    let letters = set("[a-z]");
    let spanner = letters.spanner();

    assert_eq!(
        spanner.replace_from(
            "12ab34",
            "#",
            CountMethod::WholeSpan,
            SpanCondition::NotContained
        ),
        "#ab#"
    );
    assert_eq!(
        spanner.replace_from(
            "12ab34",
            "#",
            CountMethod::MinElements,
            SpanCondition::NotContained
        ),
        "##ab##"
    );
}

#[test]
fn delete_matches() {
    let ab = set("[{ab}]");
    assert_eq!(ab.spanner().delete_from("ababc acb", SpanCondition::Simple), "c acb");

    let digits = set("[0-9]");
    assert_eq!(
        digits.spanner().delete_from("a1b22c", SpanCondition::Contained),
        "abc"
    );
    assert_eq!(
        digits.spanner().delete_from("a1b22c", SpanCondition::NotContained),
        "122"
    );
}

#[test]
fn count_matches() {
    let ab = set("[{ab}]");
    let spanner = ab.spanner();

    assert_eq!(
        spanner.count_in("ab ab abab", CountMethod::WholeSpan, SpanCondition::Simple),
        3
    );
    assert_eq!(
        spanner.count_in("ab ab abab", CountMethod::MinElements, SpanCondition::Simple),
        4
    );
    assert_eq!(
        spanner.count_in("", CountMethod::MinElements, SpanCondition::Simple),
        0
    );
}

#[test]
fn count_not_contained_runs() {
    let space = UnicodeSet::from_chars([' ']);
    let spanner = space.spanner();

    assert_eq!(
        spanner.count_in("ab cd  ef", CountMethod::WholeSpan, SpanCondition::NotContained),
        3
    );
    assert_eq!(
        spanner.count_in("ab cd  ef", CountMethod::MinElements, SpanCondition::NotContained),
        6
    );
}

#[test]
fn trim_ends() {
    let space = UnicodeSet::from_chars([' ']);
    let spanner = space.spanner();
    let text = "  a b  ";

    assert_eq!(spanner.trim(text, TrimOption::Both, SpanCondition::Simple), "a b");
    assert_eq!(spanner.trim(text, TrimOption::Leading, SpanCondition::Simple), "a b  ");
    assert_eq!(spanner.trim(text, TrimOption::Trailing, SpanCondition::Simple), "  a b");
    assert_eq!(spanner.trim("   ", TrimOption::Both, SpanCondition::Simple), "");
    assert_eq!(spanner.trim("", TrimOption::Both, SpanCondition::Simple), "");
    assert_eq!(spanner.trim("abc", TrimOption::Both, SpanCondition::Simple), "abc");
}

#[test]
fn trim_not_contained_keeps_the_middle() {
    let digits = set("[0-9]");

    assert_eq!(
        digits
            .spanner()
            .trim("ab12cd34ef", TrimOption::Both, SpanCondition::NotContained),
        "12cd34"
    );
}

#[test]
fn option_defaults_and_serde() {
    assert_eq!(CountMethod::default(), CountMethod::MinElements);
    assert_eq!(TrimOption::default(), TrimOption::Both);
    assert_eq!(SpanCondition::default(), SpanCondition::Simple);

    let json = serde_json::to_string(&SpanCondition::NotContained).unwrap();
    assert_eq!(json, "\"not_contained\"");
    let method: CountMethod = serde_json::from_str("\"whole_span\"").unwrap();
    assert_eq!(method, CountMethod::WholeSpan);
}

#[test]
fn contained_rewrites_scale_to_long_text() {
    let s = set("[a{ab}]");
    let spanner = s.spanner();
    let text = "ax".repeat(40_000);

    let out = spanner.replace_from(&text, "Y", CountMethod::WholeSpan, SpanCondition::Contained);
    assert_eq!(out, "Yx".repeat(40_000));
    assert_eq!(
        spanner.count_in(&text, CountMethod::MinElements, SpanCondition::Contained),
        40_000
    );
    assert_eq!(spanner.trim(&text, TrimOption::Both, SpanCondition::Contained), &text[1..]);
}
