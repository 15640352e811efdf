use crate::{SpanCondition, UnicodeSet};

fn set(pattern: &str) -> UnicodeSet {
    pattern.parse().expect("valid pattern")
}

#[test]
fn simple_code_points_forward_and_back() {
    let letters = set("[a-c]");
    let text = "abcxab";

    assert_eq!(letters.span(text, 0, SpanCondition::Simple), 3);
    assert_eq!(letters.span(text, 3, SpanCondition::NotContained), 4);
    assert_eq!(letters.span_back(text, 6, SpanCondition::Simple), 4);
    assert_eq!(letters.span_back(text, 4, SpanCondition::NotContained), 3);
}

#[test]
fn longest_element_wins() {
    let s = set("[a{ab}{abc}]");

    assert_eq!(s.matches_at("abcd", 0), Some(3));
    assert_eq!(s.matches_at("abd", 0), Some(2));
    assert_eq!(s.matches_at("axd", 0), Some(1));
    assert_eq!(s.matches_at("xbc", 0), None);
    assert_eq!(s.span("abcd", 0, SpanCondition::Simple), 3);
}

#[test]
fn contained_reaches_past_greedy_choice() {
    let s = set("[{ab}{abc}{cd}]");

    assert_eq!(s.span("abcd", 0, SpanCondition::Simple), 3);
    assert_eq!(s.span("abcd", 0, SpanCondition::Contained), 4);
    assert_eq!(s.span_and_count("abcd", 0, SpanCondition::Contained), (4, 2));
}

#[test]
fn contained_backward() {
    let s = set("[{ab}{abc}{cd}]");

    assert_eq!(s.span_back_and_count("abcd", 4, SpanCondition::Contained), (0, 2));
    assert_eq!(s.span_back_and_count("abcd", 4, SpanCondition::Simple), (0, 2));
}

#[test]
fn contained_without_strings_matches_simple() {
    let s = set("[a-z]");

    assert_eq!(s.span_and_count("hello world", 0, SpanCondition::Contained), (5, 5));
    assert_eq!(s.span_back_and_count("hello world", 11, SpanCondition::Contained), (6, 5));
}

#[test]
fn not_contained_stops_where_string_begins_or_ends() {
    let s = set("[{ab}]");

    assert_eq!(s.span("xxabyy", 0, SpanCondition::NotContained), 2);
    assert_eq!(s.span_back("xxabyy", 6, SpanCondition::NotContained), 4);
    // A lone `a` is not an element.
    assert_eq!(s.span("xaxb", 0, SpanCondition::NotContained), 4);
}

#[test]
fn not_contained_counts_code_points() {
    let s = set("[l]");

    assert_eq!(s.span_and_count("héllo", 0, SpanCondition::NotContained), (3, 2));
    assert_eq!(s.span_back_and_count("héllo", 6, SpanCondition::NotContained), (5, 1));
}

#[test]
fn offsets_off_char_boundary_do_not_move() {
    let s = set("[é]");

    assert_eq!(s.span_and_count("é", 1, SpanCondition::Simple), (1, 0));
    assert_eq!(s.span_back_and_count("é", 1, SpanCondition::Simple), (1, 0));
}

#[test]
fn empty_inputs() {
    let s = set("[a]");
    assert_eq!(s.span("", 0, SpanCondition::Simple), 0);
    assert_eq!(s.span_back("", 0, SpanCondition::Contained), 0);

    let empty = UnicodeSet::new();
    assert_eq!(empty.span("abc", 0, SpanCondition::NotContained), 3);
    assert_eq!(empty.span("abc", 0, SpanCondition::Simple), 0);
}

#[test]
fn supplementary_code_points() {
    let s = set(r"[\U0001F600-\U0001F64F]");
    let text = "\u{1F600}\u{1F601}x";

    assert_eq!(s.span_and_count(text, 0, SpanCondition::Simple), (8, 2));
    assert_eq!(s.span_back(text, 8, SpanCondition::Simple), 0);
}

#[test]
fn text_membership() {
    let s = set("[{ab}{cd}]");

    assert!(s.contains_all_text("abcd"));
    assert!(s.contains_all_text(""));
    assert!(!s.contains_all_text("abc"));

    assert!(s.contains_none_text("aXb"));
    assert!(!s.contains_none_text("xab"));
    assert!(s.contains_some_text("xcdx"));
    assert!(!s.contains_some_text("acbd"));
}

#[test]
fn alternating_spans_cover_text() {
    let s = set("[a-z{ch}]");
    let text = "ab12ch!z";

    let mut pos = 0;
    let mut condition = SpanCondition::Contained;
    while pos < text.len() {
        let next = s.span(text, pos, condition);
        if next == pos {
            assert_eq!(pos, 0, "only the first span may be empty");
        }
        pos = next;
        condition = match condition {
            SpanCondition::Contained => SpanCondition::NotContained,
            _ => SpanCondition::Contained,
        };
    }
    assert_eq!(pos, text.len());
}

#[test]
fn contained_over_long_runs() {
    let s = set("[a{aaa}]");
    let text = "a".repeat(1000);
    assert_eq!(s.span_and_count(&text, 0, SpanCondition::Contained), (1000, 334));
    assert_eq!(s.span_back_and_count(&text, 1000, SpanCondition::Contained), (0, 334));
    assert_eq!(s.span_and_count(&text, 998, SpanCondition::Contained), (1000, 2));
}

#[test]
fn contained_with_strings_longer_than_a_char() {
    let s = set("[é{éééé}{xé}]");
    let text = "xééééééxq";
    // "xé" + "éééé" + "é" covers everything up to the second x.
    assert_eq!(s.span_and_count(text, 0, SpanCondition::Contained), (13, 3));
    assert_eq!(s.span_back_and_count(text, 13, SpanCondition::Contained), (0, 3));
}
