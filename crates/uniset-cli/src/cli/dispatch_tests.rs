//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use uniset_lib::{ComparisonStyle, CountMethod, SpanCondition, TrimOption};

use super::*;
use crate::cli::commands::{
    check_command, compare_command, count_command, replace_command, show_command, span_command,
    trim_command,
};

#[test]
fn check_extracts_pattern_options() {
    let m = check_command()
        .try_get_matches_from(["check", "[a b]", "-i", "--no-ignore-space", "--color", "never"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.pattern.pattern, "[a b]");
    assert!(params.pattern.case_insensitive);
    assert!(!params.pattern.ignore_space);
    assert_eq!(params.pattern.color, ColorChoice::Never);
}

#[test]
fn pattern_is_required() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn defines_accumulate() {
    let m = show_command()
        .try_get_matches_from(["show", "[$a$b]", "-D", "a=x", "--define", "b=[y-z]"])
        .unwrap();
    let params = ShowParams::from_matches(&m);
    assert_eq!(params.pattern.defines, ["a=x", "b=[y-z]"]);
    assert!(!params.json);
}

#[test]
fn show_defaults() {
    let m = show_command()
        .try_get_matches_from(["show", "[a]", "--json", "--escape"])
        .unwrap();
    let params = ShowParams::from_matches(&m);
    assert!(params.json);
    assert!(params.escape);
    assert!(params.pattern.ignore_space);
    assert_eq!(params.pattern.color, ColorChoice::Auto);
}

#[test]
fn compare_requires_second_pattern() {
    assert!(compare_command()
        .try_get_matches_from(["compare", "[a]"])
        .is_err());

    let m = compare_command()
        .try_get_matches_from(["compare", "[a]", "--with", "[b]", "--style", "lexicographic"])
        .unwrap();
    let params = CompareParams::from_matches(&m);
    assert_eq!(params.with, "[b]");
    assert_eq!(params.style, ComparisonStyle::Lexicographic);
}

#[test]
fn span_text_sources() {
    let m = span_command()
        .try_get_matches_from(["span", "[a]", "input.txt"])
        .unwrap();
    let params = SpanParams::from_matches(&m);
    assert_eq!(params.text.text_path, Some(PathBuf::from("input.txt")));
    assert_eq!(params.text.text, None);
    assert_eq!(params.condition, SpanCondition::Simple);
    assert!(!params.back);

    let m = span_command()
        .try_get_matches_from(["span", "[a]", "-t", "aab", "-c", "contained", "--back", "--start", "2"])
        .unwrap();
    let params = SpanParams::from_matches(&m);
    assert_eq!(params.text.text.as_deref(), Some("aab"));
    assert_eq!(params.condition, SpanCondition::Contained);
    assert_eq!(params.start, Some(2));
    assert!(params.back);
}

#[test]
fn text_path_conflicts_with_inline_text() {
    let result = span_command().try_get_matches_from(["span", "[a]", "input.txt", "-t", "abc"]);
    assert!(result.is_err());
}

#[test]
fn unknown_condition_is_rejected() {
    let result = count_command().try_get_matches_from(["count", "[a]", "-t", "a", "-c", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn count_method_defaults_to_min_elements() {
    let m = count_command()
        .try_get_matches_from(["count", "[a]", "-t", "aa", "-c", "not-contained"])
        .unwrap();
    let params = CountParams::from_matches(&m);
    assert_eq!(params.method, CountMethod::MinElements);
    assert_eq!(params.condition, SpanCondition::NotContained);
}

#[test]
fn replace_extracts_replacement() {
    let m = replace_command()
        .try_get_matches_from(["replace", "[0-9]", "-t", "12ab34", "-r", "#", "-m", "whole-span"])
        .unwrap();
    let params = ReplaceParams::from_matches(&m);
    assert_eq!(params.replacement, "#");
    assert_eq!(params.method, CountMethod::WholeSpan);

    assert!(replace_command()
        .try_get_matches_from(["replace", "[0-9]", "-t", "1"])
        .is_err());
}

#[test]
fn trim_side() {
    let m = trim_command()
        .try_get_matches_from(["trim", r"[\ ]", "-t", " a ", "--side", "trailing"])
        .unwrap();
    let params = TrimParams::from_matches(&m);
    assert_eq!(params.side, TrimOption::Trailing);
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["uniset", "show", "[a]", "-vv"])
        .unwrap();
    assert_eq!(m.get_count("verbose"), 2);
}
