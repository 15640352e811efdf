use crate::oracle::StdCaseClosure;
use crate::{Error, UnicodeSet};

fn set(pattern: &str) -> UnicodeSet {
    pattern.parse().expect("valid pattern")
}

#[test]
fn add_merges_adjacent_ranges() {
    let mut s = UnicodeSet::new();
    s.add_range('a', 'c').unwrap().add_range('e', 'g').unwrap();
    assert_eq!(s.range_count(), 2);

    s.add('d').unwrap();
    assert_eq!(s.range_count(), 1);
    assert_eq!(s.to_pattern(false), "[a-g]");
}

#[test]
fn add_strings() {
    let mut s = UnicodeSet::new();
    s.add_str("ch").unwrap().add_str("x").unwrap().add_str("").unwrap();
    assert_eq!(s.to_pattern(false), "[x{ch}]");

    s.add_all_strs(["ll", "y"]).unwrap();
    assert_eq!(s.to_pattern(false), "[xy{ch}{ll}]");

    s.add_chars_of("chz").unwrap();
    assert_eq!(s.to_pattern(false), "[chx-z{ch}{ll}]");
}

#[test]
fn add_rejects_bad_input_without_change() {
    let mut s = set("[a]");
    assert!(matches!(s.add(0x110000u32), Err(Error::InvalidRange(_))));
    assert!(matches!(s.add_range('z', 'a'), Err(Error::InvalidRange(_))));
    assert_eq!(s, set("[a]"));
}

#[test]
fn retain_narrows_and_drops_strings() {
    let mut s = set("[a-z{ch}]");
    s.retain_range('x', 0x10FFFFu32).unwrap();
    assert_eq!(s.to_pattern(false), "[x-z]");

    let mut s = set("[a-z{ch}]");
    s.retain('q').unwrap();
    assert_eq!(s.to_pattern(false), "[q]");

    let mut s = set("[a-z{ch}{sh}]");
    s.retain_str("ch").unwrap();
    assert_eq!(s.to_pattern(false), "[{ch}]");

    let mut s = set("[a-z{ch}]");
    s.retain_str("th").unwrap();
    assert!(s.is_empty());
}

#[test]
fn retain_all_intersects() {
    let mut s = set("[a-m{ch}{sh}]");
    s.retain_all(&set("[h-z{sh}]")).unwrap();
    assert_eq!(s.to_pattern(false), "[h-m{sh}]");
}

#[test]
fn remove_elements() {
    let mut s = set("[a-z{ch}]");
    s.remove('m').unwrap().remove_range('x', 'z').unwrap();
    assert_eq!(s.to_pattern(false), "[a-ln-w{ch}]");

    s.remove_str("ch").unwrap().remove_str("a").unwrap();
    assert_eq!(s.to_pattern(false), "[b-ln-w]");

    let mut s = set("[a-z{ch}{sh}]");
    s.remove_all(&set("[b-y{sh}]")).unwrap();
    assert_eq!(s.to_pattern(false), "[az{ch}]");

    s.remove_all_strings().unwrap();
    assert_eq!(s.to_pattern(false), "[az]");
}

#[test]
fn complement_keeps_strings() {
    let mut s = set("[a-z{ch}]");
    s.complement().unwrap();
    assert!(!s.contains('a'));
    assert!(s.contains('A'));
    assert!(s.contains_str("ch"));

    s.complement().unwrap();
    assert_eq!(s, set("[a-z{ch}]"));
}

#[test]
fn complement_of_empty_is_everything() {
    let mut s = UnicodeSet::new();
    s.complement().unwrap();
    assert_eq!(s, UnicodeSet::all());
    s.complement().unwrap();
    assert!(s.is_empty());
}

#[test]
fn complement_parts() {
    let mut s = set("[a-f]");
    s.complement_range('d', 'h').unwrap();
    assert_eq!(s.to_pattern(false), "[a-cgh]");

    s.complement_str("ch").unwrap().complement_str("a").unwrap();
    assert_eq!(s.to_pattern(false), "[bcgh{ch}]");
    s.complement_str("ch").unwrap();
    assert!(!s.has_strings());

    let mut s = set("[a-m{ch}]");
    s.complement_all(&set("[h-z{ch}{sh}]")).unwrap();
    assert_eq!(s.to_pattern(false), "[a-gn-z{sh}]");
}

#[test]
fn set_range_and_clear() {
    let mut s = set("[a-z{ch}]");
    s.set_range('0', '9').unwrap();
    assert_eq!(s.to_pattern(false), "[0-9]");
    assert!(s.set_range('9', '0').is_err());
    assert_eq!(s.to_pattern(false), "[0-9]");

    s.clear().unwrap();
    assert!(s.is_empty());
}

#[test]
fn apply_pattern_replaces_contents() {
    let mut s = set("[a-z]");
    s.apply_pattern("[0-9{ab}]").unwrap();
    assert_eq!(s.to_pattern(false), "[0-9{ab}]");

    assert!(matches!(s.apply_pattern("[0-9"), Err(Error::PatternSyntax(_))));
    assert_eq!(s.to_pattern(false), "[0-9{ab}]");
}

#[test]
fn close_over_case() {
    let mut s = set("[a{ch}]");
    s.close_over(&StdCaseClosure).unwrap();

    assert!(s.contains('A'));
    assert!(s.contains_str("CH"));
    assert!(s.contains_str("ch"));
    assert!(!s.contains('b'));
}
