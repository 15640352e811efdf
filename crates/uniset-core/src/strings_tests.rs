use crate::StringList;

#[test]
fn insert_ignores_short_strings() {
    let mut list = StringList::new();
    assert!(!list.insert(""));
    assert!(!list.insert("a"));
    assert!(!list.insert("\u{1F600}"));
    assert!(list.insert("ab"));
    assert!(!list.insert("ab"));
    assert_eq!(list.len(), 1);
}

#[test]
fn iterates_in_code_point_order() {
    let list: StringList = ["zz", "ab", "\u{1F600}x", "\u{E9}e", "aa"].into_iter().collect();
    assert_eq!(
        list.iter().collect::<Vec<_>>(),
        vec!["aa", "ab", "zz", "\u{E9}e", "\u{1F600}x"]
    );
    assert_eq!(list.first(), Some("aa"));
}

#[test]
fn starting_with_selects_by_first_char() {
    let list: StringList = ["ch", "ca", "cz", "bb", "dd", "c\u{301}"].into_iter().collect();
    assert_eq!(
        list.starting_with('c').collect::<Vec<_>>(),
        vec!["ca", "ch", "cz", "c\u{301}"]
    );
    assert_eq!(list.starting_with('x').count(), 0);
}

#[test]
fn max_len_is_in_bytes() {
    let list: StringList = ["ab", "\u{1F600}\u{1F600}"].into_iter().collect();
    assert_eq!(list.max_len(), 8);
    assert_eq!(StringList::new().max_len(), 0);
}

#[test]
fn algebra() {
    let a: StringList = ["ab", "cd", "ef"].into_iter().collect();
    let b: StringList = ["cd", "gh"].into_iter().collect();
    let names = |l: StringList| l.iter().map(str::to_owned).collect::<Vec<_>>();
    assert_eq!(names(a.union(&b)), ["ab", "cd", "ef", "gh"]);
    assert_eq!(names(a.intersection(&b)), ["cd"]);
    assert_eq!(names(a.difference(&b)), ["ab", "ef"]);
    assert_eq!(names(a.symmetric_difference(&b)), ["ab", "ef", "gh"]);
    assert!(a.union(&b).is_superset(&b));
    assert!(!a.is_disjoint(&b));
}

#[test]
fn retain_and_remove() {
    let mut list: StringList = ["ab", "cd", "ef"].into_iter().collect();
    list.retain(|s| s != "cd");
    assert!(!list.contains("cd"));
    assert!(list.remove("ab"));
    assert!(!list.remove("ab"));
    assert_eq!(list.iter().collect::<Vec<_>>(), vec!["ef"]);
    list.clear();
    assert!(list.is_empty());
}
