use uniset_lib::UnicodeSet;

use super::show::ShowReport;

fn report_json(pattern: &str) -> String {
    let set = UnicodeSet::from_pattern(pattern).unwrap();
    serde_json::to_string(&ShowReport::new(&set, false)).unwrap()
}

#[test]
fn report_lists_ranges_then_strings() {
    insta::assert_snapshot!(
        report_json("[{zz}cab{ch}]"),
        @r#"{"pattern":"[a-c{ch}{zz}]","size":5,"ranges":[[97,99]],"strings":["ch","zz"]}"#
    );
}

#[test]
fn report_of_empty_set() {
    insta::assert_snapshot!(
        report_json("[]"),
        @r#"{"pattern":"[]","size":0,"ranges":[],"strings":[]}"#
    );
}

#[test]
fn report_escapes_when_asked() {
    let set = UnicodeSet::from_pattern(r"[\u000A]").unwrap();
    let report = ShowReport::new(&set, true);
    assert_eq!(report.pattern, r"[\u000A]");
    assert_eq!(report.ranges, vec![[10, 10]]);
}
