use revmerge::DiagnosticValue;

use crate::helpers::builder_with;

#[test]
fn diagnostics_union_at_each_revision() {
    let merger = builder_with(&["BOTS_LINUX", "BOTS_MAC"]).build().unwrap();
    let report = merger.merge().unwrap();

    let d1 = report.get(1).unwrap().diagnostics.as_ref().unwrap();
    assert_eq!(
        d1["bots"],
        DiagnosticValue::generic_set(["linux-perf", "mac-perf"])
    );
    assert_eq!(d1["uploaded"], DiagnosticValue::date_range(1_000, 2_500));

    // Revision 2: MAC has a bare native point, LINUX contributes its ceiling (3).
    let d2 = report.get(2).unwrap().diagnostics.as_ref().unwrap();
    assert_eq!(d2["bots"], DiagnosticValue::generic_set(["linux-perf"]));
    assert_eq!(d2["uploaded"], DiagnosticValue::date_range(3_000, 4_000));
}

#[test]
fn absent_diagnostics_stay_absent() {
    let merger = builder_with(&["UNALIGNED_A", "UNALIGNED_B"])
        .build()
        .unwrap();
    let report = merger.merge().unwrap();
    assert!(report.points.iter().all(|(_, p)| p.diagnostics.is_none()));
}
