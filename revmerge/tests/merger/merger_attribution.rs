use revmerge::{MergeReport, MergedDataPoint, Span};

use crate::helpers::builder_with;

#[test]
fn spans_follow_native_points() {
    let merger = builder_with(&["UNALIGNED_A", "UNALIGNED_B"])
        .build()
        .unwrap();
    let report = merger.merge().unwrap();
    // Grid: 10(B) 12(A) 14(A) 15(B) 18(A) 20(B)
    let a: Vec<Span> = report.attribution.spans_for("UNALIGNED_A").collect();
    let b: Vec<Span> = report.attribution.spans_for("UNALIGNED_B").collect();
    assert_eq!(
        a,
        vec![
            Span { start: 12, end: 14 },
            Span { start: 18, end: 18 },
        ]
    );
    assert_eq!(
        b,
        vec![
            Span { start: 10, end: 10 },
            Span { start: 15, end: 15 },
            Span { start: 20, end: 20 },
        ]
    );
}

#[test]
fn parallel_series_share_one_span_each() {
    let merger = builder_with(&["PARALLEL_LOW_A", "PARALLEL_LOW_B"])
        .build()
        .unwrap();
    let report = merger.merge().unwrap();
    assert_eq!(
        report.attribution.spans,
        vec![
            ("PARALLEL_LOW_A".to_string(), Span { start: 5, end: 15 }),
            ("PARALLEL_LOW_B".to_string(), Span { start: 5, end: 15 }),
        ]
    );
}

#[test]
fn skipped_revisions_are_not_attributed() {
    let merger = builder_with(&["PARALLEL_LOW_A", "UNALIGNED_B"])
        .min_revision(10)
        .max_revision(15)
        .build()
        .unwrap();
    let report = merger.merge().unwrap();
    for (_, span) in &report.attribution.spans {
        assert!(span.start >= 10 && span.end <= 15);
    }
    assert_eq!(
        report
            .attribution
            .spans_for("PARALLEL_LOW_A")
            .collect::<Vec<_>>(),
        vec![Span { start: 10, end: 15 }]
    );
}

#[test]
fn report_serializes_to_json() {
    let merger = builder_with(&["WEIGHTED_LIGHT"]).build().unwrap();
    let report = merger.merge().unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["points"][0][0], 10);
    assert_eq!(json["points"][0][1]["avg"], 10.0);
    assert_eq!(json["points"][0][1]["count"], 1);
    assert!(json["points"][0][1].get("std").is_none());
    assert_eq!(json["attribution"]["spans"][0][0], "WEIGHTED_LIGHT");
}

#[test]
fn report_with_diagnostics_roundtrips_through_json() {
    let merger = builder_with(&["BOTS_LINUX", "BOTS_MAC"]).build().unwrap();
    let report = merger.merge().unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let back: MergeReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn missing_diagnostics_deserialize_as_absent() {
    let p: MergedDataPoint = serde_json::from_str(r#"{"avg":1.5,"count":2}"#).unwrap();
    assert_eq!(p.diagnostics, None);
    assert_eq!(p.std, None);
}
