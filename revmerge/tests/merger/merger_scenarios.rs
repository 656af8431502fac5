use revmerge::{Merger, MergeOptions};

use crate::helpers::{builder_with, init_tracing, rev_avgs, series};

#[test]
fn min_revision_starts_output_at_bound() {
    init_tracing();
    let merger = builder_with(&["PARALLEL_LOW_A", "PARALLEL_LOW_B"])
        .min_revision(10)
        .build()
        .unwrap();
    let out = rev_avgs(&merger);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].0, 10);
}

#[test]
fn max_revision_ends_output_at_bound() {
    let merger = builder_with(&["PARALLEL_HIGH_A", "PARALLEL_HIGH_B"])
        .max_revision(25)
        .build()
        .unwrap();
    let out = rev_avgs(&merger);
    assert_eq!(out.len(), 2);
    assert_eq!(out.last().unwrap().0, 25);
}

#[test]
fn weighted_mean_of_single_points() {
    let merger = builder_with(&["WEIGHTED_LIGHT", "WEIGHTED_HEAVY"])
        .build()
        .unwrap();
    let report = merger.merge().unwrap();
    assert_eq!(report.points.len(), 1);
    assert_eq!(report.get(10).unwrap().avg, 25.0);
}

#[test]
fn counts_are_summed() {
    let merger = builder_with(&["FIVE_A", "FIVE_B"]).build().unwrap();
    let report = merger.merge().unwrap();
    assert_eq!(report.get(10).unwrap().count, 10);
}

#[test]
fn unaligned_series_merge_on_union_grid() {
    let merger = builder_with(&["UNALIGNED_A", "UNALIGNED_B"])
        .build()
        .unwrap();
    assert_eq!(
        rev_avgs(&merger),
        vec![
            (10, 55.0),
            (12, 105.0),
            (14, 110.0),
            (15, 115.0),
            (18, 165.0),
            (20, 165.0),
        ]
    );
}

#[test]
fn merger_without_series_is_empty() {
    let merger = Merger::builder().build().unwrap();
    assert!(merger.merge().unwrap().points.is_empty());
    assert_eq!(merger.labels().count(), 0);
}

#[test]
fn empty_fixture_is_ignored() {
    let merger = builder_with(&["EMPTY", "UNALIGNED_A"]).build().unwrap();
    assert_eq!(
        rev_avgs(&merger),
        vec![(12, 10.0), (14, 20.0), (18, 30.0)]
    );
}

#[test]
fn options_replace_both_bounds() {
    let merger = builder_with(&["UNALIGNED_A", "UNALIGNED_B"])
        .min_revision(0)
        .options(MergeOptions::new().min_revision(13).max_revision(18))
        .build()
        .unwrap();
    let revs: Vec<i64> = merger.merge().unwrap().revisions().collect();
    assert_eq!(revs, vec![14, 15, 18]);
}

#[test]
fn merged_series_can_be_merged_again() {
    let first = builder_with(&["UNALIGNED_A", "UNALIGNED_B"])
        .build()
        .unwrap()
        .merged_series()
        .unwrap();
    assert!(first.iter().all(|p| p.count == Some(2)));

    // Merging the merged series with a count-2 series at one revision.
    let second = Merger::builder()
        .with_series("merged", first)
        .with_series("extra", vec![revmerge_mock::weighted(12, 5.0, 2)])
        .build()
        .unwrap();
    let report = second.merge().unwrap();
    // Revision 12: merged avg 105 (count 2) with extra 5 (count 2).
    assert_eq!(report.get(12).unwrap().avg, 55.0);
    assert_eq!(report.get(12).unwrap().count, 4);
    // Revision 20: the extra series clamps to its only point.
    assert_eq!(report.get(20).unwrap().avg, 85.0);
}

#[test]
fn full_stats_combine_optional_fields() {
    let merger = Merger::builder()
        .with_series("stats", revmerge_mock::fixture("FULL_STATS"))
        .with_series("plain", series(&[(100, 2.0), (110, 3.0)]))
        .build()
        .unwrap();
    let report = merger.merge().unwrap();
    let p = report.get(100).unwrap();
    assert_eq!(p.count, 5);
    assert_eq!(p.avg, 2.0);
    assert_eq!(p.sum, Some(8.0));
    assert_eq!(p.min, Some(1.0));
    assert_eq!(p.max, Some(3.0));
    assert_eq!(p.std, Some(2.0));
    let p = report.get(110).unwrap();
    assert_eq!(p.sum, Some(6.0));
    assert_eq!(p.std, Some(1.0));
}
