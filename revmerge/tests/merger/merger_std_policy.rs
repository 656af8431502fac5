use revmerge::{Merger, StdPolicy};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn merger(policy: StdPolicy) -> Merger {
    Merger::builder()
        .with_series(
            "a",
            vec![revmerge_mock::weighted(1, 2.0, 2).with_std(2.0_f64.sqrt())],
        )
        .with_series("b", vec![revmerge_mock::weighted(1, 7.0, 3).with_std(2.0)])
        .std_policy(policy)
        .build()
        .unwrap()
}

#[test]
fn legacy_is_the_default() {
    let m = Merger::builder().build().unwrap();
    assert_eq!(m.config().std_policy, StdPolicy::Legacy);
}

#[test]
fn legacy_and_pooled_differ() {
    let legacy = merger(StdPolicy::Legacy).merge().unwrap();
    let pooled = merger(StdPolicy::Pooled).merge().unwrap();
    let expected_legacy = (2.0 * 2.0_f64.sqrt() + 3.0 * 2.0).sqrt();
    assert!(close(legacy.get(1).unwrap().std.unwrap(), expected_legacy));
    assert!(close(pooled.get(1).unwrap().std.unwrap(), 10.0_f64.sqrt()));
}
