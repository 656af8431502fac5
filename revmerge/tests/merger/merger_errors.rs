use revmerge::{MergeError, Merger};

use crate::helpers::builder_with;

#[test]
fn unsorted_series_rejected_at_build_with_position() {
    let err = builder_with(&["UNALIGNED_A", "UNSORTED"]).build().unwrap_err();
    assert_eq!(
        err,
        MergeError::InvalidSeriesOrder {
            series: 1,
            index: 2,
            previous: 3,
            revision: 2,
        }
    );
}

#[test]
fn inverted_bounds_rejected_at_build() {
    let err = Merger::builder()
        .min_revision(20)
        .max_revision(10)
        .build()
        .unwrap_err();
    assert!(matches!(err, MergeError::InvalidRange { min: 20, max: 10 }));
    assert_eq!(
        err.to_string(),
        "invalid revision range: min_revision 20 > max_revision 10"
    );
}
