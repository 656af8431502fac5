use std::sync::Arc;
use std::thread;

use revmerge_mock::Synthetic;

use crate::helpers::builder_with;

#[test]
fn independent_merges_share_one_merger() {
    let merger = Arc::new(
        builder_with(&["UNALIGNED_A", "UNALIGNED_B"])
            .with_series(
                "synthetic",
                Synthetic {
                    start: 9,
                    stride: 2,
                    len: 8,
                    base: 1.0,
                    slope: 1.0,
                    count: Some(2),
                }
                .build(),
            )
            .build()
            .unwrap(),
    );
    let expected = merger.merge().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let m = Arc::clone(&merger);
            thread::spawn(move || m.merge().unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn interleaved_iterators_do_not_interfere() {
    let merger = builder_with(&["UNALIGNED_A", "UNALIGNED_B"])
        .build()
        .unwrap();
    let mut first = merger.iter().unwrap();
    let mut second = merger.iter().unwrap();
    assert_eq!(first.next().map(|(r, _)| r), Some(10));
    assert_eq!(first.next().map(|(r, _)| r), Some(12));
    assert_eq!(second.next().map(|(r, _)| r), Some(10));
    assert_eq!(first.count(), 4);
    assert_eq!(second.count(), 5);
}
