use revmerge_core::DataPoint;

use crate::{point, weighted};

pub fn by_name(name: &str) -> Option<Vec<DataPoint>> {
    match name {
        "PARALLEL_LOW_A" => Some(build(&[(5, 1.0), (10, 2.0), (15, 3.0)])),
        "PARALLEL_LOW_B" => Some(build(&[(5, 4.0), (10, 5.0), (15, 6.0)])),
        "PARALLEL_HIGH_A" => Some(build(&[(20, 1.0), (25, 2.0), (30, 3.0)])),
        "PARALLEL_HIGH_B" => Some(build(&[(20, 4.0), (25, 5.0), (30, 6.0)])),
        "UNALIGNED_A" => Some(build(&[(12, 10.0), (14, 20.0), (18, 30.0)])),
        "UNALIGNED_B" => Some(build(&[(10, 100.0), (15, 200.0), (20, 300.0)])),
        "WEIGHTED_LIGHT" => Some(vec![weighted(10, 10.0, 1)]),
        "WEIGHTED_HEAVY" => Some(vec![weighted(10, 30.0, 3)]),
        "FIVE_A" => Some(vec![weighted(10, 1.0, 5)]),
        "FIVE_B" => Some(vec![weighted(10, 3.0, 5)]),
        "FULL_STATS" => Some(vec![
            weighted(100, 2.0, 4)
                .with_std(1.0)
                .with_sum(8.0)
                .with_min(1.0)
                .with_max(3.0),
            weighted(110, 3.0, 2)
                .with_std(0.5)
                .with_sum(6.0)
                .with_min(2.5)
                .with_max(3.5),
        ]),
        "UNSORTED" => Some(build(&[(1, 1.0), (3, 3.0), (2, 2.0)])),
        "EMPTY" => Some(vec![]),
        _ => None,
    }
}

fn build(rows: &[(i64, f64)]) -> Vec<DataPoint> {
    rows.iter().map(|&(rev, avg)| point(rev, avg)).collect()
}
