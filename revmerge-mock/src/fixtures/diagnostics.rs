use revmerge_core::{DataPoint, DiagnosticValue};

use crate::point;

pub fn by_name(name: &str) -> Option<Vec<DataPoint>> {
    match name {
        "BOTS_LINUX" => Some(vec![
            tagged(point(1, 10.0), &["linux-perf"], (1_000, 2_000)),
            tagged(point(3, 12.0), &["linux-perf"], (3_000, 4_000)),
        ]),
        "BOTS_MAC" => Some(vec![
            tagged(point(1, 20.0), &["mac-perf"], (1_500, 2_500)),
            point(2, 22.0),
        ]),
        _ => None,
    }
}

fn tagged(p: DataPoint, bots: &[&str], (from, to): (i64, i64)) -> DataPoint {
    p.with_diagnostic("bots", DiagnosticValue::generic_set(bots.iter().copied()))
        .with_diagnostic("uploaded", DiagnosticValue::date_range(from, to))
}
