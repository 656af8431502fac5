use revmerge::{DataPoint, Merger, MergerBuilder};

/// Builder preloaded with the named mock fixtures, labeled by name.
pub fn builder_with(names: &[&str]) -> MergerBuilder {
    names.iter().fold(Merger::builder(), |b, name| {
        b.with_series(*name, revmerge_mock::fixture(name))
    })
}

/// Revisions and averages of a merge, for compact assertions.
pub fn rev_avgs(merger: &Merger) -> Vec<(i64, f64)> {
    merger
        .iter()
        .unwrap()
        .map(|(r, p)| (r, p.avg))
        .collect()
}

pub fn series(points: &[(i64, f64)]) -> Vec<DataPoint> {
    points
        .iter()
        .map(|&(r, v)| revmerge_mock::point(r, v))
        .collect()
}
