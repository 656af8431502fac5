//! Deterministic fixture series for revmerge tests and examples.
//!
//! Named fixtures mirror the merge scenarios the engine is expected to
//! reproduce. `UNSORTED` is deliberately out of order and `EMPTY` has no
//! points; both exist to exercise error and omission paths.
use revmerge_core::DataPoint;

mod fixtures;
pub mod synthetic;

pub use synthetic::Synthetic;

/// Every fixture name understood by [`by_name`].
pub const NAMES: &[&str] = &[
    "PARALLEL_LOW_A",
    "PARALLEL_LOW_B",
    "PARALLEL_HIGH_A",
    "PARALLEL_HIGH_B",
    "UNALIGNED_A",
    "UNALIGNED_B",
    "WEIGHTED_LIGHT",
    "WEIGHTED_HEAVY",
    "FIVE_A",
    "FIVE_B",
    "FULL_STATS",
    "UNSORTED",
    "EMPTY",
    "BOTS_LINUX",
    "BOTS_MAC",
];

/// Look up a fixture series by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Vec<DataPoint>> {
    fixtures::series::by_name(name).or_else(|| fixtures::diagnostics::by_name(name))
}

/// Look up a fixture series, panicking on an unknown name. Test helper.
///
/// # Panics
/// Panics if `name` is not in [`NAMES`].
#[must_use]
pub fn fixture(name: &str) -> Vec<DataPoint> {
    by_name(name).unwrap_or_else(|| panic!("unknown fixture series: {name}"))
}

/// A point with only revision and mean.
#[must_use]
pub const fn point(revision: i64, avg: f64) -> DataPoint {
    DataPoint::new(revision, avg)
}

/// A point with an explicit count.
#[must_use]
pub fn weighted(revision: i64, avg: f64, count: u64) -> DataPoint {
    DataPoint::new(revision, avg).with_count(count)
}
