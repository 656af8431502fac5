//! Shared helpers for series invariants.

use crate::{DataPoint, MergeError};

/// Ensure revisions in `points` are strictly increasing.
///
/// The returned error reports series position `0`; callers that know where the
/// series sits in their input list re-tag it with [`MergeError::with_series`].
///
/// # Errors
/// Returns `Err(MergeError::InvalidSeriesOrder)` at the first point whose
/// revision is not strictly greater than its predecessor's.
pub fn ensure_ascending<D>(points: &[DataPoint<D>]) -> Result<(), MergeError> {
    for (index, pair) in points.windows(2).enumerate() {
        let (prev, cur) = (pair[0].revision, pair[1].revision);
        if cur <= prev {
            return Err(MergeError::invalid_series_order(0, index + 1, prev, cur));
        }
    }
    Ok(())
}

/// Sorted union of the native revisions of every series.
///
/// Equivalent to the output grid of an unbounded merge, computed eagerly.
#[must_use]
pub fn union_revisions<'a, D: 'a, I>(series: I) -> Vec<i64>
where
    I: IntoIterator<Item = &'a [DataPoint<D>]>,
{
    let mut out: Vec<i64> = series
        .into_iter()
        .flat_map(|s| s.iter().map(|p| p.revision))
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}
