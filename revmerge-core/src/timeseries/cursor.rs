use crate::timeseries::util::ensure_ascending;
use crate::{DataPoint, MergeError};

/// Forward-only view over one input series.
///
/// A cursor tracks two positions:
/// - `next`: the first point not yet consumed by the merge. Its revision is the
///   cursor's next *native* revision.
/// - `ceiling`: the answer to the last [`Cursor::contribution_for`] query.
///
/// Both only move forward, so a full merge touches each point a constant
/// number of times.
#[derive(Debug, Clone)]
pub struct Cursor<'a, D> {
    points: &'a [DataPoint<D>],
    next: usize,
    ceiling: usize,
}

impl<'a, D> Cursor<'a, D> {
    /// Wrap a series after checking that its revisions strictly increase.
    ///
    /// # Errors
    /// Returns `Err(MergeError::InvalidSeriesOrder)` (with series position `0`)
    /// if the series is not strictly ascending.
    pub fn new(points: &'a [DataPoint<D>]) -> Result<Self, MergeError> {
        ensure_ascending(points)?;
        Ok(Self {
            points,
            next: 0,
            ceiling: 0,
        })
    }

    /// Number of points in the underlying series.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the series has no points; such a cursor never contributes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.points.len() - self.next
    }

    /// True once every point has been consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.next >= self.points.len()
    }

    /// Revision of the next unconsumed point; `None` once exhausted.
    #[must_use]
    pub fn next_native_revision(&self) -> Option<i64> {
        self.points.get(self.next).map(|p| p.revision)
    }

    /// The point this series contributes toward output revision `rev`.
    ///
    /// That is the point at the smallest native revision `>= rev`, or the last
    /// point when `rev` is past the end of the series. Returns `None` only for
    /// an empty series.
    ///
    /// Queries must be non-decreasing in `rev`; the ceiling pointer never moves
    /// backward.
    pub fn contribution_for(&mut self, rev: i64) -> Option<&'a DataPoint<D>> {
        let last = self.points.len().checked_sub(1)?;
        while self.ceiling < last && self.points[self.ceiling].revision < rev {
            self.ceiling += 1;
        }
        self.points.get(self.ceiling)
    }

    /// Consume the next point if its revision equals `rev`.
    ///
    /// Returns whether the cursor moved, i.e. whether this series has a
    /// native point at `rev`.
    pub fn advance_if_at(&mut self, rev: i64) -> bool {
        if self.next_native_revision() == Some(rev) {
            self.next += 1;
            true
        } else {
            false
        }
    }
}
