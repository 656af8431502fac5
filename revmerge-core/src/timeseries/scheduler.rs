use crate::RevisionRange;
use crate::timeseries::cursor::Cursor;

/// What the merge should do with the next revision on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Combine contributions and emit a point at this revision.
    Emit(i64),
    /// Below the lower bound: advance cursors but emit nothing.
    Skip(i64),
    /// Every cursor is exhausted, or the grid has passed the upper bound.
    Done,
}

/// Chooses output revisions: the union of every cursor's native revisions,
/// filtered to a [`RevisionRange`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RevisionScheduler {
    range: RevisionRange,
}

impl RevisionScheduler {
    /// Scheduler emitting only revisions inside `range`.
    #[must_use]
    pub const fn new(range: RevisionRange) -> Self {
        Self { range }
    }

    /// The configured output range.
    #[must_use]
    pub const fn range(&self) -> RevisionRange {
        self.range
    }

    /// Smallest next native revision across `cursors`; `None` when all are
    /// exhausted.
    #[must_use]
    pub fn next_revision<D>(&self, cursors: &[Cursor<'_, D>]) -> Option<i64> {
        cursors
            .iter()
            .filter_map(Cursor::next_native_revision)
            .min()
    }

    /// Classify the next revision against the configured range.
    ///
    /// Revisions arrive in ascending order, so the first one above the upper
    /// bound ends the merge.
    #[must_use]
    pub fn next_slot<D>(&self, cursors: &[Cursor<'_, D>]) -> Slot {
        match self.next_revision(cursors) {
            None => Slot::Done,
            Some(rev) if self.range.is_above(rev) => Slot::Done,
            Some(rev) if self.range.is_below(rev) => Slot::Skip(rev),
            Some(rev) => Slot::Emit(rev),
        }
    }
}
