use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the revmerge workspace.
///
/// Every variant describes a caller-side precondition violation. The merge
/// performs no I/O, so nothing here is transient and nothing is retried.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MergeError {
    /// An input series is not strictly ascending by revision.
    #[error(
        "series {series} is out of order at point {index}: revision {revision} does not follow {previous}"
    )]
    InvalidSeriesOrder {
        /// Position of the offending series in the input list.
        series: usize,
        /// Index of the first point that breaks the ordering.
        index: usize,
        /// Revision of the point preceding `index`.
        previous: i64,
        /// Revision found at `index`.
        revision: i64,
    },

    /// The requested output range is empty because `min > max`.
    #[error("invalid revision range: min_revision {min} > max_revision {max}")]
    InvalidRange {
        /// Requested inclusive lower bound.
        min: i64,
        /// Requested inclusive upper bound.
        max: i64,
    },
}

impl MergeError {
    /// Helper: build an `InvalidSeriesOrder` error.
    #[must_use]
    pub const fn invalid_series_order(
        series: usize,
        index: usize,
        previous: i64,
        revision: i64,
    ) -> Self {
        Self::InvalidSeriesOrder {
            series,
            index,
            previous,
            revision,
        }
    }

    /// Helper: build an `InvalidRange` error.
    #[must_use]
    pub const fn invalid_range(min: i64, max: i64) -> Self {
        Self::InvalidRange { min, max }
    }

    /// Re-tag an `InvalidSeriesOrder` error with the caller's series position.
    ///
    /// Cursors validate a single series and do not know where it sits in the
    /// input list; the iterator fills the position in afterwards.
    #[must_use]
    pub const fn with_series(self, series: usize) -> Self {
        match self {
            Self::InvalidSeriesOrder {
                index,
                previous,
                revision,
                ..
            } => Self::InvalidSeriesOrder {
                series,
                index,
                previous,
                revision,
            },
            other => other,
        }
    }
}
