//! revmerge-core
//!
//! Alignment and statistical merge of revision-keyed timeseries.
//!
//! - `types`: re-exported data model, options, and errors.
//! - `timeseries`: cursors, scheduling, aggregate combination, and the merge
//!   iterator.
//!
//! The merge is synchronous and pull-based: it performs no I/O, holds no
//! global state, and does no work past the last point the caller pulls.
//! Independent merges over the same borrowed inputs may run on different
//! threads.
//!
//! ```
//! use revmerge_core::{DataPoint, MergeOptions, merge_timeseries};
//!
//! let a: Vec<DataPoint> = vec![DataPoint::new(12, 10.0), DataPoint::new(14, 20.0)];
//! let b: Vec<DataPoint> = vec![DataPoint::new(10, 100.0), DataPoint::new(15, 200.0)];
//!
//! let merged: Vec<_> = merge_timeseries([&a, &b], &MergeOptions::default())
//!     .unwrap()
//!     .map(|(rev, p)| (rev, p.avg))
//!     .collect();
//! assert_eq!(merged, vec![(10, 55.0), (12, 105.0), (14, 110.0), (15, 110.0)]);
//! ```
#![warn(missing_docs)]

/// Cursor, scheduler, combiner, and merge iterator.
pub mod timeseries;
pub mod types;

pub use timeseries::combine::{Accumulator, AggregateCombiner, combine};
pub use timeseries::cursor::Cursor;
pub use timeseries::merge::{MergeIterator, collect_merged, merge_timeseries};
pub use timeseries::scheduler::{RevisionScheduler, Slot};
pub use timeseries::util::{ensure_ascending, union_revisions};
pub use types::*;
