//! revmerge combines independently sampled, revision-keyed performance series
//! into a single series.
//!
//! Overview
//! - Register labeled series with [`MergerBuilder`]; each series is a sorted
//!   list of aggregate samples (`avg`, `count`, optional `std`/`sum`/`min`/`max`,
//!   diagnostics) keyed by an integer revision.
//! - The output is sampled on the union of every series' revisions. A series
//!   without a point at some revision contributes its next point (ceiling), or
//!   its last point once past its end.
//! - Aggregates are recombined without the raw samples: count-weighted mean,
//!   summed count and sum, min of mins, max of maxes, and key-wise diagnostic
//!   union.
//!
//! Key behaviors and trade-offs
//! - Revision bounds filter the output, not the inputs: points below
//!   `min_revision` are still read so the first emitted point is accurate.
//! - Standard deviation defaults to the legacy `sqrt(Σ count·std)` rule for
//!   compatibility with existing consumers; `StdPolicy::Pooled` is available
//!   for a statistically valid combination.
//! - `Merger::iter` is lazy and does no work beyond what the caller pulls;
//!   `Merger::merge` materializes the result and adds source attribution.
//!
//! Examples
//! ```
//! use revmerge::{DataPoint, Merger, StdPolicy};
//!
//! let merger = Merger::builder()
//!     .with_series("a", vec![DataPoint::new(12, 10.0), DataPoint::new(14, 20.0)])
//!     .with_series("b", vec![DataPoint::new(10, 100.0), DataPoint::new(15, 200.0)])
//!     .std_policy(StdPolicy::Legacy)
//!     .build()
//!     .unwrap();
//!
//! for (rev, point) in merger.iter().unwrap() {
//!     println!("{rev}: avg={} count={}", point.avg, point.count);
//! }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod report;

pub use crate::core::{Merger, MergerBuilder, Source};
pub use report::MergeReport;

// Re-export core types for convenience
pub use revmerge_core::{
    Accumulator, AggregateCombiner, Attribution, DEFAULT_COUNT, DataPoint, Diagnostic,
    DiagnosticMap, DiagnosticValue, MergeConfig, MergeError, MergeIterator, MergeOptions,
    MergedDataPoint, RevisionRange, Span, StdPolicy, collect_merged, combine, merge_timeseries,
};
