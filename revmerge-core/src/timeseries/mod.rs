//! Building blocks of the revision merge.
//!
//! Modules include:
//! - `cursor`: forward-only ceiling lookup over one series
//! - `scheduler`: choose the next output revision and apply range bounds
//! - `combine`: pool per-series aggregate statistics into one point
//! - `merge`: the lazy iterator driving the other three
/// Statistical combination of per-series contributions.
pub mod combine;
/// Per-series cursor with ceiling/clamp lookup.
pub mod cursor;
/// Lazy multi-way merge iterator.
pub mod merge;
/// Output revision scheduling.
pub mod scheduler;
/// Series invariant helpers.
pub mod util;
