//! Re-export of foundational types from `revmerge-types`.
// Consolidated re-exports so downstream crates can depend on `revmerge-core` only

pub use revmerge_types::{Attribution, Span};
pub use revmerge_types::{DEFAULT_COUNT, DataPoint, MergedDataPoint};
pub use revmerge_types::{Diagnostic, DiagnosticMap, DiagnosticValue, merge_maps};
pub use revmerge_types::{MergeConfig, MergeOptions, RevisionRange, StdPolicy};
pub use revmerge_types::MergeError;
