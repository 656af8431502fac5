//! Data model, diagnostics contract, configuration, and errors shared by the
//! revmerge crates.
#![warn(missing_docs)]

mod attribution;
mod config;
mod diagnostics;
mod error;
mod point;

pub use attribution::{Attribution, Span};
pub use config::{MergeConfig, MergeOptions, RevisionRange, StdPolicy};
pub use diagnostics::{Diagnostic, DiagnosticMap, DiagnosticValue, merge_maps};
pub use error::MergeError;
pub use point::{DEFAULT_COUNT, DataPoint, MergedDataPoint};
