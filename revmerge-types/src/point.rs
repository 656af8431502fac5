//! Sample points carried by input series and produced by the merge.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{DiagnosticMap, DiagnosticValue};

/// Count assumed for a point that does not carry one.
pub const DEFAULT_COUNT: u64 = 1;

/// One element of an input timeseries: aggregate statistics at a revision.
///
/// Within a series, revisions must be strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint<D = DiagnosticValue> {
    /// Ordered key of the sample (e.g. a commit position).
    pub revision: i64,
    /// Mean of the underlying samples.
    pub avg: f64,
    /// Number of underlying samples; [`DEFAULT_COUNT`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Standard deviation of the underlying samples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    /// Sum of the underlying samples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,
    /// Smallest underlying sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Largest underlying sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Auxiliary metadata attached to the sample.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<DiagnosticMap<D>>,
}

impl<D> DataPoint<D> {
    /// A point with only a revision and mean; every optional field is absent.
    #[must_use]
    pub const fn new(revision: i64, avg: f64) -> Self {
        Self {
            revision,
            avg,
            count: None,
            std: None,
            sum: None,
            min: None,
            max: None,
            diagnostics: None,
        }
    }

    /// Sample count used as the point's weight.
    #[must_use]
    pub fn weight(&self) -> u64 {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    /// Set `count`.
    #[must_use]
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Set `std`.
    #[must_use]
    pub fn with_std(mut self, std: f64) -> Self {
        self.std = Some(std);
        self
    }

    /// Set `sum`.
    #[must_use]
    pub fn with_sum(mut self, sum: f64) -> Self {
        self.sum = Some(sum);
        self
    }

    /// Set `min`.
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set `max`.
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Attach a diagnostic, replacing any existing value under `name`.
    #[must_use]
    pub fn with_diagnostic(mut self, name: impl Into<String>, value: D) -> Self {
        self.diagnostics
            .get_or_insert_with(DiagnosticMap::new)
            .insert(name.into(), value);
        self
    }
}

/// Combined statistics for one output revision.
///
/// Same shape as [`DataPoint`] minus the revision, which travels alongside
/// the point in the merged sequence. `count` is always known after a merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedDataPoint<D = DiagnosticValue> {
    /// Count-weighted mean of the contributions.
    pub avg: f64,
    /// Total sample count of the contributions.
    pub count: u64,
    /// Combined standard deviation; see `StdPolicy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    /// Sum over contributions that carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,
    /// Smallest `min` among contributions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Largest `max` among contributions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Key-wise union of contributing diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<DiagnosticMap<D>>,
}

impl<D> MergedDataPoint<D> {
    /// Re-attach a revision, e.g. to feed merged output into another merge.
    #[must_use]
    pub fn at_revision(self, revision: i64) -> DataPoint<D> {
        DataPoint {
            revision,
            avg: self.avg,
            count: Some(self.count),
            std: self.std,
            sum: self.sum,
            min: self.min,
            max: self.max,
            diagnostics: self.diagnostics,
        }
    }
}
