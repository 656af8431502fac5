//! Configuration types shared by the merge engine and the facade.

use serde::{Deserialize, Serialize};

use crate::error::MergeError;

/// Inclusive bounds on the output revision domain.
///
/// Bounds filter the merged output; they do not trim the inputs. A series whose
/// points fall below `min_revision` is still read so the first emitted point
/// reflects every source as of `min_revision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOptions {
    /// Inclusive lower bound; unbounded when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_revision: Option<i64>,
    /// Inclusive upper bound; unbounded when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_revision: Option<i64>,
}

impl MergeOptions {
    /// Options with no bounds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_revision: None,
            max_revision: None,
        }
    }

    /// Set the inclusive lower bound.
    #[must_use]
    pub const fn min_revision(mut self, rev: i64) -> Self {
        self.min_revision = Some(rev);
        self
    }

    /// Set the inclusive upper bound.
    #[must_use]
    pub const fn max_revision(mut self, rev: i64) -> Self {
        self.max_revision = Some(rev);
        self
    }

    /// Check the bounds and produce the range used by the scheduler.
    ///
    /// # Errors
    /// Returns `MergeError::InvalidRange` when both bounds are set and
    /// `min_revision > max_revision`.
    pub const fn validate(&self) -> Result<RevisionRange, MergeError> {
        if let (Some(min), Some(max)) = (self.min_revision, self.max_revision)
            && min > max
        {
            return Err(MergeError::invalid_range(min, max));
        }
        Ok(RevisionRange {
            min: self.min_revision,
            max: self.max_revision,
        })
    }
}

/// A validated, non-empty inclusive revision range.
///
/// Only obtainable through [`MergeOptions::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionRange {
    min: Option<i64>,
    max: Option<i64>,
}

impl RevisionRange {
    /// The unbounded range.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Inclusive lower bound, if any.
    #[must_use]
    pub const fn min(&self) -> Option<i64> {
        self.min
    }

    /// Inclusive upper bound, if any.
    #[must_use]
    pub const fn max(&self) -> Option<i64> {
        self.max
    }

    /// True if `rev` lies strictly below the lower bound.
    #[must_use]
    pub const fn is_below(&self, rev: i64) -> bool {
        match self.min {
            Some(min) => rev < min,
            None => false,
        }
    }

    /// True if `rev` lies strictly above the upper bound.
    #[must_use]
    pub const fn is_above(&self, rev: i64) -> bool {
        match self.max {
            Some(max) => rev > max,
            None => false,
        }
    }

    /// True if `rev` lies within both bounds.
    #[must_use]
    pub const fn contains(&self, rev: i64) -> bool {
        !self.is_below(rev) && !self.is_above(rev)
    }
}

impl Default for RevisionRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// How per-point standard deviations are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StdPolicy {
    /// `sqrt(Σ count_i · std_i)`, as produced by the existing dashboards.
    ///
    /// This is not a statistically sound pooling: it weights raw standard
    /// deviations rather than variances and ignores the spread between group
    /// means. Kept for output compatibility.
    #[default]
    Legacy,
    /// Pooled sample standard deviation, including the between-group term:
    /// `sqrt((Σ (n_i - 1) s_i² + Σ n_i (avg_i - avg)²) / (N - 1))`.
    Pooled,
}

/// Full configuration for a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeConfig {
    /// Output revision bounds.
    #[serde(default)]
    pub options: MergeOptions,
    /// Standard deviation combination rule.
    #[serde(default)]
    pub std_policy: StdPolicy,
}
