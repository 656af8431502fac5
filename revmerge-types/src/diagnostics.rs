//! Diagnostic metadata attached to sample points.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Mapping from diagnostic name to its value.
pub type DiagnosticMap<D = DiagnosticValue> = BTreeMap<String, D>;

/// Contract for values stored in a [`DiagnosticMap`].
///
/// The merge engine never looks inside a diagnostic. When two contributing
/// points carry the same key it calls [`Diagnostic::merge`] and keeps the
/// result. Implementations should be commutative and associative so the merged
/// value does not depend on source order.
pub trait Diagnostic: Clone {
    /// Fold `other` into `self`.
    fn merge(&mut self, other: &Self);
}

impl<T: Ord + Clone> Diagnostic for BTreeSet<T> {
    fn merge(&mut self, other: &Self) {
        self.extend(other.iter().cloned());
    }
}

/// Built-in diagnostic kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
#[non_exhaustive]
pub enum DiagnosticValue {
    /// Unordered set of string values; merges by union.
    GenericSet {
        /// Members of the set.
        values: BTreeSet<String>,
    },
    /// Inclusive range of epoch milliseconds; merges by widening.
    DateRange {
        /// Earliest timestamp covered.
        min: i64,
        /// Latest timestamp covered.
        max: i64,
    },
}

impl DiagnosticValue {
    /// Build a `GenericSet` from any iterable of string-like values.
    pub fn generic_set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::GenericSet {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Position of the variant; lower ranks win when kinds collide on merge.
    const fn rank(&self) -> u8 {
        match self {
            Self::GenericSet { .. } => 0,
            Self::DateRange { .. } => 1,
        }
    }

    /// Build a `DateRange`, normalizing the bounds so `min <= max`.
    #[must_use]
    pub fn date_range(a: i64, b: i64) -> Self {
        Self::DateRange {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

impl Diagnostic for DiagnosticValue {
    /// Values of the same kind union or widen. When kinds differ the
    /// lower-ranked kind is kept whole and the other is dropped, so the
    /// outcome is the same whichever side receives the merge.
    fn merge(&mut self, other: &Self) {
        match (self, other) {
            (Self::GenericSet { values }, Self::GenericSet { values: theirs }) => {
                values.extend(theirs.iter().cloned());
            }
            (
                Self::DateRange { min, max },
                Self::DateRange {
                    min: their_min,
                    max: their_max,
                },
            ) => {
                *min = (*min).min(*their_min);
                *max = (*max).max(*their_max);
            }
            (this, other) => {
                if other.rank() < this.rank() {
                    *this = other.clone();
                }
            }
        }
    }
}

/// Union `other` into `into`, merging values that share a key.
pub fn merge_maps<D: Diagnostic>(into: &mut DiagnosticMap<D>, other: &DiagnosticMap<D>) {
    for (name, value) in other {
        match into.get_mut(name) {
            Some(existing) => existing.merge(value),
            None => {
                into.insert(name.clone(), value.clone());
            }
        }
    }
}
