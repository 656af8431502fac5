use revmerge_core::{Attribution, DiagnosticValue, MergedDataPoint, Span};
use serde::{Deserialize, Serialize};

/// Result of an eager merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeReport<D = DiagnosticValue> {
    /// Merged points, ascending by revision.
    pub points: Vec<(i64, MergedDataPoint<D>)>,
    /// Which source supplied native points over which output spans.
    pub attribution: Attribution,
}

impl<D> MergeReport<D> {
    /// Emitted revisions in order.
    pub fn revisions(&self) -> impl Iterator<Item = i64> + '_ {
        self.points.iter().map(|(r, _)| *r)
    }

    /// The merged point at `rev`, if one was emitted.
    #[must_use]
    pub fn get(&self, rev: i64) -> Option<&MergedDataPoint<D>> {
        self.points
            .binary_search_by_key(&rev, |(r, _)| *r)
            .ok()
            .map(|i| &self.points[i].1)
    }
}

/// Collapses per-revision native sources into spans.
///
/// A span stays open while its source has a native point at each consecutive
/// emitted revision and closes at the first emitted revision where it does not.
pub(crate) struct AttributionTracker {
    open: Vec<Option<Span>>,
    closed: Vec<(usize, Span)>,
}

impl AttributionTracker {
    pub(crate) fn new(sources: usize) -> Self {
        Self {
            open: vec![None; sources],
            closed: Vec::new(),
        }
    }

    /// `native` must be sorted ascending.
    pub(crate) fn record(&mut self, rev: i64, native: &[usize]) {
        for (i, slot) in self.open.iter_mut().enumerate() {
            if native.binary_search(&i).is_ok() {
                match slot {
                    Some(span) => span.end = rev,
                    None => {
                        *slot = Some(Span {
                            start: rev,
                            end: rev,
                        });
                    }
                }
            } else if let Some(span) = slot.take() {
                self.closed.push((i, span));
            }
        }
    }

    pub(crate) fn finish<F>(mut self, label_of: F) -> Attribution
    where
        F: Fn(usize) -> String,
    {
        for (i, slot) in self.open.iter_mut().enumerate() {
            if let Some(span) = slot.take() {
                self.closed.push((i, span));
            }
        }
        self.closed.sort_by_key(|&(i, span)| (span.start, i));
        let mut attr = Attribution::new();
        for (i, span) in self.closed {
            attr.push(label_of(i), span);
        }
        attr
    }
}
