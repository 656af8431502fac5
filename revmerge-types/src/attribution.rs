//! Attribution types for merged series.

use serde::{Deserialize, Serialize};

/// A continuous run of emitted revisions `[start..=end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start revision.
    pub start: i64,
    /// Inclusive end revision.
    pub end: i64,
}

/// Attribution of a merged series: which source supplied native points over
/// which spans of the output.
///
/// Behavior:
/// - A source is credited at an output revision only when it has a native
///   point there. Ceiling or clamped contributions are not credited.
/// - Consecutive emitted revisions credited to the same source collapse into
///   one span; a revision where the source is absent closes the span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    /// Collected spans annotated by source label.
    pub spans: Vec<(String, Span)>,
}

impl Attribution {
    /// Create an empty attribution.
    #[must_use]
    pub const fn new() -> Self {
        Self { spans: vec![] }
    }

    /// Record a source span.
    pub fn push(&mut self, label: impl Into<String>, span: Span) {
        self.spans.push((label.into(), span));
    }

    /// Spans credited to `label`, in output order.
    pub fn spans_for<'a>(&'a self, label: &'a str) -> impl Iterator<Item = Span> + 'a {
        self.spans
            .iter()
            .filter(move |(l, _)| l == label)
            .map(|(_, s)| *s)
    }
}
