use revmerge_core::{
    DataPoint, Diagnostic, DiagnosticValue, MergeConfig, MergeError, MergeIterator, MergeOptions,
    StdPolicy, ensure_ascending,
};

use crate::report::{AttributionTracker, MergeReport};

/// A labeled input series.
#[derive(Debug, Clone, PartialEq)]
pub struct Source<D = DiagnosticValue> {
    pub(crate) label: String,
    pub(crate) points: Vec<DataPoint<D>>,
}

impl<D> Source<D> {
    /// Label given at registration.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The series' points, ascending by revision.
    #[must_use]
    pub fn points(&self) -> &[DataPoint<D>] {
        &self.points
    }
}

impl<D> AsRef<[DataPoint<D>]> for Source<D> {
    fn as_ref(&self) -> &[DataPoint<D>] {
        &self.points
    }
}

/// Owns a set of labeled series and merges them on demand.
///
/// Every call to [`Merger::iter`] or [`Merger::merge`] is an independent merge
/// with its own cursors, so one `Merger` can serve concurrent readers.
#[derive(Debug, Clone)]
pub struct Merger<D = DiagnosticValue> {
    pub(crate) sources: Vec<Source<D>>,
    pub(crate) cfg: MergeConfig,
}

/// Builder for constructing a [`Merger`] with custom configuration.
#[derive(Debug, Clone)]
pub struct MergerBuilder<D = DiagnosticValue> {
    sources: Vec<Source<D>>,
    cfg: MergeConfig,
}

impl<D> Default for MergerBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> MergerBuilder<D> {
    /// Create a new builder with no series, no revision bounds, and the
    /// legacy standard deviation rule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: MergeConfig::default(),
        }
    }

    /// Register a series under `label`.
    ///
    /// Behavior:
    /// - Registration order is the order of `Merger::labels` and of the
    ///   positions reported in `MergeError::InvalidSeriesOrder`. It has no
    ///   effect on merged values.
    /// - Empty series are accepted and never contribute.
    /// - Labels are not required to be unique; attribution spans simply carry
    ///   the same label twice.
    #[must_use]
    pub fn with_series(mut self, label: impl Into<String>, points: Vec<DataPoint<D>>) -> Self {
        self.sources.push(Source {
            label: label.into(),
            points,
        });
        self
    }

    /// Only emit revisions `>= rev`.
    ///
    /// Series points below the bound are still read so the first emitted
    /// point reflects every series as of `rev`.
    #[must_use]
    pub const fn min_revision(mut self, rev: i64) -> Self {
        self.cfg.options.min_revision = Some(rev);
        self
    }

    /// Only emit revisions `<= rev`.
    #[must_use]
    pub const fn max_revision(mut self, rev: i64) -> Self {
        self.cfg.options.max_revision = Some(rev);
        self
    }

    /// Replace both revision bounds.
    #[must_use]
    pub const fn options(mut self, options: MergeOptions) -> Self {
        self.cfg.options = options;
        self
    }

    /// Select how per-point standard deviations are combined.
    ///
    /// Behavior and trade-offs:
    /// - `Legacy` (default) reproduces `sqrt(Σ count·std)`, which existing
    ///   consumers expect but which is not a statistically valid pooling.
    /// - `Pooled` computes the pooled sample standard deviation including the
    ///   spread between series means. Values will differ from `Legacy`.
    #[must_use]
    pub const fn std_policy(mut self, policy: StdPolicy) -> Self {
        self.cfg.std_policy = policy;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: MergeConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Merger`, validating the range and every series up front.
    ///
    /// # Errors
    /// - `MergeError::InvalidRange` if `min_revision > max_revision`.
    /// - `MergeError::InvalidSeriesOrder` for the first registered series
    ///   whose revisions are not strictly ascending.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "revmerge::merger",
            skip(self),
            fields(series = self.sources.len()),
        )
    )]
    pub fn build(self) -> Result<Merger<D>, MergeError> {
        self.cfg.options.validate()?;
        for (i, s) in self.sources.iter().enumerate() {
            if let Err(e) = ensure_ascending(&s.points) {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "revmerge::merger", label = %s.label, error = %e, "series rejected");
                return Err(e.with_series(i));
            }
        }
        Ok(Merger {
            sources: self.sources,
            cfg: self.cfg,
        })
    }
}

impl Merger {
    /// Start building a new `Merger`.
    ///
    /// ```
    /// use revmerge::{DataPoint, Merger};
    ///
    /// let merger = Merger::builder()
    ///     .with_series("linux", vec![DataPoint::new(10, 1.0), DataPoint::new(20, 3.0)])
    ///     .with_series("mac", vec![DataPoint::new(15, 5.0)])
    ///     .min_revision(12)
    ///     .build()
    ///     .unwrap();
    ///
    /// let report = merger.merge().unwrap();
    /// let revs: Vec<i64> = report.points.iter().map(|(r, _)| *r).collect();
    /// assert_eq!(revs, vec![15, 20]);
    /// ```
    #[must_use]
    pub fn builder() -> MergerBuilder {
        MergerBuilder::new()
    }
}

impl<D: Diagnostic> Merger<D> {
    /// Labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(Source::label)
    }

    /// Registered sources in registration order.
    #[must_use]
    pub fn sources(&self) -> &[Source<D>] {
        &self.sources
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &MergeConfig {
        &self.cfg
    }

    /// Start a lazy merge over the registered series.
    ///
    /// # Errors
    /// Cannot fail for a `Merger` obtained from [`MergerBuilder::build`]; the
    /// checks are repeated because the iterator validates its own inputs.
    pub fn iter(&self) -> Result<MergeIterator<'_, D>, MergeError> {
        MergeIterator::with_config(&self.sources, &self.cfg)
    }

    /// Merge eagerly and attribute output spans to sources.
    ///
    /// # Errors
    /// See [`Merger::iter`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "revmerge::merger",
            skip(self),
            fields(series = self.sources.len()),
        )
    )]
    pub fn merge(&self) -> Result<MergeReport<D>, MergeError> {
        let mut it = self.iter()?;
        let mut tracker = AttributionTracker::new(self.sources.len());
        let mut points = Vec::new();
        while let Some((rev, point)) = it.next() {
            tracker.record(rev, it.native_sources());
            points.push((rev, point));
        }
        let attribution = tracker.finish(|i| self.sources[i].label.clone());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "revmerge::merger",
            points = points.len(),
            spans = attribution.spans.len(),
            "merge complete"
        );
        Ok(MergeReport {
            points,
            attribution,
        })
    }

    /// Merge eagerly and re-attach revisions, producing a series that can be
    /// fed into another merge.
    ///
    /// # Errors
    /// See [`Merger::iter`].
    pub fn merged_series(&self) -> Result<Vec<DataPoint<D>>, MergeError> {
        Ok(self
            .iter()?
            .map(|(rev, p)| p.at_revision(rev))
            .collect())
    }
}
