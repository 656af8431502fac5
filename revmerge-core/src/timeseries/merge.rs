use core::iter::FusedIterator;

use crate::timeseries::combine::AggregateCombiner;
use crate::timeseries::cursor::Cursor;
use crate::timeseries::scheduler::{RevisionScheduler, Slot};
use crate::{
    DataPoint, Diagnostic, DiagnosticValue, MergeConfig, MergeError, MergeOptions, MergedDataPoint,
};

/// Lazy N-way merge of revision-keyed series.
///
/// - Output revisions are the union of every series' native revisions,
///   restricted to the configured range, in strictly ascending order.
/// - At each output revision every non-empty series contributes its ceiling
///   point (or its last point once past its end); the contributions are
///   combined by [`AggregateCombiner`].
/// - Revisions below the lower bound still advance the cursors, so the first
///   emitted point reflects every series as of the bound.
///
/// The iterator is single-use; build a new one to merge again.
#[derive(Debug, Clone)]
pub struct MergeIterator<'a, D = DiagnosticValue> {
    cursors: Vec<Cursor<'a, D>>,
    scheduler: RevisionScheduler,
    combiner: AggregateCombiner,
    native: Vec<usize>,
    emitted: usize,
    suppressed: usize,
    done: bool,
}

impl<'a, D: Diagnostic> MergeIterator<'a, D> {
    /// Merge `series` within the bounds in `options`, using legacy std rules.
    ///
    /// # Errors
    /// - `MergeError::InvalidRange` if `min_revision > max_revision`.
    /// - `MergeError::InvalidSeriesOrder` naming the first series that is not
    ///   strictly ascending.
    pub fn new<I, S>(series: I, options: &MergeOptions) -> Result<Self, MergeError>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<[DataPoint<D>]> + ?Sized + 'a,
    {
        Self::with_config(
            series,
            &MergeConfig {
                options: *options,
                ..MergeConfig::default()
            },
        )
    }

    /// Merge `series` with a full configuration.
    ///
    /// # Errors
    /// Same as [`MergeIterator::new`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "revmerge::merge",
            skip_all,
            fields(
                min_revision = ?config.options.min_revision,
                max_revision = ?config.options.max_revision,
            ),
        )
    )]
    pub fn with_config<I, S>(series: I, config: &MergeConfig) -> Result<Self, MergeError>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<[DataPoint<D>]> + ?Sized + 'a,
    {
        let range = config.options.validate()?;
        let cursors = series
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                Cursor::new(s.as_ref()).map_err(|e| {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(target: "revmerge::merge", series = i, error = %e, "rejecting out-of-order series");
                    e.with_series(i)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            native: Vec::with_capacity(cursors.len()),
            cursors,
            scheduler: RevisionScheduler::new(range),
            combiner: AggregateCombiner::new(config.std_policy),
            emitted: 0,
            suppressed: 0,
            done: false,
        })
    }

    /// Number of input series, including empty ones.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.cursors.len()
    }

    /// Input positions of the series that had a native point at the most
    /// recently emitted revision, in ascending order.
    #[must_use]
    pub fn native_sources(&self) -> &[usize] {
        &self.native
    }

    /// Points emitted so far.
    #[must_use]
    pub const fn emitted(&self) -> usize {
        self.emitted
    }

    fn advance_all(&mut self, rev: i64) {
        self.native.clear();
        for (i, c) in self.cursors.iter_mut().enumerate() {
            if c.advance_if_at(rev) {
                self.native.push(i);
            }
        }
    }

    fn finish(&mut self) {
        self.done = true;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "revmerge::merge",
            emitted = self.emitted,
            suppressed = self.suppressed,
            "merge finished"
        );
    }
}

impl<D: Diagnostic> Iterator for MergeIterator<'_, D> {
    type Item = (i64, MergedDataPoint<D>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.scheduler.next_slot(&self.cursors) {
                Slot::Done => {
                    self.finish();
                    return None;
                }
                Slot::Skip(rev) => {
                    self.advance_all(rev);
                    self.suppressed += 1;
                }
                Slot::Emit(rev) => {
                    let merged = self
                        .combiner
                        .combine(self.cursors.iter_mut().filter_map(|c| c.contribution_for(rev)));
                    self.advance_all(rev);
                    // The scheduler only yields revisions some cursor holds, so
                    // there is always at least one contribution.
                    if let Some(point) = merged {
                        self.emitted += 1;
                        return Some((rev, point));
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining: usize = self.cursors.iter().map(Cursor::remaining).sum();
        (0, Some(remaining))
    }
}

impl<D: Diagnostic> FusedIterator for MergeIterator<'_, D> {}

/// Build a lazy merge over `series`.
///
/// # Errors
/// See [`MergeIterator::new`].
pub fn merge_timeseries<'a, D, I, S>(
    series: I,
    options: &MergeOptions,
) -> Result<MergeIterator<'a, D>, MergeError>
where
    D: Diagnostic,
    I: IntoIterator<Item = &'a S>,
    S: AsRef<[DataPoint<D>]> + ?Sized + 'a,
{
    MergeIterator::new(series, options)
}

/// Merge `series` eagerly into `(revision, point)` pairs.
///
/// # Errors
/// See [`MergeIterator::new`].
pub fn collect_merged<'a, D, I, S>(
    series: I,
    options: &MergeOptions,
) -> Result<Vec<(i64, MergedDataPoint<D>)>, MergeError>
where
    D: Diagnostic + 'a,
    I: IntoIterator<Item = &'a S>,
    S: AsRef<[DataPoint<D>]> + ?Sized + 'a,
{
    Ok(MergeIterator::new(series, options)?.collect())
}
