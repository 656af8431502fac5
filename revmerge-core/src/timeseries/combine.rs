use crate::{DataPoint, Diagnostic, DiagnosticMap, MergedDataPoint, StdPolicy, merge_maps};

/// Combines the per-series contributions for one output revision.
///
/// Rules, with `n_i` the contribution's count (absent ⇒ 1):
/// - `count = Σ n_i`
/// - `avg = Σ n_i·avg_i / Σ n_i`, over contributions with `n_i > 0` and a
///   finite `avg_i`; `NaN` if none qualify
/// - `sum`, `min`, `max`: sum / minimum / maximum over the contributions that
///   carry the field, omitted if none do
/// - `std`: per [`StdPolicy`], over the contributions that carry it, omitted if
///   none do; `Pooled` also skips contributions left out of `avg`
/// - `diagnostics`: key-wise union; shared keys are folded with
///   [`Diagnostic::merge`]
///
/// The result does not depend on contribution order beyond floating-point
/// rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateCombiner {
    std_policy: StdPolicy,
}

impl AggregateCombiner {
    /// Combiner using the given standard deviation rule.
    #[must_use]
    pub const fn new(std_policy: StdPolicy) -> Self {
        Self { std_policy }
    }

    /// The standard deviation rule in use.
    #[must_use]
    pub const fn std_policy(&self) -> StdPolicy {
        self.std_policy
    }

    /// Start an incremental combination.
    #[must_use]
    pub fn accumulator<D: Diagnostic>(&self) -> Accumulator<D> {
        Accumulator::new(self.std_policy)
    }

    /// Combine `contributions`; `None` if there are none.
    pub fn combine<'p, D, I>(&self, contributions: I) -> Option<MergedDataPoint<D>>
    where
        D: Diagnostic + 'p,
        I: IntoIterator<Item = &'p DataPoint<D>>,
    {
        let mut acc = self.accumulator();
        for p in contributions {
            acc.push(p);
        }
        acc.finish()
    }
}

/// Combine `contributions` with the default ([`StdPolicy::Legacy`]) rules.
pub fn combine<'p, D, I>(contributions: I) -> Option<MergedDataPoint<D>>
where
    D: Diagnostic + 'p,
    I: IntoIterator<Item = &'p DataPoint<D>>,
{
    AggregateCombiner::default().combine(contributions)
}

/// Running state of one combination.
#[derive(Debug, Clone)]
pub struct Accumulator<D> {
    policy: StdPolicy,
    pushed: usize,
    count: u64,
    weight: f64,
    weighted_sum: f64,
    sum: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    legacy_std: Option<f64>,
    pooled: Option<Moments>,
    diagnostics: Option<DiagnosticMap<D>>,
}

impl<D: Diagnostic> Accumulator<D> {
    /// Empty accumulator.
    #[must_use]
    pub const fn new(policy: StdPolicy) -> Self {
        Self {
            policy,
            pushed: 0,
            count: 0,
            weight: 0.0,
            weighted_sum: 0.0,
            sum: None,
            min: None,
            max: None,
            legacy_std: None,
            pooled: None,
            diagnostics: None,
        }
    }

    /// Fold one contribution in.
    #[allow(clippy::cast_precision_loss)]
    pub fn push(&mut self, p: &DataPoint<D>) {
        self.pushed += 1;
        let n = p.weight();
        self.count = self.count.saturating_add(n);
        let w = n as f64;

        let in_mean = n > 0 && p.avg.is_finite();
        if in_mean {
            self.weight += w;
            self.weighted_sum += w * p.avg;
        }
        if let Some(s) = p.sum {
            self.sum = Some(self.sum.unwrap_or(0.0) + s);
        }
        if let Some(m) = p.min {
            self.min = Some(self.min.map_or(m, |cur| cur.min(m)));
        }
        if let Some(m) = p.max {
            self.max = Some(self.max.map_or(m, |cur| cur.max(m)));
        }
        if let Some(std) = p.std {
            match self.policy {
                // Not a variance pooling: weights raw std values by count and
                // ignores between-group spread. Matches existing consumers.
                StdPolicy::Legacy => {
                    self.legacy_std = Some(self.legacy_std.unwrap_or(0.0) + w * std);
                }
                // Pooled moments cover exactly the contributions in `avg`.
                StdPolicy::Pooled if !in_mean => {}
                StdPolicy::Pooled => {
                    let group = Moments::from_group(w, p.avg, std);
                    self.pooled = Some(match self.pooled {
                        Some(cur) => cur.merge(group),
                        None => group,
                    });
                }
            }
        }
        if let Some(diag) = &p.diagnostics {
            match &mut self.diagnostics {
                Some(into) => merge_maps(into, diag),
                None => self.diagnostics = Some(diag.clone()),
            }
        }
    }

    /// Number of contributions pushed so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pushed
    }

    /// True if nothing has been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pushed == 0
    }

    /// Produce the merged point; `None` if nothing was pushed.
    #[must_use]
    pub fn finish(self) -> Option<MergedDataPoint<D>> {
        if self.pushed == 0 {
            return None;
        }
        let avg = if self.weight > 0.0 {
            self.weighted_sum / self.weight
        } else {
            f64::NAN
        };
        let std = match self.policy {
            StdPolicy::Legacy => self.legacy_std.map(f64::sqrt),
            StdPolicy::Pooled => self.pooled.map(Moments::std),
        };
        Some(MergedDataPoint {
            avg,
            count: self.count,
            std,
            sum: self.sum,
            min: self.min,
            max: self.max,
            diagnostics: self.diagnostics,
        })
    }
}

/// Count, mean, and sum of squared deviations of a group, combined pairwise
/// (Chan et al.) so groups can be folded in any order.
#[derive(Debug, Clone, Copy)]
struct Moments {
    n: f64,
    mean: f64,
    m2: f64,
}

impl Moments {
    fn from_group(n: f64, mean: f64, std: f64) -> Self {
        let m2 = if n > 1.0 { (n - 1.0) * std * std } else { 0.0 };
        Self { n, mean, m2 }
    }

    fn merge(self, other: Self) -> Self {
        let n = self.n + other.n;
        if n <= 0.0 {
            return Self {
                n: 0.0,
                mean: 0.0,
                m2: self.m2 + other.m2,
            };
        }
        let delta = other.mean - self.mean;
        Self {
            n,
            mean: self.mean + delta * other.n / n,
            m2: self.m2 + other.m2 + delta * delta * self.n * other.n / n,
        }
    }

    fn std(self) -> f64 {
        if self.n > 1.0 {
            (self.m2 / (self.n - 1.0)).sqrt()
        } else {
            0.0
        }
    }
}
