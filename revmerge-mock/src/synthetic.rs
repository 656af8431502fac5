//! Deterministic generated series for larger tests.

use revmerge_core::DataPoint;

/// Parameters for a generated series.
#[derive(Debug, Clone, Copy)]
pub struct Synthetic {
    /// Revision of the first point.
    pub start: i64,
    /// Distance between consecutive revisions; must be positive.
    pub stride: i64,
    /// Number of points.
    pub len: usize,
    /// `avg` of the first point.
    pub base: f64,
    /// Increase of `avg` per point.
    pub slope: f64,
    /// Count attached to every point; `None` leaves it absent.
    pub count: Option<u64>,
}

impl Default for Synthetic {
    fn default() -> Self {
        Self {
            start: 0,
            stride: 1,
            len: 0,
            base: 0.0,
            slope: 1.0,
            count: None,
        }
    }
}

impl Synthetic {
    /// Generate the series.
    ///
    /// Points are strictly ascending whenever `stride > 0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    pub fn build(&self) -> Vec<DataPoint> {
        (0..self.len)
            .map(|i| {
                let rev = self.start + self.stride * i as i64;
                let mut p = DataPoint::new(rev, self.base + self.slope * i as f64);
                p.count = self.count;
                p
            })
            .collect()
    }
}
