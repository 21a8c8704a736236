//! Monotone 1-D property tables with clamped linear interpolation.

use crate::error::{PropsError, PropsResult};

/// Linearly interpolate `y(x)` at `xi`, clamping outside `[x[0], x[last]]`.
///
/// `x` must be strictly increasing with `x.len() == y.len() >= 2`; these are
/// only checked in debug builds. Use [`PropertyTable::new`] for a checked
/// table over untrusted data. A `NaN` query yields `NaN`.
///
/// A query landing exactly on a knot returns that knot's value.
///
/// # Panics
///
/// Panics if `x` is empty, and may panic if `y` is shorter than `x`.
pub fn interpolate(x: &[f64], y: &[f64], xi: f64) -> f64 {
    debug_assert!(x.len() >= 2 && x.len() == y.len());

    let last = x.len() - 1;
    if xi.is_nan() {
        return f64::NAN;
    }
    if xi <= x[0] {
        return y[0];
    }
    if xi >= x[last] {
        return y[last];
    }

    // first index with x[n] > xi; 1 <= n <= last here
    let n = x.partition_point(|&xn| xn <= xi);
    if x[n - 1] == xi {
        return y[n - 1];
    }
    y[n] - (y[n] - y[n - 1]) / (x[n] - x[n - 1]) * (x[n] - xi)
}

/// Validated view over tabulated `(x, y)` reference data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyTable<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> PropertyTable<'a> {
    /// Build a table, checking the interpolation preconditions.
    pub fn new(x: &'a [f64], y: &'a [f64]) -> PropsResult<Self> {
        if x.len() < 2 {
            return Err(PropsError::InvalidTable {
                what: "at least two points are required",
            });
        }
        if x.len() != y.len() {
            return Err(PropsError::InvalidTable {
                what: "x and y lengths differ",
            });
        }
        if x.iter().chain(y).any(|v| !v.is_finite()) {
            return Err(PropsError::InvalidTable {
                what: "non-finite entry",
            });
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return Err(PropsError::InvalidTable {
                what: "x must be strictly increasing",
            });
        }
        Ok(Self { x, y })
    }

    pub fn interpolate(&self, xi: f64) -> f64 {
        interpolate(self.x, self.y, xi)
    }

    /// Interpolate, logging when the query falls outside the tabulated range.
    pub fn interpolate_logged(&self, xi: f64, what: &'static str) -> f64 {
        if !self.covers(xi) {
            let (lo, hi) = self.domain();
            tracing::warn!(
                what = what,
                xi = xi,
                lo = lo,
                hi = hi,
                "outside tabulated range, clamping"
            );
        }
        self.interpolate(xi)
    }

    /// `(x[0], x[last])`
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    pub fn covers(&self, xi: f64) -> bool {
        let (lo, hi) = self.domain();
        (lo..=hi).contains(&xi)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
