//! Cumulative trapezoidal integration of density over depth.
//!
//! Trapezoid terms `(rho[k] + rho[k+1]) * dz[k]` that involve a missing
//! density are skipped rather than propagated, so a single NaN only removes
//! its own two segments from every integral that spans them.

use wb_core::Real;

/// Prefix sums of trapezoid terms, built once per profile.
///
/// `cumulative[m]` holds the (unhalved) sum of terms `0..m`, so any
/// sub-range integral is a difference of two entries.
#[derive(Debug, Clone)]
pub struct CumulativeTrapezoid {
    cumulative: Vec<Real>,
}

impl CumulativeTrapezoid {
    /// `depth` and `density` must be co-indexed; `depth` strictly increasing.
    pub fn new(depth: &[Real], density: &[Real]) -> Self {
        debug_assert_eq!(depth.len(), density.len());
        let mut cumulative = Vec::with_capacity(depth.len());
        let mut acc = 0.0;
        cumulative.push(acc);
        for (z, rho) in depth.windows(2).zip(density.windows(2)) {
            let term = (rho[0] + rho[1]) * (z[1] - z[0]);
            if !term.is_nan() {
                acc += term;
            }
            cumulative.push(acc);
        }
        Self { cumulative }
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Trapezoidal integral of density from sample `from` to sample `to`
    /// (kg·m⁻²). Negative when `to` lies below `from`.
    ///
    /// # Panics
    /// If either index is out of bounds.
    pub fn between(&self, from: usize, to: usize) -> Real {
        0.5 * (self.cumulative[to] - self.cumulative[from])
    }
}
