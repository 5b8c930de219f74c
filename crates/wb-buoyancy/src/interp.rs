//! One-dimensional piecewise-linear interpolation.

use crate::error::{BuoyancyError, BuoyancyResult};
use crate::profile::ensure_strictly_increasing;
use wb_core::Real;

/// Linear interpolant over strictly increasing abscissae.
///
/// Borrowed views only; the caller owns the samples. Missing ordinates are
/// not skipped, so a NaN at a bracketing sample yields NaN.
#[derive(Debug, Clone, Copy)]
pub struct LinearInterpolant<'a> {
    x: &'a [Real],
    y: &'a [Real],
}

impl<'a> LinearInterpolant<'a> {
    /// `x` must be finite and strictly increasing.
    pub fn new(x: &'a [Real], y: &'a [Real]) -> BuoyancyResult<Self> {
        if x.len() != y.len() {
            return Err(BuoyancyError::LengthMismatch {
                depth: x.len(),
                density: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(BuoyancyError::InsufficientSamples {
                required: 2,
                actual: x.len(),
            });
        }
        if let Some(&value) = x.iter().find(|v| !v.is_finite()) {
            return Err(BuoyancyError::NonFiniteDepth {
                what: "interpolant abscissa",
                value,
            });
        }
        ensure_strictly_increasing(x)?;
        Ok(Self { x, y })
    }

    pub fn lower(&self) -> Real {
        self.x[0]
    }

    pub fn upper(&self) -> Real {
        self.x[self.x.len() - 1]
    }

    pub fn contains(&self, at: Real) -> bool {
        at >= self.lower() && at <= self.upper()
    }

    /// Evaluate at `at`. Outside the sampled range this returns `None`
    /// unless `extrapolate` is set, in which case the end segment is extended.
    pub fn evaluate(&self, at: Real, extrapolate: bool) -> Option<Real> {
        if !self.contains(at) && !extrapolate {
            return None;
        }
        let n = self.x.len();
        // Index of the segment [x[k], x[k+1]] used for evaluation.
        let k = self.x.partition_point(|&xi| xi <= at).clamp(1, n - 1) - 1;
        let (x0, x1) = (self.x[k], self.x[k + 1]);
        let (y0, y1) = (self.y[k], self.y[k + 1]);
        if at == x0 {
            return Some(y0);
        }
        if at == x1 {
            return Some(y1);
        }
        let t = (at - x0) / (x1 - x0);
        Some(y0 + t * (y1 - y0))
    }
}
