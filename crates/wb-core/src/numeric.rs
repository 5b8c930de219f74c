use crate::WbError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute and relative tolerance pair for float comparisons
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Like [`nearly_equal`], but two missing values also compare equal.
pub fn nearly_equal_or_both_nan(a: Real, b: Real, tol: Tolerances) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    nearly_equal(a, b, tol)
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WbError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WbError::NonFinite { what, value: v })
    }
}

/// Sum that skips NaN terms. An empty or all-NaN input sums to zero.
pub fn nan_sum<I>(values: I) -> Real
where
    I: IntoIterator<Item = Real>,
{
    values.into_iter().filter(|v| !v.is_nan()).sum()
}
