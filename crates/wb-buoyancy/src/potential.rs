//! Buoyancy potential around an anchor depth.
//!
//! For an anchor sample `a` and any sample `j`:
//!
//! ```text
//! S_a[j] = ∫ rho dz   from z[a] to z[j]    (trapezoidal, nan-skipping)
//! V_a[j] = g (z[j] - z[a]) rho[a] - g S_a[j]
//! ```
//!
//! `V_a` is the negated raw potential `-(g (z - z_a) rho_a) + g S_a`, so that
//! positive values mean work done against a stable stratification.

use crate::integrate::CumulativeTrapezoid;
use crate::profile::Profile;
use wb_core::Real;

#[derive(Debug, Clone)]
pub struct BuoyancyPotential<'a> {
    profile: &'a Profile,
    integral: CumulativeTrapezoid,
    gravity: Real,
}

impl<'a> BuoyancyPotential<'a> {
    pub fn new(profile: &'a Profile, gravity: Real) -> Self {
        Self {
            integral: CumulativeTrapezoid::new(profile.depth(), profile.density()),
            profile,
            gravity,
        }
    }

    /// Density integral from the anchor to sample `j` (kg·m⁻²).
    pub fn displacement_integral(&self, anchor: usize, j: usize) -> Real {
        self.integral.between(anchor, j)
    }

    /// Potential at sample `j` around `anchor` (J·m⁻³). NaN when the
    /// anchor density is missing.
    pub fn at(&self, anchor: usize, j: usize) -> Real {
        let rho_anchor = self.profile.density()[anchor];
        if rho_anchor.is_nan() {
            return Real::NAN;
        }
        let z = self.profile.depth();
        let g = self.gravity;
        g * (z[j] - z[anchor]) * rho_anchor - g * self.displacement_integral(anchor, j)
    }

    /// Full potential curve around `anchor`, one value per sample.
    pub fn curve(&self, anchor: usize) -> Vec<Real> {
        (0..self.profile.len()).map(|j| self.at(anchor, j)).collect()
    }
}
