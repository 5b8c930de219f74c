//! Work done by buoyancy over a whole profile.

use crate::config::WorkConfig;
use crate::error::BuoyancyResult;
use crate::potential::BuoyancyPotential;
use crate::profile::Profile;
use tracing::debug;
use wb_core::{Density, EnergyDensity, Length, Real, j_m3, kg_m3, m};

/// Work-by-buoyancy profile and the grid it is defined on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuoyancyWork {
    /// WB at each depth (J·m⁻³); NaN where the density is missing.
    pub work: Vec<Real>,
    /// Depth grid, extended by the reference depth if it was absent.
    pub depth: Vec<Real>,
    /// Density co-indexed with `depth`, including any inserted sample.
    pub density: Vec<Real>,
    /// Position of the reference depth in `depth`.
    pub reference_index: usize,
    /// The reference depth was added to the grid.
    pub inserted: bool,
    /// The inserted density came from extrapolation.
    pub extrapolated: bool,
}

impl BuoyancyWork {
    pub fn len(&self) -> usize {
        self.work.len()
    }

    pub fn is_empty(&self) -> bool {
        self.work.is_empty()
    }

    pub fn reference_depth(&self) -> Real {
        self.depth[self.reference_index]
    }

    /// Typed WB at sample `i`.
    pub fn work_at(&self, i: usize) -> Option<EnergyDensity> {
        self.work.get(i).copied().map(j_m3)
    }

    /// Typed depth of sample `i`.
    pub fn depth_at(&self, i: usize) -> Option<Length> {
        self.depth.get(i).copied().map(m)
    }

    /// Typed density of sample `i`.
    pub fn density_at(&self, i: usize) -> Option<Density> {
        self.density.get(i).copied().map(kg_m3)
    }

    /// `(work, depth)` pair.
    pub fn into_parts(self) -> (Vec<Real>, Vec<Real>) {
        (self.work, self.depth)
    }
}

/// Compute the work done by buoyancy in displacing a parcel from every depth
/// of the profile to the configured reference depth.
///
/// `density` (kg·m⁻³) and `depth` (m, negative downward) are co-indexed and
/// ordered from deepest to shallowest. Each `work[it]` is the potential
/// around anchor `it` read off at the reference depth, so the value at the
/// reference depth itself is zero.
///
/// # Example
///
/// ```
/// use wb_buoyancy::{WorkConfig, buoyancy_potential_work};
///
/// let rho = [1027.0, 1026.5, 1025.0, 1024.0];
/// let z = [-20.0, -15.0, -5.0, 0.0];
/// let wb = buoyancy_potential_work(&rho, &z, &WorkConfig::default()).unwrap();
/// assert_eq!(wb.depth, vec![-20.0, -15.0, -10.0, -5.0, 0.0]);
/// assert_eq!(wb.work[2], 0.0);
/// ```
pub fn buoyancy_potential_work(
    density: &[Real],
    depth: &[Real],
    config: &WorkConfig,
) -> BuoyancyResult<BuoyancyWork> {
    config.validate()?;
    let mut profile = Profile::new(depth, density)?;
    let insertion = profile.insert_reference(config.reference_depth, config.policy)?;
    let reference_index = insertion.index;

    let potential = BuoyancyPotential::new(&profile, config.gravity);
    let work: Vec<Real> = (0..profile.len())
        .map(|it| potential.at(it, reference_index))
        .collect();

    debug!(
        samples = profile.len(),
        reference_index,
        inserted = insertion.inserted,
        missing = work.iter().filter(|w| w.is_nan()).count(),
        "computed work-by-buoyancy profile"
    );

    let (depth, density) = profile.into_parts();
    Ok(BuoyancyWork {
        work,
        depth,
        density,
        reference_index,
        inserted: insertion.inserted,
        extrapolated: insertion.extrapolated,
    })
}
