//! Pairwise accumulation without prefix sums.
//!
//! Every anchor re-integrates every sub-range, which is cubic in the number
//! of samples. [`buoyancy_potential_work`](crate::buoyancy_potential_work)
//! must agree with this within floating-point summation error.

use crate::config::WorkConfig;
use crate::error::BuoyancyResult;
use crate::profile::Profile;
use crate::work::BuoyancyWork;
use wb_core::{Real, nan_sum};

/// Same contract as [`buoyancy_potential_work`](crate::buoyancy_potential_work).
pub fn buoyancy_potential_work_pairwise(
    density: &[Real],
    depth: &[Real],
    config: &WorkConfig,
) -> BuoyancyResult<BuoyancyWork> {
    config.validate()?;
    let mut profile = Profile::new(depth, density)?;
    let insertion = profile.insert_reference(config.reference_depth, config.policy)?;
    let izref = insertion.index;

    let z = profile.depth();
    let rho = profile.density();
    let nz = z.len();
    let g = config.gravity;
    let dz: Vec<Real> = z.windows(2).map(|w| w[1] - w[0]).collect();

    // Halved trapezoid sum over segments lo..hi.
    let trapezoid = |lo: usize, hi: usize| -> Real {
        0.5 * nan_sum((lo..hi).map(|k| (rho[k] + rho[k + 1]) * dz[k]))
    };

    let mut work = vec![Real::NAN; nz];
    for it in 0..nz {
        let rho_int = rho[it];
        if rho_int.is_nan() {
            continue;
        }

        let mut s = vec![0.0; nz];
        for (i, si) in s.iter_mut().enumerate().take(it) {
            *si = -trapezoid(i, it);
        }
        for (i, si) in s.iter_mut().enumerate().skip(it + 1) {
            *si = trapezoid(it, i);
        }

        let v: Vec<Real> = z
            .iter()
            .zip(&s)
            .map(|(&zj, &sj)| -(-(g * (zj - z[it]) * rho_int) + g * sj))
            .collect();
        work[it] = v[izref];
    }

    let (depth, density) = profile.into_parts();
    Ok(BuoyancyWork {
        work,
        depth,
        density,
        reference_index: izref,
        inserted: insertion.inserted,
        extrapolated: insertion.extrapolated,
    })
}
