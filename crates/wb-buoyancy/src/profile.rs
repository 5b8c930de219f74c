//! Validated density column and reference-depth materialization.

use crate::config::ReferencePolicy;
use crate::error::{BuoyancyError, BuoyancyResult};
use crate::interp::LinearInterpolant;
use tracing::{debug, warn};
use wb_core::Real;

/// Co-indexed (depth, density) samples ordered from deepest to shallowest.
///
/// Depths are finite and strictly increasing; densities are finite or NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    depth: Vec<Real>,
    density: Vec<Real>,
}

/// Reject the first sample that does not lie strictly above its predecessor.
pub(crate) fn ensure_strictly_increasing(depth: &[Real]) -> BuoyancyResult<()> {
    match depth.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(BuoyancyError::NonMonotonicDepth {
            index: i + 1,
            previous: depth[i],
            current: depth[i + 1],
        }),
        None => Ok(()),
    }
}

/// Outcome of [`Profile::insert_reference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceInsertion {
    /// Position of the reference depth in the (possibly extended) grid.
    pub index: usize,
    /// A new sample was added.
    pub inserted: bool,
    /// The added density lies outside the sampled range.
    pub extrapolated: bool,
}

impl Profile {
    pub fn new(depth: &[Real], density: &[Real]) -> BuoyancyResult<Self> {
        if depth.len() != density.len() {
            return Err(BuoyancyError::LengthMismatch {
                depth: depth.len(),
                density: density.len(),
            });
        }
        if depth.is_empty() {
            return Err(BuoyancyError::EmptyProfile);
        }
        if let Some(&value) = depth.iter().find(|z| !z.is_finite()) {
            return Err(BuoyancyError::NonFiniteDepth {
                what: "depth grid",
                value,
            });
        }
        ensure_strictly_increasing(depth)?;
        if let Some(index) = density.iter().position(|rho| rho.is_infinite()) {
            return Err(BuoyancyError::NonFiniteDensity {
                index,
                value: density[index],
            });
        }
        Ok(Self {
            depth: depth.to_vec(),
            density: density.to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.depth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    pub fn depth(&self) -> &[Real] {
        &self.depth
    }

    pub fn density(&self) -> &[Real] {
        &self.density
    }

    pub fn deepest(&self) -> Real {
        self.depth[0]
    }

    pub fn shallowest(&self) -> Real {
        self.depth[self.depth.len() - 1]
    }

    /// Index of a sample lying exactly at `z`.
    pub fn index_of(&self, z: Real) -> Option<usize> {
        let i = self.depth.partition_point(|&d| d < z);
        (i < self.depth.len() && self.depth[i] == z).then_some(i)
    }

    pub fn into_parts(self) -> (Vec<Real>, Vec<Real>) {
        (self.depth, self.density)
    }

    /// Make sure a sample exists at `reference`, interpolating its density
    /// from the neighbouring samples when it does not.
    pub fn insert_reference(
        &mut self,
        reference: Real,
        policy: ReferencePolicy,
    ) -> BuoyancyResult<ReferenceInsertion> {
        if !reference.is_finite() {
            return Err(BuoyancyError::NonFiniteDepth {
                what: "reference depth",
                value: reference,
            });
        }

        let (deepest, shallowest) = (self.deepest(), self.shallowest());
        if policy == ReferencePolicy::RequireInRange
            && (deepest >= reference || reference > shallowest)
        {
            return Err(BuoyancyError::ReferenceOutOfRange {
                reference,
                deepest,
                shallowest,
            });
        }

        if let Some(index) = self.index_of(reference) {
            return Ok(ReferenceInsertion {
                index,
                inserted: false,
                extrapolated: false,
            });
        }

        let interpolant = LinearInterpolant::new(&self.depth, &self.density)?;
        let extrapolated = !interpolant.contains(reference);
        let rho = interpolant
            .evaluate(reference, true)
            .ok_or(BuoyancyError::ReferenceOutOfRange {
                reference,
                deepest,
                shallowest,
            })?;

        if extrapolated {
            warn!(
                reference,
                deepest, shallowest, rho, "extrapolating density to reference depth"
            );
        }
        if rho.is_nan() {
            warn!(reference, "density at reference depth is missing");
        }

        // Sorted insertion keeps depth and density jointly ordered.
        let index = self.depth.partition_point(|&z| z < reference);
        self.depth.insert(index, reference);
        self.density.insert(index, rho);
        debug!(reference, index, rho, "inserted reference depth");

        Ok(ReferenceInsertion {
            index,
            inserted: true,
            extrapolated,
        })
    }
}
