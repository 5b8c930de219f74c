//! Configuration for a work-by-buoyancy computation.

use crate::error::{BuoyancyError, BuoyancyResult};
use wb_core::units::constants::{G_MPS2, REFERENCE_DEPTH_M};
use wb_core::{Accel, Real, ensure_finite};

/// How a reference depth outside the sampled range is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferencePolicy {
    /// Extrapolate density linearly from the two nearest samples.
    #[default]
    Extrapolate,
    /// Require a sample strictly deeper than the reference depth and the
    /// reference depth no shallower than the shallowest sample.
    RequireInRange,
}

/// Parameters of [`buoyancy_potential_work`](crate::buoyancy_potential_work).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorkConfig {
    /// Depth (m, negative downward) at which WB is zero.
    pub reference_depth: Real,
    /// Gravitational acceleration (m·s⁻²).
    pub gravity: Real,
    pub policy: ReferencePolicy,
}

impl Default for WorkConfig {
    fn default() -> Self {
        Self {
            reference_depth: REFERENCE_DEPTH_M,
            gravity: G_MPS2,
            policy: ReferencePolicy::default(),
        }
    }
}

impl WorkConfig {
    pub fn with_reference_depth(mut self, reference_depth: Real) -> Self {
        self.reference_depth = reference_depth;
        self
    }

    pub fn with_gravity(mut self, gravity: Real) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_gravity_accel(self, gravity: Accel) -> Self {
        use uom::si::acceleration::meter_per_second_squared;
        self.with_gravity(gravity.get::<meter_per_second_squared>())
    }

    pub fn with_policy(mut self, policy: ReferencePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> BuoyancyResult<()> {
        if !self.reference_depth.is_finite() {
            return Err(BuoyancyError::NonFiniteDepth {
                what: "reference depth",
                value: self.reference_depth,
            });
        }
        ensure_finite(self.gravity, "gravity")?;
        if self.gravity <= 0.0 {
            return Err(BuoyancyError::InvalidConfig {
                what: "gravity must be positive",
            });
        }
        Ok(())
    }
}
