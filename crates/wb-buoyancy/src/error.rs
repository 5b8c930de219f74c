//! Work-by-buoyancy errors.

use thiserror::Error;
use wb_core::{Real, WbError};

/// Result type for work-by-buoyancy operations.
pub type BuoyancyResult<T> = Result<T, BuoyancyError>;

/// Errors that can occur while computing a work-by-buoyancy profile.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuoyancyError {
    /// No samples were supplied.
    #[error("Empty profile: at least one depth sample is required")]
    EmptyProfile,

    /// Depth and density columns are not co-indexed.
    #[error("Length mismatch: {depth} depths but {density} densities")]
    LengthMismatch { depth: usize, density: usize },

    /// A depth (or the reference depth) is NaN or infinite.
    #[error("Non-finite depth for {what}: {value}")]
    NonFiniteDepth { what: &'static str, value: Real },

    /// A density is infinite. Missing values are NaN, not infinity.
    #[error("Non-finite density at index {index}: {value}")]
    NonFiniteDensity { index: usize, value: Real },

    /// Depths must strictly increase from deepest to shallowest.
    #[error("Depth grid not strictly increasing at index {index} ({previous} -> {current})")]
    NonMonotonicDepth {
        index: usize,
        previous: Real,
        current: Real,
    },

    /// Too few samples to interpolate the reference depth.
    #[error("Insufficient samples: need at least {required}, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },

    /// Reference depth not covered by the profile under a strict policy.
    #[error(
        "Reference depth {reference} outside usable range [{deepest}, {shallowest}] \
         (deepest sample must lie strictly below it)"
    )]
    ReferenceOutOfRange {
        reference: Real,
        deepest: Real,
        shallowest: Real,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Core error: {0}")]
    Core(#[from] WbError),
}

impl From<BuoyancyError> for WbError {
    fn from(err: BuoyancyError) -> Self {
        match err {
            BuoyancyError::EmptyProfile => WbError::InvalidArg {
                what: "empty profile",
            },
            BuoyancyError::LengthMismatch { .. } => WbError::InvalidArg {
                what: "depth/density length mismatch",
            },
            BuoyancyError::NonFiniteDepth { what, value } => WbError::NonFinite { what, value },
            BuoyancyError::NonFiniteDensity { value, .. } => WbError::NonFinite {
                what: "density",
                value,
            },
            BuoyancyError::NonMonotonicDepth { .. } => WbError::InvalidArg {
                what: "depth grid not strictly increasing",
            },
            BuoyancyError::InsufficientSamples { .. } => WbError::InvalidArg {
                what: "insufficient samples",
            },
            BuoyancyError::ReferenceOutOfRange { .. } => WbError::InvalidArg {
                what: "reference depth out of range",
            },
            BuoyancyError::InvalidConfig { what } => WbError::InvalidArg { what },
            BuoyancyError::Core(inner) => inner,
        }
    }
}
