//! wb-buoyancy: work done by buoyancy over an ocean density profile.
//!
//! Given a potential density anomaly profile ordered from the deepest to the
//! shallowest sample, computes at every depth the work (J·m⁻³) the buoyancy
//! force performs displacing a parcel from that depth to a reference depth
//! (−10 m by default). The computation runs in three phases:
//!
//! - reference-depth materialization ([`Profile::insert_reference`])
//! - potential accumulation around each anchor ([`BuoyancyPotential`])
//! - profile assembly ([`buoyancy_potential_work`])
//!
//! Missing densities (NaN) give missing work at their own depth only; the
//! trapezoidal integrals elsewhere skip them.
//!
//! # Example
//!
//! ```
//! use wb_buoyancy::{ReferencePolicy, WorkConfig, buoyancy_potential_work};
//!
//! let rho = [1027.0, 1026.5, 1025.0, 1024.0];
//! let z = [-20.0, -10.0, -5.0, 0.0];
//!
//! let config = WorkConfig::default().with_policy(ReferencePolicy::RequireInRange);
//! let wb = buoyancy_potential_work(&rho, &z, &config).unwrap();
//! assert_eq!(wb.work[1], 0.0);
//! assert!(wb.work[0] > 0.0);
//! ```

pub mod config;
pub mod error;
pub mod integrate;
pub mod interp;
pub mod potential;
pub mod profile;
pub mod reference;
pub mod work;

// Re-exports for ergonomics
pub use config::{ReferencePolicy, WorkConfig};
pub use error::{BuoyancyError, BuoyancyResult};
pub use integrate::CumulativeTrapezoid;
pub use interp::LinearInterpolant;
pub use potential::BuoyancyPotential;
pub use profile::{Profile, ReferenceInsertion};
pub use reference::buoyancy_potential_work_pairwise;
pub use work::{BuoyancyWork, buoyancy_potential_work};
