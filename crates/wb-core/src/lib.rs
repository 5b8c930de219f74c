//! wb-core: shared foundation for the work-by-buoyancy crates.
//!
//! Contains:
//! - units (uom SI types, constructors and physical constants)
//! - numeric (Real, tolerances, float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{WbError, WbResult};
pub use numeric::*;
pub use units::*;
