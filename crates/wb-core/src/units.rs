// wb-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Length = UomLength;
pub type Density = UomMassDensity;
/// Energy per unit volume; J·m⁻³ is dimensionally a pascal.
pub type EnergyDensity = UomPressure;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn j_m3(v: f64) -> EnergyDensity {
    use uom::si::pressure::pascal;
    EnergyDensity::new::<pascal>(v)
}

pub mod constants {
    use super::*;

    /// Gravitational acceleration used by the work-by-buoyancy diagnostic.
    pub const G_MPS2: f64 = 9.81;

    /// Default reference depth, metres (negative downward).
    pub const REFERENCE_DEPTH_M: f64 = -10.0;

    #[inline]
    pub fn g() -> Accel {
        mps2(G_MPS2)
    }
}
