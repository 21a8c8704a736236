// mc-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Pressure as UomPressure, Velocity as UomVelocity,
    VolumeRate as UomVolumeRate,
};

// Report quantities (SI, f64)
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

/// Offset used by the tabulated coolant correlations (°C -> K).
///
/// The reference tables are keyed on `T + 273`, not `T + 273.15`.
pub const CELSIUS_TABLE_OFFSET: f64 = 273.0;

/// Pounds per square inch per pascal, as used by the pressure-drop correlations.
pub const PSI_PER_PA: f64 = 1.4504e-4;

/// Cubic centimeters per cubic foot, `(12 * 2.54)^3`.
pub const CC_PER_CUBIC_FOOT: f64 = (12.0 * 2.54) * (12.0 * 2.54) * (12.0 * 2.54);

#[inline]
pub fn psi(v: f64) -> Pressure {
    use uom::si::pressure::psi;
    Pressure::new::<psi>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn cm_per_s(v: f64) -> Velocity {
    use uom::si::velocity::centimeter_per_second;
    Velocity::new::<centimeter_per_second>(v)
}

/// Volumetric flow from cubic centimeters per minute.
#[inline]
pub fn ccm(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v * 1e-6 / 60.0)
}
