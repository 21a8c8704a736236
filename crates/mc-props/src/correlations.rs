//! Tabulated coolant property correlations.
//!
//! Air and water tables are from *Introduction to Heat Transfer* (Tables A.4
//! and A.6), keyed on absolute temperature `T + 273`. Ethylene-glycol/water
//! tables are from the *Handbook of Tables for Applied Engineering Science*
//! (Table 1-51, antifreeze solutions), keyed on glycol concentration in
//! percent, with two reference temperatures (0 °C and 20 °C).
//!
//! All results are in the units the channel correlations expect:
//! density g/cm³, conductivity W/(cm·K), specific heat J/(g·K),
//! viscosity N·s/cm², freezing point °C.

use crate::coolant::{CoolantProps, FlowUnit};
use crate::error::PropsResult;
use crate::table::PropertyTable;
use mc_core::CELSIUS_TABLE_OFFSET;

const AIR_T_K: [f64; 4] = [250.0, 300.0, 350.0, 400.0];
const AIR_RHO: [f64; 4] = [1.3947, 1.1614, 0.9950, 0.8711]; // kg/m3
const AIR_K: [f64; 4] = [22.3, 26.3, 30.0, 33.8]; // 1e-3 W/m-K
const AIR_CP: [f64; 4] = [1.006, 1.007, 1.009, 1.014]; // kJ/kg-K
const AIR_MU: [f64; 4] = [159.6, 184.6, 208.2, 230.1]; // 1e-7 N-s/m2

const WATER_T_K: [f64; 11] = [
    273.15, 275.0, 280.0, 285.0, 290.0, 295.0, 300.0, 305.0, 310.0, 315.0, 320.0,
];
const WATER_V: [f64; 11] = [
    1.000, 1.000, 1.000, 1.000, 1.001, 1.002, 1.003, 1.005, 1.007, 1.009, 1.011,
]; // 1e-3 m3/kg
const WATER_K: [f64; 11] = [
    569.0, 574.0, 582.0, 590.0, 598.0, 606.0, 613.0, 620.0, 628.0, 634.0, 640.0,
];
const WATER_CP: [f64; 11] = [
    4.217, 4.211, 4.198, 4.189, 4.184, 4.181, 4.179, 4.178, 4.178, 4.179, 4.180,
];
const WATER_MU: [f64; 11] = [
    1750.0, 1652.0, 1422.0, 1225.0, 1080.0, 959.0, 855.0, 769.0, 695.0, 631.0, 577.0,
];

const EGW_CONC: [f64; 5] = [10.0, 20.0, 30.0, 40.0, 50.0];
const EGW_REF_T_C: [f64; 2] = [0.0, 20.0];
const EGW_RHO: [f64; 5] = [1.012, 1.025, 1.040, 1.055, 1.065];
const EGW_K_0C: [f64; 5] = [0.32, 0.30, 0.28, 0.26, 0.24]; // Btu/hr-ft-F
const EGW_K_20C: [f64; 5] = [0.33, 0.31, 0.28, 0.26, 0.24];
const EGW_CP_0C: [f64; 5] = [0.96, 0.93, 0.87, 0.81, 0.76]; // Btu/lb-F
const EGW_CP_20C: [f64; 5] = [0.97, 0.94, 0.89, 0.84, 0.79];
const EGW_MU_0C: [f64; 5] = [2.5, 3.0, 4.0, 5.3, 8.0]; // cP
const EGW_MU_20C: [f64; 5] = [1.4, 1.9, 2.4, 3.1, 4.1];
const EGW_FREEZE_F: [f64; 5] = [24.0, 15.0, 4.0, -12.0, -32.0];

const AIR_FREEZING_POINT_C: f64 = -273.0;
const WATER_FREEZING_POINT_C: f64 = 0.0;

/// Air properties at `t_c` °C.
pub fn air(t_c: f64) -> PropsResult<CoolantProps> {
    let xi = t_c + CELSIUS_TABLE_OFFSET;
    let lookup = |y: &[f64]| -> PropsResult<f64> {
        Ok(PropertyTable::new(&AIR_T_K, y)?.interpolate_logged(xi, "air temperature"))
    };

    Ok(CoolantProps {
        density: lookup(&AIR_RHO)? * 1e-3,
        conductivity: lookup(&AIR_K)? * 1e-5,
        specific_heat: lookup(&AIR_CP)?,
        viscosity: lookup(&AIR_MU)? * 1e-11,
        freezing_point: AIR_FREEZING_POINT_C,
        flow_unit: FlowUnit::Cfm,
    })
}

/// Water properties at `t_c` °C.
pub fn water(t_c: f64) -> PropsResult<CoolantProps> {
    let xi = t_c + CELSIUS_TABLE_OFFSET;
    let lookup = |y: &[f64]| -> PropsResult<f64> {
        Ok(PropertyTable::new(&WATER_T_K, y)?.interpolate_logged(xi, "water temperature"))
    };

    // density is interpolated on the reciprocal of specific volume
    let inv_v: Vec<f64> = WATER_V.iter().map(|v| 1.0 / v).collect();

    Ok(CoolantProps {
        density: lookup(&inv_v)?,
        conductivity: lookup(&WATER_K)? * 1e-5,
        specific_heat: lookup(&WATER_CP)?,
        viscosity: lookup(&WATER_MU)? * 1e-10,
        freezing_point: WATER_FREEZING_POINT_C,
        flow_unit: FlowUnit::Ccm,
    })
}

/// Ethylene-glycol/water properties at `t_c` °C and `conc_pct` percent glycol.
///
/// Density depends on concentration only. Conductivity, specific heat and
/// viscosity are interpolated on concentration at both reference
/// temperatures, then on temperature between those two results.
pub fn egw(t_c: f64, conc_pct: f64) -> PropsResult<CoolantProps> {
    let density = PropertyTable::new(&EGW_CONC, &EGW_RHO)?
        .interpolate_logged(conc_pct, "egw concentration");

    Ok(CoolantProps {
        density,
        conductivity: egw_bilinear(&EGW_K_0C, &EGW_K_20C, t_c, conc_pct, |v| {
            v * 1.7296 / 100.0
        })?,
        specific_heat: egw_bilinear(&EGW_CP_0C, &EGW_CP_20C, t_c, conc_pct, |v| v * 4.184)?,
        viscosity: egw_bilinear(&EGW_MU_0C, &EGW_MU_20C, t_c, conc_pct, |v| v * 1e-7)?,
        freezing_point: egw_freezing_point(conc_pct)?,
        flow_unit: FlowUnit::Ccm,
    })
}

/// Freezing point [°C] of ethylene-glycol/water at `conc_pct` percent glycol.
pub fn egw_freezing_point(conc_pct: f64) -> PropsResult<f64> {
    let freeze_c = EGW_FREEZE_F.map(fahrenheit_to_celsius);
    Ok(PropertyTable::new(&EGW_CONC, &freeze_c)?.interpolate(conc_pct))
}

fn fahrenheit_to_celsius(t_f: f64) -> f64 {
    (t_f - 32.0) * (5.0 / 9.0)
}

fn egw_bilinear(
    at_0c: &[f64],
    at_20c: &[f64],
    t_c: f64,
    conc_pct: f64,
    to_units: impl Fn(f64) -> f64,
) -> PropsResult<f64> {
    let y0 = to_units(PropertyTable::new(&EGW_CONC, at_0c)?.interpolate(conc_pct));
    let y20 = to_units(PropertyTable::new(&EGW_CONC, at_20c)?.interpolate(conc_pct));
    let by_temperature = [y0, y20];
    Ok(PropertyTable::new(&EGW_REF_T_C, &by_temperature)?
        .interpolate_logged(t_c, "egw temperature"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances {
        abs: 1e-15,
        rel: 1e-12,
    };

    #[test]
    fn reference_tables_are_valid() {
        for y in [&AIR_RHO, &AIR_K, &AIR_CP, &AIR_MU] {
            assert!(PropertyTable::new(&AIR_T_K, y).is_ok());
        }
        for y in [&WATER_V, &WATER_K, &WATER_CP, &WATER_MU] {
            assert!(PropertyTable::new(&WATER_T_K, y).is_ok());
        }
        for y in [
            &EGW_RHO,
            &EGW_K_0C,
            &EGW_K_20C,
            &EGW_CP_0C,
            &EGW_CP_20C,
            &EGW_MU_0C,
            &EGW_MU_20C,
            &EGW_FREEZE_F,
        ] {
            assert!(PropertyTable::new(&EGW_CONC, y).is_ok());
        }
    }

    #[test]
    fn air_at_table_knot() {
        // 27 °C lands on the 300 K row
        let props = air(27.0).unwrap();
        assert!(nearly_equal(props.density, 1.1614e-3, TOL));
        assert!(nearly_equal(props.conductivity, 26.3e-5, TOL));
        assert!(nearly_equal(props.specific_heat, 1.007, TOL));
        assert!(nearly_equal(props.viscosity, 184.6e-11, TOL));
        assert_eq!(props.freezing_point, -273.0);
        assert_eq!(props.flow_unit, FlowUnit::Cfm);
    }

    #[test]
    fn water_density_uses_reciprocal_volume() {
        let props = water(27.0).unwrap();
        assert!(nearly_equal(props.density, 1.0 / 1.003, TOL));
        assert!(nearly_equal(props.conductivity, 613e-5, TOL));
        assert!(nearly_equal(props.specific_heat, 4.179, TOL));
        assert!(nearly_equal(props.viscosity, 855e-10, TOL));
        assert_eq!(props.flow_unit, FlowUnit::Ccm);
    }

    #[test]
    fn water_below_table_clamps_to_first_row() {
        // 0 °C maps to 273 K, below the 273.15 K first row
        let props = water(0.0).unwrap();
        assert_eq!(props.specific_heat, 4.217);
        assert!(nearly_equal(props.viscosity, 1750e-10, TOL));
    }

    #[test]
    fn egw_at_20c_20pct() {
        let props = egw(20.0, 20.0).unwrap();
        assert_eq!(props.density, 1.025);
        assert!(nearly_equal(props.conductivity, 0.31 * 1.7296 / 100.0, TOL));
        assert!(nearly_equal(props.specific_heat, 0.94 * 4.184, TOL));
        assert!(nearly_equal(props.viscosity, 1.9e-7, TOL));
        assert!(nearly_equal(props.freezing_point, (15.0 - 32.0) * 5.0 / 9.0, TOL));
    }

    #[test]
    fn egw_interpolates_between_reference_temperatures() {
        let cold = egw(0.0, 20.0).unwrap();
        let warm = egw(20.0, 20.0).unwrap();
        let mid = egw(10.0, 20.0).unwrap();
        assert!(nearly_equal(
            mid.viscosity,
            0.5 * (cold.viscosity + warm.viscosity),
            TOL
        ));
        assert_eq!(mid.density, cold.density);
    }

    #[test]
    fn freezing_point_conversion_is_fractional() {
        let fz = egw_freezing_point(50.0).unwrap();
        assert!(nearly_equal(fz, -35.555_555_555_555_56, TOL));
        assert!(egw_freezing_point(10.0).unwrap() < 0.0);
    }
}
