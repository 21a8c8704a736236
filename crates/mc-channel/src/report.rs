//! Performance report produced by a channel solve.

use mc_core::units::{Length, Pressure, Velocity, VolumeRate, ccm, cm_per_s, mm, psi};
use serde::Serialize;

/// Reynolds number below which the channel flow is treated as laminar.
pub const LAMINAR_REYNOLDS_LIMIT: f64 = 2300.0;

/// Optimum-dimension estimates from the same correlations.
///
/// Informative only; they do not feed back into the solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimumEstimate {
    /// Fin height at which fin efficiency saturates [mm]
    #[serde(rename = "zcOpt")]
    pub channel_height_mm: f64,
    /// Initial guess for the optimum channel width [mm]
    #[serde(rename = "wcOpt0")]
    pub channel_width_mm: f64,
}

/// Flow and thermal performance of one channel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceReport {
    /// Convective thermal resistance [°C/W]
    #[serde(rename = "RConv")]
    pub r_conv: f64,
    /// Fluid-heating thermal resistance [°C/W]
    #[serde(rename = "RHeat")]
    pub r_heat: f64,
    /// Base conduction thermal resistance [°C/W]
    #[serde(rename = "RCond")]
    pub r_cond: f64,
    /// Series sum of the three resistances [°C/W]
    #[serde(rename = "RTotal")]
    pub r_total: f64,
    /// Wetted-area to source-area multiplier
    pub alpha: f64,
    /// Fin efficiency [%]
    #[serde(rename = "finEta")]
    pub fin_eta: f64,
    /// Mean channel velocity [cm/s]
    #[serde(rename = "v")]
    pub velocity_cm_s: f64,
    /// Pressure drop [psi]
    #[serde(rename = "P")]
    pub pressure_psi: f64,
    /// Total flow rate [ccm]
    #[serde(rename = "f")]
    pub flow_rate_ccm: f64,
    #[serde(rename = "Re")]
    pub reynolds: f64,
    #[serde(rename = "NuAvg")]
    pub nusselt_avg: f64,
    /// Thermal entry length [mm]
    #[serde(rename = "xCrit")]
    pub x_crit_mm: f64,
    #[serde(flatten)]
    pub optimum: OptimumEstimate,
}

impl PerformanceReport {
    /// Field names in report order.
    pub const FIELDS: [&'static str; 12] = [
        "RConv", "RHeat", "RCond", "RTotal", "alpha", "finEta", "v", "P", "f", "Re", "NuAvg",
        "xCrit",
    ];

    /// The report as a flat `(name, value)` list in [`FIELDS`](Self::FIELDS) order.
    pub fn entries(&self) -> [(&'static str, f64); 12] {
        let values = [
            self.r_conv,
            self.r_heat,
            self.r_cond,
            self.r_total,
            self.alpha,
            self.fin_eta,
            self.velocity_cm_s,
            self.pressure_psi,
            self.flow_rate_ccm,
            self.reynolds,
            self.nusselt_avg,
            self.x_crit_mm,
        ];
        let mut out = [("", 0.0); 12];
        for (slot, (name, value)) in out.iter_mut().zip(Self::FIELDS.into_iter().zip(values)) {
            *slot = (name, value);
        }
        out
    }

    /// Look up a field by its report name (e.g. `"RTotal"`).
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn is_laminar(&self) -> bool {
        self.reynolds < LAMINAR_REYNOLDS_LIMIT
    }

    pub fn pressure_drop(&self) -> Pressure {
        psi(self.pressure_psi)
    }

    pub fn velocity(&self) -> Velocity {
        cm_per_s(self.velocity_cm_s)
    }

    pub fn flow_rate(&self) -> VolumeRate {
        ccm(self.flow_rate_ccm)
    }

    pub fn critical_length(&self) -> Length {
        mm(self.x_crit_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> PerformanceReport {
        PerformanceReport {
            r_conv: 0.08,
            r_heat: 0.007,
            r_cond: 0.0008,
            r_total: 0.08 + 0.007 + 0.0008,
            alpha: 0.57,
            fin_eta: 78.0,
            velocity_cm_s: 56.0,
            pressure_psi: 0.29,
            flow_rate_ccm: 1000.0,
            reynolds: 160.0,
            nusselt_avg: 13.0,
            x_crit_mm: 23.7,
            optimum: OptimumEstimate {
                channel_height_mm: 2.8,
                channel_width_mm: 0.2,
            },
        }
    }

    #[test]
    fn entries_follow_field_order() {
        let r = report();
        let entries = r.entries();
        assert_eq!(entries[0], ("RConv", 0.08));
        assert_eq!(entries[8], ("f", 1000.0));
        assert_eq!(entries.map(|(name, _)| name), PerformanceReport::FIELDS);
    }

    #[test]
    fn get_by_name() {
        let r = report();
        assert_eq!(r.get("Re"), Some(160.0));
        assert_eq!(r.get("xCrit"), Some(23.7));
        assert_eq!(r.get("zcOpt"), None);
        assert!(r.is_laminar());
    }

    #[test]
    fn typed_accessors_convert_units() {
        use uom::si::{length::meter, velocity::meter_per_second};
        let r = report();
        assert!((r.velocity().get::<meter_per_second>() - 0.56).abs() < 1e-12);
        assert!((r.critical_length().get::<meter>() - 0.0237).abs() < 1e-12);
        assert!(r.pressure_drop().value > 0.0);
        assert!(r.flow_rate().value > 0.0);
    }

    #[test]
    fn serializes_with_report_names() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["RTotal"], report().r_total);
        assert_eq!(json["finEta"], 78.0);
        assert_eq!(json["zcOpt"], 2.8);
        assert!(json.get("r_total").is_none());
    }
}
