//! Steady-state microchannel performance (Tuckerman-style analysis).
//!
//! Lengths follow the configuration's units: channel cross-section, wall and
//! base in mm, channel length in cm, source area in cm². Coolant properties are
//! in g/cm³, W/(cm·K), J/(g·K) and N·s/cm². The pressure-drop model works in
//! SI internally and reports psi.

use crate::config::{ChannelConfig, FlowMode};
use crate::error::{ChannelError, ChannelResult};
use crate::report::{OptimumEstimate, PerformanceReport};
use mc_core::{PSI_PER_PA, ensure_finite};
use std::f64::consts::PI;

/// Hydraulic diameter [mm] of a `wc` x `zc` rectangular channel.
pub fn hydraulic_diameter(wc: f64, zc: f64) -> f64 {
    4.0 * wc * zc / (2.0 * (zc + wc))
}

/// Poiseuille number `fRe` for a rectangular duct.
///
/// `B` is the ratio of the hydraulic-diameter circle to the actual cross
/// section; the exponential fit maps it to `fRe` (16 for a circular duct).
pub fn friction_coefficient(d: f64, wc: f64, zc: f64) -> f64 {
    let b = (PI * d.powi(2) / 4.0) / (wc * zc);
    16.0 * (0.294 * b.powi(2) + 0.068 * b - 0.318).exp()
}

/// Straight-fin efficiency [%] for fin parameter `m·L`.
///
/// Approaches 100 as `fin_n` goes to zero; exactly zero is rejected.
pub fn fin_efficiency(fin_n: f64) -> ChannelResult<f64> {
    if !(fin_n > 0.0) {
        return Err(ChannelError::NumericDegeneracy {
            what: "fin parameter must be positive",
        });
    }
    Ok(100.0 * fin_n.tanh() / fin_n)
}

/// Average Nusselt number for thermally developing laminar flow.
pub fn developing_nusselt(nusselt_inf: f64, d_re_pr: f64, lc: f64) -> f64 {
    let graetz = d_re_pr / lc;
    nusselt_inf + ((0.0668 * graetz) / (1.0 + 0.04 * graetz.powf(2.0 / 3.0)))
}

/// Mean velocity [cm/s] and flow rate [ccm] at a fixed pressure drop.
///
/// Solves `c1·u² + c2·u = ΔP` for the channel velocity `u` [m/s].
fn velocity_at_pressure(c1: f64, c2: f64, p_pa: f64) -> ChannelResult<f64> {
    if c1 == 0.0 {
        if c2 == 0.0 {
            return Err(ChannelError::NumericDegeneracy {
                what: "laminar pressure coefficient is zero",
            });
        }
        Ok(1e2 * (p_pa / c2))
    } else {
        Ok(1e2 * ((-c2 + (c2.powi(2) + 4.0 * c1 * p_pa).sqrt()) / (2.0 * c1)))
    }
}

fn nonzero(value: f64, what: &'static str) -> ChannelResult<f64> {
    let value = ensure_finite(value, what)?;
    if value == 0.0 {
        Err(ChannelError::NumericDegeneracy { what })
    } else {
        Ok(value)
    }
}

/// Compute the flow and thermal performance of `config`.
///
/// In constant-flow mode the configured flow rate sets the velocity and the
/// pressure drop is derived. In constant-pressure mode the velocity is the
/// positive root of the head-loss + laminar-friction balance and the flow
/// rate is derived from it.
pub fn calc_channel_perf(config: &ChannelConfig) -> ChannelResult<PerformanceReport> {
    let g = config.geometry();
    let op = config.operating();
    let coolant = config.coolant();

    let wc = g.channel_width_mm;
    let zc = g.channel_height_mm;
    let lc = g.channel_length_cm;
    let zb = g.base_thickness_mm;
    let ww = g.wall_thickness_mm;
    let nsp = f64::from(g.num_splits);
    let nc = f64::from(g.channels_per_split);
    let a_s = config.source().area_cm2;
    let kw = config.material().conductivity();

    let kf = coolant.conductivity();
    let mu = coolant.viscosity();
    let rho = coolant.density();
    let cp = coolant.specific_heat();

    let pr = (mu * 1e4) * (cp * 1e3) / (kf * 1e2);
    let d = hydraulic_diameter(wc, zc);
    let c = friction_coefficient(d, wc, zc);

    // head loss (quadratic) and laminar friction (linear) pressure terms
    let c1 = op.headloss * (rho * 1e3) / 2.0;
    let c2 = (2.0 * c * (mu * 1e4) * (lc * 1e-3)) / (d * 1e-3).powi(2);
    ensure_finite(c2, "laminar pressure coefficient")?;

    let flow_area = nsp * nc * wc * zc * 1e-2;
    let (v, f, p) = match op.mode {
        FlowMode::ConstPressure => {
            let p = op.pressure_psi;
            let v = velocity_at_pressure(c1, c2, p / PSI_PER_PA)?;
            let f = 60.0 * v * flow_area;
            (v, f, p)
        }
        FlowMode::ConstFlow => {
            let f = op.flow_rate_ccm;
            let v = (f / 60.0) / flow_area;
            let p = PSI_PER_PA * (c1 * (v * 1e-2).powi(2) + c2 * (v * 1e-2));
            (v, f, p)
        }
    };
    nonzero(v, "mean velocity is zero")?;
    nonzero(f, "flow rate is zero")?;
    ensure_finite(p, "pressure drop")?;
    tracing::debug!(
        mode = op.mode.name(),
        c1 = c1,
        c2 = c2,
        velocity_cm_s = v,
        flow_rate_ccm = f,
        pressure_psi = p,
        "solved flow"
    );

    let re = (v * 1e-2) * (d * 1e-3) * (rho * 1e3) / (mu * 1e4);
    let alpha = nsp * nc * (2.0 * zc + wc) * lc / (a_s * 1e2);

    let d_re_pr = d * re * pr;
    let nu_avg = developing_nusselt(op.nusselt_inf, d_re_pr, lc);
    let x_crit = 0.02 * d_re_pr;

    let h = nonzero(nu_avg * kf / (d * 1e-1), "convective coefficient is zero")?;
    let fin_ratio = 2.0 * h / (kw * (ww * 1e-1));
    let fin_n = (zc * 1e-1) * fin_ratio.sqrt();
    let fin_eta = fin_efficiency(fin_n)?;

    let r_conv = 1.0 / (h * alpha * a_s);
    let r_heat = 1.0 / (2.0 * rho * cp * (f / 60.0));
    let r_cond = (zb * 1e-1) / (kw * a_s);
    let r_total = r_conv + r_heat + r_cond;

    let optimum = OptimumEstimate {
        channel_height_mm: 10.0 * (1.0 / fin_ratio).sqrt(),
        channel_width_mm: 1e3
            * 2.29
            * ((mu * 1e4) * (kf * 1e2) * (lc * 1e-3).powi(2) * nu_avg
                / ((rho * 1e3) * (cp * 1e3) * (p / PSI_PER_PA)))
                .powf(0.25),
    };

    let report = PerformanceReport {
        r_conv: ensure_finite(r_conv, "convective resistance")?,
        r_heat: ensure_finite(r_heat, "fluid heating resistance")?,
        r_cond: ensure_finite(r_cond, "conduction resistance")?,
        r_total: ensure_finite(r_total, "total resistance")?,
        alpha,
        fin_eta,
        velocity_cm_s: v,
        pressure_psi: p,
        flow_rate_ccm: f,
        reynolds: ensure_finite(re, "Reynolds number")?,
        nusselt_avg: ensure_finite(nu_avg, "average Nusselt number")?,
        x_crit_mm: x_crit,
        optimum,
    };
    tracing::debug!(
        r_total = report.r_total,
        reynolds = report.reynolds,
        fin_eta = report.fin_eta,
        "channel performance"
    );
    Ok(report)
}

impl ChannelConfig {
    /// Shorthand for [`calc_channel_perf`].
    pub fn performance(&self) -> ChannelResult<PerformanceReport> {
        calc_channel_perf(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChannelGeometry, HeatSource, OperatingPoint};
    use mc_core::{Tolerances, nearly_equal};
    use mc_props::{Coolant, Material};

    const TOL: Tolerances = Tolerances {
        abs: 1e-12,
        rel: 1e-9,
    };

    fn backplane(mode: FlowMode, headloss: f64) -> ChannelConfig {
        ChannelConfig::new(
            ChannelGeometry {
                channel_width_mm: 0.305,
                channel_height_mm: 2.032,
                channel_length_cm: 4.1,
                base_thickness_mm: 0.5,
                wall_thickness_mm: 0.305,
                num_splits: 2,
                channels_per_split: 24,
            },
            HeatSource {
                width_cm: 3.0,
                area_cm2: 15.0,
            },
            OperatingPoint {
                mode,
                flow_rate_ccm: 1000.0,
                pressure_psi: 0.8,
                headloss,
                nusselt_inf: 6.0,
            },
            Coolant::egw(20.0, 20.0).unwrap(),
            Material::new("Cu", 8.96, 3.98, 0.385, 0.165).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn hydraulic_diameter_of_square_is_side() {
        assert!(nearly_equal(hydraulic_diameter(0.5, 0.5), 0.5, TOL));
    }

    #[test]
    fn friction_coefficient_square_duct() {
        // B = pi/4 for a square duct
        let b = PI / 4.0;
        let expected = 16.0 * (0.294 * b * b + 0.068 * b - 0.318).exp();
        assert!(nearly_equal(friction_coefficient(1.0, 1.0, 1.0), expected, TOL));
    }

    #[test]
    fn fin_efficiency_limits() {
        let eta = fin_efficiency(1e-6).unwrap();
        assert!((eta - 100.0).abs() < 1e-6);
        assert!(fin_efficiency(50.0).unwrap() < 3.0);
        assert!(matches!(
            fin_efficiency(0.0),
            Err(ChannelError::NumericDegeneracy { .. })
        ));
        assert!(fin_efficiency(f64::NAN).is_err());
    }

    #[test]
    fn developing_nusselt_tends_to_fully_developed() {
        assert_eq!(developing_nusselt(6.0, 0.0, 4.1), 6.0);
        assert!(developing_nusselt(6.0, 100.0, 4.1) > 6.0);
    }

    #[test]
    fn const_flow_backplane_reference_values() {
        let r = calc_channel_perf(&backplane(FlowMode::ConstFlow, 10.0)).unwrap();
        let tol = Tolerances {
            abs: 0.0,
            rel: 1e-9,
        };
        assert_eq!(r.flow_rate_ccm, 1000.0);
        assert!(nearly_equal(r.velocity_cm_s, 56.025_271_431_235_03, tol));
        assert!(nearly_equal(r.pressure_psi, 0.289_039_763_410_286_14, tol));
        assert!(nearly_equal(r.reynolds, 160.305_735_097_978_84, tol));
        assert!(nearly_equal(r.nusselt_avg, 13.024_237_129_144_236, tol));
        assert!(nearly_equal(r.x_crit_mm, 23.699_525_005_758_836, tol));
        assert!(nearly_equal(r.alpha, 0.573_212_8, tol));
        assert!(nearly_equal(r.fin_eta, 77.995_078_017_505_93, tol));
        assert!(nearly_equal(r.r_conv, 0.088_334_025_500_042_02, tol));
        assert!(nearly_equal(r.r_heat, 0.007_441_797_700_186_84, tol));
        assert!(nearly_equal(r.r_cond, 0.000_837_520_938_023_450_6, tol));
        assert!(nearly_equal(r.r_total, 0.096_613_344_138_252_3, tol));
    }

    #[test]
    fn total_resistance_is_exact_sum() {
        for mode in [FlowMode::ConstFlow, FlowMode::ConstPressure] {
            let r = calc_channel_perf(&backplane(mode, 10.0)).unwrap();
            assert_eq!(r.r_total, r.r_conv + r.r_heat + r.r_cond);
        }
    }

    #[test]
    fn const_pressure_recovers_const_flow_rate() {
        let flow = calc_channel_perf(&backplane(FlowMode::ConstFlow, 10.0)).unwrap();
        let cfg = backplane(FlowMode::ConstFlow, 10.0)
            .at_pressure(flow.pressure_psi)
            .unwrap();
        let pressure = calc_channel_perf(&cfg).unwrap();
        assert!(nearly_equal(pressure.flow_rate_ccm, 1000.0, TOL));
        assert!(nearly_equal(pressure.velocity_cm_s, flow.velocity_cm_s, TOL));
        assert_eq!(pressure.pressure_psi, flow.pressure_psi);
    }

    #[test]
    fn zero_headloss_uses_linear_branch_and_recomputes_flow() {
        let flow = calc_channel_perf(&backplane(FlowMode::ConstFlow, 0.0)).unwrap();
        let cfg = backplane(FlowMode::ConstPressure, 0.0)
            .at_pressure(flow.pressure_psi)
            .unwrap();
        let pressure = calc_channel_perf(&cfg).unwrap();
        assert!(nearly_equal(pressure.flow_rate_ccm, 1000.0, TOL));
    }

    #[test]
    fn higher_pressure_means_more_flow() {
        let low = calc_channel_perf(&backplane(FlowMode::ConstPressure, 10.0)).unwrap();
        let cfg = backplane(FlowMode::ConstPressure, 10.0).at_pressure(1.6).unwrap();
        let high = calc_channel_perf(&cfg).unwrap();
        assert!(high.flow_rate_ccm > low.flow_rate_ccm);
        assert!(high.r_heat < low.r_heat);
    }

    #[test]
    fn optimum_height_matches_inverse_fin_parameter() {
        let cfg = backplane(FlowMode::ConstFlow, 10.0);
        let r = calc_channel_perf(&cfg).unwrap();
        // fin_n = zc / zcOpt when both are in mm
        let fin_n = cfg.geometry().channel_height_mm / r.optimum.channel_height_mm;
        let eta = fin_efficiency(fin_n).unwrap();
        assert!(nearly_equal(eta, r.fin_eta, Tolerances { abs: 1e-9, rel: 1e-9 }));
        assert!(r.optimum.channel_width_mm > 0.0);
    }

    #[test]
    fn performance_shorthand_matches() {
        let cfg = backplane(FlowMode::ConstFlow, 10.0);
        assert_eq!(cfg.performance().unwrap(), calc_channel_perf(&cfg).unwrap());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::{ChannelGeometry, HeatSource, OperatingPoint};
    use mc_core::{Tolerances, nearly_equal};
    use mc_props::{Coolant, Material};
    use proptest::prelude::*;

    fn config(
        wc: f64,
        zc: f64,
        lc: f64,
        flow: f64,
        headloss: f64,
        t_c: f64,
    ) -> ChannelConfig {
        ChannelConfig::new(
            ChannelGeometry {
                channel_width_mm: wc,
                channel_height_mm: zc,
                channel_length_cm: lc,
                base_thickness_mm: 0.5,
                wall_thickness_mm: wc,
                num_splits: 2,
                channels_per_split: 20,
            },
            HeatSource {
                width_cm: 2.5,
                area_cm2: 12.5,
            },
            OperatingPoint {
                mode: FlowMode::ConstFlow,
                flow_rate_ccm: flow,
                pressure_psi: 1.0,
                headloss,
                nusselt_inf: 6.0,
            },
            Coolant::water(t_c).unwrap(),
            Material::new("Cu", 8.96, 3.98, 0.385, 0.165).unwrap(),
        )
        .unwrap()
    }

    proptest! {
        #[test]
        fn flow_pressure_round_trip(
            wc in 0.1_f64..1.0,
            zc in 0.2_f64..3.0,
            lc in 1.0_f64..6.0,
            flow in 50.0_f64..2000.0,
            headloss in 0.5_f64..12.0,
            t_c in 5.0_f64..45.0,
        ) {
            let cfg = config(wc, zc, lc, flow, headloss, t_c);
            let by_flow = calc_channel_perf(&cfg).unwrap();
            let by_pressure = calc_channel_perf(&cfg.at_pressure(by_flow.pressure_psi).unwrap()).unwrap();
            let tol = Tolerances { abs: 1e-9, rel: 1e-7 };
            prop_assert!(nearly_equal(by_pressure.flow_rate_ccm, flow, tol));
        }

        #[test]
        fn resistances_sum_and_fin_efficiency_bounded(
            wc in 0.1_f64..1.0,
            zc in 0.2_f64..3.0,
            flow in 50.0_f64..2000.0,
        ) {
            let r = calc_channel_perf(&config(wc, zc, 3.0, flow, 5.0, 25.0)).unwrap();
            prop_assert_eq!(r.r_total, r.r_conv + r.r_heat + r.r_cond);
            prop_assert!(r.fin_eta > 0.0 && r.fin_eta <= 100.0);
            prop_assert!(r.r_conv > 0.0 && r.r_heat > 0.0 && r.r_cond > 0.0);
        }
    }
}
