//! Coolant models.
//!
//! A [`Coolant`] is resolved once per design evaluation, either from the
//! tabulated correlations in [`crate::correlations`] or from explicit
//! properties, and is never mutated afterwards. The flow rate is an operating
//! input supplied by the caller, not coolant state.

use crate::correlations;
use crate::error::{PropsError, PropsResult};
use mc_core::{CC_PER_CUBIC_FOOT, ensure_finite, ensure_positive};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Floor applied to the flow rate before computing the flow thermal resistance.
pub const MIN_FLOW_RATE: f64 = 1e-6;

/// Coolants with known property sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoolantKind {
    Air,
    Water,
    /// Ethylene-glycol/water mixture.
    Egw,
    /// User-supplied properties, no correlations.
    Custom,
}

impl CoolantKind {
    pub const ALL: [CoolantKind; 4] = [Self::Air, Self::Water, Self::Egw, Self::Custom];

    pub fn name(self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Water => "water",
            Self::Egw => "egw",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for CoolantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoolantKind {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| PropsError::UnknownCoolant { name: s.to_owned() })
    }
}

/// Volumetric unit the coolant's flow rate is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowUnit {
    /// Cubic centimeters per minute.
    Ccm,
    /// Cubic feet per minute.
    Cfm,
}

impl FlowUnit {
    /// Convert a flow rate in this unit to cm³/min.
    pub fn to_ccm(self, rate: f64) -> f64 {
        match self {
            Self::Ccm => rate,
            Self::Cfm => rate * CC_PER_CUBIC_FOOT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ccm => "ccm",
            Self::Cfm => "cfm",
        }
    }
}

/// Scalar coolant properties in the units the channel correlations use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoolantProps {
    /// Density [g/cm³]
    pub density: f64,
    /// Thermal conductivity [W/(cm·K)]
    pub conductivity: f64,
    /// Specific heat [J/(g·K)]
    pub specific_heat: f64,
    /// Dynamic viscosity [N·s/cm²]
    pub viscosity: f64,
    /// Freezing point [°C]
    pub freezing_point: f64,
    pub flow_unit: FlowUnit,
}

impl CoolantProps {
    fn validated(self) -> PropsResult<Self> {
        ensure_positive(self.density, "coolant density")?;
        ensure_positive(self.conductivity, "coolant conductivity")?;
        ensure_positive(self.specific_heat, "coolant specific heat")?;
        ensure_positive(self.viscosity, "coolant viscosity")?;
        ensure_finite(self.freezing_point, "coolant freezing point")?;
        Ok(self)
    }
}

/// A resolved coolant at a fixed operating temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct Coolant {
    kind: CoolantKind,
    props: CoolantProps,
    temperature_c: f64,
    concentration_pct: Option<f64>,
}

impl Coolant {
    /// Resolve a coolant by name (`air`, `water`, `egw`, case-insensitive).
    ///
    /// `concentration_pct` is the glycol percentage and is required for `egw`;
    /// it is ignored for the other coolants.
    pub fn resolve(
        name: &str,
        temperature_c: f64,
        concentration_pct: Option<f64>,
    ) -> PropsResult<Self> {
        let kind: CoolantKind = name.parse()?;
        match kind {
            CoolantKind::Air => Self::air(temperature_c),
            CoolantKind::Water => Self::water(temperature_c),
            CoolantKind::Egw => {
                let conc = concentration_pct.ok_or(PropsError::MissingConcentration)?;
                Self::egw(temperature_c, conc)
            }
            CoolantKind::Custom => Err(PropsError::CustomCoolantNeedsOverrides),
        }
    }

    pub fn air(temperature_c: f64) -> PropsResult<Self> {
        ensure_finite(temperature_c, "coolant temperature")?;
        Self::tabulated(
            CoolantKind::Air,
            correlations::air(temperature_c)?,
            temperature_c,
            None,
        )
    }

    pub fn water(temperature_c: f64) -> PropsResult<Self> {
        ensure_finite(temperature_c, "coolant temperature")?;
        Self::tabulated(
            CoolantKind::Water,
            correlations::water(temperature_c)?,
            temperature_c,
            None,
        )
    }

    /// Ethylene-glycol/water. Concentrations outside 10–50 % clamp to the table ends.
    pub fn egw(temperature_c: f64, concentration_pct: f64) -> PropsResult<Self> {
        ensure_finite(temperature_c, "coolant temperature")?;
        ensure_finite(concentration_pct, "glycol concentration")?;
        Self::tabulated(
            CoolantKind::Egw,
            correlations::egw(temperature_c, concentration_pct)?,
            temperature_c,
            Some(concentration_pct),
        )
    }

    /// Build a coolant from explicit properties, bypassing every table.
    pub fn custom(props: CoolantProps, temperature_c: f64) -> PropsResult<Self> {
        ensure_finite(temperature_c, "coolant temperature")?;
        Ok(Self {
            kind: CoolantKind::Custom,
            props: props.validated()?,
            temperature_c,
            concentration_pct: None,
        })
    }

    fn tabulated(
        kind: CoolantKind,
        props: CoolantProps,
        temperature_c: f64,
        concentration_pct: Option<f64>,
    ) -> PropsResult<Self> {
        let props = props.validated()?;
        tracing::debug!(
            coolant = kind.name(),
            temperature_c = temperature_c,
            density = props.density,
            viscosity = props.viscosity,
            "resolved coolant properties"
        );
        Ok(Self {
            kind,
            props,
            temperature_c,
            concentration_pct,
        })
    }

    pub fn kind(&self) -> CoolantKind {
        self.kind
    }

    pub fn props(&self) -> &CoolantProps {
        &self.props
    }

    pub fn density(&self) -> f64 {
        self.props.density
    }

    pub fn conductivity(&self) -> f64 {
        self.props.conductivity
    }

    pub fn specific_heat(&self) -> f64 {
        self.props.specific_heat
    }

    pub fn viscosity(&self) -> f64 {
        self.props.viscosity
    }

    pub fn freezing_point(&self) -> f64 {
        self.props.freezing_point
    }

    pub fn flow_unit(&self) -> FlowUnit {
        self.props.flow_unit
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn concentration_pct(&self) -> Option<f64> {
        self.concentration_pct
    }

    /// Thermal resistance [°C/W] of heating the coolant stream at `flow_rate`
    /// (in this coolant's [`FlowUnit`]).
    ///
    /// ```text
    /// R = 1 / ((r / 60) * rho * cp),  r = max(flow_rate, 1e-6) in cm³/min
    /// ```
    pub fn flow_thermal_resistance(&self, flow_rate: f64) -> f64 {
        let r = self.props.flow_unit.to_ccm(flow_rate.max(MIN_FLOW_RATE));
        1.0 / ((r / 60.0) * self.props.density * self.props.specific_heat)
    }
}
