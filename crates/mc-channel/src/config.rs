//! Channel array configuration.
//!
//! A [`ChannelConfig`] is the validated, immutable input to
//! [`calc_channel_perf`](crate::calc_channel_perf). It is either built directly
//! from resolved coolant/material models, or from a [`ChannelDesign`] whose
//! coolant and material are still named.

use crate::error::{ChannelError, ChannelResult};
use mc_props::{Coolant, Material, MaterialLibrary};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Channel array geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelGeometry {
    /// Channel width [mm]
    pub channel_width_mm: f64,
    /// Channel height [mm]
    pub channel_height_mm: f64,
    /// Channel length [cm]
    pub channel_length_cm: f64,
    /// Base thickness between source and channels [mm]
    pub base_thickness_mm: f64,
    /// Wall (fin) thickness between channels [mm]
    pub wall_thickness_mm: f64,
    pub num_splits: u32,
    pub channels_per_split: u32,
}

impl ChannelGeometry {
    fn validate(&self) -> ChannelResult<()> {
        positive(self.channel_width_mm, "channel width")?;
        positive(self.channel_height_mm, "channel height")?;
        positive(self.channel_length_cm, "channel length")?;
        positive(self.base_thickness_mm, "base thickness")?;
        positive(self.wall_thickness_mm, "wall thickness")?;
        at_least_one(self.num_splits, "number of splits")?;
        at_least_one(self.channels_per_split, "channels per split")?;
        Ok(())
    }

    /// Total number of parallel channels.
    pub fn total_channels(&self) -> u64 {
        u64::from(self.num_splits) * u64::from(self.channels_per_split)
    }
}

/// Heat source footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSource {
    /// Source width [cm]
    pub width_cm: f64,
    /// Source area [cm²]
    pub area_cm2: f64,
}

impl HeatSource {
    fn validate(&self) -> ChannelResult<()> {
        positive(self.width_cm, "source width")?;
        positive(self.area_cm2, "source area")?;
        Ok(())
    }
}

/// Which of flow rate or pressure drop is held fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowMode {
    /// Flow rate is the independent variable; pressure drop is computed.
    #[default]
    ConstFlow,
    /// Pressure drop is the independent variable; velocity and flow rate are solved.
    ConstPressure,
}

impl FlowMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::ConstFlow => "constFlow",
            Self::ConstPressure => "constPressure",
        }
    }
}

impl fmt::Display for FlowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FlowMode {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        if key.eq_ignore_ascii_case("constflow") {
            Ok(Self::ConstFlow)
        } else if key.eq_ignore_ascii_case("constpressure") {
            Ok(Self::ConstPressure)
        } else {
            Err(ChannelError::UnknownFlowMode { name: s.to_owned() })
        }
    }
}

/// Operating point of the channel array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub mode: FlowMode,
    /// Total flow rate [ccm], used in [`FlowMode::ConstFlow`]
    pub flow_rate_ccm: f64,
    /// Pressure drop [psi], used in [`FlowMode::ConstPressure`]
    pub pressure_psi: f64,
    /// Minor-loss (head loss) factor
    pub headloss: f64,
    /// Fully developed Nusselt number
    pub nusselt_inf: f64,
}

impl OperatingPoint {
    fn validate(&self) -> ChannelResult<()> {
        match self.mode {
            FlowMode::ConstFlow => {
                operating(self.flow_rate_ccm, "flow rate must be positive", |v| v > 0.0)?
            }
            FlowMode::ConstPressure => {
                operating(self.pressure_psi, "pressure must be positive", |v| v > 0.0)?
            }
        }
        operating(self.headloss, "head loss factor must be non-negative", |v| {
            v >= 0.0
        })?;
        operating(self.nusselt_inf, "Nusselt number must be positive", |v| {
            v > 0.0
        })?;
        Ok(())
    }
}

/// Validated channel configuration with its coolant and wall material.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelConfig {
    geometry: ChannelGeometry,
    source: HeatSource,
    operating: OperatingPoint,
    coolant: Coolant,
    material: Material,
}

impl ChannelConfig {
    pub fn new(
        geometry: ChannelGeometry,
        source: HeatSource,
        operating: OperatingPoint,
        coolant: Coolant,
        material: Material,
    ) -> ChannelResult<Self> {
        geometry.validate()?;
        source.validate()?;
        operating.validate()?;
        Ok(Self {
            geometry,
            source,
            operating,
            coolant,
            material,
        })
    }

    /// Same array and fluids at a different operating point.
    pub fn with_operating(&self, operating: OperatingPoint) -> ChannelResult<Self> {
        Self::new(
            self.geometry,
            self.source,
            operating,
            self.coolant.clone(),
            self.material.clone(),
        )
    }

    /// Switch to constant-flow operation at `flow_rate_ccm`.
    pub fn at_flow_rate(&self, flow_rate_ccm: f64) -> ChannelResult<Self> {
        self.with_operating(OperatingPoint {
            mode: FlowMode::ConstFlow,
            flow_rate_ccm,
            ..self.operating
        })
    }

    /// Switch to constant-pressure operation at `pressure_psi`.
    pub fn at_pressure(&self, pressure_psi: f64) -> ChannelResult<Self> {
        self.with_operating(OperatingPoint {
            mode: FlowMode::ConstPressure,
            pressure_psi,
            ..self.operating
        })
    }

    pub fn geometry(&self) -> &ChannelGeometry {
        &self.geometry
    }

    pub fn source(&self) -> &HeatSource {
        &self.source
    }

    pub fn operating(&self) -> &OperatingPoint {
        &self.operating
    }

    pub fn coolant(&self) -> &Coolant {
        &self.coolant
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

/// Coolant named by kind, temperature and concentration.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolantSelection {
    pub name: Cow<'static, str>,
    pub temperature_c: f64,
    pub concentration_pct: Option<f64>,
}

/// A channel design whose coolant and material are given by name.
///
/// Presets are `ChannelDesign` constants; resolving one against a
/// [`MaterialLibrary`] yields a [`ChannelConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelDesign {
    pub geometry: ChannelGeometry,
    pub source: HeatSource,
    pub operating: OperatingPoint,
    pub material: Cow<'static, str>,
    pub coolant: CoolantSelection,
}

impl ChannelDesign {
    pub fn resolve(&self, materials: &MaterialLibrary) -> ChannelResult<ChannelConfig> {
        let material = materials.resolve(&self.material)?;
        let coolant = Coolant::resolve(
            &self.coolant.name,
            self.coolant.temperature_c,
            self.coolant.concentration_pct,
        )?;
        ChannelConfig::new(self.geometry, self.source, self.operating, coolant, material)
    }
}

fn positive(value: f64, what: &'static str) -> ChannelResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChannelError::DegenerateGeometry { what, value })
    }
}

fn at_least_one(count: u32, what: &'static str) -> ChannelResult<()> {
    if count >= 1 {
        Ok(())
    } else {
        Err(ChannelError::DegenerateGeometry {
            what,
            value: f64::from(count),
        })
    }
}

fn operating(value: f64, what: &'static str, ok: impl Fn(f64) -> bool) -> ChannelResult<()> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ChannelError::InvalidOperatingPoint { what, value })
    }
}
