//! Named heat-sink designs.

use crate::config::{
    ChannelConfig, ChannelDesign, ChannelGeometry, CoolantSelection, FlowMode, HeatSource,
    OperatingPoint,
};
use crate::error::{ChannelError, ChannelResult};
use mc_props::MaterialLibrary;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    LsLaserBackplane,
    LsTeColdPlate,
    LsTeHotPlate,
    LsEpiTip,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::LsLaserBackplane,
        Preset::LsTeColdPlate,
        Preset::LsTeHotPlate,
        Preset::LsEpiTip,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::LsLaserBackplane => "LSLaserBackplane",
            Self::LsTeColdPlate => "LSTEColdPlate",
            Self::LsTeHotPlate => "LSTEHotPlate",
            Self::LsEpiTip => "LSEpiTip",
        }
    }

    /// The design constants behind this preset.
    pub fn design(self) -> &'static ChannelDesign {
        &DESIGNS[self as usize]
    }

    /// Resolve the preset's coolant and material into a solvable configuration.
    pub fn build(self, materials: &MaterialLibrary) -> ChannelResult<ChannelConfig> {
        tracing::debug!(preset = self.name(), "building preset");
        self.design().resolve(materials)
    }

    fn known() -> String {
        Self::ALL
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| ChannelError::UnknownPreset {
                name: s.to_owned(),
                known: Self::known(),
            })
    }
}

const fn egw(temperature_c: f64) -> CoolantSelection {
    CoolantSelection {
        name: Cow::Borrowed("egw"),
        temperature_c,
        concentration_pct: Some(20.0),
    }
}

#[allow(clippy::too_many_arguments)]
const fn design(
    channel: [f64; 5],
    num_splits: u32,
    channels_per_split: u32,
    source: [f64; 2],
    flow_rate_ccm: f64,
    pressure_psi: f64,
    headloss: f64,
    coolant_temperature_c: f64,
) -> ChannelDesign {
    let [wc, zc, lc, zb, ww] = channel;
    let [width_cm, area_cm2] = source;
    ChannelDesign {
        geometry: ChannelGeometry {
            channel_width_mm: wc,
            channel_height_mm: zc,
            channel_length_cm: lc,
            base_thickness_mm: zb,
            wall_thickness_mm: ww,
            num_splits,
            channels_per_split,
        },
        source: HeatSource { width_cm, area_cm2 },
        operating: OperatingPoint {
            mode: FlowMode::ConstFlow,
            flow_rate_ccm,
            pressure_psi,
            headloss,
            nusselt_inf: 6.0,
        },
        material: Cow::Borrowed("Cu"),
        coolant: egw(coolant_temperature_c),
    }
}

// channel: [wc mm, zc mm, Lc cm, zb mm, ww mm]; source: [width cm, area cm²]
static DESIGNS: [ChannelDesign; 4] = [
    design([0.305, 2.032, 4.1, 0.5, 0.305], 2, 24, [3.0, 15.0], 1000.0, 0.8, 10.0, 20.0),
    design([0.432, 0.508, 3.025, 0.5, 0.432], 4, 25, [2.5, 25.0], 150.0, 0.3, 6.0, 5.0),
    design([0.305, 1.778, 2.469, 0.5, 0.305], 2, 25, [2.5, 12.5], 1000.0, 0.6, 5.0, 20.0),
    design([0.254, 1.778, 4.801, 0.254, 0.254], 1, 8, [0.4, 1.92], 150.0, 2.0, 10.0, 5.0),
];
