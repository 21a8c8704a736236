//! mc-channel: microchannel heat-sink performance.
//!
//! Provides:
//! - [`ChannelConfig`] / [`ChannelDesign`]: validated array geometry, heat source,
//!   operating point, coolant and wall material
//! - [`calc_channel_perf`]: thermal resistances, fin efficiency and flow solution
//! - [`PerformanceReport`]: the result record
//! - [`Preset`]: named reference designs
//!
//! # Example
//!
//! ```
//! use mc_channel::{Preset, calc_channel_perf};
//! use mc_props::MaterialLibrary;
//!
//! let materials = MaterialLibrary::bundled().unwrap();
//! let config = Preset::LsLaserBackplane.build(&materials).unwrap();
//! let report = calc_channel_perf(&config).unwrap();
//!
//! assert_eq!(report.r_total, report.r_conv + report.r_heat + report.r_cond);
//! assert!(report.is_laminar());
//! ```

pub mod config;
pub mod error;
pub mod preset;
pub mod report;
pub mod solve;

pub use config::{
    ChannelConfig, ChannelDesign, ChannelGeometry, CoolantSelection, FlowMode, HeatSource,
    OperatingPoint,
};
pub use error::{ChannelError, ChannelResult};
pub use preset::Preset;
pub use report::{LAMINAR_REYNOLDS_LIMIT, OptimumEstimate, PerformanceReport};
pub use solve::{
    calc_channel_perf, developing_nusselt, fin_efficiency, friction_coefficient,
    hydraulic_diameter,
};
