//! mc-props: coolant and wall-material properties for microchannel analysis.
//!
//! Provides:
//! - [`PropertyTable`]: clamped linear interpolation over tabulated data
//! - [`Coolant`]: air, water and ethylene-glycol/water from literature tables,
//!   or a custom coolant from explicit properties
//! - [`Material`] and [`MaterialLibrary`]: wall materials from a JSON dataset
//!
//! # Example
//!
//! ```
//! use mc_props::{Coolant, MaterialLibrary};
//!
//! let coolant = Coolant::resolve("egw", 20.0, Some(20.0)).unwrap();
//! let copper = MaterialLibrary::bundled().unwrap().resolve("Cu").unwrap();
//!
//! assert!(coolant.density() > 1.0);
//! assert!(copper.conductivity() > 3.0);
//! ```

pub mod coolant;
pub mod correlations;
pub mod error;
pub mod material;
pub mod table;

pub use coolant::{Coolant, CoolantKind, CoolantProps, FlowUnit};
pub use error::{PropsError, PropsResult};
pub use material::{BUNDLED_DATASET_NAME, Material, MaterialLibrary, MaterialRecord};
pub use table::{PropertyTable, interpolate};
