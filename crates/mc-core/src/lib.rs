//! mc-core: shared foundation for the microchannel workspace.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - units (uom SI types + constructors for the report's mixed units)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{McError, McResult};
pub use numeric::*;
pub use units::*;
