//! Property lookup errors.

use mc_core::McError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for property lookups.
pub type PropsResult<T> = Result<T, PropsError>;

/// Errors raised while building coolant and material models.
#[derive(Error, Debug)]
pub enum PropsError {
    /// Coolant name is not one of the tabulated coolants.
    #[error("Unknown coolant '{name}' (expected one of: air, water, egw, custom)")]
    UnknownCoolant { name: String },

    /// The `custom` coolant has no correlations; it must be built from explicit properties.
    #[error("Coolant 'custom' has no property tables; construct it from explicit properties")]
    CustomCoolantNeedsOverrides,

    /// Ethylene-glycol/water needs a glycol concentration.
    #[error("Coolant 'egw' requires a glycol concentration percent")]
    MissingConcentration,

    /// Material name not present in the loaded dataset.
    #[error("Unknown material '{name}'")]
    UnknownMaterial { name: String },

    /// Two dataset rows share a (case-insensitive) name.
    #[error("Duplicate material '{name}' in dataset")]
    DuplicateMaterial { name: String },

    /// The material dataset could not be opened.
    #[error("Material dataset unavailable at {}: {source}", path.display())]
    DatasetUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The material dataset was read but is not valid.
    #[error("Material dataset {origin} could not be parsed: {source}")]
    DatasetParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Tabulated data violates the interpolation preconditions.
    #[error("Invalid property table: {what}")]
    InvalidTable { what: &'static str },

    #[error(transparent)]
    Numeric(#[from] McError),
}
