//! Error types for channel configuration and performance solving.

use mc_core::McError;
use mc_props::PropsError;
use thiserror::Error;

/// Errors that can occur while building or solving a channel configuration.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// Zero, negative or non-finite dimension, or a count below one.
    #[error("Degenerate geometry: {what} must be positive, got {value}")]
    DegenerateGeometry { what: &'static str, value: f64 },

    #[error("Invalid operating point: {what}, got {value}")]
    InvalidOperatingPoint { what: &'static str, value: f64 },

    /// A denominator or fin parameter collapsed to zero during the solve.
    #[error("Numeric degeneracy: {what}")]
    NumericDegeneracy { what: &'static str },

    #[error("Unknown preset '{name}' (known presets: {known})")]
    UnknownPreset { name: String, known: String },

    #[error("Unknown flow mode '{name}' (expected constFlow or constPressure)")]
    UnknownFlowMode { name: String },

    #[error(transparent)]
    Props(#[from] PropsError),

    #[error(transparent)]
    Numeric(#[from] McError),
}

pub type ChannelResult<T> = Result<T, ChannelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ChannelError::DegenerateGeometry {
            what: "channel width",
            value: 0.0,
        };
        assert!(err.to_string().contains("channel width"));
    }

    #[test]
    fn props_error_passes_through() {
        let err: ChannelError = PropsError::UnknownMaterial {
            name: "Unobtainium".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Unknown material 'Unobtainium'");
    }
}
