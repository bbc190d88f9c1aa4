#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

use crate::models::Quantity;

/// Failure of a sound speed evaluation.
///
/// The only failure mode is an input outside its accepted range; the
/// offending quantity, the rejected value and the inclusive bounds are kept
/// so callers can report or correct the input.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum SoundSpeedError {
    #[cfg_attr(
        feature = "std",
        error("{quantity} is out of range ({min} to {max} {unit}): {value}", unit = .quantity.unit())
    )]
    OutOfRange {
        quantity: Quantity,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl SoundSpeedError {
    pub fn quantity(&self) -> Quantity {
        match self {
            SoundSpeedError::OutOfRange { quantity, .. } => *quantity,
        }
    }
}

#[cfg(not(feature = "std"))]
impl fmt::Display for SoundSpeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundSpeedError::OutOfRange {
                quantity,
                value,
                min,
                max,
            } => write!(
                f,
                "{quantity} is out of range ({min} to {max} {}): {value}",
                quantity.unit()
            ),
        }
    }
}

#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Calculation(#[from] SoundSpeedError),

    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --sample-json: {source}")]
    ParseSampleJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseInputDocument {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not initialize logging: {0}")]
    LoggingInit(String),

    #[error("Unexpected error: {0}")]
    Other(String),

    #[cfg(feature = "cli")]
    #[error(
        "Missing input data: use the 'fresh' or 'salt' subcommand, --sample-json or --input"
    )]
    MissingInputData,
}
