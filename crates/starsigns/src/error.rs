use crate::ephemeris::EphemerisError;
use thiserror::Error;

/// Errors that can occur while building a chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to parse {field} '{input}': {message}")]
    Parse {
        field: &'static str,
        input: String,
        message: String,
    },
    #[error("Invalid {field}: {value} (expected {expected})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
    #[error("Invalid chart settings: {message}")]
    InvalidSettings { message: String },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

impl ChartError {
    pub(crate) fn parse(field: &'static str, input: &str, err: impl std::fmt::Display) -> Self {
        ChartError::Parse {
            field,
            input: input.to_string(),
            message: err.to_string(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ChartError::Parse { .. })
    }

    pub fn is_ephemeris(&self) -> bool {
        matches!(self, ChartError::Ephemeris(_))
    }
}
