//! Parameter validation errors.
//!
//! The numeric primitives never fail; degenerate inputs come back as
//! NaN/∞.  These errors are raised only where parameters enter the core
//! (sampling configuration, evaluator construction, zero tables).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParamError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("series term count must be at least 1")]
    ZeroTerms,

    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("invalid range for {name}: [{start}, {end}]")]
    InvalidRange {
        name: &'static str,
        start: f64,
        end: f64,
    },

    #[error("zero ordinates must be finite, positive and strictly increasing (index {index})")]
    UnorderedZeros { index: usize },

    #[error("invalid sampling config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ParamError {
    fn from(err: serde_json::Error) -> Self {
        ParamError::Config(err.to_string())
    }
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamError::NonPositive { name, value })
    }
}

pub(crate) fn ensure_range(name: &'static str, start: f64, end: f64) -> Result<()> {
    if start.is_finite() && end.is_finite() && start <= end {
        Ok(())
    } else {
        Err(ParamError::InvalidRange { name, start, end })
    }
}
