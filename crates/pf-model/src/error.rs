//! Error types for pf-model.

use thiserror::Error;

/// Errors raised while validating corridor parameters.
///
/// All of these are configuration-time failures: once a parameter set has
/// passed [`CorridorParams::validate`][crate::CorridorParams::validate], the
/// model functions themselves cannot fail.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("parameter {name} must be positive, got {value}")]
    NonPositiveParam { name: &'static str, value: f64 },

    #[error("screening capacity is zero: belt length {belt_m} m < object thickness {thickness_m} m")]
    ZeroCapacity { belt_m: f64, thickness_m: f64 },
}

/// Alias for `Result<T, ModelError>`.
pub type ModelResult<T> = Result<T, ModelError>;
