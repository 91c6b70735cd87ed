use crate::core::models::class::ParseClassError;
use crate::core::models::profile::ProfileError;
use crate::core::models::sequence::SequenceError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum InputError {
    #[error("Residue count must be at least 1, got {0}")]
    ResidueCount(usize),

    #[error("Temperature must be a finite, positive number of kelvin, got {0}")]
    Temperature(f64),

    #[error("Model parameter '{name}' must be finite and non-negative, got {value}")]
    Parameter { name: &'static str, value: f64 },

    #[error("Barrier height must be finite and non-negative, got {0} kJ/mol")]
    Barrier(f64),

    #[error(transparent)]
    UnknownClass(#[from] ParseClassError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error("Input drives the free-energy profile out of floating-point range: {0}")]
    OutOfRange(#[from] ProfileError),
}

pub fn check_residue_count(residue_count: usize) -> Result<usize, InputError> {
    if residue_count < 1 {
        return Err(InputError::ResidueCount(residue_count));
    }
    Ok(residue_count)
}

pub fn check_temperature(temperature: f64) -> Result<f64, InputError> {
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(InputError::Temperature(temperature));
    }
    Ok(temperature)
}

pub fn check_parameter(name: &'static str, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() || value < 0.0 {
        return Err(InputError::Parameter { name, value });
    }
    Ok(value)
}
