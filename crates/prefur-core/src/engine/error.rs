use super::config::ConfigError;
use crate::core::thermo::InputError;
use crate::core::thermo::barrier::BarrierError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Model does not apply to this input: {source}")]
    ModelDegenerate {
        #[from]
        source: BarrierError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Config(_))
    }

    pub fn is_model_degenerate(&self) -> bool {
        matches!(self, Self::ModelDegenerate { .. })
    }
}
