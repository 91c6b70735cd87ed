use prefur::core::io::profile::ProfileExportError;
use prefur::core::thermo::params::ParamLoadError;
use prefur::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Parameters(#[from] ParamLoadError),

    #[error(transparent)]
    Export(#[from] ProfileExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// A short suggestion printed under the error message, when one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Engine(e) if e.is_model_degenerate() => Some(
                "The two-state model has no folding barrier here (downhill or barrier-free landscape). Try a temperature closer to 298 K.",
            ),
            CliError::Engine(e) if e.is_invalid_input() => Some(
                "Check that the sequence uses the 20 standard amino acids, the class is 'a', 'b' or 'ab', and the temperature is positive.",
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefur::core::thermo::InputError;
    use prefur::core::thermo::barrier::BarrierError;

    #[test]
    fn invalid_input_and_degenerate_model_get_distinct_messages_and_hints() {
        let invalid = CliError::from(EngineError::from(InputError::ResidueCount(0)));
        let degenerate = CliError::from(EngineError::from(BarrierError::NoInteriorMaximum));

        assert_ne!(invalid.to_string(), degenerate.to_string());
        assert!(invalid.to_string().starts_with("Invalid input"));
        assert!(degenerate.to_string().starts_with("Model does not apply"));

        assert!(invalid.hint().is_some());
        assert!(degenerate.hint().is_some());
        assert_ne!(invalid.hint(), degenerate.hint());
    }

    #[test]
    fn non_engine_errors_have_no_hint() {
        assert!(CliError::Config("bad".into()).hint().is_none());
    }
}
