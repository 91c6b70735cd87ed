use super::error::EngineError;
use crate::core::models::class::{EnthalpyCoefficients, StructuralClass};
use crate::core::models::sequence::Sequence;
use crate::core::thermo::input::{InputError, check_residue_count, check_temperature};
use crate::core::thermo::params::ModelParameters;
use crate::core::thermo::DEFAULT_TEMPERATURE;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// The chain to predict for: either an amino-acid sequence or a bare residue count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainInput {
    Sequence(String),
    Length(usize),
}

impl ChainInput {
    pub fn residue_count(&self) -> Result<usize, InputError> {
        let count = match self {
            ChainInput::Sequence(raw) => Sequence::parse(raw)?.residue_count(),
            ChainInput::Length(n) => *n,
        };
        check_residue_count(count)
    }
}

impl From<usize> for ChainInput {
    fn from(n: usize) -> Self {
        ChainInput::Length(n)
    }
}

impl From<&str> for ChainInput {
    fn from(s: &str) -> Self {
        ChainInput::Sequence(s.to_string())
    }
}

impl From<String> for ChainInput {
    fn from(s: String) -> Self {
        ChainInput::Sequence(s)
    }
}

impl From<&Sequence> for ChainInput {
    fn from(seq: &Sequence) -> Self {
        ChainInput::Sequence(seq.as_str().to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionConfig {
    pub residue_count: usize,
    pub class: StructuralClass,
    pub temperature: f64,
    pub parameters: ModelParameters,
}

impl PredictionConfig {
    pub fn enthalpy(&self) -> EnthalpyCoefficients {
        self.parameters.enthalpy_for(self.class)
    }
}

#[derive(Default)]
pub struct PredictionConfigBuilder {
    chain: Option<ChainInput>,
    class: Option<StructuralClass>,
    temperature: Option<f64>,
    parameters: Option<ModelParameters>,
}

impl PredictionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain(mut self, chain: impl Into<ChainInput>) -> Self {
        self.chain = Some(chain.into());
        self
    }
    pub fn residue_count(mut self, n: usize) -> Self {
        self.chain = Some(ChainInput::Length(n));
        self
    }
    pub fn class(mut self, class: StructuralClass) -> Self {
        self.class = Some(class);
        self
    }
    pub fn temperature(mut self, kelvin: f64) -> Self {
        self.temperature = Some(kelvin);
        self
    }
    pub fn parameters(mut self, parameters: ModelParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Resolves and validates the configuration. The temperature defaults to
    /// [`DEFAULT_TEMPERATURE`] and the model constants to [`ModelParameters::default`].
    pub fn build(self) -> Result<PredictionConfig, EngineError> {
        let residue_count = self
            .chain
            .ok_or(ConfigError::MissingParameter("chain"))?
            .residue_count()?;
        let class = self.class.ok_or(ConfigError::MissingParameter("class"))?;
        let temperature = check_temperature(self.temperature.unwrap_or(DEFAULT_TEMPERATURE))?;
        let parameters = self.parameters.unwrap_or_default();
        parameters.validate()?;

        Ok(PredictionConfig {
            residue_count,
            class,
            temperature,
            parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sequence::SequenceError;

    #[test]
    fn build_uses_defaults_for_temperature_and_parameters() {
        let config = PredictionConfigBuilder::new()
            .residue_count(80)
            .class(StructuralClass::Beta)
            .build()
            .unwrap();
        assert_eq!(config.residue_count, 80);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.parameters, ModelParameters::default());
        assert_eq!(config.enthalpy(), StructuralClass::Beta.default_enthalpy());
    }

    #[test]
    fn build_derives_residue_count_from_sequence() {
        let config = PredictionConfigBuilder::new()
            .chain("mkta yiakqr".replace(' ', ""))
            .class(StructuralClass::Alpha)
            .build()
            .unwrap();
        assert_eq!(config.residue_count, 10);
    }

    #[test]
    fn build_reports_missing_chain_and_class() {
        let missing_chain = PredictionConfigBuilder::new()
            .class(StructuralClass::Alpha)
            .build();
        assert_eq!(
            missing_chain,
            Err(EngineError::Config(ConfigError::MissingParameter("chain")))
        );

        let missing_class = PredictionConfigBuilder::new().residue_count(10).build();
        assert_eq!(
            missing_class,
            Err(EngineError::Config(ConfigError::MissingParameter("class")))
        );
    }

    #[test]
    fn build_rejects_invalid_sequence_as_invalid_input() {
        let result = PredictionConfigBuilder::new()
            .chain("ACDXZ")
            .class(StructuralClass::Alpha)
            .build();
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput(InputError::Sequence(
                SequenceError::InvalidResidue { residue: 'X', position: 4 }
            )))
        ));
    }

    #[test]
    fn build_rejects_zero_length_and_empty_sequence() {
        let zero = PredictionConfigBuilder::new()
            .residue_count(0)
            .class(StructuralClass::Alpha)
            .build();
        assert_eq!(
            zero,
            Err(EngineError::InvalidInput(InputError::ResidueCount(0)))
        );

        let empty = PredictionConfigBuilder::new()
            .chain("")
            .class(StructuralClass::Alpha)
            .build();
        assert_eq!(
            empty,
            Err(EngineError::InvalidInput(InputError::Sequence(
                SequenceError::Empty
            )))
        );
    }

    #[test]
    fn build_rejects_non_positive_temperature() {
        let result = PredictionConfigBuilder::new()
            .residue_count(10)
            .class(StructuralClass::Alpha)
            .temperature(0.0)
            .build();
        assert_eq!(
            result,
            Err(EngineError::InvalidInput(InputError::Temperature(0.0)))
        );
    }

    #[test]
    fn build_applies_class_override_from_parameters() {
        let mut parameters = ModelParameters::default();
        parameters
            .enthalpy
            .insert(StructuralClass::Alpha, EnthalpyCoefficients::new(2.0, 5.0));
        let config = PredictionConfigBuilder::new()
            .residue_count(10)
            .class(StructuralClass::Alpha)
            .parameters(parameters)
            .build()
            .unwrap();
        assert_eq!(config.enthalpy(), EnthalpyCoefficients::new(2.0, 5.0));
    }

    #[test]
    fn chain_input_conversions_pick_the_right_variant() {
        assert_eq!(ChainInput::from(42usize), ChainInput::Length(42));
        assert_eq!(
            ChainInput::from("GSW"),
            ChainInput::Sequence("GSW".to_string())
        );
        let seq = Sequence::parse("gsw").unwrap();
        assert_eq!(ChainInput::from(&seq).residue_count(), Ok(3));
    }
}
