use super::profile;
use crate::core::models::class::StructuralClass;
use crate::core::thermo::InputError;
use crate::core::thermo::barrier::{self, BarrierPair};
use crate::core::thermo::kinetics::rate_constant;
use crate::engine::config::{ChainInput, PredictionConfig, PredictionConfigBuilder};
use crate::engine::error::EngineError;
use tracing::{debug, info, instrument};

/// Outcome of a rate prediction. Rates are in s⁻¹ and kept at full precision.
#[derive(Debug, Clone, PartialEq)]
pub struct RatePrediction {
    pub residue_count: usize,
    pub class: StructuralClass,
    pub temperature: f64,
    pub folding_rate: f64,
    pub unfolding_rate: f64,
    pub barriers: BarrierPair,
}

impl RatePrediction {
    /// Folding free energy `G(folded) - G(unfolded)` in kJ/mol.
    pub fn stability(&self) -> f64 {
        self.barriers.stability()
    }
}

#[instrument(skip_all, name = "prediction_workflow", fields(residues = config.residue_count, class = %config.class))]
pub fn run(config: &PredictionConfig) -> Result<RatePrediction, EngineError> {
    info!(
        temperature = config.temperature,
        "Predicting folding and unfolding rates."
    );

    let profile = profile::run(config)?;
    let barriers = barrier::extract(&profile)?;
    debug!(
        unfolded_basin = barriers.unfolded_basin.coordinate,
        transition_state = barriers.transition_state.coordinate,
        folded_basin = barriers.folded_basin.coordinate,
        folding_barrier = barriers.folding,
        unfolding_barrier = barriers.unfolding,
        "Barriers extracted."
    );

    let frequency = &config.parameters.attempt_frequency;
    let folding_rate = rate_constant(
        barriers.folding,
        config.residue_count,
        config.temperature,
        frequency,
    )?;
    let unfolding_rate = rate_constant(
        barriers.unfolding,
        config.residue_count,
        config.temperature,
        frequency,
    )?;

    info!(folding_rate, unfolding_rate, "Prediction complete.");
    Ok(RatePrediction {
        residue_count: config.residue_count,
        class: config.class,
        temperature: config.temperature,
        folding_rate,
        unfolding_rate,
        barriers,
    })
}

/// Predicts `(folding_rate, unfolding_rate)` in s⁻¹ with the built-in model constants.
///
/// `class_label` accepts the same spellings as [`StructuralClass`]'s `FromStr`; any other
/// label is reported as invalid input.
pub fn predict_rates(
    chain: ChainInput,
    class_label: &str,
    temperature: f64,
) -> Result<(f64, f64), EngineError> {
    let class: StructuralClass = class_label.parse().map_err(InputError::from)?;
    let config = PredictionConfigBuilder::new()
        .chain(chain)
        .class(class)
        .temperature(temperature)
        .build()?;
    let prediction = run(&config)?;
    Ok((prediction.folding_rate, prediction.unfolding_rate))
}
