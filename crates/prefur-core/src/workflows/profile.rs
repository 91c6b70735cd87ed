use crate::core::models::profile::FreeEnergyProfile;
use crate::core::thermo::surface::FreeEnergySurface;
use crate::engine::config::PredictionConfig;
use crate::engine::error::EngineError;
use tracing::{debug, instrument};

#[instrument(skip_all, name = "profile_workflow", fields(residues = config.residue_count, class = %config.class))]
pub fn run(config: &PredictionConfig) -> Result<FreeEnergyProfile, EngineError> {
    let coefficients = config.enthalpy();
    debug!(
        local = coefficients.local,
        nonlocal = coefficients.nonlocal,
        temperature = config.temperature,
        "Building free-energy surface."
    );

    let surface = FreeEnergySurface::new(config.residue_count, coefficients, &config.parameters)?;
    let profile = surface.profile(config.temperature)?;

    debug!(samples = profile.len(), "Free-energy profile sampled.");
    Ok(profile)
}
