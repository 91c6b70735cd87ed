use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, ReportConfig};
use crate::cli::{ChainArgs, ModelArgs};
use crate::error::{CliError, Result};
use prefur::core::thermo::params::ModelParameters;
use prefur::engine::config::{ChainInput, PredictionConfigBuilder};
use std::path::PathBuf;
use tracing::debug;

/// Explicit report flags from the command line. `None`/`false` defer to the config file.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportFlags {
    pub precision: Option<usize>,
    pub show_barriers: bool,
}

pub fn build_config(args: &ModelArgs, flags: ReportFlags) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let file_config = apply_set_values(file_config, &args.set_values)?;

    let temperature = args
        .temperature
        .or(file_config.temperature)
        .unwrap_or(defaults.temperature);

    let parameters = match args.parameters.as_ref().or(file_config.parameters.as_ref()) {
        Some(path) => {
            debug!("Loading model parameters from {:?}", path);
            ModelParameters::load(path)?
        }
        None => ModelParameters::default(),
    };

    let report_file = file_config.report.unwrap_or_default();
    let report = ReportConfig {
        precision: flags
            .precision
            .or(report_file.precision)
            .unwrap_or(defaults.precision),
        show_barriers: flags.show_barriers
            || report_file.show_barriers.unwrap_or(defaults.show_barriers),
    };

    let mut builder = PredictionConfigBuilder::new()
        .class(args.class)
        .temperature(temperature)
        .parameters(parameters);
    if let Some(chain) = chain_input(&args.chain) {
        builder = builder.chain(chain);
    }
    let prediction = builder.build()?;

    Ok(AppConfig { prediction, report })
}

fn chain_input(chain: &ChainArgs) -> Option<ChainInput> {
    match (&chain.sequence, chain.length) {
        (Some(sequence), _) => Some(ChainInput::Sequence(sequence.clone())),
        (None, Some(length)) => Some(ChainInput::Length(length)),
        (None, None) => None,
    }
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "temperature" => {
                config.temperature = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?);
            }
            "parameters" => {
                config.parameters = Some(PathBuf::from(value_str));
            }
            "report.precision" => {
                config.report.get_or_insert_with(Default::default).precision =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            "report.show-barriers" => {
                config
                    .report
                    .get_or_insert_with(Default::default)
                    .show_barriers = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
