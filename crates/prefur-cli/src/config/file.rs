use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileReportConfig {
    pub precision: Option<usize>,
    pub show_barriers: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub temperature: Option<f64>,
    pub parameters: Option<PathBuf>,
    pub report: Option<FileReportConfig>,
}

impl FileConfig {
    /// Reads a TOML config. A relative `parameters` path is resolved against the
    /// directory holding the config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: FileConfig =
            toml::from_str(&content).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;

        if let (Some(parameters), Some(base)) = (&config.parameters, path.parent()) {
            if parameters.is_relative() {
                config.parameters = Some(base.join(parameters));
            }
        }
        Ok(config)
    }
}
