use crate::cli::ProfileArgs;
use crate::config::{self, ReportFlags};
use crate::error::{CliError, Result};
use prefur::core::io::profile::{write_csv, write_csv_to_path};
use prefur::workflows::profile;
use tracing::info;

pub fn run(args: ProfileArgs) -> Result<()> {
    let app_config = config::build_config(&args.model, ReportFlags::default())?;
    let profile = profile::run(&app_config.prediction)?;

    match &args.output {
        Some(path) => {
            write_csv_to_path(&profile, path)?;
            info!("Wrote {} profile points to {:?}", profile.len(), path);
        }
        None => {
            let stdout = std::io::stdout();
            write_csv(&profile, stdout.lock())
                .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to write profile: {}", e)))?;
        }
    }
    Ok(())
}
