mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod report;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("   Hint: {}", hint);
        }
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("PREFUR CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Predict(args) => {
            info!("Dispatching to 'predict' command.");
            commands::predict::run(args)
        }
        Commands::Profile(args) => {
            info!("Dispatching to 'profile' command.");
            commands::profile::run(args)
        }
        Commands::Classes(args) => {
            info!("Dispatching to 'classes' command.");
            commands::classes::run(args)
        }
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn predict_requires_exactly_one_chain_source() {
        let neither = Cli::try_parse_from(["prefur", "predict", "-c", "a"]);
        assert!(neither.is_err());

        let both = Cli::try_parse_from(["prefur", "predict", "-c", "a", "-s", "GSW", "-n", "3"]);
        assert!(both.is_err());

        let length = Cli::try_parse_from(["prefur", "predict", "-c", "ab", "-n", "120"]).unwrap();
        match length.command {
            Commands::Predict(args) => {
                assert_eq!(args.model.chain.length, Some(120));
                assert_eq!(
                    args.model.class,
                    prefur::core::models::class::StructuralClass::AlphaBeta
                );
            }
            other => panic!("Expected 'predict' subcommand, got {:?}", other),
        }
    }

    #[test]
    fn unknown_class_is_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["prefur", "predict", "-c", "c", "-n", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["prefur", "classes", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }
}
