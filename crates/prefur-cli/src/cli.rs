use clap::{Args, Parser, Subcommand};
use prefur::core::models::class::StructuralClass;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "David De Sancho, Victor Muñoz, Mohammad Abdulqader",
    version,
    about = "PREFUR CLI - PREdiction of protein Folding and Unfolding Rates from chain length and structural class.",
    after_help = "Please cite: De Sancho, D. and Muñoz, V. Integrated prediction of protein folding and unfolding rates from only size and structural class, Phys. Chem. Chem. Phys. 13, 17030-17043 (2011).",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict folding and unfolding rate constants.
    Predict(PredictArgs),
    /// Write the free-energy profile the prediction is based on as CSV.
    Profile(ProfileArgs),
    /// List the structural classes and their enthalpy coefficients.
    Classes(ClassesArgs),
}

/// Inputs shared by every command that runs the model.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Structural class: 'a' (alpha), 'b' (beta) or 'ab' (mixed alpha/beta).
    #[arg(short = 'c', long = "class", required = true, value_name = "CLASS")]
    pub class: StructuralClass,

    #[command(flatten)]
    pub chain: ChainArgs,

    /// Temperature in kelvin. Defaults to 298 K.
    #[arg(short, long, value_name = "KELVIN")]
    pub temperature: Option<f64>,

    /// Path to a configuration file in TOML format.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to a model parameter file overriding the built-in constants.
    #[arg(short, long, value_name = "PATH")]
    pub parameters: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S temperature=310
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// The chain is given either as a sequence or as a bare residue count.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ChainArgs {
    /// Amino-acid sequence in one-letter codes (case-insensitive).
    #[arg(short, long, value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Number of residues, when the sequence itself is not at hand.
    #[arg(short = 'n', long, value_name = "RESIDUES")]
    pub length: Option<usize>,
}

/// Arguments for the `predict` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Number of decimal places used when printing rates.
    #[arg(long, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Also print barrier heights, stability and the transition-state position.
    #[arg(long)]
    pub show_barriers: bool,
}

/// Arguments for the `profile` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Output CSV path. The profile is written to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `classes` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ClassesArgs {
    /// Path to a model parameter file whose class coefficients should be listed.
    #[arg(short, long, value_name = "PATH")]
    pub parameters: Option<PathBuf>,
}
