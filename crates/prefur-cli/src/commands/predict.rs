use crate::cli::PredictArgs;
use crate::config::{self, ReportFlags};
use crate::error::Result;
use crate::report;
use prefur::workflows::predict;
use tracing::info;

pub fn run(args: PredictArgs) -> Result<()> {
    let flags = ReportFlags {
        precision: args.precision,
        show_barriers: args.show_barriers,
    };
    let app_config = config::build_config(&args.model, flags)?;
    info!(
        residues = app_config.prediction.residue_count,
        class = %app_config.prediction.class,
        temperature = app_config.prediction.temperature,
        "Configuration resolved."
    );

    let prediction = predict::run(&app_config.prediction)?;
    print!("{}", report::render_prediction(&prediction, &app_config.report));
    Ok(())
}
