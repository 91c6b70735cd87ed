use crate::config::ReportConfig;
use prefur::workflows::predict::RatePrediction;

/// Renders a prediction the way it is printed to the terminal.
pub fn render_prediction(prediction: &RatePrediction, report: &ReportConfig) -> String {
    let p = report.precision;
    let mut out = format!(
        "Folding Rate: {:.p$} s^-1\nUnfolding Rate: {:.p$} s^-1\n",
        prediction.folding_rate, prediction.unfolding_rate
    );

    if report.show_barriers {
        let b = &prediction.barriers;
        out.push_str(&format!("Folding Barrier: {:.p$} kJ/mol\n", b.folding));
        out.push_str(&format!("Unfolding Barrier: {:.p$} kJ/mol\n", b.unfolding));
        out.push_str(&format!("Stability: {:.p$} kJ/mol\n", prediction.stability()));
        out.push_str(&format!(
            "Transition State: x = {:.3} (basins at x = {:.3} and x = {:.3})\n",
            b.transition_state.coordinate, b.unfolded_basin.coordinate, b.folded_basin.coordinate
        ));
    }
    out
}
