use prefur::engine::config::PredictionConfig;

/// How a prediction is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub precision: usize,
    pub show_barriers: bool,
}

pub struct AppConfig {
    pub prediction: PredictionConfig,
    pub report: ReportConfig,
}
