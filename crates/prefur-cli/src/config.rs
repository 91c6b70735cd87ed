mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{ReportFlags, build_config};
pub use models::{AppConfig, ReportConfig};
