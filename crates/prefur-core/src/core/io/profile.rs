use crate::core::models::profile::{FreeEnergyProfile, ProfilePoint};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Serialize)]
struct ProfileRecord {
    x: f64,
    #[serde(rename = "enthalpy_kj_mol")]
    enthalpy: f64,
    #[serde(rename = "minus_ts_kj_mol")]
    entropic_term: f64,
    #[serde(rename = "free_energy_kj_mol")]
    free_energy: f64,
}

impl From<&ProfilePoint> for ProfileRecord {
    fn from(p: &ProfilePoint) -> Self {
        Self {
            x: p.coordinate,
            enthalpy: p.enthalpy,
            entropic_term: p.entropic_term,
            free_energy: p.free_energy,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProfileExportError {
    #[error("CSV writing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// Writes one CSV row per profile sample, preceded by a header row.
pub fn write_csv<W: Write>(profile: &FreeEnergyProfile, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in profile.points() {
        csv_writer.serialize(ProfileRecord::from(point))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_to_path(profile: &FreeEnergyProfile, path: &Path) -> Result<(), ProfileExportError> {
    let to_error = |e: csv::Error| ProfileExportError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    };
    let file = std::fs::File::create(path).map_err(|e| to_error(e.into()))?;
    write_csv(profile, file).map_err(to_error)
}
