use crate::domain::model::Mva;
use crate::utils::error::{AppError, Result};
use std::path::Path;

/// Load MVA identifiers from a delimited input file, one per record, preserving
/// file order. The identifier is the first field of each record; empty records
/// are dropped. A missing file is the fatal startup condition and must be
/// reported before any browser session is created.
pub fn load_mvas<P: AsRef<Path>>(path: P) -> Result<Vec<Mva>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AppError::InputFileMissing {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut mvas = Vec::new();
    for record in reader.records() {
        let record = record?;
        match record.get(0) {
            Some(field) if !field.is_empty() => mvas.push(Mva::new(field)),
            _ => continue,
        }
    }

    tracing::debug!("loaded {} MVAs from {}", mvas.len(), path.display());
    Ok(mvas)
}
