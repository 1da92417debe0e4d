use std::fs;
use std::io;
use std::path::Path;

use crate::state::patient::Patient;

#[derive(Debug, thiserror::Error)]
pub enum PatientIoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("patient file parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate patient id {0}")]
    DuplicateId(u64),
}

/// Reads a JSON array of patient objects.
pub fn load_patients(path: &Path) -> Result<Vec<Patient>, PatientIoError> {
    let content = fs::read_to_string(path)?;
    let patients: Vec<Patient> = serde_json::from_str(&content)?;

    let mut seen = std::collections::BTreeSet::new();
    for patient in &patients {
        if !seen.insert(patient.id) {
            return Err(PatientIoError::DuplicateId(patient.id.0));
        }
    }

    tracing::info!(path = %path.display(), count = patients.len(), "loaded patients");
    Ok(patients)
}

pub fn save_patients(path: &Path, patients: &[Patient]) -> Result<(), PatientIoError> {
    let json = serde_json::to_string_pretty(patients)?;
    super::atomic_write_string(path, &json)?;
    tracing::info!(path = %path.display(), count = patients.len(), "saved patients");
    Ok(())
}
