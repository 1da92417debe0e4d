use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::io::patient_io::{self, PatientIoError};
use crate::state::dates;
use crate::state::patient::{Patient, PatientId};
use crate::state::projection::SourceError;
use crate::state::query::QueryParams;
use crate::state::sort_state::{SortDirection, SortKey};

/// Turns query parameters into an ordered list of patients.
pub trait PatientSource {
    fn fetch(&self, params: &QueryParams) -> Result<Vec<Patient>, SourceError>;
}

/// In-memory patient list, optionally mirrored to a JSON file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatientStore {
    patients: Vec<Patient>,
    path: Option<PathBuf>,
}

impl PatientStore {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self {
            patients,
            path: None,
        }
    }

    pub fn open(path: &Path) -> Result<Self, PatientIoError> {
        let patients = patient_io::load_patients(path)?;
        Ok(Self {
            patients,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|patient| patient.id == id)
    }

    /// Replaces the stored patient with the same id. Returns `false` when no
    /// such patient exists or nothing changed.
    pub fn update(&mut self, patient: Patient) -> Result<bool, PatientIoError> {
        let Some(slot) = self.patients.iter_mut().find(|p| p.id == patient.id) else {
            return Ok(false);
        };
        if *slot == patient {
            return Ok(false);
        }

        *slot = patient;
        self.persist()?;
        Ok(true)
    }

    pub fn delete(&mut self, id: PatientId) -> Result<bool, PatientIoError> {
        let before = self.patients.len();
        self.patients.retain(|patient| patient.id != id);
        if self.patients.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<(), PatientIoError> {
        match self.path.as_deref() {
            Some(path) => patient_io::save_patients(path, &self.patients),
            None => Ok(()),
        }
    }
}

impl PatientSource for PatientStore {
    fn fetch(&self, params: &QueryParams) -> Result<Vec<Patient>, SourceError> {
        let needle = params
            .filters
            .name_query()
            .map(str::to_lowercase);

        let mut rows: Vec<Patient> = self
            .patients
            .iter()
            .filter(|patient| match needle.as_deref() {
                Some(needle) => patient.full_name().to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            let ordering = compare_by_key(a, b, params.sort_key);
            let ordering = match params.sort_direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            ordering.then_with(|| a.id.cmp(&b.id))
        });
        Ok(rows)
    }
}

fn compare_by_key(a: &Patient, b: &Patient, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_text(&a.last_name, &b.last_name)
            .then_with(|| compare_text(&a.first_name, &b.first_name)),
        SortKey::Indication => compare_text(&a.indication, &b.indication),
        SortKey::BirthDate => compare_dates(&a.birth_date, &b.birth_date),
        SortKey::CreationDate => compare_dates(&a.creation_date, &b.creation_date),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Unparseable dates sort before valid ones, then fall back to text order.
fn compare_dates(a: &str, b: &str) -> Ordering {
    match (dates::parse_date(a), dates::parse_date(b)) {
        (Some(left), Some(right)) => left.cmp(&right).then_with(|| a.cmp(b)),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
