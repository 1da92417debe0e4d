use crate::state::patient::Patient;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("patient source is unavailable: {0}")]
    Unavailable(String),
    #[error("patient query failed: {0}")]
    Query(String),
}

/// Latest value produced by the data source for the current query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SourceState {
    #[default]
    Pending,
    Loaded(Vec<Patient>),
    Failed(SourceError),
}

impl SourceState {
    pub fn from_result(result: Result<Vec<Patient>, SourceError>) -> Self {
        match result {
            Ok(patients) => Self::Loaded(patients),
            Err(err) => Self::Failed(err),
        }
    }
}

/// What the table body should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection<'a> {
    Loading,
    Empty,
    /// Rows in exactly the order the source returned them.
    Populated(&'a [Patient]),
    Failed(&'a SourceError),
}

impl<'a> Projection<'a> {
    pub fn rows(&self) -> &'a [Patient] {
        match *self {
            Self::Populated(rows) => rows,
            _ => &[],
        }
    }

    pub fn shows_table(&self) -> bool {
        matches!(self, Self::Loading | Self::Populated(_))
    }
}

pub fn project(state: &SourceState) -> Projection<'_> {
    match state {
        SourceState::Pending => Projection::Loading,
        SourceState::Loaded(patients) if patients.is_empty() => Projection::Empty,
        SourceState::Loaded(patients) => Projection::Populated(patients),
        SourceState::Failed(err) => Projection::Failed(err),
    }
}
