use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Indication,
    BirthDate,
    #[default]
    CreationDate,
}

impl SortKey {
    pub fn all() -> &'static [Self] {
        &[
            Self::Name,
            Self::Indication,
            Self::BirthDate,
            Self::CreationDate,
        ]
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Indication => "indication",
            Self::BirthDate => "birth_date",
            Self::CreationDate => "creation_date",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Name => "column.name",
            Self::Indication => "column.indication",
            Self::BirthDate => "column.age",
            Self::CreationDate => "column.creation_date",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Active sort column and direction. Both fields always hold a valid pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    key: SortKey,
    direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Direction shown on `column`'s header, `None` when another column sorts.
    pub fn direction_for(&self, column: SortKey) -> Option<SortDirection> {
        (self.key == column).then_some(self.direction)
    }

    pub fn activate(&mut self, key: SortKey, direction: SortDirection) {
        self.key = key;
        self.direction = direction;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What a sortable header asks of the table after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    Activate(SortKey, SortDirection),
    Reset,
}

/// Tri-state header cycle: ascending, then descending, then back to the default sort.
pub fn next_header_action(column: SortKey, current: &SortState) -> HeaderAction {
    match current.direction_for(column) {
        None => HeaderAction::Activate(column, SortDirection::Asc),
        Some(SortDirection::Asc) => HeaderAction::Activate(column, SortDirection::Desc),
        // Resetting from the default pair would leave the header stuck.
        Some(SortDirection::Desc) if current.is_default() => {
            HeaderAction::Activate(column, SortDirection::Asc)
        }
        Some(SortDirection::Desc) => HeaderAction::Reset,
    }
}
