use chrono::NaiveDate;

use crate::state::dates;
use crate::state::highlight::{self, HighlightSegment};
use crate::state::patient::Patient;
use crate::state::projection::{self, Projection, SourceError, SourceState};
use crate::state::query::{self, PatientFilters, QueryParams, QueryRequest, QueryTracker, RequestId};
use crate::state::selection::Selection;
use crate::state::sort_state::{self, HeaderAction, SortDirection, SortKey, SortState};

/// A modal the table wants rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveModal<'a> {
    Edit(&'a Patient),
    Delete(&'a Patient),
}

/// Display-ready cells for one patient row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientRow {
    pub patient: Patient,
    pub name: Vec<HighlightSegment>,
    pub indication: String,
    pub age: Option<u32>,
    pub created: Option<String>,
}

/// Interaction state of the patients table.
///
/// Sort changes and filter changes only alter the derived [`QueryParams`];
/// the caller polls [`TableController::next_query`], runs the request against
/// its data source, and hands the outcome back through
/// [`TableController::receive`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableController {
    filters: PatientFilters,
    sort: SortState,
    edit: Selection<Patient>,
    delete: Selection<Patient>,
    tracker: QueryTracker,
    source: SourceState,
}

impl TableController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(filters: PatientFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &PatientFilters {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn source(&self) -> &SourceState {
        &self.source
    }

    pub fn set_filters(&mut self, filters: PatientFilters) {
        tracing::debug!(?filters, "filters changed");
        self.filters = filters;
    }

    pub fn activate_sort(&mut self, key: SortKey, direction: SortDirection) {
        tracing::debug!(?key, ?direction, "sort activated");
        self.sort.activate(key, direction);
    }

    pub fn reset_sort(&mut self) {
        tracing::debug!("sort reset");
        self.sort.reset();
    }

    pub fn apply_header_action(&mut self, action: HeaderAction) {
        match action {
            HeaderAction::Activate(key, direction) => self.activate_sort(key, direction),
            HeaderAction::Reset => self.reset_sort(),
        }
    }

    pub fn click_header(&mut self, column: SortKey) {
        let action = sort_state::next_header_action(column, &self.sort);
        self.apply_header_action(action);
    }

    pub fn edit_target(&self) -> Option<&Patient> {
        self.edit.value()
    }

    pub fn delete_target(&self) -> Option<&Patient> {
        self.delete.value()
    }

    pub fn request_edit(&mut self, patient: Patient) {
        tracing::debug!(id = %patient.id, "edit requested");
        self.edit.set_value(patient);
    }

    pub fn request_delete(&mut self, patient: Patient) {
        tracing::debug!(id = %patient.id, "delete requested");
        self.delete.set_value(patient);
    }

    /// Clears the edit target. Success and cancel look the same here; either
    /// way the current query is refreshed on the next poll.
    pub fn close_edit(&mut self) {
        self.edit.reset();
        self.tracker.invalidate();
    }

    pub fn close_delete(&mut self) {
        self.delete.reset();
        self.tracker.invalidate();
    }

    /// Edit first, then delete. The two slots are independent, so both may be open.
    pub fn active_modals(&self) -> Vec<ActiveModal<'_>> {
        let mut modals = Vec::with_capacity(2);
        if let Some(patient) = self.edit.value() {
            modals.push(ActiveModal::Edit(patient));
        }
        if let Some(patient) = self.delete.value() {
            modals.push(ActiveModal::Delete(patient));
        }
        modals
    }

    /// Re-runs the current query on the next poll, e.g. after the source's data changed.
    pub fn request_refresh(&mut self) {
        self.tracker.invalidate();
    }

    pub fn query_params(&self) -> QueryParams {
        query::derive_query_params(&self.filters, self.sort.key(), self.sort.direction())
    }

    /// Returns a request when the derived parameters differ from the last
    /// issued ones, or when a modal close asked for a refresh.
    ///
    /// New parameters drop the current rows so the table shows loading; a
    /// refresh of the same parameters keeps them until the response arrives.
    pub fn next_query(&mut self) -> Option<QueryRequest> {
        let params = self.query_params();
        let changed = self.tracker.last_issued() != Some(&params);
        let request = self.tracker.issue(params)?;
        if changed {
            self.source = SourceState::Pending;
        }
        tracing::debug!(request = request.id.get(), changed, "query issued");
        Some(request)
    }

    /// Applies a data source response. Responses to superseded requests are
    /// discarded and `false` is returned.
    pub fn receive(&mut self, id: RequestId, result: Result<Vec<Patient>, SourceError>) -> bool {
        if !self.tracker.is_current(id) {
            tracing::warn!(request = id.get(), "discarding stale patient response");
            return false;
        }

        if let Err(err) = &result {
            tracing::warn!(request = id.get(), %err, "patient query failed");
        }
        self.source = SourceState::from_result(result);
        true
    }

    /// Reports a failure that happened before any rows arrived, such as the
    /// backing file not opening. Rows already on screen are kept; returns
    /// whether the failure was applied.
    pub fn fail(&mut self, err: SourceError) -> bool {
        if !matches!(self.source, SourceState::Pending) {
            return false;
        }

        tracing::warn!(%err, "patient source failed before loading");
        self.source = SourceState::Failed(err);
        true
    }

    pub fn projection(&self) -> Projection<'_> {
        projection::project(&self.source)
    }

    pub fn row_view(&self, patient: &Patient, today: NaiveDate) -> PatientRow {
        PatientRow {
            patient: patient.clone(),
            name: highlight::highlight(&patient.full_name(), self.filters.name_query()),
            indication: patient.indication.clone(),
            age: dates::date_string_to_age(&patient.birth_date, today),
            created: dates::date_string_to_human(&patient.creation_date),
        }
    }

    pub fn rows(&self, today: NaiveDate) -> Vec<PatientRow> {
        self.projection()
            .rows()
            .iter()
            .map(|patient| self.row_view(patient, today))
            .collect()
    }
}
