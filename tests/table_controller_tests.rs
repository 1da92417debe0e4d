use chrono::NaiveDate;

use patient_table::io::patient_io;
use patient_table::io::patient_store::{PatientSource, PatientStore};
use patient_table::state::patient::{Patient, PatientId};
use patient_table::state::projection::{Projection, SourceError, SourceState};
use patient_table::state::query::PatientFilters;
use patient_table::state::sort_state::{HeaderAction, SortDirection, SortKey};
use patient_table::state::table_controller::{ActiveModal, TableController};

fn fixture_store() -> PatientStore {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join("tests").join("data").join("patients.json");
    PatientStore::new(patient_io::load_patients(&path).unwrap())
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// Runs one poll of the query loop against `store`.
fn poll(controller: &mut TableController, store: &PatientStore) -> bool {
    match controller.next_query() {
        Some(request) => {
            let result = store.fetch(&request.params);
            controller.receive(request.id, result)
        }
        None => false,
    }
}

fn patient(id: u64) -> Patient {
    Patient {
        id: PatientId(id),
        first_name: "Test".to_string(),
        last_name: format!("Patient{id}"),
        indication: "oncology".to_string(),
        birth_date: "1980-01-01".to_string(),
        creation_date: "2024-01-01".to_string(),
    }
}

#[test]
fn test_new_controller_is_loading_with_default_sort() {
    let controller = TableController::new();
    assert_eq!(controller.projection(), Projection::Loading);
    assert_eq!(controller.sort().key(), SortKey::CreationDate);
    assert_eq!(controller.sort().direction(), SortDirection::Desc);
    assert!(controller.active_modals().is_empty());
}

#[test]
fn test_filtered_name_sort_scenario() {
    let store = fixture_store();
    let mut controller = TableController::with_filters(PatientFilters::by_name("Ana"));
    controller.activate_sort(SortKey::Name, SortDirection::Asc);
    assert!(poll(&mut controller, &store));

    let rows = controller.rows(today());
    let ids: Vec<u64> = rows.iter().map(|row| row.patient.id.0).collect();
    assert_eq!(ids, vec![1, 2]);

    for row in &rows {
        let matched: Vec<&str> = row
            .name
            .iter()
            .filter(|segment| segment.matched)
            .map(|segment| segment.text.as_str())
            .collect();
        assert_eq!(matched, vec!["Ana"]);
    }
}

#[test]
fn test_empty_result_shows_placeholder() {
    let store = PatientStore::new(Vec::new());
    let mut controller = TableController::new();
    assert!(poll(&mut controller, &store));

    assert_eq!(controller.projection(), Projection::Empty);
    assert!(!controller.projection().shows_table());
    assert!(controller.rows(today()).is_empty());
}

#[test]
fn test_populated_renders_one_row_per_record_in_source_order() {
    let mut controller = TableController::new();
    let request = controller.next_query().unwrap();
    assert!(controller.receive(request.id, Ok(vec![patient(5), patient(3), patient(8)])));

    let ids: Vec<u64> = controller
        .rows(today())
        .iter()
        .map(|row| row.patient.id.0)
        .collect();
    assert_eq!(ids, vec![5, 3, 8]);
}

#[test]
fn test_edit_request_and_close_scenario() {
    let store = fixture_store();
    let mut controller = TableController::new();
    poll(&mut controller, &store);

    let row = store.get(PatientId(7)).cloned().unwrap();
    controller.request_edit(row.clone());
    assert_eq!(controller.edit_target().map(|p| p.id), Some(PatientId(7)));
    assert_eq!(controller.active_modals(), vec![ActiveModal::Edit(&row)]);

    controller.close_edit();
    assert_eq!(controller.edit_target(), None);
    assert!(controller.active_modals().is_empty());
}

#[test]
fn test_delete_selection_never_touches_edit_selection() {
    let mut controller = TableController::new();
    controller.request_edit(patient(1));
    controller.request_delete(patient(2));
    controller.close_delete();
    controller.request_delete(patient(3));

    assert_eq!(controller.edit_target().map(|p| p.id), Some(PatientId(1)));
    assert_eq!(controller.delete_target().map(|p| p.id), Some(PatientId(3)));
}

#[test]
fn test_edit_and_delete_modals_can_be_open_together() {
    let mut controller = TableController::new();
    let edited = patient(1);
    let deleted = patient(2);
    controller.request_edit(edited.clone());
    controller.request_delete(deleted.clone());

    assert_eq!(
        controller.active_modals(),
        vec![ActiveModal::Edit(&edited), ActiveModal::Delete(&deleted)]
    );
}

#[test]
fn test_inactive_header_click_requeries_with_new_params() {
    let store = fixture_store();
    let mut controller = TableController::new();
    assert!(poll(&mut controller, &store));
    assert!(controller.next_query().is_none());

    controller.click_header(SortKey::Indication);
    assert_eq!(controller.sort().key(), SortKey::Indication);
    assert_eq!(controller.sort().direction(), SortDirection::Asc);

    let request = controller.next_query().expect("sort change issues a query");
    assert_eq!(request.params.sort_key, SortKey::Indication);
    assert_eq!(request.params.sort_direction, SortDirection::Asc);
    assert_eq!(controller.projection(), Projection::Loading);

    let result = store.fetch(&request.params);
    assert!(controller.receive(request.id, result));
    let indications: Vec<String> = controller
        .rows(today())
        .into_iter()
        .map(|row| row.indication)
        .collect();
    assert_eq!(
        indications,
        vec!["cardiology", "cardiology", "neurology", "oncology"]
    );
}

#[test]
fn test_header_reset_returns_to_default_sort() {
    let mut controller = TableController::new();
    controller.apply_header_action(HeaderAction::Activate(SortKey::Name, SortDirection::Desc));
    controller.apply_header_action(HeaderAction::Reset);

    assert!(controller.sort().is_default());
}

#[test]
fn test_stale_response_is_discarded() {
    let mut controller = TableController::new();
    let first = controller.next_query().unwrap();

    controller.set_filters(PatientFilters::by_name("Ana"));
    let second = controller.next_query().unwrap();

    assert!(!controller.receive(first.id, Ok(vec![patient(1), patient(2)])));
    assert_eq!(controller.projection(), Projection::Loading);

    assert!(controller.receive(second.id, Ok(vec![patient(1)])));
    assert_eq!(controller.projection().rows().len(), 1);
}

#[test]
fn test_closing_modal_refreshes_without_dropping_rows() {
    let mut store = fixture_store();
    let mut controller = TableController::new();
    poll(&mut controller, &store);
    assert_eq!(controller.projection().rows().len(), 4);

    controller.request_delete(store.get(PatientId(2)).cloned().unwrap());
    assert!(store.delete(PatientId(2)).unwrap());
    controller.close_delete();

    let request = controller.next_query().expect("close triggers a refresh");
    assert_eq!(controller.projection().rows().len(), 4);

    let result = store.fetch(&request.params);
    controller.receive(request.id, result);
    assert_eq!(controller.projection().rows().len(), 3);
}

#[test]
fn test_failed_query_surfaces_failure_projection() {
    let mut controller = TableController::new();
    let request = controller.next_query().unwrap();
    controller.receive(
        request.id,
        Err(SourceError::Query("timeout".to_string())),
    );

    assert!(matches!(controller.source(), SourceState::Failed(_)));
    assert!(matches!(controller.projection(), Projection::Failed(_)));
}

#[test]
fn test_row_view_formats_age_and_creation_date() {
    let controller = TableController::new();
    let store = fixture_store();
    let row = controller.row_view(store.get(PatientId(1)).unwrap(), today());

    assert_eq!(row.age, Some(39));
    assert_eq!(row.created.as_deref(), Some("Feb 1, 2023"));
    assert_eq!(row.indication, "oncology");
    assert_eq!(row.name.len(), 1);
    assert!(!row.name[0].matched);
}

#[test]
fn test_unopenable_store_fails_instead_of_loading_forever() {
    let mut controller = TableController::new();
    let missing = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("missing.json");
    let err = PatientStore::open(&missing).unwrap_err();

    assert!(controller.fail(SourceError::Unavailable(err.to_string())));
    assert_ne!(controller.projection(), Projection::Loading);
    assert!(matches!(controller.projection(), Projection::Failed(_)));

    let store = PatientStore::new(Vec::new());
    assert!(poll(&mut controller, &store));
    assert_eq!(controller.projection(), Projection::Empty);
}

#[test]
fn test_fail_after_rows_arrived_keeps_rows() {
    let store = fixture_store();
    let mut controller = TableController::new();
    poll(&mut controller, &store);

    assert!(!controller.fail(SourceError::Unavailable("gone".to_string())));
    assert_eq!(controller.projection().rows().len(), 4);
}

#[test]
fn test_burst_of_filter_changes_issues_one_query_for_final_value() {
    let mut controller = TableController::new();
    for typed in ["A", "An", "Ana"] {
        controller.set_filters(PatientFilters::by_name(typed));
    }

    let request = controller.next_query().expect("settled filter issues a query");
    assert_eq!(request.params.filters, PatientFilters::by_name("Ana"));
    assert!(controller.next_query().is_none());
    assert!(controller.next_query().is_none());
}
