use patient_table::state::query::{self, PatientFilters, QueryTracker};
use patient_table::state::sort_state::{SortDirection, SortKey};

#[test]
fn test_derive_query_params_passes_inputs_through() {
    let filters = PatientFilters::by_name("Ana");
    let params = query::derive_query_params(&filters, SortKey::Name, SortDirection::Asc);

    assert_eq!(params.filters, filters);
    assert_eq!(params.sort_key, SortKey::Name);
    assert_eq!(params.sort_direction, SortDirection::Asc);
}

#[test]
fn test_derive_query_params_is_pure() {
    let filters = PatientFilters::by_name("Ana");
    let a = query::derive_query_params(&filters, SortKey::Name, SortDirection::Asc);
    let b = query::derive_query_params(&filters, SortKey::Name, SortDirection::Asc);
    assert_eq!(a, b);
}

#[test]
fn test_changing_any_input_changes_params() {
    let filters = PatientFilters::by_name("Ana");
    let base = query::derive_query_params(&filters, SortKey::Name, SortDirection::Asc);

    let other_filters =
        query::derive_query_params(&PatientFilters::by_name("Bo"), SortKey::Name, SortDirection::Asc);
    let other_key = query::derive_query_params(&filters, SortKey::BirthDate, SortDirection::Asc);
    let other_direction = query::derive_query_params(&filters, SortKey::Name, SortDirection::Desc);

    assert_ne!(base, other_filters);
    assert_ne!(base, other_key);
    assert_ne!(base, other_direction);
}

#[test]
fn test_filters_use_camel_case_on_the_wire() {
    let json = serde_json::to_value(PatientFilters::by_name("Ana")).unwrap();
    assert_eq!(json, serde_json::json!({ "patientName": "Ana" }));

    let parsed: PatientFilters = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, PatientFilters::default());
}

#[test]
fn test_name_query_ignores_blank_values() {
    assert_eq!(PatientFilters::default().name_query(), None);
    assert_eq!(PatientFilters::by_name("   ").name_query(), None);
    assert_eq!(PatientFilters::by_name(" Ana ").name_query(), Some("Ana"));
}

#[test]
fn test_tracker_skips_unchanged_params() {
    let mut tracker = QueryTracker::new();
    let params =
        query::derive_query_params(&PatientFilters::default(), SortKey::Name, SortDirection::Asc);

    let first = tracker.issue(params.clone()).expect("first query is issued");
    assert!(tracker.issue(params).is_none());
    assert!(tracker.is_current(first.id));
}

#[test]
fn test_tracker_marks_older_requests_stale() {
    let mut tracker = QueryTracker::new();
    let filters = PatientFilters::default();

    let first = tracker
        .issue(query::derive_query_params(&filters, SortKey::Name, SortDirection::Asc))
        .unwrap();
    let second = tracker
        .issue(query::derive_query_params(&filters, SortKey::Name, SortDirection::Desc))
        .unwrap();

    assert!(second.id > first.id);
    assert!(!tracker.is_current(first.id));
    assert!(tracker.is_current(second.id));
}

#[test]
fn test_tracker_invalidate_reissues_same_params() {
    let mut tracker = QueryTracker::new();
    let params =
        query::derive_query_params(&PatientFilters::default(), SortKey::Name, SortDirection::Asc);

    let first = tracker.issue(params.clone()).unwrap();
    tracker.invalidate();
    let again = tracker.issue(params.clone()).expect("invalidated query is re-issued");

    assert_eq!(again.params, params);
    assert_ne!(again.id, first.id);
    assert!(tracker.issue(params).is_none());
}
