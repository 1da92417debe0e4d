use dioxus::prelude::*;

use crate::io::patient_store::PatientStore;
use crate::state::i18n::{self, Language};
use crate::state::projection::Projection;
use crate::state::sort_state::{self, SortDirection, SortKey, SortState};
use crate::state::table_controller::{ActiveModal, PatientRow, TableController};
use crate::ui::actions;
use crate::ui::modals::{DeleteModal, EditModal};

#[component]
pub fn PatientsTable(
    store: Signal<PatientStore>,
    controller: Signal<TableController>,
    language: Signal<Language>,
    error_message: Signal<Option<String>>,
) -> Element {
    let snapshot = controller.read().clone();
    let current_language = *language.read();
    let sort = *snapshot.sort();
    let today = chrono::Local::now().date_naive();
    let rows = snapshot.rows(today);

    let modals = rsx! {
        for modal in snapshot.active_modals() {
            {modal_view(modal, store, controller, language, error_message)}
        }
    };

    let body = match snapshot.projection() {
        Projection::Empty => {
            return rsx! {
                EmptyList { language }
                {modals}
            };
        }
        Projection::Failed(err) => {
            let failed_label = i18n::tr(current_language, "table.failed");
            return rsx! {
                p { class: "error-message", id: "table-error", "{failed_label}: {err}" }
                {modals}
            };
        }
        Projection::Loading => {
            let loading_label = i18n::tr(current_language, "table.loading");
            rsx! {
                tr { class: "loading-row",
                    td { colspan: "5", "{loading_label}" }
                }
            }
        }
        Projection::Populated(_) => rsx! {
            for row in rows {
                PatientRowView {
                    key: "{row.patient.id}",
                    row,
                    controller,
                    language,
                }
            }
        },
    };

    let actions_label = i18n::tr(current_language, "column.actions");

    rsx! {
        div { class: "table-container", id: "table-container",
            table {
                thead {
                    tr {
                        for column in SortKey::all().iter().copied() {
                            ThSorted { column, sort, store, controller, language }
                        }
                        th { "{actions_label}" }
                    }
                }
                tbody { {body} }
            }
        }
        {modals}
    }
}

#[component]
fn ThSorted(
    column: SortKey,
    sort: SortState,
    store: Signal<PatientStore>,
    controller: Signal<TableController>,
    language: Signal<Language>,
) -> Element {
    let direction = sort.direction_for(column);
    let label = i18n::tr(*language.read(), column.label_key());
    let indicator = match direction {
        Some(SortDirection::Asc) => " \u{25B2}",
        Some(SortDirection::Desc) => " \u{25BC}",
        None => "",
    };

    rsx! {
        th {
            class: header_class(direction),
            id: format!("col-{}", column.code()),
            onclick: move |_| {
                let action = sort_state::next_header_action(column, &sort);
                controller.with_mut(|state| state.apply_header_action(action));
                actions::refresh(controller, store);
            },
            "{label}{indicator}"
        }
    }
}

#[component]
fn PatientRowView(
    row: PatientRow,
    controller: Signal<TableController>,
    language: Signal<Language>,
) -> Element {
    let mut menu_open = use_signal(|| false);
    let current_language = *language.read();
    let edit_label = i18n::tr(current_language, "menu.edit");
    let delete_label = i18n::tr(current_language, "menu.delete");
    let id = row.patient.id;
    let age = row.age.map(|age| age.to_string()).unwrap_or_default();
    let created = row.created.clone().unwrap_or_default();

    rsx! {
        tr { id: "row-{id}",
            td { class: "name-cell",
                for segment in row.name.iter() {
                    if segment.matched {
                        mark { class: "highlight", "{segment.text}" }
                    } else {
                        span { "{segment.text}" }
                    }
                }
            }
            td {
                span { class: "badge", "{row.indication}" }
            }
            td { "{age}" }
            td { "{created}" }
            td { class: "row-actions",
                button {
                    class: "menu-btn",
                    id: "menu-{id}",
                    onclick: move |_| {
                        let open = *menu_open.read();
                        menu_open.set(!open);
                    },
                    "\u{270E}"
                }
                if *menu_open.read() {
                    ul { class: "menu-list",
                        li {
                            class: "menu-item",
                            id: "menu-edit-{id}",
                            onclick: {
                                let patient = row.patient.clone();
                                move |_| {
                                    menu_open.set(false);
                                    controller.with_mut(|state| state.request_edit(patient.clone()));
                                }
                            },
                            "{edit_label}"
                        }
                        li {
                            class: "menu-item menu-item-danger",
                            id: "menu-delete-{id}",
                            onclick: {
                                let patient = row.patient.clone();
                                move |_| {
                                    menu_open.set(false);
                                    controller.with_mut(|state| state.request_delete(patient.clone()));
                                }
                            },
                            "{delete_label}"
                        }
                    }
                }
            }
        }
    }
}

fn modal_view(
    modal: ActiveModal<'_>,
    store: Signal<PatientStore>,
    controller: Signal<TableController>,
    language: Signal<Language>,
    error_message: Signal<Option<String>>,
) -> Element {
    match modal {
        ActiveModal::Edit(patient) => rsx! {
            EditModal {
                key: "edit-{patient.id}",
                patient: patient.clone(),
                store,
                controller,
                language,
                error_message,
            }
        },
        ActiveModal::Delete(patient) => rsx! {
            DeleteModal {
                key: "delete-{patient.id}",
                patient: patient.clone(),
                store,
                controller,
                language,
                error_message,
            }
        },
    }
}

#[component]
pub fn EmptyList(language: Signal<Language>) -> Element {
    let empty_label = i18n::tr(*language.read(), "table.empty");
    rsx! {
        p { class: "empty-message", id: "empty-message", "{empty_label}" }
    }
}

fn header_class(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "sortable sorted-asc",
        Some(SortDirection::Desc) => "sortable sorted-desc",
        None => "sortable",
    }
}
