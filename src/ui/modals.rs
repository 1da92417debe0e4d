use dioxus::prelude::*;

use crate::io::patient_store::PatientStore;
use crate::state::i18n::{self, Language};
use crate::state::patient::Patient;
use crate::state::table_controller::TableController;
use crate::ui::actions;

#[component]
pub fn EditModal(
    patient: Patient,
    store: Signal<PatientStore>,
    controller: Signal<TableController>,
    language: Signal<Language>,
    error_message: Signal<Option<String>>,
) -> Element {
    let mut first_name = use_signal(|| patient.first_name.clone());
    let mut last_name = use_signal(|| patient.last_name.clone());
    let mut indication = use_signal(|| patient.indication.clone());
    let current_language = *language.read();

    let title = i18n::tr(current_language, "modal.edit.title");
    let first_name_label = i18n::tr(current_language, "modal.edit.first_name");
    let last_name_label = i18n::tr(current_language, "modal.edit.last_name");
    let indication_label = i18n::tr(current_language, "modal.edit.indication");
    let save_label = i18n::tr(current_language, "modal.edit.save");
    let cancel_label = i18n::tr(current_language, "modal.cancel");

    rsx! {
        div { class: "modal-backdrop", id: "edit-modal",
            div { class: "modal",
                h2 { "{title}" }
                label { "{first_name_label}"
                    input {
                        class: "modal-input",
                        id: "edit-first-name",
                        value: "{first_name}",
                        oninput: move |evt| first_name.set(evt.value()),
                    }
                }
                label { "{last_name_label}"
                    input {
                        class: "modal-input",
                        id: "edit-last-name",
                        value: "{last_name}",
                        oninput: move |evt| last_name.set(evt.value()),
                    }
                }
                label { "{indication_label}"
                    input {
                        class: "modal-input",
                        id: "edit-indication",
                        value: "{indication}",
                        oninput: move |evt| indication.set(evt.value()),
                    }
                }
                div { class: "modal-actions",
                    button {
                        class: "toolbar-btn",
                        id: "btn-edit-save",
                        onclick: {
                            let patient = patient.clone();
                            move |_| {
                                let updated = Patient {
                                    first_name: first_name.read().trim().to_string(),
                                    last_name: last_name.read().trim().to_string(),
                                    indication: indication.read().trim().to_string(),
                                    ..patient.clone()
                                };
                                if let Err(err) = store.with_mut(|store| store.update(updated)) {
                                    tracing::error!(id = %patient.id, %err, "failed to save patient");
                                    error_message.set(Some(err.to_string()));
                                }
                                close_edit(controller, store);
                            }
                        },
                        "{save_label}"
                    }
                    button {
                        class: "toolbar-btn",
                        id: "btn-edit-cancel",
                        onclick: move |_| close_edit(controller, store),
                        "{cancel_label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn DeleteModal(
    patient: Patient,
    store: Signal<PatientStore>,
    controller: Signal<TableController>,
    language: Signal<Language>,
    error_message: Signal<Option<String>>,
) -> Element {
    let current_language = *language.read();
    let title = i18n::tr(current_language, "modal.delete.title");
    let confirm = i18n::tr(current_language, "modal.delete.confirm");
    let submit_label = i18n::tr(current_language, "modal.delete.submit");
    let cancel_label = i18n::tr(current_language, "modal.cancel");
    let full_name = patient.full_name();
    let id = patient.id;

    rsx! {
        div { class: "modal-backdrop", id: "delete-modal",
            div { class: "modal",
                h2 { "{title}" }
                p { "{confirm}" }
                p { class: "modal-subject", "{full_name}" }
                div { class: "modal-actions",
                    button {
                        class: "toolbar-btn toolbar-btn-danger",
                        id: "btn-delete-confirm",
                        onclick: move |_| {
                            if let Err(err) = store.with_mut(|store| store.delete(id)) {
                                tracing::error!(%id, %err, "failed to delete patient");
                                error_message.set(Some(err.to_string()));
                            }
                            close_delete(controller, store);
                        },
                        "{submit_label}"
                    }
                    button {
                        class: "toolbar-btn",
                        id: "btn-delete-cancel",
                        onclick: move |_| close_delete(controller, store),
                        "{cancel_label}"
                    }
                }
            }
        }
    }
}

fn close_edit(mut controller: Signal<TableController>, store: Signal<PatientStore>) {
    controller.with_mut(|state| state.close_edit());
    actions::refresh(controller, store);
}

fn close_delete(mut controller: Signal<TableController>, store: Signal<PatientStore>) {
    controller.with_mut(|state| state.close_delete());
    actions::refresh(controller, store);
}
