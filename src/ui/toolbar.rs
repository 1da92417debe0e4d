use dioxus::prelude::*;

use crate::io::patient_store::PatientStore;
use crate::state::i18n::{self, Language};
use crate::state::query::PatientFilters;
use crate::state::table_controller::TableController;
use crate::ui::actions;

#[component]
pub fn Toolbar(
    store: Signal<PatientStore>,
    controller: Signal<TableController>,
    language: Signal<Language>,
    error_message: Signal<Option<String>>,
) -> Element {
    let current_language = *language.read();
    let name_filter = controller
        .read()
        .filters()
        .patient_name
        .clone()
        .unwrap_or_default();

    let open_label = i18n::tr(current_language, "toolbar.open");
    let filter_placeholder = i18n::tr(current_language, "toolbar.filter_name_placeholder");
    let clear_label = i18n::tr(current_language, "toolbar.clear_filter");

    rsx! {
        div { class: "toolbar",
            div { class: "toolbar-group",
                select {
                    class: "toolbar-select toolbar-select-sm",
                    id: "select-language",
                    value: "{current_language.code()}",
                    onchange: move |evt| {
                        if let Some(next_language) = Language::from_code(&evt.value()) {
                            language.set(next_language);
                        }
                    },
                    for lang in Language::all().iter().copied() {
                        option { value: "{lang.code()}", "{i18n::tr(current_language, lang.label_key())}" }
                    }
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-open",
                    onclick: move |_| {
                        spawn(async move {
                            actions::open_file(store, controller, language, error_message).await;
                        });
                    },
                    "\u{1F4C2} {open_label}"
                }
            }
            div { class: "toolbar-separator" }

            div { class: "toolbar-group",
                input {
                    class: "toolbar-input",
                    id: "input-patient-name",
                    placeholder: "{filter_placeholder}",
                    value: "{name_filter}",
                    oninput: move |evt| {
                        let value = evt.value();
                        let filters = if value.is_empty() {
                            PatientFilters::default()
                        } else {
                            PatientFilters::by_name(value)
                        };
                        controller.with_mut(|state| state.set_filters(filters));
                        actions::refresh_debounced(controller, store);
                    }
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-clear-filter",
                    onclick: move |_| {
                        controller.with_mut(|state| state.set_filters(PatientFilters::default()));
                        actions::refresh(controller, store);
                    },
                    "\u{2715} {clear_label}"
                }
            }

            div { class: "toolbar-info",
                if let Some(path) = store.read().path() {
                    span { class: "file-path", "{path.display()}" }
                }
                if let Some(err) = error_message.read().as_ref() {
                    span { class: "error-message", "{err}" }
                }
            }
        }
    }
}
