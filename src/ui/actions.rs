use dioxus::prelude::*;
use std::path::Path;
use std::time::Duration;

use crate::io::patient_store::{PatientSource, PatientStore};
use crate::state::i18n::{self, Language};
use crate::state::projection::SourceError;
use crate::state::table_controller::TableController;

/// Issues the controller's pending query, if any, against the store.
///
/// Responses are matched by request id, so a slow answer to an older query
/// cannot overwrite a newer one.
pub fn refresh(mut controller: Signal<TableController>, store: Signal<PatientStore>) {
    let Some(request) = controller.with_mut(|state| state.next_query()) else {
        return;
    };

    spawn(async move {
        let result = store.peek().fetch(&request.params);
        let mut controller = controller;
        controller.with_mut(|state| {
            state.receive(request.id, result);
        });
    });
}

const FILTER_DEBOUNCE: Duration = Duration::from_millis(250);

/// Waits for typing to settle before refreshing. Every keystroke schedules
/// one of these; only the first to fire after the last change finds new
/// parameters, the rest see them already issued and do nothing.
pub fn refresh_debounced(controller: Signal<TableController>, store: Signal<PatientStore>) {
    spawn(async move {
        tokio::time::sleep(FILTER_DEBOUNCE).await;
        refresh(controller, store);
    });
}

pub fn load_store(
    path: &Path,
    mut store: Signal<PatientStore>,
    mut controller: Signal<TableController>,
    mut error_message: Signal<Option<String>>,
) {
    match PatientStore::open(path) {
        Ok(next) => {
            store.set(next);
            controller.with_mut(|state| state.request_refresh());
            error_message.set(None);
            refresh(controller, store);
        }
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "failed to open patient file");
            controller.with_mut(|state| {
                state.fail(SourceError::Unavailable(err.to_string()));
            });
            error_message.set(Some(err.to_string()));
        }
    }
}

pub async fn open_file(
    store: Signal<PatientStore>,
    controller: Signal<TableController>,
    language: Signal<Language>,
    error_message: Signal<Option<String>>,
) {
    let task = rfd::AsyncFileDialog::new()
        .add_filter(i18n::tr(*language.read(), "dialog.json_filter"), &["json"])
        .pick_file()
        .await;

    if let Some(handle) = task {
        load_store(handle.path(), store, controller, error_message);
    }
}
