use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::io::patient_store::PatientStore;
use crate::state::table_controller::TableController;
use crate::ui::actions;
use crate::ui::table::PatientsTable;
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let store = use_signal(PatientStore::default);
    let controller = use_signal(TableController::new);
    let language = use_signal(|| config.language);
    let error_message = use_signal::<Option<String>>(|| None);

    use_hook(move || match config.data_file.as_deref() {
        Some(path) => actions::load_store(path, store, controller, error_message),
        None => actions::refresh(controller, store),
    });

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            Toolbar { store, controller, language, error_message }
            PatientsTable { store, controller, language, error_message }
        }
    }
}
