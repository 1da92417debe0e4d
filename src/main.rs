use patient_table::config::AppConfig;
use patient_table::ui::app::App;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    tracing::info!(data_file = ?config.data_file, "starting patient table");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Patients")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 760.0)),
            ),
        )
        .with_context(config)
        .launch(App);
}
