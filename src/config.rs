//! Startup configuration.
//!
//! Resolved once in `main` and handed to the UI, so components never read
//! process environment on their own.

use std::path::PathBuf;

use crate::state::i18n::Language;

pub const OPEN_VAR: &str = "PATIENT_TABLE_OPEN";
pub const LOG_VAR: &str = "PATIENT_TABLE_LOG";
pub const LANG_VAR: &str = "PATIENT_TABLE_LANG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: Option<PathBuf>,
    pub log_filter: String,
    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            language: Language::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset
    /// and an unknown language code falls back to English.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let language = match read(LANG_VAR) {
            Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                tracing::warn!(%code, "unknown language code, using English");
                Language::En
            }),
            None => Language::default(),
        };

        Self {
            data_file: read(OPEN_VAR).map(PathBuf::from),
            log_filter: read(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            language,
        }
    }
}
