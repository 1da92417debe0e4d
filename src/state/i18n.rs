//! UI strings for the patient table.
//!
//! Catalogs are flat `key -> text` JSON objects compiled into the binary and
//! parsed on first use.

use std::collections::BTreeMap;
use std::sync::OnceLock;

type Catalog = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    ZhHant,
}

const LANGUAGES: [Language; 2] = [Language::En, Language::ZhHant];

impl Language {
    pub fn all() -> &'static [Self] {
        &LANGUAGES
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhHant => "zh-Hant",
        }
    }

    /// Accepts the canonical codes plus regional spellings such as `zh_TW`.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().replace('_', "-").to_ascii_lowercase();
        let (primary, region) = normalized
            .split_once('-')
            .unwrap_or((normalized.as_str(), ""));
        match (primary, region) {
            ("en", "" | "us" | "gb") => Some(Self::En),
            ("zh", "hant" | "tw" | "hk") => Some(Self::ZhHant),
            _ => None,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::En => "language.option.en",
            Self::ZhHant => "language.option.zh_hant",
        }
    }

    fn catalog(self) -> &'static Catalog {
        let (cell, source) = match self {
            Self::En => (&EN, include_str!("../../assets/i18n/en.json")),
            Self::ZhHant => (&ZH_HANT, include_str!("../../assets/i18n/zh-Hant.json")),
        };
        cell.get_or_init(|| {
            serde_json::from_str(source).unwrap_or_else(|err| {
                tracing::error!(language = self.code(), %err, "invalid i18n catalog");
                Catalog::new()
            })
        })
    }
}

static EN: OnceLock<Catalog> = OnceLock::new();
static ZH_HANT: OnceLock<Catalog> = OnceLock::new();

/// Text for `key` in `language`; English fills gaps, and an unknown key is
/// shown as itself.
pub fn tr(language: Language, key: &'static str) -> &'static str {
    [language, Language::En]
        .into_iter()
        .find_map(|lang| lang.catalog().get(key))
        .map_or(key, String::as_str)
}
