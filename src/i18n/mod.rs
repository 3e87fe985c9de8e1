//! Translated strings for the widget chrome.
//!
//! String tables ship inside the binary as JSON. Anything that cannot be
//! resolved falls back to English.

use serde::Deserialize;

pub const DEFAULT_LOCALE: &str = "en";
pub const SUPPORTED_LOCALES: [&str; 5] = ["en", "ar", "es", "hi", "zh"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Strings {
    pub increase: String,
    pub decrease: String,
    pub focus: String,
    pub quit: String,
    pub controls: String,
}

fn table(locale: &str) -> Option<&'static str> {
    let json = match locale {
        "en" => include_str!("../../locales/counter-app.en.json"),
        "ar" => include_str!("../../locales/counter-app.ar.json"),
        "es" => include_str!("../../locales/counter-app.es.json"),
        "hi" => include_str!("../../locales/counter-app.hi.json"),
        "zh" => include_str!("../../locales/counter-app.zh.json"),
        _ => return None,
    };
    Some(json)
}

/// Reduces a locale identifier like `es_ES.UTF-8` or `zh-Hans` to its
/// language code.
pub fn normalize_locale(raw: &str) -> String {
    raw.split(['.', '@'])
        .next()
        .unwrap_or_default()
        .split(['_', '-'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Locale from `LC_ALL`, then `LANG`. `C` and `POSIX` count as unset.
pub fn locale_from_env() -> Option<String> {
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| normalize_locale(&value))
        .find(|value| !value.is_empty() && value != "c" && value != "posix")
}

/// Resolved string table for one locale.
#[derive(Debug, Clone)]
pub struct Localizer {
    locale: &'static str,
    strings: Strings,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl Localizer {
    pub fn new(requested: &str) -> Self {
        let normalized = normalize_locale(requested);
        let locale = SUPPORTED_LOCALES
            .iter()
            .copied()
            .find(|supported| *supported == normalized);

        match locale.and_then(|locale| Self::load(locale).map(|strings| (locale, strings))) {
            Some((locale, strings)) => Self { locale, strings },
            None => {
                tracing::warn!(
                    target: "i18n",
                    "Locale '{}' unavailable, falling back to '{}'",
                    requested,
                    DEFAULT_LOCALE
                );
                Self {
                    locale: DEFAULT_LOCALE,
                    strings: Self::fallback(),
                }
            }
        }
    }

    /// Uses the configured locale if any, otherwise the environment.
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured {
            Some(locale) => Self::new(locale),
            None => Self::new(&locale_from_env().unwrap_or_else(|| DEFAULT_LOCALE.to_string())),
        }
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    fn load(locale: &str) -> Option<Strings> {
        let json = table(locale)?;
        match serde_json::from_str(json) {
            Ok(strings) => Some(strings),
            Err(err) => {
                tracing::warn!(target: "i18n", "Broken string table for '{}': {}", locale, err);
                None
            }
        }
    }

    fn fallback() -> Strings {
        Self::load(DEFAULT_LOCALE).unwrap_or_else(|| Strings {
            increase: "Increase".to_string(),
            decrease: "Decrease".to_string(),
            focus: "Focus".to_string(),
            quit: "Quit".to_string(),
            controls: "Counter controls".to_string(),
        })
    }
}
