//! Translations
//!
//! The translation table maps locale codes to the fixed set of UI strings.
//! A bundled table is embedded in the binary; the static site builder can
//! load a replacement from disk.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Locale used when nothing better matches
pub const DEFAULT_LOCALE: &str = "en";

const BUILTIN_LOCALES: &str = include_str!("../locales/locales.json");

static BUILTIN: Lazy<TranslationTable> = Lazy::new(|| {
    TranslationTable::from_json(BUILTIN_LOCALES).unwrap_or_else(|e| {
        tracing::error!("Bundled translations are invalid, using English only: {}", e);
        TranslationTable::new(vec![LocaleBundle {
            code: DEFAULT_LOCALE.to_string(),
            text: Translations::default(),
        }])
    })
});

/// UI strings for one locale
///
/// `slogan`, `modal_body` and `footer_privacy` may contain inline `<br>`
/// markup; everything else is plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    pub title: String,
    pub slogan: String,
    pub placeholder: String,
    pub button_throw: String,
    pub countdown_label: String,
    pub empty_state: String,
    pub footer_privacy: String,
    pub modal_title: String,
    pub modal_body: String,
    pub modal_cancel: String,
    pub modal_confirm: String,
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            title: "Today's Trash".to_string(),
            slogan: "Leave what you want to forget here.<br>When today ends, it all disappears."
                .to_string(),
            placeholder: "Write it down here. (Max 300 chars)".to_string(),
            button_throw: "Throw away".to_string(),
            countdown_label: "Today's Trash clears in".to_string(),
            empty_state: "No memories thrown away yet.".to_string(),
            footer_privacy: "This service does not collect any personal data.<br>All data is stored locally on your device and automatically deleted at midnight.".to_string(),
            modal_title: "Are you sure you want to throw this away?".to_string(),
            modal_body: "Once thrown away, it cannot be edited or retrieved.<br>When today ends, it will disappear forever.".to_string(),
            modal_cancel: "Cancel".to_string(),
            modal_confirm: "Throw it away".to_string(),
        }
    }
}

impl Translations {
    /// Slogan with line breaks flattened to spaces
    pub fn plain_slogan(&self) -> String {
        strip_line_breaks(&self.slogan)
    }

    /// Window / document title: `"{title} - {slogan}"`
    pub fn document_title(&self) -> String {
        format!("{} - {}", self.title, self.plain_slogan())
    }
}

fn strip_line_breaks(text: &str) -> String {
    text.replace("<br />", " ")
        .replace("<br/>", " ")
        .replace("<br>", " ")
}

/// One entry of the translation table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleBundle {
    /// Locale code, e.g. `en` or `zh-CN`
    pub code: String,
    #[serde(flatten)]
    pub text: Translations,
}

/// Ordered locale table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    locales: Vec<LocaleBundle>,
}

impl TranslationTable {
    pub fn new(locales: Vec<LocaleBundle>) -> Self {
        Self { locales }
    }

    /// Parse a JSON array of locale bundles
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// The table compiled into the binary
    pub fn builtin() -> &'static TranslationTable {
        &BUILTIN
    }

    pub fn get(&self, code: &str) -> Option<&Translations> {
        self.locales
            .iter()
            .find(|bundle| bundle.code.eq_ignore_ascii_case(code))
            .map(|bundle| &bundle.text)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleBundle> {
        self.locales.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|bundle| bundle.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Pick the best locale code for a language tag
    ///
    /// Tries the full tag first (`zh-TW`), then its primary subtag
    /// (`ko-KR` -> `ko`), then [`DEFAULT_LOCALE`].
    pub fn detect(&self, tag: &str) -> &str {
        let tag = tag.trim();
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);

        [tag, primary, DEFAULT_LOCALE]
            .into_iter()
            .filter(|candidate| !candidate.is_empty())
            .find_map(|candidate| {
                self.locales
                    .iter()
                    .find(|bundle| bundle.code.eq_ignore_ascii_case(candidate))
            })
            .or_else(|| self.locales.first())
            .map(|bundle| bundle.code.as_str())
            .unwrap_or(DEFAULT_LOCALE)
    }

    /// Translations for the best match of `tag`
    pub fn translations_for(&self, tag: &str) -> Translations {
        self.get(self.detect(tag)).cloned().unwrap_or_default()
    }
}

/// Convert a POSIX locale value (`ja_JP.UTF-8`) into a language tag (`ja-JP`)
pub fn tag_from_posix_locale(value: &str) -> Option<String> {
    let base = value
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

/// Language tag of the current user, from `LC_ALL`, `LC_MESSAGES` or `LANG`
pub fn system_language_tag() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| tag_from_posix_locale(&value))
}
