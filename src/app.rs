//! Root Dioxus application component
//!
//! This module contains the App component and the state shared by the widget.

use crate::clock::SystemClock;
use crate::i18n::{system_language_tag, TranslationTable, Translations};
use crate::particles::ParticleBurst;
use crate::storage::kv::FileKvStore;
use crate::storage::lifecycle::Lifecycle;
use crate::storage::settings::{load_settings, AppSettings};
use crate::submission::SubmissionFlow;
use crate::ui::Layout;
use dioxus::prelude::*;

/// Lifecycle manager backed by the on-disk store and the system clock
pub type AppLifecycle = Lifecycle<FileKvStore, SystemClock>;

/// Fallback store location when no platform data directory exists
const FALLBACK_STORE: &str = "todays_trash.json";

/// Application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub lifecycle: Signal<AppLifecycle>,
    pub flow: Signal<SubmissionFlow>,
    /// Particle burst currently animating, if any
    pub burst: Signal<Option<ParticleBurst>>,
    /// Read-only preferences from `settings.json`
    pub settings: AppSettings,
    /// Resolved locale code
    pub locale: String,
    pub text: Translations,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let table = TranslationTable::builtin();
        let locale = resolve_locale(&settings.language, system_language_tag().as_deref(), table);
        tracing::info!("AppState initialized with locale {}", locale);

        let store = FileKvStore::open_default().unwrap_or_else(|e| {
            tracing::warn!("{}, storing entries in ./{}", e, FALLBACK_STORE);
            FileKvStore::open(FALLBACK_STORE)
        });

        Self {
            lifecycle: Signal::new(Lifecycle::open(store, SystemClock)),
            flow: Signal::new(SubmissionFlow::new()),
            burst: Signal::new(None),
            text: table.translations_for(&locale),
            locale,
            settings,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Locale code for a settings value, consulting the system tag when set to "auto"
pub fn resolve_locale(language: &str, system_tag: Option<&str>, table: &TranslationTable) -> String {
    let tag = if language == "auto" {
        system_tag.unwrap_or_default()
    } else {
        language
    };
    table.detect(tag).to_string()
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        Layout {}
    }
}
