//! Static localization builder
//!
//! Renders one pre-translated HTML page per locale from a slot template and
//! writes a sitemap listing them.

pub mod builder;
pub mod config;
pub mod sitemap;
pub mod template;

pub use builder::{build_site, build_with, render_page, BuildReport};
pub use config::BuildConfig;
pub use template::{Template, TemplateError};

use std::path::PathBuf;

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Translation table has no locales")]
    NoLocales,
    #[error("Invalid locale code {0:?}: expected letters, digits and '-'")]
    InvalidLocaleCode(String),
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
