//! Build configuration
//!
//! Read from an optional `site.json` in the project root. Paths are relative
//! to that root.

use crate::site::BuildError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "site.json";
pub const DEFAULT_BASE_URL: &str = "https://todays-trash.web.app";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Public origin the site is served from, without trailing slash
    pub base_url: String,
    /// HTML template with `{{slot}}` markers
    pub template: PathBuf,
    /// Translation table JSON; the bundled table is used when unset
    pub locales: Option<PathBuf>,
    /// Directory the pages and sitemap are written to
    pub output_dir: PathBuf,
    /// Path of the static privacy page, relative to `base_url`
    pub privacy_path: String,
    /// Files and directories next to the template that pages link to; copied
    /// into `output_dir` as is
    pub static_files: Vec<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            template: PathBuf::from("web/index.html"),
            locales: None,
            output_dir: PathBuf::from("dist"),
            privacy_path: "privacy.html".to_string(),
            static_files: vec![PathBuf::from("styles.css"), PathBuf::from("assets")],
        }
    }
}

impl BuildConfig {
    /// Load `site.json` from `root`, or defaults when it doesn't exist
    pub fn load(root: &Path) -> Result<Self, BuildError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            tracing::info!("No {} found, using default build settings", CONFIG_FILE);
            return Ok(Self::default());
        }

        let json = fs::read_to_string(&path).map_err(|e| BuildError::io(&path, e))?;
        let mut config: BuildConfig =
            serde_json::from_str(&json).map_err(|e| BuildError::json(&path, e))?;
        config.validate();
        Ok(config)
    }

    /// Normalize values
    pub fn validate(&mut self) {
        let base = self.base_url.trim().trim_end_matches('/');
        self.base_url = if base.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            base.to_string()
        };

        let privacy = self.privacy_path.trim().trim_start_matches('/');
        self.privacy_path = if privacy.is_empty() {
            "privacy.html".to_string()
        } else {
            privacy.to_string()
        };
    }

    /// Directory the template and its static files live in
    pub fn template_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.template)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf())
    }

    /// Public URL of a locale's page
    pub fn locale_url(&self, code: &str) -> String {
        format!("{}/{}/", self.base_url, code)
    }

    /// Public URL of the site root
    pub fn root_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    pub fn privacy_url(&self) -> String {
        format!("{}/{}", self.base_url, self.privacy_path)
    }

    /// Social preview image for a locale
    pub fn og_image_url(&self, code: &str) -> String {
        format!("{}/assets/{}.png", self.base_url, code.to_lowercase())
    }
}
