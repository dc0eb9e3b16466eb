//! Page generation
//!
//! Every locale gets `<output>/<code>/index.html`; the English page is also
//! written to `<output>/index.html` with root-relative asset paths. The
//! template's static files are copied alongside so the pages' links resolve.

use crate::i18n::{TranslationTable, Translations, DEFAULT_LOCALE};
use crate::site::sitemap::render_sitemap;
use crate::site::template::{escape_html, SlotValues, Template};
use crate::site::{BuildConfig, BuildError};
use chrono::{Datelike, NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Slots every template must contain. A template missing one of these would
/// silently ship untranslated text.
pub const REQUIRED_SLOTS: &[&str] = &[
    "lang",
    "page_title",
    "description",
    "og_image",
    "hreflang_links",
    "asset_prefix",
    "title",
    "slogan",
    "placeholder",
    "button_throw",
    "countdown_label",
    "empty_state",
    "footer_privacy",
    "modal_title",
    "modal_body",
    "modal_cancel",
    "modal_confirm",
];

/// Asset prefix for pages one directory below the output root
const NESTED_ASSET_PREFIX: &str = "../";

/// Files written by a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: Vec<PathBuf>,
    /// Copied static files
    pub assets: Vec<PathBuf>,
    pub sitemap: PathBuf,
}

/// Locale codes become directory names, so only `[A-Za-z0-9-]+` is allowed
pub fn validate_locale_code(code: &str) -> Result<(), BuildError> {
    let valid = !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(BuildError::InvalidLocaleCode(code.to_string()))
    }
}

/// Alternate-language `<link>` tags for every locale plus `x-default`
pub fn hreflang_links(config: &BuildConfig, table: &TranslationTable) -> String {
    table
        .codes()
        .map(|code| {
            format!(
                r#"<link rel="alternate" hreflang="{}" href="{}" />"#,
                escape_html(code),
                escape_html(&config.locale_url(code))
            )
        })
        .chain(std::iter::once(format!(
            r#"<link rel="alternate" hreflang="x-default" href="{}" />"#,
            escape_html(&config.root_url())
        )))
        .collect::<Vec<_>>()
        .join("\n    ")
}

/// Where a rendered page will live
#[derive(Debug, Clone, Copy)]
pub struct PageTarget<'a> {
    pub code: &'a str,
    pub asset_prefix: &'a str,
    pub canonical_url: &'a str,
}

/// Slot values for one page
pub fn page_slots(
    config: &BuildConfig,
    table: &TranslationTable,
    text: &Translations,
    target: PageTarget<'_>,
    today: NaiveDate,
) -> SlotValues {
    let plain = [
        ("lang", target.code.to_string()),
        ("page_title", text.document_title()),
        ("description", text.plain_slogan()),
        ("og_image", config.og_image_url(target.code)),
        ("canonical_url", target.canonical_url.to_string()),
        ("asset_prefix", target.asset_prefix.to_string()),
        ("year", today.year().to_string()),
        ("title", text.title.clone()),
        ("placeholder", text.placeholder.clone()),
        ("button_throw", text.button_throw.clone()),
        ("countdown_label", text.countdown_label.clone()),
        ("empty_state", text.empty_state.clone()),
        ("modal_title", text.modal_title.clone()),
        ("modal_cancel", text.modal_cancel.clone()),
        ("modal_confirm", text.modal_confirm.clone()),
    ];
    let markup = [
        ("hreflang_links", hreflang_links(config, table)),
        ("slogan", text.slogan.clone()),
        ("modal_body", text.modal_body.clone()),
        ("footer_privacy", text.footer_privacy.clone()),
    ];

    plain
        .into_iter()
        .map(|(name, value)| (name.to_string(), escape_html(&value)))
        .chain(
            markup
                .into_iter()
                .map(|(name, value)| (name.to_string(), value)),
        )
        .collect()
}

/// Render the page for one locale
pub fn render_page(
    template: &Template,
    config: &BuildConfig,
    table: &TranslationTable,
    target: PageTarget<'_>,
    today: NaiveDate,
) -> Result<String, BuildError> {
    let text = table.translations_for(target.code);
    let slots = page_slots(config, table, &text, target, today);
    Ok(template.render(&slots)?)
}

/// Build the site described by `root/site.json`, dated today (UTC)
pub fn build_site(root: &Path) -> Result<BuildReport, BuildError> {
    let config = BuildConfig::load(root)?;

    let template_path = root.join(&config.template);
    let source =
        fs::read_to_string(&template_path).map_err(|e| BuildError::io(&template_path, e))?;
    let template = Template::parse(&source)?;

    let table = match &config.locales {
        Some(locales) => {
            let path = root.join(locales);
            let json = fs::read_to_string(&path).map_err(|e| BuildError::io(&path, e))?;
            TranslationTable::from_json(&json).map_err(|e| BuildError::json(&path, e))?
        }
        None => TranslationTable::builtin().clone(),
    };

    build_with(&config, root, &template, &table, Utc::now().date_naive())
}

/// Build with explicit inputs
pub fn build_with(
    config: &BuildConfig,
    root: &Path,
    template: &Template,
    table: &TranslationTable,
    today: NaiveDate,
) -> Result<BuildReport, BuildError> {
    template.require(REQUIRED_SLOTS)?;
    if table.is_empty() {
        return Err(BuildError::NoLocales);
    }
    for code in table.codes() {
        validate_locale_code(code)?;
    }

    let out_dir = root.join(&config.output_dir);
    fs::create_dir_all(&out_dir).map_err(|e| BuildError::io(&out_dir, e))?;

    let mut pages = Vec::with_capacity(table.len() + 1);
    for code in table.codes() {
        let canonical = config.locale_url(code);
        let target = PageTarget {
            code,
            asset_prefix: NESTED_ASSET_PREFIX,
            canonical_url: &canonical,
        };
        let html = render_page(template, config, table, target, today)?;

        let page_dir = out_dir.join(code);
        fs::create_dir_all(&page_dir).map_err(|e| BuildError::io(&page_dir, e))?;
        let page_path = page_dir.join("index.html");
        write_file(&page_path, &html)?;
        tracing::info!("Generated {}/index.html", code);
        pages.push(page_path);
    }

    let root_code = table.detect(DEFAULT_LOCALE);
    let root_url = config.root_url();
    let root_target = PageTarget {
        code: root_code,
        asset_prefix: "",
        canonical_url: &root_url,
    };
    let root_html = render_page(template, config, table, root_target, today)?;
    let root_page = out_dir.join("index.html");
    write_file(&root_page, &root_html)?;
    tracing::info!("Generated index.html ({})", root_code);
    pages.push(root_page);

    let sitemap = out_dir.join("sitemap.xml");
    write_file(&sitemap, &render_sitemap(config, table.codes(), today))?;
    tracing::info!("Generated sitemap.xml");

    let assets = copy_static_files(config, root, &out_dir)?;

    Ok(BuildReport {
        pages,
        assets,
        sitemap,
    })
}

/// Copy the configured static files from the template directory into `out_dir`
///
/// Missing entries are skipped with a warning.
fn copy_static_files(
    config: &BuildConfig,
    root: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, BuildError> {
    let source_dir = config.template_dir(root);
    let mut copied = Vec::new();
    for entry in &config.static_files {
        let source = source_dir.join(entry);
        if !source.exists() {
            tracing::warn!("Static file {} not found, skipping", source.display());
            continue;
        }
        copy_path(&source, &out_dir.join(entry), &mut copied)?;
    }
    tracing::info!("Copied {} static files", copied.len());
    Ok(copied)
}

fn copy_path(source: &Path, dest: &Path, copied: &mut Vec<PathBuf>) -> Result<(), BuildError> {
    if source.is_dir() {
        fs::create_dir_all(dest).map_err(|e| BuildError::io(dest, e))?;
        for entry in fs::read_dir(source).map_err(|e| BuildError::io(source, e))? {
            let entry = entry.map_err(|e| BuildError::io(source, e))?;
            copy_path(&entry.path(), &dest.join(entry.file_name()), copied)?;
        }
        return Ok(());
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
    }
    fs::copy(source, dest).map_err(|e| BuildError::io(source, e))?;
    copied.push(dest.to_path_buf());
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    fs::write(path, contents).map_err(|e| BuildError::io(path, e))
}
