//! Pre-render the localized static pages and sitemap.

use clap::Parser;
use std::path::PathBuf;
use todays_trash::site::build_site;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "build_static")]
#[command(about = "Render one static page per locale plus a sitemap", long_about = None)]
struct Cli {
    /// Project root holding site.json and the template
    #[arg(default_value = ".")]
    root: PathBuf,
}

/// `RUST_LOG` directives when set, otherwise `info`
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new("info"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    fmt().with_env_filter(log_filter(rust_log.as_deref())).init();

    let cli = Cli::parse();

    let report = build_site(&cli.root)?;
    tracing::info!(
        "Static site generation complete: {} pages, {} assets, sitemap at {}",
        report.pages.len(),
        report.assets.len(),
        report.sitemap.display()
    );
    Ok(())
}
