use dioxus::desktop::{Config, WindowBuilder};
use todays_trash::app::App;
use tracing_subscriber::{fmt, EnvFilter};

const STYLES: &str = include_str!("../web/styles.css");

fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Today's Trash");

    let config = Config::new()
        .with_window(WindowBuilder::new().with_title("Today's Trash"))
        .with_custom_head(format!("<style>{}</style>", STYLES));

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
}
