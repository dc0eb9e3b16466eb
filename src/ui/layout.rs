use chrono::Datelike;
use dioxus::prelude::*;

use crate::app::AppState;
use crate::ui::confirm_modal::ConfirmModal;
use crate::ui::countdown::CountdownTimer;
use crate::ui::particles::ParticleOverlay;
use crate::ui::trash_input::TrashInput;
use crate::ui::trash_list::TrashList;

#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let text = app_state.text.clone();
    let document_title = text.document_title();
    let description = text.plain_slogan();
    let year = chrono::Local::now().year();

    rsx! {
        document::Title { "{document_title}" }
        document::Meta { name: "description", content: "{description}" }

        ParticleOverlay {}

        main {
            class: "container",
            lang: "{app_state.locale}",

            header {
                h1 { id: "app-title", class: "fade-in", "{text.title}" }
                // Slogan carries inline <br> markup
                p { id: "app-slogan", class: "fade-in delay-1", dangerous_inner_html: "{text.slogan}" }
            }

            CountdownTimer {}
            TrashInput {}
            TrashList {}

            footer {
                p { id: "footer-privacy", dangerous_inner_html: "{text.footer_privacy}" }
                p { "© {year} {text.title}" }
            }
        }

        ConfirmModal {}
    }
}
