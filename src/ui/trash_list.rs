use dioxus::prelude::*;

use crate::app::AppState;

#[component]
pub fn TrashList() -> Element {
    let app_state = use_context::<AppState>();
    let show_timestamps = app_state.settings.show_timestamps;
    let entries = app_state.lifecycle.read().entries().to_vec();

    rsx! {
        if entries.is_empty() {
            p {
                id: "empty-state-message",
                class: "empty-state",
                "{app_state.text.empty_state}"
            }
        } else {
            section {
                id: "trash-list",
                class: "trash-list",

                {entries.into_iter().enumerate().map(|(index, entry)| {
                    // Staggered fade-in
                    let delay = format!("animation-delay: {:.2}s;", index as f32 * 0.05);
                    let time = entry.time_label();

                    rsx! {
                        div {
                            key: "{entry.id}",
                            class: "trash-card",
                            style: "{delay}",
                            p { "{entry.text}" }
                            if show_timestamps {
                                span { class: "trash-timestamp", "{time}" }
                            }
                        }
                    }
                })}
            }
        }
    }
}
