//! Input box with live character counter

use dioxus::prelude::*;

use crate::app::AppState;
use crate::submission::FlowEvent;
use crate::types::MAX_ENTRY_CHARS;

#[component]
pub fn TrashInput() -> Element {
    let app_state = use_context::<AppState>();
    let mut flow = app_state.flow;

    let input = flow.read().input().to_string();
    let status = flow.read().status();
    let count_label = status.label();
    let count_class = if status.near_limit { "near-limit" } else { "" };

    rsx! {
        section {
            class: "input-area",

            textarea {
                id: "trash-input",
                maxlength: "{MAX_ENTRY_CHARS}",
                placeholder: "{app_state.text.placeholder}",
                value: "{input}",
                oninput: move |evt| flow.write().set_input(&evt.value()),
            }

            div {
                class: "input-footer",
                span { id: "char-count", class: "{count_class}", "{count_label}" }
                button {
                    id: "btn-throw",
                    disabled: !status.can_submit,
                    onclick: move |_| {
                        let outcome = flow.write().handle(FlowEvent::Submit);
                        tracing::debug!("Throw clicked: {:?}", outcome);
                    },
                    "{app_state.text.button_throw}"
                }
            }
        }
    }
}
