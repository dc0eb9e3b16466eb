//! Confirmation modal
//!
//! Shown while the submission flow is waiting for the user to confirm.

use dioxus::prelude::*;

use crate::app::AppState;
use crate::submission::{FlowEvent, FlowOutcome};
use crate::ui::particles::launch_burst;

#[component]
pub fn ConfirmModal() -> Element {
    let app_state = use_context::<AppState>();
    let mut flow = app_state.flow;

    if !flow.read().is_modal_open() {
        return rsx! {};
    }

    let text = app_state.text.clone();
    let mut lifecycle = app_state.lifecycle;
    let burst = app_state.burst;
    let particle_count = app_state.settings.particle_count as usize;

    let handle_confirm = move |_| {
        let outcome = flow.write().handle(FlowEvent::Confirm);
        if let FlowOutcome::Committed(entry_text) = outcome {
            if lifecycle.write().add_entry(&entry_text).is_some() {
                launch_burst(burst, particle_count);
            }
        }
    };

    rsx! {
        // Backdrop; clicking outside the dialog cancels
        div {
            id: "confirmation-modal",
            class: "modal-backdrop",
            onclick: move |_| {
                flow.write().handle(FlowEvent::BackdropClick);
            },

            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),

                h2 { id: "modal-title", "{text.modal_title}" }
                p { id: "modal-body", dangerous_inner_html: "{text.modal_body}" }

                div {
                    class: "modal-actions",

                    button {
                        id: "btn-cancel",
                        class: "btn-ghost",
                        onclick: move |_| {
                            flow.write().handle(FlowEvent::Cancel);
                        },
                        "{text.modal_cancel}"
                    }

                    button {
                        id: "btn-confirm",
                        class: "btn-primary",
                        onclick: handle_confirm,
                        "{text.modal_confirm}"
                    }
                }
            }
        }
    }
}
