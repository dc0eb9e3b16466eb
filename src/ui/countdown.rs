//! Countdown label, ticking once per second

use dioxus::prelude::*;

use crate::app::AppState;
use crate::countdown::{self, TICK_INTERVAL};

#[component]
pub fn CountdownTimer() -> Element {
    let app_state = use_context::<AppState>();
    let mut lifecycle = app_state.lifecycle;
    let mut label = use_signal(|| "--:--:--".to_string());

    use_future(move || async move {
        loop {
            // Write only on a day change; a write re-renders every entry reader.
            let stale = lifecycle.peek().is_stale();
            let tick = if stale {
                countdown::tick(&mut *lifecycle.write())
            } else {
                countdown::observe(&*lifecycle.peek())
            };
            if tick.rolled_over {
                tracing::info!("Midnight passed, today's trash was cleared");
            }
            label.set(tick.label());
            tokio::time::sleep(TICK_INTERVAL).await;
        }
    });

    rsx! {
        section {
            class: "countdown fade-in delay-2",
            span { id: "countdown-label", "{app_state.text.countdown_label}" }
            span { id: "countdown-timer", "{label}" }
        }
    }
}
