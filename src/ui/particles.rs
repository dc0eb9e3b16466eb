//! Particle overlay drawn as SVG circles above the page

use std::time::Duration;

use dioxus::prelude::*;

use crate::app::AppState;
use crate::particles::{Particle, ParticleBurst};

/// ~60 frames per second
const FRAME: Duration = Duration::from_millis(16);

const VIEW_WIDTH: f32 = 1000.0;
const VIEW_HEIGHT: f32 = 800.0;

/// Start a burst from the middle of the screen
///
/// A burst that is already animating is replaced and its frame loop reused.
pub fn launch_burst(mut burst: Signal<Option<ParticleBurst>>, count: usize) {
    if count == 0 {
        return;
    }

    let running = burst.peek().is_some();
    let origin = (VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0);
    burst.set(Some(ParticleBurst::spawn(&mut rand::rng(), origin, count)));
    if running {
        return;
    }

    spawn(async move {
        loop {
            tokio::time::sleep(FRAME).await;
            let active = {
                let mut current = burst.write();
                match current.as_mut() {
                    Some(b) => b.step(),
                    None => false,
                }
            };
            if !active {
                burst.set(None);
                break;
            }
        }
    });
}

#[component]
pub fn ParticleOverlay() -> Element {
    let app_state = use_context::<AppState>();
    let particles: Vec<Particle> = match app_state.burst.read().as_ref() {
        Some(burst) => burst.live().cloned().collect(),
        None => return rsx! {},
    };

    rsx! {
        svg {
            class: "particles",
            view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
            preserve_aspect_ratio: "xMidYMid slice",

            for (i, p) in particles.iter().enumerate() {
                circle {
                    key: "{i}",
                    cx: "{p.x}",
                    cy: "{p.y}",
                    r: "{p.size}",
                    fill: "white",
                    fill_opacity: "{p.alpha()}",
                }
            }
        }
    }
}
