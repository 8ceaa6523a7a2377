//! Cosmetic page effects: scroll progress bar, custom cursor, particle field.
//!
//! The cursor and particles render nothing when the visitor prefers reduced
//! motion.

use dioxus::prelude::*;
use folio_core::effects::{CursorFollower, Particle, particle_field, progress_style};
use folio_core::interaction::CardKind;
use folio_types::EffectsConfig;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;

use crate::app::{Motion, ScrollState};
use crate::dom;

const FRAME_MS: u32 = 16;

#[component]
pub fn ScrollProgress() -> Element {
    let scroll = use_context::<ScrollState>();
    let style = progress_style((scroll.progress)()).to_inline();

    rsx! {
        div { class: "scroll-progress", style: "{style}" }
    }
}

/// Elements that make the cursor outline grow.
fn interactive_selector() -> String {
    format!(
        "a, button, .btn, {}, {}",
        CardKind::Skill.selector(),
        CardKind::Project.selector()
    )
}

#[component]
pub fn CustomCursor(ease: f64) -> Element {
    let motion = use_context::<Motion>();
    let mut cursor = use_signal(move || CursorFollower::new(ease));

    use_effect(move || {
        if motion.reduced {
            return;
        }
        let selector = interactive_selector();
        dom::listen_window_scoped("mousemove", move |e: web_sys::MouseEvent| {
            let hovering = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(&selector).ok().flatten())
                .is_some();
            let mut c = cursor.write();
            c.pointer_moved(e.client_x() as f64, e.client_y() as f64);
            c.hovering = hovering;
        });
        dom::listen_window_scoped("mouseout", move |e: web_sys::MouseEvent| {
            // Leaving the window entirely
            if e.related_target().is_none() {
                cursor.write().pointer_left();
            }
        });
    });

    // Ease the outline toward the pointer
    use_future(move || async move {
        if motion.reduced {
            return;
        }
        loop {
            TimeoutFuture::new(FRAME_MS).await;
            let mut next = *cursor.peek();
            if next.step() {
                cursor.set(next);
            }
        }
    });

    if motion.reduced {
        return rsx! {};
    }

    let state = cursor();
    let dot = state.dot_style().to_inline();
    let outline = state.outline_style().to_inline();

    rsx! {
        div { class: "cursor-dot", style: "{dot}" }
        div { class: "cursor-outline", style: "{outline}" }
    }
}

#[component]
pub fn ParticleField(config: EffectsConfig) -> Element {
    let motion = use_context::<Motion>();
    // Positions are random, so generate once per mount
    let styles = use_hook(move || -> Vec<String> {
        if motion.reduced {
            return vec![];
        }
        particle_field(&config, dom::random_unit)
            .iter()
            .map(Particle::style)
            .map(|style| style.to_inline())
            .collect()
    });

    rsx! {
        div { class: "particles", aria_hidden: "true",
            for (i, style) in styles.iter().enumerate() {
                div { key: "{i}", class: "particle", style: "{style}" }
            }
        }
    }
}
