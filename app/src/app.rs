//! Root component and page-wide shared state.

use dioxus::prelude::*;
use folio_core::effects::scroll_progress;
use folio_types::SiteConfig;

use crate::components::{
    ContactSection, CustomCursor, Hero, NavBar, ProjectModal, Projects, ScrollProgress, Skills,
    ToastFrame, use_project_modal_provider, use_toast_provider,
};
use crate::{dom, reveal};

const SITE_CONFIG: &str = include_str!("../site.toml");

/// Latest window scroll measurements, updated by a single listener.
#[derive(Clone, Copy)]
pub struct ScrollState {
    pub y: Signal<f64>,
    pub progress: Signal<f64>,
}

/// Whether the visitor asked for reduced motion. Read once on load.
#[derive(Clone, Copy)]
pub struct Motion {
    pub reduced: bool,
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| folio_core::config::load_or_default(SITE_CONFIG));
    let motion = use_context_provider(|| Motion {
        reduced: dom::prefers_reduced_motion(),
    });
    let mut scroll = use_context_provider(|| ScrollState {
        y: Signal::new(dom::scroll_y()),
        progress: Signal::new(0.0),
    });
    use_toast_provider(&config.notifications);
    use_project_modal_provider(config.modal.fade_ms);

    // Scroll listener shared by the navbar, progress bar and hero parallax
    use_effect(move || {
        dom::listen_window_scoped("scroll", move |_: web_sys::Event| {
            let (top, height, client) = dom::scroll_metrics();
            scroll.y.set(top);
            scroll.progress.set(scroll_progress(top, height, client));
        });
    });

    // Sections are in the DOM once the first render has been applied
    let reveal_config = config.reveal.clone();
    use_effect(move || {
        reveal::install(reveal_config.clone(), motion.reduced);
    });

    let SiteConfig {
        form, nav, effects, ..
    } = config;
    let cursor_ease = effects.cursor_ease;

    rsx! {
        ScrollProgress {}
        CustomCursor { ease: cursor_ease }
        NavBar { config: nav }
        main {
            Hero { effects }
            Skills {}
            Projects {}
            ContactSection { submit_delay_ms: form.submit_delay_ms }
        }
        ProjectModal {}
        ToastFrame {}
    }
}
