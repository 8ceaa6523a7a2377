//! Project detail modal opened from placeholder project links.

use dioxus::prelude::*;
use folio_core::modal::{CloseReason, ModalPhase, ModalPresenter, ProjectCard};
use gloo_timers::future::TimeoutFuture;

use crate::dom;

/// Global manager for the project modal
#[derive(Clone, Copy)]
pub struct ProjectModalManager {
    presenter: Signal<ModalPresenter>,
    fade_ms: u32,
}

impl ProjectModalManager {
    pub fn new(fade_ms: u32) -> Self {
        Self {
            presenter: Signal::new(ModalPresenter::new()),
            fade_ms,
        }
    }

    /// Open the modal for a card. Ignored while another modal is showing.
    pub fn open(&mut self, card: &ProjectCard) {
        if self.presenter.write().open(card).is_ok() {
            dom::set_scroll_locked(true);
        }
    }

    /// Fade out, then remove the overlay and restore scrolling
    pub fn close(&mut self, reason: CloseReason) {
        let Ok(generation) = self.presenter.write().begin_close(reason) else {
            return;
        };
        let mut presenter = self.presenter;
        let fade_ms = self.fade_ms;
        spawn(async move {
            TimeoutFuture::new(fade_ms).await;
            if presenter.write().finish_close(generation) {
                dom::set_scroll_locked(false);
            }
        });
    }
}

/// Initialize project modal provider at app root
pub fn use_project_modal_provider(fade_ms: u32) -> ProjectModalManager {
    use_context_provider(move || ProjectModalManager::new(fade_ms))
}

/// Get the project modal manager from context
pub fn use_project_modal() -> ProjectModalManager {
    use_context::<ProjectModalManager>()
}

/// Project modal component
#[component]
pub fn ProjectModal() -> Element {
    let mut manager = use_project_modal();

    // Escape closes from anywhere on the page
    use_effect(move || {
        dom::listen_window_scoped("keydown", move |e: web_sys::KeyboardEvent| {
            if e.key() == "Escape" {
                manager.close(CloseReason::Escape);
            }
        });
    });

    let presenter = manager.presenter.read();
    let (detail, phase_class) = match presenter.phase() {
        ModalPhase::Closed => return rsx! {},
        ModalPhase::Open(detail) => (detail, "project-modal active"),
        ModalPhase::Closing(detail) => (detail, "project-modal closing"),
    };

    rsx! {
        div {
            class: "{phase_class}",
            onclick: move |_| manager.close(CloseReason::Backdrop),
            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                // Header
                div { class: "modal-header",
                    h2 { "{detail.title}" }
                    button {
                        class: "modal-close",
                        aria_label: "Close",
                        onclick: move |_| manager.close(CloseReason::CloseButton),
                        i { class: "fa-solid fa-xmark" }
                    }
                }

                // Content
                div { class: "modal-body",
                    if let Some(image) = &detail.image {
                        img { class: "modal-image", src: "{image}", alt: "{detail.title}" }
                    }
                    p { class: "modal-description", "{detail.description}" }

                    div { class: "modal-tech",
                        for tech in detail.technologies.iter() {
                            span { key: "{tech}", class: "tech-tag", "{tech}" }
                        }
                    }

                    h3 { "Overview" }
                    p { "{detail.overview}" }

                    h3 { "Key Features" }
                    ul { class: "modal-features",
                        for feature in detail.features.iter() {
                            li { key: "{feature}", "{feature}" }
                        }
                    }

                    h3 { "Challenges & Solutions" }
                    p { "{detail.challenges}" }
                }

                // Links
                div { class: "modal-links",
                    if detail.has_demo() {
                        a {
                            class: "btn btn-primary",
                            href: "{detail.demo_url}",
                            target: "_blank",
                            rel: "noopener",
                            i { class: "fa-solid fa-arrow-up-right-from-square" }
                            " Live Demo"
                        }
                    }
                    if detail.has_code() {
                        a {
                            class: "btn btn-secondary",
                            href: "{detail.code_url}",
                            target: "_blank",
                            rel: "noopener",
                            i { class: "fa-brands fa-github" }
                            " View Code"
                        }
                    }
                }
            }
        }
    }
}
