//! Page sections the interactive pieces hang off.
//!
//! Content is deliberately minimal; what matters are the classes and
//! handlers the controllers rely on.

use dioxus::prelude::*;
use folio_core::effects::{parallax_offset, parallax_style};
use folio_core::interaction::{CardKind, Surface, hover_style};
use folio_core::modal::{PROJECTS, ProjectCard, is_placeholder_href};
use folio_types::{AnimationIntent, EffectsConfig};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::effects::ParticleField;
use super::project_modal::use_project_modal;
use crate::app::{Motion, ScrollState};
use crate::dom;

const HERO_ID: &str = "home";

/// Element that hover patches are written to directly.
///
/// Animated cards carry inline styles set by the reveal pipeline, so the
/// `style` attribute is never rendered for them.
#[derive(Clone, Copy)]
struct HoverTarget {
    surface: Option<Surface>,
    node: Signal<Option<HtmlElement>>,
}

impl HoverTarget {
    fn mounted(&mut self, e: MountedEvent) {
        let data = e.data();
        let el = data
            .downcast::<web_sys::Element>()
            .and_then(|el| el.dyn_ref::<HtmlElement>())
            .cloned();
        self.node.set(el);
    }

    fn hover(&self, hovered: bool) {
        let (Some(surface), Some(el)) = (self.surface, (*self.node.peek()).clone()) else {
            return;
        };
        let patch = hover_style(surface, hovered, dom::is_settled(&el));
        dom::apply_style(&el, &patch);
    }
}

fn use_hover(surface: Option<Surface>) -> HoverTarget {
    let node = use_signal(|| None);
    HoverTarget { surface, node }
}

/// Link styled as a button, lifting on hover.
#[component]
fn HoverButton(class: &'static str, href: &'static str, label: &'static str) -> Element {
    let mut hover = use_hover(Surface::from_class_list(class));

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onmounted: move |e| hover.mounted(e),
            onmouseenter: move |_| hover.hover(true),
            onmouseleave: move |_| hover.hover(false),
            "{label}"
        }
    }
}

#[component]
pub fn Hero(effects: EffectsConfig) -> Element {
    let scroll = use_context::<ScrollState>();
    let motion = use_context::<Motion>();

    let y = (scroll.y)();
    let content_style = if motion.reduced {
        String::new()
    } else {
        dom::element_height(HERO_ID)
            .and_then(|height| parallax_offset(y, height, effects.parallax_speed))
            .map(|offset| parallax_style(offset).to_inline())
            .unwrap_or_default()
    };

    rsx! {
        section { id: HERO_ID, class: "hero",
            ParticleField { config: effects.clone() }
            div { class: "hero-content", style: "{content_style}",
                h1 { class: "hero-title fade-up", "Hi, I build things for the web" }
                p { class: "hero-subtitle fade-up", "Full-stack developer" }
                div { class: "hero-buttons fade-up",
                    HoverButton { class: "btn btn-primary", href: "#projects", label: "View My Work" }
                    HoverButton { class: "btn btn-secondary", href: "#contact", label: "Get In Touch" }
                }
            }
        }
    }
}

const SKILLS: [(&str, &str, AnimationIntent); 4] = [
    ("Frontend", "fa-solid fa-code", AnimationIntent::SlideLeft),
    ("Backend", "fa-solid fa-server", AnimationIntent::SlideUp),
    ("Databases", "fa-solid fa-database", AnimationIntent::SlideUp),
    ("DevOps", "fa-solid fa-cloud", AnimationIntent::SlideRight),
];

#[component]
fn SkillCard(name: &'static str, icon: &'static str, intent: AnimationIntent) -> Element {
    let mut hover = use_hover(Some(Surface::Card(CardKind::Skill)));
    let class = format!("skill-card {}", intent.class_name());

    rsx! {
        div {
            class: "{class}",
            onmounted: move |e| hover.mounted(e),
            onmouseenter: move |_| hover.hover(true),
            onmouseleave: move |_| hover.hover(false),
            i { class: "skill-icon {icon}" }
            h3 { "{name}" }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "skills",
            h2 { class: "section-title fade-up", "Skills" }
            div { class: "skills-grid",
                for (name, icon, intent) in SKILLS {
                    SkillCard { key: "{name}", name, icon, intent }
                }
            }
        }
    }
}

#[component]
fn ProjectCardView(card: ProjectCard, href: &'static str) -> Element {
    let mut hover = use_hover(Some(Surface::Card(CardKind::Project)));
    let mut modal = use_project_modal();
    let clicked = card.clone();

    rsx! {
        div {
            class: "project-card zoom-in",
            onmounted: move |e| hover.mounted(e),
            onmouseenter: move |_| hover.hover(true),
            onmouseleave: move |_| hover.hover(false),
            if let Some(image) = &card.image {
                img { class: "project-image", src: "{image}", alt: "{card.title}" }
            }
            div { class: "project-info",
                h3 { class: "project-title", "{card.title}" }
                p { class: "project-description", "{card.description}" }
                div { class: "project-tech",
                    for tech in card.technologies.iter() {
                        span { key: "{tech}", class: "tech-tag", "{tech}" }
                    }
                }
                a {
                    class: "project-link",
                    href: "{href}",
                    onclick: move |e| {
                        if is_placeholder_href(href) {
                            e.prevent_default();
                            modal.open(&clicked);
                        }
                    },
                    "View Details"
                }
            }
        }
    }
}

/// Cards for every catalog project, plus one that is not in the catalog and
/// falls back to the synthesized detail.
fn project_cards() -> Vec<ProjectCard> {
    let mut cards: Vec<ProjectCard> = PROJECTS
        .values()
        .map(|record| ProjectCard {
            title: record.title.to_string(),
            description: record.description.to_string(),
            technologies: record.technologies.iter().map(|t| t.to_string()).collect(),
            image: Some(record.image.to_string()),
        })
        .collect();
    cards.sort_by(|a, b| a.title.cmp(&b.title));
    cards.push(ProjectCard {
        title: "Portfolio Website".to_string(),
        description: "This site: a static page with interactivity compiled to WebAssembly."
            .to_string(),
        technologies: vec!["Rust".to_string(), "Dioxus".to_string(), "WebAssembly".to_string()],
        image: None,
    });
    cards
}

#[component]
pub fn Projects() -> Element {
    let cards = use_hook(project_cards);

    rsx! {
        section { id: "projects", class: "projects",
            h2 { class: "section-title fade-up", "Projects" }
            div { class: "projects-grid",
                for card in cards.iter() {
                    ProjectCardView { key: "{card.title}", card: card.clone(), href: "#" }
                }
            }
        }
    }
}
