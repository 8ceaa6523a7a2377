//! Navigation bar with mobile menu toggle and active-section tracking.

use dioxus::prelude::*;
use folio_core::nav::NavState;
use folio_types::NavConfig;

use crate::app::ScrollState;
use crate::dom;

const LINKS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[component]
pub fn NavBar(config: NavConfig) -> Element {
    let mut nav = use_signal(move || NavState::new(config));
    let scroll = use_context::<ScrollState>();

    // Re-evaluate on every scroll update
    use_effect(move || {
        let y = (scroll.y)();
        let sections = dom::section_bounds();
        nav.write().on_scroll(y, &sections);
    });

    let state = nav.read();
    let navbar_class = state.navbar_class();
    let menu_class = state.menu_class();
    let toggle_class = state.toggle_class();
    let menu_open = state.menu_open();
    let active = state.active_section().map(str::to_string);
    drop(state);

    rsx! {
        nav { class: "{navbar_class}",
            div { class: "nav-container",
                a { class: "nav-logo", href: "#home", "Portfolio" }
                ul { class: "{menu_class}",
                    for (id, label) in LINKS {
                        li { key: "{id}", class: "nav-item",
                            a {
                                class: link_class(active.as_deref() == Some(id)),
                                href: "#{id}",
                                onclick: move |_| nav.write().link_clicked(),
                                "{label}"
                            }
                        }
                    }
                }
                button {
                    class: "{toggle_class}",
                    aria_label: "Toggle navigation",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| {
                        nav.write().toggle_menu();
                    },
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}

fn link_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}
