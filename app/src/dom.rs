//! Thin helpers over `web-sys`.
//!
//! Every helper tolerates a missing window, document or element and quietly
//! does nothing, so callers never have to.

use std::rc::Rc;

use dioxus::core::{Runtime, ScopeId};
use folio_core::effects::REDUCED_MOTION_QUERY;
use folio_core::nav::SectionBounds;
use folio_types::{REVEAL_SETTLED_ATTR, StylePatch};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Window Listeners
// ─────────────────────────────────────────────────────────────────────────────

/// Attach a listener to `window` for the lifetime of the page.
pub fn listen_window<E, F>(event: &str, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Attach a `window` listener whose handler may touch Dioxus state.
///
/// Must be called from inside the Dioxus runtime (an effect or hook).
pub fn listen_window_scoped<E, F>(event: &str, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    listen_window(event, scoped(Runtime::try_current(), handler));
}

/// Wrap a handler so it runs inside `runtime`, at the root scope.
///
/// Browser callbacks fire with no Dioxus runtime on the stack, where
/// `spawn` and signal subscriptions panic.
pub fn scoped<E, F>(runtime: Option<Rc<Runtime>>, handler: F) -> impl FnMut(E) + 'static
where
    E: 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    if runtime.is_none() {
        tracing::warn!("window listener bound outside the Dioxus runtime");
    }
    move |event: E| match &runtime {
        Some(runtime) => runtime.in_scope(ScopeId::ROOT, || handler(event)),
        None => handler(event),
    }
}

/// Route uncaught script errors and unhandled rejections to the log.
pub fn install_error_logging() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
    listen_window("error", |e: web_sys::ErrorEvent| {
        tracing::error!(
            message = %e.message(),
            file = %e.filename(),
            line = e.lineno(),
            "uncaught script error"
        );
    });
    listen_window("unhandledrejection", |e: web_sys::PromiseRejectionEvent| {
        tracing::error!(reason = ?e.reason(), "unhandled promise rejection");
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Measurements
// ─────────────────────────────────────────────────────────────────────────────

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// `(scroll_top, scroll_height, client_height)` of the document element.
pub fn scroll_metrics() -> (f64, f64, f64) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return (0.0, 0.0, 0.0);
    };
    (
        scroll_y(),
        root.scroll_height() as f64,
        root.client_height() as f64,
    )
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Bounds of every `section[id]`, for active-link tracking.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return vec![];
    };
    let Ok(nodes) = doc.query_selector_all("section[id]") else {
        return vec![];
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
        .collect()
}

pub fn element_height(id: &str) -> Option<f64> {
    let doc = web_sys::window()?.document()?;
    let el = doc.get_element_by_id(id)?;
    Some(el.dyn_ref::<web_sys::HtmlElement>()?.offset_height() as f64)
}

/// Uniform value in `[0, 1)` from the platform RNG.
pub fn random_unit() -> f64 {
    getrandom::u32()
        .map(|v| v as f64 / (u32::MAX as f64 + 1.0))
        .unwrap_or(0.5)
}

// ─────────────────────────────────────────────────────────────────────────────
// Mutations
// ─────────────────────────────────────────────────────────────────────────────

/// Apply a patch to a live element. Empty values remove the property.
pub fn apply_style(el: &web_sys::HtmlElement, patch: &StylePatch) {
    let style = el.style();
    for (property, value) in patch.iter() {
        let _ = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
    }
}

/// Whether the reveal pipeline has settled this element's transform.
pub fn is_settled(el: &web_sys::Element) -> bool {
    el.has_attribute(REVEAL_SETTLED_ATTR)
}

/// Lock or restore page scrolling while an overlay is shown.
pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let patch = StylePatch::new().set("overflow", if locked { "hidden" } else { "" });
        apply_style(&body, &patch);
    }
}
