//! Reveal animations wired to the live document.
//!
//! Sweeps the document for intent-classed elements on mount and on every
//! resize, feeds `IntersectionObserver` entries into the [`RevealPipeline`],
//! and runs the resulting plans on timers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_core::reveal::{Candidate, ElementKey, KeyAllocator, RevealPipeline, RevealPlan};
use folio_types::{
    AnimationIntent, REVEAL_KEY_ATTR, REVEAL_SETTLED_ATTR, REVEALED_CLASS, RevealConfig,
    SETTLED_TRANSFORM,
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;

type Shared = Rc<RefCell<DomReveal>>;

/// Reveal state for the page. Created once by [`install`].
pub struct DomReveal {
    pipeline: RevealPipeline,
    keys: KeyAllocator,
    elements: HashMap<ElementKey, Element>,
    observer: Option<IntersectionObserver>,
}

/// Start revealing. Safe to call once per page.
pub fn install(config: RevealConfig, reduced_motion: bool) {
    let mut pipeline = RevealPipeline::new(config);
    pipeline.set_reduced_motion(reduced_motion);

    let shared: Shared = Rc::new(RefCell::new(DomReveal {
        pipeline,
        keys: KeyAllocator::default(),
        elements: HashMap::new(),
        observer: None,
    }));

    let observer = create_observer(&shared);
    if observer.is_none() {
        tracing::warn!("IntersectionObserver unavailable, elements will reveal on load");
    }
    shared.borrow_mut().observer = observer;

    sweep(&shared);

    let on_resize = shared.clone();
    dom::listen_window("resize", move |_: web_sys::Event| sweep(&on_resize));
}

fn create_observer(shared: &Shared) -> Option<IntersectionObserver> {
    let threshold = shared.borrow().pipeline.threshold();
    let handle = shared.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(key) = read_key(&target) else {
                    continue;
                };
                let plan = handle
                    .borrow_mut()
                    .pipeline
                    .on_intersection(key, entry.intersection_ratio());
                if let Some(plan) = plan {
                    observer.unobserve(&target);
                    run_plan(handle.clone(), target, plan);
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin("0px");

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    callback.forget();
    Some(observer)
}

/// Register every intent-classed element not seen before.
fn sweep(shared: &Shared) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = doc.query_selector_all(&AnimationIntent::selector()) else {
        return;
    };

    let mut state = shared.borrow_mut();
    let mut candidates = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let Some(intent) = AnimationIntent::from_class_list(&el.class_name()) else {
            continue;
        };
        let key = match read_key(&el) {
            Some(key) => key,
            None => {
                let key = state.keys.next_key();
                let _ = el.set_attribute(REVEAL_KEY_ATTR, &key.to_string());
                key
            }
        };
        candidates.push(Candidate {
            key,
            intent,
            offset_top: el.offset_top() as f64,
        });
        state.elements.entry(key).or_insert_with(|| el.into());
    }

    let fresh = state.pipeline.sweep(candidates);
    let plans: Vec<(Element, RevealPlan)> = match state.observer.clone() {
        Some(observer) => {
            for key in &fresh {
                if let Some(el) = state.elements.get(key) {
                    observer.observe(el);
                }
            }
            vec![]
        }
        None => {
            let pending = state.pipeline.reveal_all_pending();
            pending
                .into_iter()
                .filter_map(|plan| state.elements.get(&plan.key).cloned().map(|el| (el, plan)))
                .collect()
        }
    };
    drop(state);

    for (el, plan) in plans {
        run_plan(shared.clone(), el, plan);
    }
}

fn read_key(el: &Element) -> Option<ElementKey> {
    el.get_attribute(REVEAL_KEY_ATTR)
        .as_deref()
        .and_then(ElementKey::parse)
}

/// Wait out the stagger, reveal, then settle directional transforms.
fn run_plan(shared: Shared, el: Element, plan: RevealPlan) {
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(plan.delay_ms.round() as u32).await;
        if !el.is_connected() || !shared.borrow_mut().pipeline.mark_revealed(plan.key) {
            return;
        }
        let _ = el.class_list().add_1(REVEALED_CLASS);

        let Some(settle_ms) = plan.settle_after_ms else {
            return;
        };
        TimeoutFuture::new(settle_ms).await;
        if el.is_connected()
            && shared.borrow_mut().pipeline.mark_settled(plan.key)
            && let Some(html) = el.dyn_ref::<HtmlElement>()
        {
            let _ = html.style().set_property("transform", SETTLED_TRANSFORM);
            let _ = html.set_attribute(REVEAL_SETTLED_ATTR, "");
        }
    });
}
