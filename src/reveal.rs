//! Scroll Reveal
//!
//! Adds `visible` to `.reveal-*` elements as they enter the viewport. Each
//! element is revealed once, staggered by its position in the batch.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REVEAL_SELECTOR: &str = ".reveal-up, .reveal-left, .reveal-right, .reveal-text";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const STAGGER_MS: u32 = 100;

fn reveal_targets() -> Vec<Element> {
    let Some(nodes) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.query_selector_all(REVEAL_SELECTOR).ok())
    else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Observe every reveal target on the page. Under reduced motion they are shown at once.
pub fn observe_reveals(reduced_motion: bool) {
    let targets = reveal_targets();
    if reduced_motion {
        for el in &targets {
            let _ = el.class_list().add_1("visible");
        }
        return;
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut shown = 0u32;
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                Timeout::new(shown * STAGGER_MS, move || {
                    let _ = target.class_list().add_1("visible");
                })
                .forget();
                shown += 1;
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &targets {
                observer.observe(el);
            }
            log::debug!(target: "reveal", "observing {} elements", targets.len());
        }
        Err(e) => {
            log::warn!(target: "reveal", "IntersectionObserver unavailable ({:?}), revealing everything", e);
            for el in &targets {
                let _ = el.class_list().add_1("visible");
            }
        }
    }
    on_intersect.forget();
}
