//! Document Commands
//!
//! Page-level DOM access that sits outside any one component. Missing
//! elements mean the feature is absent on this page and are ignored.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use wedding_core::scroll::{self, SectionBounds};
use wedding_core::Theme;

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

fn body() -> Option<web_sys::HtmlElement> {
    document()?.body()
}

fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

/// Mirror the theme onto `<html data-theme>` for the stylesheet.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = body() {
        let _ = if on {
            body.class_list().add_1(class)
        } else {
            body.class_list().remove_1(class)
        };
    }
}

/// Stop the page behind an overlay (mobile menu, lightbox) from scrolling.
pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

/// Geometry of every `section[id]` and `header[id]` on the page.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(nodes) = document().and_then(|doc| doc.query_selector_all("section[id], header[id]").ok()) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}

fn scroll_window_to(top: f64, smooth: bool) {
    if let Some(win) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scroll so the section clears the fixed header. Returns false if there is no such section.
pub fn scroll_to_section(id: &str, smooth: bool) -> bool {
    let Some(target) = document().and_then(|doc| doc.get_element_by_id(id)) else {
        return false;
    };
    let top = target.get_bounding_client_rect().top();
    scroll_window_to(scroll::anchor_target(top, scroll_y()), smooth);
    true
}

pub fn scroll_to_top(smooth: bool) {
    scroll_window_to(0.0, smooth);
}

pub fn focus_element(id: &str) {
    if let Some(el) = document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Call `on_change(hidden)` whenever the tab is hidden or shown again.
pub fn bind_visibility_change(on_change: impl Fn(bool) + 'static) {
    let Some(doc) = document() else { return };
    let doc_for_cb = doc.clone();
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        on_change(doc_for_cb.hidden());
    });
    let _ = doc.add_event_listener_with_callback("visibilitychange", listener.as_ref().unchecked_ref());
    listener.forget();
}
