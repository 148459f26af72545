//! Lightbox Component
//!
//! Full-size viewer over the gallery. Arrow keys step through images,
//! Escape or a click on the backdrop closes it.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use web_sys::MouseEvent;
use wedding_core::{GalleryNavigator, LightboxAction};

use crate::commands;
use crate::components::tile_id;

#[component]
pub fn Lightbox(
    nav: RwSignal<GalleryNavigator>,
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    let close_ref = NodeRef::<html::Button>::new();

    let close = move || {
        if !open.get_untracked() {
            return;
        }
        set_open.set(false);
        commands::set_scroll_locked(false);
        commands::focus_element(&tile_id(nav.with_untracked(GalleryNavigator::index)));
    };
    let prev = move || nav.update(|n| {
        n.prev();
    });
    let next = move || nav.update(|n| {
        n.next();
    });

    // Lock the page and move focus into the dialog once it is shown
    Effect::new(move |_| {
        if open.get() {
            commands::set_scroll_locked(true);
            request_animation_frame(move || {
                if let Some(button) = close_ref.get_untracked() {
                    let _ = button.focus();
                }
            });
        }
    });

    let _ = window_event_listener(ev::keydown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        match LightboxAction::from_key(&ev.key()) {
            Some(LightboxAction::Close) => close(),
            Some(LightboxAction::Prev) => prev(),
            Some(LightboxAction::Next) => next(),
            None => {}
        }
    });

    let src = move || nav.with(|n| n.current().map(|item| item.image_ref.clone()).unwrap_or_default());
    let alt = move || nav.with(|n| n.current().map(|item| item.alt_text.clone()).unwrap_or_default());
    let caption = move || nav.with(|n| n.current().map(|item| item.caption.clone()).unwrap_or_default());
    let position = move || nav.with(|n| format!("{} / {}", n.index() + 1, n.len()));

    view! {
        <div
            id="lightbox"
            class=move || if open.get() { "lightbox active" } else { "lightbox" }
            role="dialog"
            aria-modal="true"
            aria-label="Image viewer"
            hidden=move || !open.get()
            on:click=move |ev: MouseEvent| {
                if ev.target() == ev.current_target() {
                    close();
                }
            }
        >
            <button node_ref=close_ref class="lightbox-close" aria-label="Close" on:click=move |_| close()>
                <i class="fas fa-times"></i>
            </button>
            <button class="lightbox-prev" aria-label="Previous image" on:click=move |_| prev()>
                <i class="fas fa-chevron-left"></i>
            </button>
            <figure class="lightbox-content">
                <img id="lightboxImage" src=src alt=alt />
                <figcaption id="lightboxCaption">{caption}</figcaption>
                <span class="lightbox-counter">{position}</span>
            </figure>
            <button class="lightbox-next" aria-label="Next image" on:click=move |_| next()>
                <i class="fas fa-chevron-right"></i>
            </button>
        </div>
    }
}
