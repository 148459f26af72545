//! Gallery Grid Component

use leptos::prelude::*;
use web_sys::KeyboardEvent;
use wedding_core::GalleryNavigator;

use crate::components::Lightbox;
use crate::context::use_app_context;

/// DOM id of a gallery tile, used to hand focus back after the lightbox closes
pub fn tile_id(index: usize) -> String {
    format!("gallery-item-{}", index)
}

#[component]
pub fn Gallery() -> impl IntoView {
    let ctx = use_app_context();
    let items = ctx.with_config(|c| c.gallery.clone());
    if items.is_empty() {
        return ().into_any();
    }

    let nav = RwSignal::new(GalleryNavigator::new(items.clone()));
    let (open, set_open) = signal(false);

    let open_at = move |index: usize| {
        nav.update(|n| {
            n.open(index);
        });
        set_open.set(true);
    };

    view! {
        <section id="gallery" class="gallery">
            <h2 class="section-title reveal-up">"Our Story in Pictures"</h2>
            <div class="gallery-grid">
                {items.into_iter().enumerate().map(|(i, item)| {
                    let label = format!("View image: {}", item.alt_text);
                    let thumb = item.thumbnail().to_string();
                    let caption = (!item.caption.is_empty()).then(|| {
                        let caption = item.caption.clone();
                        view! { <figcaption>{caption}</figcaption> }
                    });
                    view! {
                        <figure
                            id=tile_id(i)
                            class="gallery-item reveal-up"
                            role="button"
                            tabindex="0"
                            aria-label=label
                            on:click=move |_| open_at(i)
                            on:keydown=move |ev: KeyboardEvent| {
                                if GalleryNavigator::is_open_key(&ev.key()) {
                                    ev.prevent_default();
                                    open_at(i);
                                }
                            }
                        >
                            <img src=thumb alt=item.alt_text loading="lazy" />
                            {caption}
                        </figure>
                    }
                }).collect_view()}
            </div>
            <Lightbox nav=nav open=open set_open=set_open />
        </section>
    }
    .into_any()
}
