//! Back To Top Button

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn BackToTop() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_site_store();

    let class = move || if store.back_to_top_visible().get() { "back-to-top visible" } else { "back-to-top" };

    view! {
        <button
            id="backToTop"
            class=class
            aria-label="Back to top"
            on:click=move |_| commands::scroll_to_top(ctx.smooth_scroll())
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
