//! Navigation Bar Component
//!
//! Fixed top bar with section links, mobile menu and theme toggle.

use leptos::prelude::*;

use crate::commands;
use crate::components::ThemeToggle;
use crate::context::{use_app_context, AppContext};
use crate::store::{store_set_menu_open, use_site_store, SiteStateStoreFields, SiteStore};

/// Smooth-scroll to a section instead of jumping; closes the mobile menu.
fn follow_anchor(ctx: AppContext, store: SiteStore, id: &str, ev: web_sys::MouseEvent) {
    if commands::scroll_to_section(id, ctx.smooth_scroll()) {
        ev.prevent_default();
    }
    if store.menu_open().get_untracked() {
        store_set_menu_open(&store, false);
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_site_store();
    let links = ctx.with_config(|c| c.nav.clone());
    let names = StoredValue::new(ctx.with_config(|c| c.couple.clone()));

    let monogram = move || {
        let (a, b) = names.with_value(|n| n.initials(ctx.theme.get()));
        format!("{} & {}", a, b)
    };
    let nav_class = move || if store.nav_scrolled().get() { "main-nav scrolled" } else { "main-nav" };
    let menu_class = move || if store.menu_open().get() { "nav-menu open" } else { "nav-menu" };

    view! {
        <nav id="mainNav" class=nav_class>
            <a href="#home" class="nav-logo" on:click=move |ev| follow_anchor(ctx, store, "home", ev)>
                {monogram}
            </a>

            <button
                id="navToggle"
                class="nav-toggle"
                aria-controls="navMenu"
                aria-label="Toggle navigation"
                aria-expanded=move || store.menu_open().get().to_string()
                on:click=move |_| store_set_menu_open(&store, !store.menu_open().get_untracked())
            >
                <span class="hamburger"></span>
            </button>

            <ul id="navMenu" class=menu_class>
                {links.into_iter().map(|link| {
                    let href = link.href();
                    let id = link.id.clone();
                    let id_for_class = link.id;
                    let link_class = move || {
                        if store.active_section().get().as_deref() == Some(id_for_class.as_str()) {
                            "active"
                        } else {
                            ""
                        }
                    };
                    view! {
                        <li>
                            <a href=href class=link_class on:click=move |ev| follow_anchor(ctx, store, &id, ev)>
                                {link.label}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <ThemeToggle />
        </nav>
    }
}
