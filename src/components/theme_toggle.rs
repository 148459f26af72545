//! Theme Toggle Component

use leptos::prelude::*;
use wedding_core::Theme;

use crate::context::use_app_context;

/// Light/dark switch in the navigation bar
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();

    let label = move || match ctx.theme.get() {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    };
    let icon = move || match ctx.theme.get() {
        Theme::Light => "fas fa-moon",
        Theme::Dark => "fas fa-sun",
    };

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            aria-label=label
            title=label
            on:click=move |_| ctx.toggle_theme()
        >
            <i class=icon></i>
        </button>
    }
}
