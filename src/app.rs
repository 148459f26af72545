//! Wedding Site App
//!
//! Single-page layout: navigation, sections, and page-wide listeners.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use wedding_core::scroll::{Throttle, ACTIVE_SECTION_THROTTLE_MS};
use wedding_core::Theme;

use crate::commands::{self, LocalStore};
use crate::components::{
    BackToTop, ConfettiLayer, FaqAccordion, FallingPetals, Gallery, GuestbookSection, Hero, MusicToggle, NavBar,
    RsvpForm, Schedule,
};
use crate::config::SiteConfig;
use crate::context::AppContext;
use crate::reveal;
use crate::store::{store_apply_scroll, store_set_tab_hidden, store_update_active_section, SiteState};

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();
    let reduced_motion = commands::prefers_reduced_motion();

    let initial_theme = Theme::load(&LocalStore::open(), &config.storage.theme, commands::prefers_dark());
    commands::apply_theme(initial_theme);
    log::debug!(target: "app", "theme {}, reduced motion {}", initial_theme.as_str(), reduced_motion);

    let footer_names = format!("{} & {}", config.couple.first, config.couple.second);
    let footer_date = config.date_label.clone();

    // Provide context to all children
    provide_context(AppContext::new(config, reduced_motion, signal(initial_theme)));
    let store = Store::new(SiteState::default());
    provide_context(store);

    // Nav background, back-to-top and the active link all follow the scroll position
    let throttle = StoredValue::new(Throttle::new(ACTIVE_SECTION_THROTTLE_MS));
    let on_scroll = move || {
        let y = commands::scroll_y();
        store_apply_scroll(&store, y);

        let mut ready = false;
        throttle.update_value(|t| ready = t.ready(js_sys::Date::now()));
        if ready {
            store_update_active_section(&store, &commands::section_bounds(), y);
        }
    };
    let _ = window_event_listener(ev::scroll, move |_| on_scroll());

    commands::bind_visibility_change(move |hidden| store_set_tab_hidden(&store, hidden));

    // Sections exist once the first frame is painted
    request_animation_frame(move || {
        on_scroll();
        reveal::observe_reveals(reduced_motion);
    });

    view! {
        <NavBar />
        <main>
            <Hero />
            <Schedule />
            <Gallery />
            <FaqAccordion />
            <RsvpForm />
            <GuestbookSection />
        </main>
        <footer class="site-footer">
            <p class="footer-names">{footer_names}</p>
            <p class="footer-date">{footer_date}</p>
        </footer>
        <BackToTop />
        <MusicToggle />
        <FallingPetals />
        <ConfettiLayer />
    }
}
