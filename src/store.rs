//! Global Site State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use wedding_core::scroll::{self, SectionBounds};

use crate::commands;

/// Page-wide UI state driven by scrolling and visibility
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Navigation bar switches to its solid background
    pub nav_scrolled: bool,
    /// Back-to-top button is shown
    pub back_to_top_visible: bool,
    /// Section the viewer is currently reading
    pub active_section: Option<String>,
    /// Mobile navigation menu is open
    pub menu_open: bool,
    /// Browser tab is in the background
    pub tab_hidden: bool,
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Update the scroll-threshold flags
pub fn store_apply_scroll(store: &SiteStore, scroll_y: f64) {
    let scrolled = scroll::nav_scrolled(scroll_y);
    if store.nav_scrolled().get_untracked() != scrolled {
        store.nav_scrolled().set(scrolled);
    }
    let back_to_top = scroll::back_to_top_visible(scroll_y);
    if store.back_to_top_visible().get_untracked() != back_to_top {
        store.back_to_top_visible().set(back_to_top);
    }
}

/// Recompute which section is under the probe line
pub fn store_update_active_section(store: &SiteStore, sections: &[SectionBounds], scroll_y: f64) {
    if let Some(id) = scroll::active_section(sections, scroll_y) {
        if store.active_section().get_untracked().as_deref() != Some(id) {
            store.active_section().set(Some(id.to_string()));
        }
    }
}

/// Open or close the mobile menu, locking page scroll while it is open
pub fn store_set_menu_open(store: &SiteStore, open: bool) {
    store.menu_open().set(open);
    commands::set_scroll_locked(open);
}

pub fn store_set_tab_hidden(store: &SiteStore, hidden: bool) {
    store.tab_hidden().set(hidden);
    commands::set_body_class("tab-hidden", hidden);
}
