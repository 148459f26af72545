//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use wedding_core::effects::ConfettiPiece;
use wedding_core::Theme;

use crate::commands::{self, LocalStore};
use crate::config::SiteConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Site configuration, read-only after start-up
    pub config: StoredValue<SiteConfig>,
    /// User asked the OS for reduced motion; decorative effects stay off
    pub reduced_motion: bool,
    /// Current theme - read
    pub theme: ReadSignal<Theme>,
    /// Current theme - write
    set_theme: WriteSignal<Theme>,
    /// Confetti pieces currently in flight
    pub confetti: RwSignal<Vec<ConfettiPiece>>,
}

impl AppContext {
    pub fn new(config: SiteConfig, reduced_motion: bool, theme: (ReadSignal<Theme>, WriteSignal<Theme>)) -> Self {
        Self {
            config: StoredValue::new(config),
            reduced_motion,
            theme: theme.0,
            set_theme: theme.1,
            confetti: RwSignal::new(Vec::new()),
        }
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&SiteConfig) -> R) -> R {
        self.config.with_value(f)
    }

    /// Flip the theme and remember the choice
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
        commands::apply_theme(next);

        let key = self.with_config(|c| c.storage.theme.clone());
        if let Err(e) = next.save(&LocalStore::open(), &key) {
            log::warn!(target: "theme", "could not save theme preference: {e}");
        }
    }

    /// Smooth scrolling unless the user prefers reduced motion
    pub fn smooth_scroll(&self) -> bool {
        !self.reduced_motion
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
