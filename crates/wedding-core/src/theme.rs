//! Theme preference and the name order that follows it.

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageError};

pub const DEFAULT_THEME_KEY: &str = "weddingTheme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Saved preference first, then the system preference, then light.
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
        match saved.and_then(Self::parse) {
            Some(theme) => theme,
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }

    pub fn load(store: &impl KeyValueStore, key: &str, prefers_dark: bool) -> Self {
        Self::resolve(store.get(key).as_deref(), prefers_dark)
    }

    pub fn save(self, store: &impl KeyValueStore, key: &str) -> Result<(), StorageError> {
        store.set(key, self.as_str())
    }
}

/// The couple's names. Light mode leads with `first`, dark mode with `second`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoupleNames {
    pub first: String,
    pub second: String,
}

impl CoupleNames {
    pub fn ordered(&self, theme: Theme) -> (&str, &str) {
        match theme {
            Theme::Light => (&self.first, &self.second),
            Theme::Dark => (&self.second, &self.first),
        }
    }

    pub fn initials(&self, theme: Theme) -> (String, String) {
        let (a, b) = self.ordered(theme);
        (initial(a), initial(b))
    }
}

fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}
