//! Site Configuration
//!
//! Everything that changes from one wedding to the next lives in `site.json`,
//! embedded at compile time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use wedding_core::guestbook::DEFAULT_GUESTBOOK_KEY;
use wedding_core::theme::DEFAULT_THEME_KEY;
use wedding_core::CoupleNames;

use crate::models::{FaqEntry, GalleryItem, NavLink, ScheduleEvent};

const SITE_JSON: &str = include_str!("../site.json");
const WEDDING_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageKeys {
    pub theme: String,
    pub guestbook: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_KEY.to_string(),
            guestbook: DEFAULT_GUESTBOOK_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub couple: CoupleNames,
    /// Local wall-clock time of the ceremony, `YYYY-MM-DDTHH:MM:SS`.
    pub wedding_date: String,
    pub date_label: String,
    pub venue: String,
    pub storage: StorageKeys,
    /// Where RSVPs are posted. `None` logs them to the console instead.
    pub rsvp_endpoint: Option<String>,
    pub music_src: Option<String>,
    pub nav: Vec<NavLink>,
    pub schedule: Vec<ScheduleEvent>,
    pub gallery: Vec<GalleryItem>,
    pub faq: Vec<FaqEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            couple: CoupleNames { first: "Rosendo".to_string(), second: "Inma".to_string() },
            wedding_date: "2026-03-21T12:30:00".to_string(),
            date_label: String::new(),
            venue: String::new(),
            storage: StorageKeys::default(),
            rsvp_endpoint: None,
            music_src: None,
            nav: Vec::new(),
            schedule: Vec::new(),
            gallery: Vec::new(),
            faq: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    /// Embedded configuration, or the defaults if it does not parse.
    pub fn load() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(config) => config,
            Err(e) => {
                log::error!(target: "config", "site.json is invalid, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn wedding_date(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.wedding_date.trim(), WEDDING_DATE_FORMAT).ok()
    }

    /// Trimmed, non-empty endpoint.
    pub fn rsvp_endpoint(&self) -> Option<&str> {
        self.rsvp_endpoint.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}
