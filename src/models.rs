//! Frontend Models
//!
//! Page content described in `site.json`.

use serde::{Deserialize, Serialize};

pub use wedding_core::GalleryItem;

/// Navigation entry pointing at a section id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: String,
    pub label: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// FAQ item. The answer is Markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}
