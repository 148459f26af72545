//! Gallery Navigator
//!
//! Circular index over the fixed list of gallery images shown in the lightbox.

use serde::{Deserialize, Serialize};

use crate::accordion::Accordion;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Full-size image URL.
    #[serde(rename = "src")]
    pub image_ref: String,
    /// Thumbnail URL, falls back to the full image.
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(rename = "alt")]
    pub alt_text: String,
    #[serde(default)]
    pub caption: String,
}

impl GalleryItem {
    pub fn thumbnail(&self) -> &str {
        self.thumb.as_deref().unwrap_or(&self.image_ref)
    }
}

/// What a key press does while the lightbox is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Close,
    Prev,
    Next,
}

impl LightboxAction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryNavigator {
    items: Vec<GalleryItem>,
    index: usize,
}

impl GalleryNavigator {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items, index: 0 }
    }

    /// Keys that open a focused tile, the same ones that press a button.
    pub fn is_open_key(key: &str) -> bool {
        Accordion::is_activation_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&GalleryItem> {
        self.items.get(self.index)
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> Option<&GalleryItem> {
        if index < self.items.len() {
            self.index = index;
        }
        self.current()
    }

    pub fn next(&mut self) -> Option<&GalleryItem> {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
        self.current()
    }

    pub fn prev(&mut self) -> Option<&GalleryItem> {
        let len = self.items.len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(n: usize) -> GalleryItem {
        GalleryItem {
            image_ref: format!("images/gallery-{n}.jpg"),
            thumb: None,
            alt_text: format!("Photo {n}"),
            caption: String::new(),
        }
    }

    fn navigator(len: usize) -> GalleryNavigator {
        GalleryNavigator::new((0..len).map(item).collect())
    }

    #[test]
    fn next_wraps_to_start() {
        let mut nav = navigator(3);
        nav.open(2);
        assert_eq!(nav.next().map(|i| i.alt_text.as_str()), Some("Photo 0"));
    }

    #[test]
    fn prev_wraps_to_end() {
        let mut nav = navigator(3);
        assert_eq!(nav.prev().map(|i| i.alt_text.as_str()), Some("Photo 2"));
    }

    #[test]
    fn tiles_open_on_enter_and_space() {
        assert!(GalleryNavigator::is_open_key("Enter"));
        assert!(GalleryNavigator::is_open_key(" "));
        assert!(!GalleryNavigator::is_open_key("Escape"));
        assert!(!GalleryNavigator::is_open_key("a"));
    }

    #[test]
    fn open_ignores_out_of_range() {
        let mut nav = navigator(3);
        nav.open(1);
        nav.open(7);
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn empty_gallery_is_inert() {
        let mut nav = navigator(0);
        assert!(nav.next().is_none());
        assert!(nav.prev().is_none());
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn thumbnail_falls_back_to_full_image() {
        let mut it = item(1);
        assert_eq!(it.thumbnail(), "images/gallery-1.jpg");
        it.thumb = Some("images/thumb-1.jpg".into());
        assert_eq!(it.thumbnail(), "images/thumb-1.jpg");
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(LightboxAction::from_key("Escape"), Some(LightboxAction::Close));
        assert_eq!(LightboxAction::from_key("ArrowLeft"), Some(LightboxAction::Prev));
        assert_eq!(LightboxAction::from_key("ArrowRight"), Some(LightboxAction::Next));
        assert_eq!(LightboxAction::from_key("Enter"), None);
    }
}
