//! Guestbook Store
//!
//! Append-only message list persisted as one JSON array under a single key.
//! Reads are whole-collection and skip what they cannot parse; writes are
//! read-modify-write over the raw array so unreadable entries are kept. One writer is assumed: two tabs appending at once keep
//! whichever write lands last.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::clock::Clock;
use crate::storage::{KeyValueStore, StorageError};

pub const DEFAULT_GUESTBOOK_KEY: &str = "weddingGuestbook";
pub const EMPTY_PLACEHOLDER: &str = "Be the first to leave a message!";

const DATE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookEntry {
    #[serde(rename = "name")]
    pub author: String,
    pub message: String,
    #[serde(rename = "date")]
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuestbookError {
    #[error("name and message are both required")]
    EmptyField,
    #[error("could not encode guestbook: {0}")]
    Encode(String),
    #[error("stored guestbook is unreadable, refusing to overwrite it")]
    Unreadable,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One message ready for display. Text fields are already HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub author_html: String,
    pub message_html: String,
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestbookView {
    Empty { placeholder: &'static str },
    Messages(Vec<RenderedEntry>),
}

pub struct Guestbook<S, C> {
    store: S,
    clock: C,
    key: String,
}

impl<S: KeyValueStore, C: Clock> Guestbook<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self::with_key(store, clock, DEFAULT_GUESTBOOK_KEY)
    }

    pub fn with_key(store: S, clock: C, key: impl Into<String>) -> Self {
        Self { store, clock, key: key.into() }
    }

    /// Stored array as raw JSON values. `None` when the data is not an array.
    fn load_raw(&self) -> Option<Vec<Value>> {
        let Some(raw) = self.store.get(&self.key) else {
            return Some(Vec::new());
        };
        match serde_json::from_str::<Option<Vec<Value>>>(&raw) {
            Ok(values) => Some(values.unwrap_or_default()),
            Err(e) => {
                log::warn!(target: "guestbook", "guestbook data is not a list: {e}");
                None
            }
        }
    }

    /// Readable entries in storage order. Entries that do not parse are
    /// skipped here but stay in storage.
    pub fn load(&self) -> Vec<GuestbookEntry> {
        self.load_raw().map(|values| readable_entries(&values)).unwrap_or_default()
    }

    /// Append a message and persist the whole collection.
    ///
    /// Blank names or messages are rejected without touching storage, and so
    /// is a stored value that is not a list.
    pub fn append(&self, author: &str, message: &str) -> Result<Vec<GuestbookEntry>, GuestbookError> {
        let author = author.trim();
        let message = message.trim();
        if author.is_empty() || message.is_empty() {
            return Err(GuestbookError::EmptyField);
        }

        let mut values = self.load_raw().ok_or(GuestbookError::Unreadable)?;
        let entry = GuestbookEntry {
            author: author.to_string(),
            message: message.to_string(),
            submitted_at: self.clock.now(),
        };
        values.push(serde_json::to_value(&entry).map_err(|e| GuestbookError::Encode(e.to_string()))?);

        let raw = serde_json::to_string(&values).map_err(|e| GuestbookError::Encode(e.to_string()))?;
        self.store.set(&self.key, &raw)?;
        log::debug!(target: "guestbook", "stored message #{}", values.len());
        Ok(readable_entries(&values))
    }
}

fn readable_entries(values: &[Value]) -> Vec<GuestbookEntry> {
    let entries: Vec<GuestbookEntry> = values
        .iter()
        .filter_map(|value| serde_json::from_value(value.clone()).ok())
        .collect();
    if entries.len() < values.len() {
        log::warn!(target: "guestbook", "skipping {} unreadable guestbook entries", values.len() - entries.len());
    }
    entries
}

/// Newest-first display records. Storage order is left untouched.
///
/// `offset_at` gives the viewer's UTC offset in force at each entry's time.
pub fn render(entries: &[GuestbookEntry], offset_at: impl Fn(&DateTime<Utc>) -> FixedOffset) -> GuestbookView {
    if entries.is_empty() {
        return GuestbookView::Empty { placeholder: EMPTY_PLACEHOLDER };
    }

    let mut sorted: Vec<&GuestbookEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

    GuestbookView::Messages(
        sorted
            .into_iter()
            .map(|entry| RenderedEntry {
                author_html: escape_html(&entry.author),
                message_html: escape_html(&entry.message),
                date_label: format_date(&entry.submitted_at, &offset_at(&entry.submitted_at)),
            })
            .collect(),
    )
}

pub fn format_date(at: &DateTime<Utc>, offset: &FixedOffset) -> String {
    at.with_timezone(offset).format(DATE_FORMAT).to_string()
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::MemoryStore;

    const MARCH_21_2026: i64 = 1_774_096_200_000; // 2026-03-21T12:30:00Z

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn empty_storage_loads_nothing_and_renders_placeholder() {
        let book = Guestbook::new(MemoryStore::new(), ManualClock::new(MARCH_21_2026));
        let entries = book.load();
        assert!(entries.is_empty());
        assert_eq!(render(&entries, |_| utc()), GuestbookView::Empty { placeholder: EMPTY_PLACEHOLDER });
    }

    #[test]
    fn corrupt_storage_is_treated_as_empty() {
        for raw in ["{not json", "null", r#"{"name":"x"}"#] {
            let store = MemoryStore::with_entry(DEFAULT_GUESTBOOK_KEY, raw);
            let book = Guestbook::new(&store, ManualClock::new(0));
            assert!(book.load().is_empty(), "raw = {raw}");
        }
    }

    #[test]
    fn unreadable_entries_survive_an_append() {
        let raw = r#"[
            {"name":"Ana","message":"One","date":"2026-03-20T10:00:00Z"},
            {"name":"Luis","message":"Two","date":"2026-03-20T11:00:00Z"},
            {"name":"Old","message":"Three","date":"March 21, 2026"}
        ]"#;
        let store = MemoryStore::with_entry(DEFAULT_GUESTBOOK_KEY, raw);
        let book = Guestbook::new(&store, ManualClock::new(MARCH_21_2026));
        assert_eq!(book.load().len(), 2);

        let entries = book.append("Eve", "new").unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].author, "Eve");

        let stored: Vec<Value> = serde_json::from_str(&store.get(DEFAULT_GUESTBOOK_KEY).unwrap()).unwrap();
        assert_eq!(stored.len(), 4);
        assert_eq!(stored[2]["date"], "March 21, 2026");
    }

    #[test]
    fn append_refuses_to_replace_data_that_is_not_a_list() {
        for raw in ["{not json", r#"{"name":"x"}"#] {
            let store = MemoryStore::with_entry(DEFAULT_GUESTBOOK_KEY, raw);
            let book = Guestbook::new(&store, ManualClock::new(MARCH_21_2026));
            assert_eq!(book.append("Eve", "new"), Err(GuestbookError::Unreadable));
            assert_eq!(store.get(DEFAULT_GUESTBOOK_KEY).as_deref(), Some(raw));
        }
    }

    #[test]
    fn null_storage_appends_like_empty() {
        let store = MemoryStore::with_entry(DEFAULT_GUESTBOOK_KEY, "null");
        let book = Guestbook::new(&store, ManualClock::new(MARCH_21_2026));
        assert_eq!(book.append("Eve", "new").unwrap().len(), 1);
    }

    #[test]
    fn reads_timestamps_written_by_the_browser() {
        let raw = r#"[{"name":"Ana","message":"Congrats!","date":"2026-03-21T12:30:00.000Z"}]"#;
        let store = MemoryStore::with_entry(DEFAULT_GUESTBOOK_KEY, raw);
        let book = Guestbook::new(&store, ManualClock::new(0));
        let entries = book.load();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].author, "Ana");
        assert_eq!(entries[0].submitted_at.timestamp_millis(), MARCH_21_2026);
    }

    #[test]
    fn append_round_trips_through_storage() {
        let store = MemoryStore::new();
        let clock = ManualClock::new(MARCH_21_2026);
        let book = Guestbook::new(&store, &clock);

        book.append("Ana", "First!").unwrap();
        clock.advance(60_000);
        let returned = book.append("  Luis ", " Second ").unwrap();

        let loaded = book.load();
        assert_eq!(loaded, returned);
        let last = loaded.last().unwrap();
        assert_eq!(last.author, "Luis");
        assert_eq!(last.message, "Second");
        assert!(store.get(DEFAULT_GUESTBOOK_KEY).unwrap().contains(r#""name":"Luis""#));
    }

    #[test]
    fn blank_fields_leave_storage_untouched() {
        let store = MemoryStore::new();
        let book = Guestbook::new(&store, ManualClock::new(MARCH_21_2026));
        book.append("Ana", "Hi").unwrap();
        let before = store.get(DEFAULT_GUESTBOOK_KEY);

        assert_eq!(book.append("", "x"), Err(GuestbookError::EmptyField));
        assert_eq!(book.append("a", "  "), Err(GuestbookError::EmptyField));
        assert_eq!(store.get(DEFAULT_GUESTBOOK_KEY), before);
    }

    #[test]
    fn render_puts_newest_first_without_reordering_storage() {
        let store = MemoryStore::new();
        let clock = ManualClock::new(MARCH_21_2026);
        let book = Guestbook::new(&store, &clock);
        book.append("Ana", "older").unwrap();
        clock.advance(5_000);
        let entries = book.append("Luis", "newer").unwrap();

        let GuestbookView::Messages(rendered) = render(&entries, |_| utc()) else {
            panic!("expected messages");
        };
        assert_eq!(rendered[0].author_html, "Luis");
        assert_eq!(rendered[1].author_html, "Ana");
        assert_eq!(book.load()[0].author, "Ana");
    }

    #[test]
    fn render_escapes_markup() {
        let entries = vec![GuestbookEntry {
            author: "<b>Eve</b>".to_string(),
            message: r#"<img src=x onerror="alert('hi')">"#.to_string(),
            submitted_at: crate::clock::millis_to_utc(MARCH_21_2026),
        }];
        let GuestbookView::Messages(rendered) = render(&entries, |_| utc()) else {
            panic!("expected messages");
        };
        assert_eq!(rendered[0].author_html, "&lt;b&gt;Eve&lt;/b&gt;");
        assert!(!rendered[0].message_html.contains('<'));
        assert!(rendered[0].message_html.contains("&quot;alert(&#39;hi&#39;)&quot;"));
    }

    #[test]
    fn each_entry_uses_the_offset_of_its_own_date() {
        // Summer time from 2026-03-29 in this viewer's zone
        let dst_start = MARCH_21_2026 + 8 * 86_400_000;
        let entries = vec![
            GuestbookEntry {
                author: "Ana".to_string(),
                message: "winter".to_string(),
                submitted_at: crate::clock::millis_to_utc(MARCH_21_2026),
            },
            GuestbookEntry {
                author: "Luis".to_string(),
                message: "summer".to_string(),
                submitted_at: crate::clock::millis_to_utc(dst_start + 86_400_000),
            },
        ];
        let madrid = |at: &DateTime<Utc>| {
            let hours = if at.timestamp_millis() >= dst_start { 2 } else { 1 };
            FixedOffset::east_opt(hours * 3_600).unwrap()
        };
        let GuestbookView::Messages(rendered) = render(&entries, madrid) else {
            panic!("expected messages");
        };
        assert_eq!(rendered[0].date_label, "Mar 30, 2026, 02:30 PM");
        assert_eq!(rendered[1].date_label, "Mar 21, 2026, 01:30 PM");
    }

    #[test]
    fn dates_are_formatted_in_viewer_offset() {
        let at = crate::clock::millis_to_utc(MARCH_21_2026);
        assert_eq!(format_date(&at, &utc()), "Mar 21, 2026, 12:30 PM");
        let madrid = FixedOffset::east_opt(3_600).unwrap();
        assert_eq!(format_date(&at, &madrid), "Mar 21, 2026, 01:30 PM");
    }
}
