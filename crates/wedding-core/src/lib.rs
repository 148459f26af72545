//! Wedding Core
//!
//! State machines, stores and pure helpers behind the wedding site UI.
//! Nothing here touches the DOM: the browser crate owns presentation and
//! feeds these types with clock readings, storage handles and user input.

pub mod accordion;
pub mod clock;
pub mod countdown;
pub mod effects;
pub mod gallery;
pub mod guestbook;
pub mod rsvp;
pub mod scroll;
pub mod storage;
pub mod theme;

pub use accordion::Accordion;
pub use clock::{Clock, ManualClock};
pub use countdown::{compute_snapshot, CountdownDisplay, CountdownField, CountdownFrame, CountdownSnapshot, CountdownTicker};
pub use gallery::{GalleryItem, GalleryNavigator, LightboxAction};
pub use guestbook::{Guestbook, GuestbookEntry, GuestbookError, GuestbookView, RenderedEntry};
pub use rsvp::{Delivery, FormPhase, RsvpController, RsvpPayload, SinkError, Validation};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use theme::{CoupleNames, Theme};
