//! Browser Command Wrappers
//!
//! Thin bindings to browser APIs, organized by concern.

mod clock;
mod dom;
mod rsvp;
mod storage;

pub use clock::*;
pub use dom::*;
pub use rsvp::*;
pub use storage::*;
