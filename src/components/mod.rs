//! UI Components
//!
//! One component per page section, plus the small pieces they share.

mod back_to_top;
mod countdown;
mod effects;
mod faq_accordion;
mod gallery;
mod guestbook;
mod hero;
mod lightbox;
mod music_toggle;
mod nav_bar;
mod rsvp_field;
mod rsvp_form;
mod schedule;
mod theme_toggle;

pub use back_to_top::BackToTop;
pub use countdown::Countdown;
pub use effects::{launch_confetti, ConfettiLayer, FallingPetals, HeroParticles};
pub use faq_accordion::FaqAccordion;
pub use gallery::{tile_id, Gallery};
pub use guestbook::GuestbookSection;
pub use hero::Hero;
pub use lightbox::Lightbox;
pub use music_toggle::MusicToggle;
pub use nav_bar::NavBar;
pub use rsvp_field::RsvpField;
pub use rsvp_form::RsvpForm;
pub use schedule::Schedule;
pub use theme_toggle::ThemeToggle;
