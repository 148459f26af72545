//! Property-based tests for the countdown, RSVP controller, guestbook and gallery.

use chrono::FixedOffset;
use proptest::prelude::*;
use wedding_core::guestbook::{self, GuestbookView};
use wedding_core::rsvp::{field, RsvpController};
use wedding_core::{compute_snapshot, CountdownSnapshot, GalleryItem, GalleryNavigator, Guestbook, ManualClock, MemoryStore};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Instants between 1970 and roughly 2100, in milliseconds.
fn instant_strategy() -> impl Strategy<Value = i64> {
    0i64..4_102_444_800_000
}

fn gallery_strategy() -> impl Strategy<Value = (GalleryNavigator, usize)> {
    (1usize..12).prop_flat_map(|len| {
        let items = (0..len)
            .map(|i| GalleryItem {
                image_ref: format!("images/{i}.jpg"),
                thumb: None,
                alt_text: format!("Photo {i}"),
                caption: String::new(),
            })
            .collect::<Vec<_>>();
        (Just(GalleryNavigator::new(items)), 0..len)
    })
}

/// Arbitrary text for the step-one fields, including blanks and junk emails.
fn field_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        prop::string::string_regex("[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,3}").expect("valid regex"),
        prop::string::string_regex("[a-zA-Z @.]{0,20}").expect("valid regex"),
    ]
}

fn message_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9<>&\"' ]{1,40}")
        .expect("valid regex")
        .prop_filter("non-blank", |s| !s.trim().is_empty())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Fields always add back up to the whole seconds remaining.
    #[test]
    fn snapshot_fields_sum_to_remaining_seconds(now in instant_strategy(), delta in 1i64..10_000_000_000) {
        let snapshot = compute_snapshot(now, now + delta);
        prop_assert!(!snapshot.reached_target);
        prop_assert!(snapshot.hours < 24 && snapshot.minutes < 60 && snapshot.seconds < 60);
        prop_assert_eq!(snapshot.total_seconds(), (delta / 1_000) as u64);
    }

    /// Any target at or before now gives the terminal snapshot.
    #[test]
    fn past_targets_are_terminal(now in instant_strategy(), back in 0i64..10_000_000_000) {
        prop_assert_eq!(compute_snapshot(now, now - back), CountdownSnapshot::TERMINAL);
    }

    /// `next` applied `len` times returns to the start; `prev` undoes `next`.
    #[test]
    fn gallery_navigation_is_cyclic((nav, start) in gallery_strategy()) {
        let mut nav = nav;
        nav.open(start);
        for _ in 0..nav.len() {
            nav.next();
        }
        prop_assert_eq!(nav.index(), start);

        nav.next();
        nav.prev();
        prop_assert_eq!(nav.index(), start);
    }

    /// Validation only reads state, and a failing step never advances.
    #[test]
    fn invalid_steps_do_not_advance(name in field_text_strategy(), email in field_text_strategy()) {
        let mut form = RsvpController::new();
        form.set_value(field::NAME, name);
        form.set_value(field::EMAIL, email);

        let first = form.validate(1);
        prop_assert_eq!(&first, &form.validate(1));

        let advanced = form.advance();
        prop_assert_eq!(advanced, first.valid);
        prop_assert_eq!(form.current_step(), if first.valid { 2 } else { 1 });
    }

    /// Retreating from the first step any number of times stays on step one.
    #[test]
    fn retreat_from_first_step_is_clamped(times in 1usize..10) {
        let mut form = RsvpController::new();
        for _ in 0..times {
            form.retreat();
        }
        prop_assert_eq!(form.current_step(), 1);
    }

    /// The last appended entry is last in storage and first when rendered.
    #[test]
    fn appended_message_is_rendered_first(
        messages in prop::collection::vec((message_strategy(), message_strategy()), 1..8)
    ) {
        let store = MemoryStore::new();
        let clock = ManualClock::new(1_774_096_200_000);
        let book = Guestbook::new(&store, &clock);

        for (author, message) in &messages {
            clock.advance(1_000);
            book.append(author, message).unwrap();
        }

        let (author, message) = messages.last().unwrap();
        let loaded = book.load();
        let last = loaded.last().unwrap();
        prop_assert_eq!(&last.author, author.trim());
        prop_assert_eq!(&last.message, message.trim());

        let utc = FixedOffset::east_opt(0).unwrap();
        match guestbook::render(&loaded, |_| utc) {
            GuestbookView::Messages(rendered) => {
                prop_assert_eq!(rendered.len(), messages.len());
                prop_assert_eq!(&rendered[0].author_html, &guestbook::escape_html(author.trim()));
            }
            GuestbookView::Empty { .. } => prop_assert!(false, "rendered placeholder for non-empty guestbook"),
        }
    }
}
