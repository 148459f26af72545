//! Guestbook Component
//!
//! Messages are kept in this browser's local storage, newest first.

use leptos::prelude::*;
use web_sys::SubmitEvent;
use wedding_core::guestbook::{self, GuestbookView};
use wedding_core::GuestbookError;

use crate::commands;
use crate::context::use_app_context;

const SAVE_FAILED_MESSAGE: &str = "Sorry, your message could not be saved on this device.";

#[component]
pub fn GuestbookSection() -> impl IntoView {
    let ctx = use_app_context();
    let key = StoredValue::new(ctx.with_config(|c| c.storage.guestbook.clone()));

    let (entries, set_entries) = signal(key.with_value(|k| commands::open_guestbook(k).load()));
    let (author, set_author) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (save_error, set_save_error) = signal::<Option<&'static str>>(None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let book = key.with_value(|k| commands::open_guestbook(k));
        match book.append(&author.get_untracked(), &message.get_untracked()) {
            Ok(updated) => {
                log::info!(target: "guestbook", "message saved, {} total", updated.len());
                set_entries.set(updated);
                set_author.set(String::new());
                set_message.set(String::new());
                set_save_error.set(None);
            }
            Err(GuestbookError::EmptyField) => {}
            Err(e) => {
                log::error!(target: "guestbook", "could not save message: {e}");
                set_save_error.set(Some(SAVE_FAILED_MESSAGE));
            }
        }
    };

    let messages = move || match entries.with(|list| guestbook::render(list, commands::viewer_offset_at)) {
        GuestbookView::Empty { placeholder } => view! { <p class="no-messages">{placeholder}</p> }.into_any(),
        GuestbookView::Messages(list) => list
            .into_iter()
            .map(|entry| view! {
                <div class="message-card">
                    <p class="message-author" inner_html=entry.author_html></p>
                    <p class="message-text" inner_html=entry.message_html></p>
                    <span class="message-date">{entry.date_label}</span>
                </div>
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <section id="guestbook" class="guestbook">
            <h2 class="section-title reveal-up">"Guestbook"</h2>
            <form id="guestbookForm" class="guestbook-form glass-card reveal-up" on:submit=on_submit>
                <div class="form-group">
                    <label for="guestName">"Your name"</label>
                    <input
                        id="guestName"
                        type="text"
                        required=true
                        prop:value=move || author.get()
                        on:input=move |ev| set_author.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="guestMessage">"Your message"</label>
                    <textarea
                        id="guestMessage"
                        rows="4"
                        required=true
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                </div>
                {move || save_error.get().map(|e| view! { <p class="error-message" role="alert">{e}</p> })}
                <button type="submit" class="btn btn-primary">"Sign the guestbook"</button>
            </form>
            <div id="guestbookMessages" class="guestbook-messages" aria-live="polite">
                {messages}
            </div>
        </section>
    }
}
