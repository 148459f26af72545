//! FAQ Accordion Component
//!
//! Answers are markdown; only one panel is open at a time.

use leptos::prelude::*;
use web_sys::KeyboardEvent;
use wedding_core::Accordion;

use crate::context::use_app_context;
use crate::markdown::parse_markdown;

#[component]
pub fn FaqAccordion() -> impl IntoView {
    let ctx = use_app_context();
    let entries = ctx.with_config(|c| c.faq.clone());
    if entries.is_empty() {
        return ().into_any();
    }

    let (accordion, set_accordion) = signal(Accordion::default());

    view! {
        <section id="faq" class="faq">
            <h2 class="section-title reveal-up">"Questions & Answers"</h2>
            <div class="accordion">
                {entries.into_iter().enumerate().map(|(i, entry)| {
                    let toggle = move || set_accordion.update(|a| a.toggle(i));
                    let expanded = move || accordion.with(|a| a.is_open(i));
                    let answer_html = parse_markdown(&entry.answer);
                    let panel_id = format!("faq-panel-{}", i);

                    view! {
                        <div class=move || if expanded() { "accordion-item active reveal-up" } else { "accordion-item reveal-up" }>
                            <div
                                class="accordion-header"
                                role="button"
                                tabindex="0"
                                aria-controls=panel_id.clone()
                                aria-expanded=move || expanded().to_string()
                                on:click=move |_| toggle()
                                on:keydown=move |ev: KeyboardEvent| {
                                    if Accordion::is_activation_key(&ev.key()) {
                                        ev.prevent_default();
                                        toggle();
                                    }
                                }
                            >
                                <span>{entry.question}</span>
                                <i class="fas fa-chevron-down accordion-icon"></i>
                            </div>
                            <div
                                id=panel_id
                                class="accordion-content"
                                role="region"
                                hidden=move || !expanded()
                                inner_html=answer_html
                            ></div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
    .into_any()
}
