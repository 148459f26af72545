//! Schedule Timeline Component

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Schedule() -> impl IntoView {
    let ctx = use_app_context();
    let events = ctx.with_config(|c| c.schedule.clone());
    if events.is_empty() {
        return ().into_any();
    }
    let venue = ctx.with_config(|c| c.venue.clone());

    view! {
        <section id="schedule" class="schedule">
            <h2 class="section-title reveal-up">"The Day"</h2>
            <p class="section-subtitle reveal-up">{venue}</p>
            <ol class="timeline">
                {events.into_iter().enumerate().map(|(i, event)| {
                    let class = if i % 2 == 0 { "timeline-item reveal-left" } else { "timeline-item reveal-right" };
                    view! {
                        <li class=class>
                            <div class="timeline-marker"></div>
                            <div class="schedule-card glass-card">
                                <span class="timeline-time">{event.time}</span>
                                <h3>{event.title}</h3>
                                <p>{event.description}</p>
                            </div>
                        </li>
                    }
                }).collect_view()}
            </ol>
        </section>
    }
    .into_any()
}
