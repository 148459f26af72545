//! Countdown Component
//!
//! Ticks once a second towards the wedding, flipping only the digits that
//! changed. Stops by itself once the day arrives or the view goes away.

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wedding_core::countdown::{FLIP_DURATION_MS, TICK_PERIOD_MS};
use wedding_core::{Clock, CountdownField, CountdownFrame, CountdownTicker};

use crate::commands::BrowserClock;
use crate::context::use_app_context;

#[component]
pub fn Countdown(
    /// Target instant in epoch milliseconds. `None` leaves the placeholders up.
    target_millis: Option<i64>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (frame, set_frame) = signal::<Option<CountdownFrame>>(None);
    let (flipping, set_flipping) = signal(Vec::<CountdownField>::new());

    if let Some(target) = target_millis {
        let reduced_motion = ctx.reduced_motion;
        spawn_local(async move {
            let mut ticker = CountdownTicker::new(target);
            loop {
                let next = ticker.tick(BrowserClock.now_millis());
                let done = next.is_final();

                if !reduced_motion && !done && !next.changed.is_empty() {
                    set_flipping.try_set(next.changed.clone());
                    Timeout::new(FLIP_DURATION_MS, move || {
                        set_flipping.try_set(Vec::new());
                    })
                    .forget();
                }

                // The view was torn down
                if set_frame.try_set(Some(next)).is_some() {
                    break;
                }
                if done {
                    log::info!(target: "countdown", "target reached, stopping");
                    break;
                }
                TimeoutFuture::new(TICK_PERIOD_MS).await;
            }
        });
    }

    let is_final = move || frame.with(|f| f.as_ref().is_some_and(CountdownFrame::is_final));

    view! {
        <div class="countdown" role="timer">
            {CountdownField::ALL.into_iter().map(|field| {
                let text = move || frame.with(|f| {
                    f.as_ref()
                        .map(|f| f.display.get(field).to_string())
                        .unwrap_or_else(|| "--".to_string())
                });
                let class = move || {
                    if flipping.with(|changed| changed.contains(&field)) {
                        "countdown-number flip"
                    } else {
                        "countdown-number"
                    }
                };
                view! {
                    <div class="countdown-item">
                        <span id=field.element_id() class=class>{text}</span>
                        <span class="countdown-label">{field.label()}</span>
                    </div>
                }
            }).collect_view()}
        </div>
        <Show when=is_final>
            <p class="countdown-done">"Today is the day!"</p>
        </Show>
    }
}
