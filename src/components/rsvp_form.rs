//! RSVP Form Component
//!
//! Three-step form driven by `RsvpController`. Submitting hands the payload
//! to the configured sink and shows the outcome; failures can be retried.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{MouseEvent, SubmitEvent};
use wedding_core::rsvp::{field, StepStatus, ATTENDING_CHOICES, DIETARY_OPTIONS, MAX_GUESTS, MIN_GUESTS, TOTAL_STEPS};
use wedding_core::{Delivery, FormPhase, RsvpController, RsvpPayload};

use crate::commands::RsvpSink;
use crate::components::RsvpField;
use crate::context::use_app_context;

const STEP_TITLES: [&str; TOTAL_STEPS as usize] = ["Your details", "Attendance", "The little things"];

fn progress_class(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Completed => "progress-step completed",
        StepStatus::Active => "progress-step active",
        StepStatus::Upcoming => "progress-step",
    }
}

#[component]
pub fn RsvpForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(RsvpController::new());
    let sink = StoredValue::new(RsvpSink::from_endpoint(ctx.with_config(|c| c.rsvp_endpoint().map(str::to_string)).as_deref()));
    let phase = Memo::new(move |_| form.with(|f| f.phase().clone()));

    let deliver = move |payload: RsvpPayload| {
        let sink = sink.get_value();
        spawn_local(async move {
            let outcome = sink.deliver(&payload).await;
            match &outcome {
                Ok(()) => log::info!(target: "rsvp", "rsvp delivered"),
                Err(e) => log::error!(target: "rsvp", "rsvp delivery failed: {e}"),
            }
            form.try_update(|f| f.record_delivery(outcome));
        });
    };

    // Enter in an early step moves forward instead of submitting
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut payload = None;
        form.update(|f| {
            if f.current_step() < TOTAL_STEPS {
                f.advance();
            } else {
                payload = f.submit();
            }
        });
        if let Some(payload) = payload {
            deliver(payload);
        }
    };

    let retry = move || {
        let mut payload = None;
        form.update(|f| payload = f.retry());
        if let Some(payload) = payload {
            deliver(payload);
        }
    };

    let next_step = move |_: MouseEvent| form.update(|f| {
        f.advance();
    });
    let prev_step = move |_: MouseEvent| form.update(RsvpController::retreat);
    let step_class = move |step: u8| {
        move || if form.with(|f| f.current_step()) == step { "form-step active" } else { "form-step" }
    };
    let submitted = move || form.with(RsvpController::is_submitted);

    view! {
        <section id="rsvp" class="rsvp">
            <h2 class="section-title reveal-up">"RSVP"</h2>

            <div class=move || if submitted() { "rsvp-progress hidden" } else { "rsvp-progress" }>
                {(1..=TOTAL_STEPS).map(|step| view! {
                    <div class=move || progress_class(form.with(|f| f.step_status(step)))>
                        <span class="step-number">{step}</span>
                        <span class="step-label">{STEP_TITLES[usize::from(step - 1)]}</span>
                    </div>
                }).collect_view()}
            </div>

            <form id="rsvpForm" class="rsvp-form glass-card" novalidate=true hidden=submitted on:submit=on_submit>
                <div class=step_class(1) data-step="1">
                    <h3>{STEP_TITLES[0]}</h3>
                    <RsvpField form=form name=field::NAME placeholder="Your full name" />
                    <RsvpField form=form name=field::EMAIL placeholder="you@example.com" />
                    <RsvpField form=form name=field::PHONE placeholder="Optional" />
                    <div class="form-nav">
                        <button type="button" class="btn btn-primary btn-next" on:click=next_step>"Next"</button>
                    </div>
                </div>

                <div class=step_class(2) data-step="2">
                    <h3>{STEP_TITLES[1]}</h3>
                    <fieldset class="attendance-options">
                        <legend>"Will you attend?"</legend>
                        {ATTENDING_CHOICES.iter().map(|(value, label)| view! {
                            <label class="radio-option">
                                <input
                                    type="radio"
                                    name="attending"
                                    value=*value
                                    prop:checked=move || form.with(|f| f.value(field::ATTENDING) == *value)
                                    on:change=move |_| form.update(|f| f.set_value(field::ATTENDING, *value))
                                />
                                <span>{*label}</span>
                            </label>
                        }).collect_view()}
                        <span class="error-message" role="alert">
                            {move || form.with(|f| f.error(field::ATTENDING).unwrap_or_default().to_string())}
                        </span>
                    </fieldset>

                    <Show when=move || form.with(RsvpController::guests_visible)>
                        <div id="guestsGroup" class="form-group">
                            <label for="rsvp-guests">"Number of guests"</label>
                            <div class="guest-counter">
                                <button
                                    type="button"
                                    class="counter-btn minus"
                                    aria-label="Fewer guests"
                                    on:click=move |_| form.update(RsvpController::decrement_guests)
                                >"−"</button>
                                <input
                                    id="rsvp-guests"
                                    type="number"
                                    name="guests"
                                    min=MIN_GUESTS.to_string()
                                    max=MAX_GUESTS.to_string()
                                    readonly=true
                                    prop:value=move || form.with(|f| f.guests().to_string())
                                />
                                <button
                                    type="button"
                                    class="counter-btn plus"
                                    aria-label="More guests"
                                    on:click=move |_| form.update(RsvpController::increment_guests)
                                >"+"</button>
                            </div>
                        </div>
                    </Show>

                    <div class="form-nav">
                        <button type="button" class="btn btn-secondary btn-prev" on:click=prev_step>"Back"</button>
                        <button type="button" class="btn btn-primary btn-next" on:click=next_step>"Next"</button>
                    </div>
                </div>

                <div class=step_class(3) data-step="3">
                    <h3>{STEP_TITLES[2]}</h3>
                    <RsvpField form=form name=field::DIETARY options=DIETARY_OPTIONS />
                    <Show when=move || form.with(RsvpController::allergies_visible)>
                        <RsvpField form=form name=field::ALLERGIES placeholder="What should the kitchen avoid?" />
                    </Show>
                    <RsvpField form=form name=field::SONG placeholder="Artist - title" />
                    <RsvpField form=form name=field::MESSAGE placeholder="A few words for us" />
                    <div class="form-nav">
                        <button type="button" class="btn btn-secondary btn-prev" on:click=prev_step>"Back"</button>
                        <button type="submit" class="btn btn-primary">"Send RSVP"</button>
                    </div>
                </div>
            </form>

            {move || match phase.get() {
                FormPhase::Editing => ().into_any(),
                FormPhase::Submitted { delivery: Delivery::Pending, .. } => view! {
                    <div class="form-status glass-card" role="status">
                        <i class="fas fa-spinner fa-spin"></i>
                        <p>"Sending your RSVP..."</p>
                    </div>
                }
                .into_any(),
                FormPhase::Submitted { delivery: Delivery::Confirmed, payload } => view! {
                    <div id="formSuccess" class="form-success glass-card" role="status">
                        <i class="fas fa-check-circle"></i>
                        <h3>"Thank you!"</h3>
                        <p id="successMessage">{payload.thank_you_message()}</p>
                        <button
                            type="button"
                            id="resetForm"
                            class="btn btn-secondary"
                            on:click=move |_| form.update(RsvpController::reset)
                        >"Send another response"</button>
                    </div>
                }
                .into_any(),
                FormPhase::Submitted { delivery: Delivery::Failed(reason), .. } => view! {
                    <div class="form-failure glass-card" role="alert">
                        <i class="fas fa-exclamation-circle"></i>
                        <h3>"We couldn't send your RSVP"</h3>
                        <p class="error-detail">{reason}</p>
                        <button type="button" class="btn btn-primary" on:click=move |_| retry()>"Try again"</button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| form.update(RsvpController::reset)
                        >"Start over"</button>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
