//! Hero Section Component

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::commands;
use crate::components::{launch_confetti, Countdown, HeroParticles};
use crate::context::use_app_context;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_app_context();
    let names = StoredValue::new(ctx.with_config(|c| c.couple.clone()));
    let date_label = ctx.with_config(|c| c.date_label.clone());
    let venue = ctx.with_config(|c| c.venue.clone());

    let target = ctx.with_config(|c| c.wedding_date()).map(commands::local_millis);
    if target.is_none() {
        log::warn!(target: "countdown", "wedding_date is missing or invalid, countdown disabled");
    }

    // Names swap order with the theme
    let first_name = move || names.with_value(|n| n.ordered(ctx.theme.get()).0.to_string());
    let second_name = move || names.with_value(|n| n.ordered(ctx.theme.get()).1.to_string());

    let celebrate = move |ev: MouseEvent| launch_confetti(ctx, ev.client_x() as f64, ev.client_y() as f64);

    view! {
        <header id="home" class="hero">
            <HeroParticles />
            <div class="hero-content">
                <p class="hero-pretitle reveal-text">"We're getting married"</p>
                <h1 class="hero-names reveal-up">
                    <span class="name-1">{first_name}</span>
                    <span class="ampersand">" & "</span>
                    <span class="name-2">{second_name}</span>
                </h1>
                <p class="hero-date reveal-up">{date_label}</p>
                <p class="hero-venue reveal-up">{venue}</p>
                <Countdown target_millis=target />
                <div class="floating-hearts">
                    <i class="fas fa-heart heart-1" on:click=celebrate></i>
                    <i class="fas fa-heart heart-2" on:click=celebrate></i>
                    <i class="fas fa-heart heart-3" on:click=celebrate></i>
                </div>
            </div>
        </header>
    }
}
