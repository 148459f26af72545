//! Background Music Toggle
//!
//! Tries to autoplay at low volume. Browsers usually refuse, in which case
//! playback starts on the first click anywhere on the page.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::MouseEvent;

use crate::context::use_app_context;

const MUSIC_VOLUME: f64 = 0.3;

#[component]
pub fn MusicToggle() -> impl IntoView {
    let ctx = use_app_context();
    let Some(src) = ctx.with_config(|c| c.music_src.clone()) else {
        return ().into_any();
    };

    let audio_ref = NodeRef::<html::Audio>::new();
    let (playing, set_playing) = signal(false);
    let (armed, set_armed) = signal(false);

    let play = move || {
        let Some(audio) = audio_ref.get_untracked() else { return };
        let Ok(promise) = audio.play() else {
            set_armed.set(true);
            return;
        };
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    set_playing.try_set(true);
                }
                Err(_) => {
                    log::info!(target: "music", "autoplay blocked, waiting for a click");
                    set_armed.try_set(true);
                }
            }
        });
    };

    Effect::new(move |_| {
        if let Some(audio) = audio_ref.get() {
            audio.set_volume(MUSIC_VOLUME);
            audio.set_loop(true);
            play();
        }
    });

    // First interaction anywhere starts a blocked autoplay
    let _ = window_event_listener(ev::click, move |_| {
        if armed.get_untracked() {
            set_armed.set(false);
            play();
        }
    });

    let toggle = move |ev: MouseEvent| {
        ev.stop_propagation();
        let Some(audio) = audio_ref.get_untracked() else { return };
        if playing.get_untracked() {
            let _ = audio.pause();
            set_playing.set(false);
        } else {
            set_armed.set(false);
            play();
        }
    };

    let label = move || if playing.get() { "Pause music" } else { "Play music" };
    let icon = move || if playing.get() { "fas fa-pause" } else { "fas fa-music" };

    view! {
        <audio node_ref=audio_ref id="bgMusic" src=src preload="auto"></audio>
        <button
            id="musicToggle"
            class=move || if playing.get() { "music-toggle playing" } else { "music-toggle" }
            aria-label=label
            title=label
            on:click=toggle
        >
            <i class=icon></i>
        </button>
    }
    .into_any()
}
