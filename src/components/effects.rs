//! Decorative Effects
//!
//! Hero particles, falling petals and click confetti. None of them render
//! when the user prefers reduced motion.

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wedding_core::effects::{
    should_spawn_petal, ConfettiPiece, ParticleSpec, PetalSpec, INITIAL_PETALS, PARTICLE_COUNT,
    PETALS_START_DELAY_MS, PETAL_SPAWN_PERIOD_MS, PETAL_STAGGER_MS,
};

use crate::context::{use_app_context, AppContext};
use crate::store::{use_site_store, SiteStateStoreFields};

/// Roughly one animation frame
const CONFETTI_FRAME_MS: u32 = 16;

/// Throw a confetti burst from a click point.
///
/// Starts the animation loop when nothing is in flight; the loop ends once
/// every piece has faded.
pub fn launch_confetti(ctx: AppContext, x: f64, y: f64) {
    if ctx.reduced_motion {
        return;
    }
    let burst = ConfettiPiece::burst(x, y, &mut js_sys::Math::random);
    let was_idle = ctx.confetti.with_untracked(|pieces| pieces.is_empty());
    ctx.confetti.update(|pieces| pieces.extend(burst));
    if !was_idle {
        return;
    }

    spawn_local(async move {
        loop {
            TimeoutFuture::new(CONFETTI_FRAME_MS).await;
            let alive = ctx.confetti.try_update(|pieces| {
                pieces.retain_mut(ConfettiPiece::step);
                !pieces.is_empty()
            });
            if alive != Some(true) {
                break;
            }
        }
    });
}

#[component]
pub fn ConfettiLayer() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="confetti-layer" aria-hidden="true">
            {move || ctx.confetti.with(|pieces| {
                pieces
                    .iter()
                    .filter(|piece| piece.is_visible())
                    .map(|piece| view! { <div class="confetti-piece" style=piece.style()></div> })
                    .collect_view()
            })}
        </div>
    }
}

/// Floating dots behind the hero
#[component]
pub fn HeroParticles() -> impl IntoView {
    let ctx = use_app_context();
    if ctx.reduced_motion {
        return ().into_any();
    }

    let particles: Vec<ParticleSpec> = (0..PARTICLE_COUNT)
        .map(|_| ParticleSpec::random(&mut js_sys::Math::random))
        .collect();

    view! {
        <div id="particles" class="particles" aria-hidden="true">
            {particles
                .into_iter()
                .map(|p| view! { <div class="particle" style=p.style()></div> })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
pub fn FallingPetals() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_site_store();
    let (petals, set_petals) = signal(Vec::<(u32, PetalSpec)>::new());

    if !ctx.reduced_motion {
        // Returns false once the component is gone
        let spawn = move |id: u32| -> bool {
            let spec = PetalSpec::random(&mut js_sys::Math::random);
            if set_petals.try_update(|list| list.push((id, spec))).is_none() {
                return false;
            }
            Timeout::new(spec.lifetime_ms(), move || {
                set_petals.try_update(|list| list.retain(|(pid, _)| *pid != id));
            })
            .forget();
            true
        };

        spawn_local(async move {
            TimeoutFuture::new(PETALS_START_DELAY_MS).await;

            let mut next_id = 0u32;
            for _ in 0..INITIAL_PETALS {
                if !spawn(next_id) {
                    return;
                }
                next_id = next_id.wrapping_add(1);
                TimeoutFuture::new(PETAL_STAGGER_MS).await;
            }

            loop {
                TimeoutFuture::new(PETAL_SPAWN_PERIOD_MS).await;
                if store.tab_hidden().get_untracked() {
                    continue;
                }
                let Some(alive) = petals.try_with_untracked(Vec::len) else {
                    break;
                };
                if should_spawn_petal(alive) {
                    if !spawn(next_id) {
                        break;
                    }
                    next_id = next_id.wrapping_add(1);
                }
            }
        });
    }

    view! {
        <div id="petalsContainer" class="petals-container" aria-hidden="true">
            <For
                each=move || petals.get()
                key=|(id, _)| *id
                children=|(_, spec)| view! { <div class="petal" style=spec.style()></div> }
            />
        </div>
    }
}
