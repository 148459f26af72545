//! Decorative Effects
//!
//! Particle, petal and confetti parameters. Randomness is injected as a
//! `FnMut() -> f64` yielding values in `[0, 1)` so the browser can pass
//! `Math.random` and tests can pass a fixed sequence.

use std::f64::consts::TAU;

pub const PARTICLE_COUNT: usize = 20;

pub const PETALS_START_DELAY_MS: u32 = 1_000;
pub const INITIAL_PETALS: usize = 15;
pub const PETAL_STAGGER_MS: u32 = 300;
pub const PETAL_SPAWN_PERIOD_MS: u32 = 2_000;
pub const MAX_PETALS: usize = 20;

pub const CONFETTI_PIECES: usize = 15;
pub const CONFETTI_COLORS: [&str; 4] = ["#2F80ED", "#7AD7FF", "#FFB4C6", "#C9B037"];
const CONFETTI_GRAVITY: f64 = 2.0;
const CONFETTI_FADE: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub opacity: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl ParticleSpec {
    pub fn random(rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            size_px: rng() * 4.0 + 2.0,
            opacity: rng() * 0.5 + 0.2,
            left_pct: rng() * 100.0,
            top_pct: rng() * 100.0,
            duration_s: rng() * 10.0 + 15.0,
            delay_s: rng() * -20.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; background: rgba(255, 255, 255, {:.2}); left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.opacity,
            self.left_pct,
            self.top_pct,
            self.duration_s,
            self.delay_s,
            size = self.size_px,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalSpec {
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub size_px: f64,
}

impl PetalSpec {
    pub fn random(rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            left_pct: rng() * 100.0,
            duration_s: 8.0 + rng() * 6.0,
            delay_s: rng() * 5.0,
            size_px: 8.0 + rng() * 6.0,
        }
    }

    /// Time until the petal has finished falling and can be removed.
    pub fn lifetime_ms(&self) -> u32 {
        ((self.duration_s + self.delay_s) * 1_000.0).round() as u32
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s; width: {size:.2}px; height: {size:.2}px;",
            self.left_pct,
            self.duration_s,
            self.delay_s,
            size = self.size_px,
        )
    }
}

/// Whether the periodic spawner should add another petal.
pub fn should_spawn_petal(alive: usize) -> bool {
    alive < MAX_PETALS
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub opacity: f64,
    pub color: &'static str,
}

impl ConfettiPiece {
    /// Pieces spread evenly around the click point.
    pub fn burst(x: f64, y: f64, rng: &mut impl FnMut() -> f64) -> Vec<Self> {
        (0..CONFETTI_PIECES)
            .map(|i| {
                let color = CONFETTI_COLORS[((rng() * 4.0) as usize).min(CONFETTI_COLORS.len() - 1)];
                let angle = TAU * i as f64 / CONFETTI_PIECES as f64;
                let velocity = 3.0 + rng() * 3.0;
                Self {
                    x,
                    y,
                    vx: angle.cos() * velocity,
                    vy: angle.sin() * velocity,
                    opacity: 1.0,
                    color,
                }
            })
            .collect()
    }

    /// Advance one animation frame. Returns whether the piece is still visible.
    pub fn step(&mut self) -> bool {
        self.x += self.vx;
        self.y += self.vy + CONFETTI_GRAVITY;
        self.opacity -= CONFETTI_FADE;
        self.is_visible()
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn style(&self) -> String {
        format!(
            "position: fixed; width: 10px; height: 10px; pointer-events: none; z-index: 9999; background: {}; left: {:.1}px; top: {:.1}px; opacity: {:.2}; transform: rotate({:.1}deg);",
            self.color,
            self.x,
            self.y,
            self.opacity.max(0.0),
            self.x,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn particle_ranges() {
        let low = ParticleSpec::random(&mut constant(0.0));
        assert_eq!(low.size_px, 2.0);
        assert_eq!(low.duration_s, 15.0);
        let high = ParticleSpec::random(&mut constant(0.999));
        assert!(high.size_px < 6.0);
        assert!(high.opacity < 0.7);
        assert!(high.delay_s > -20.0);
    }

    #[test]
    fn petal_lifetime_covers_delay() {
        let petal = PetalSpec { left_pct: 10.0, duration_s: 8.5, delay_s: 1.25, size_px: 9.0 };
        assert_eq!(petal.lifetime_ms(), 9_750);
        assert!(petal.style().starts_with("left: 10.00%;"));
    }

    #[test]
    fn spawner_caps_live_petals() {
        assert!(should_spawn_petal(MAX_PETALS - 1));
        assert!(!should_spawn_petal(MAX_PETALS));
    }

    #[test]
    fn confetti_burst_spreads_around_origin() {
        let pieces = ConfettiPiece::burst(100.0, 50.0, &mut constant(0.0));
        assert_eq!(pieces.len(), CONFETTI_PIECES);
        assert!((pieces[0].vx - 3.0).abs() < 1e-9);
        assert!(pieces[0].vy.abs() < 1e-9);
        assert!(pieces.iter().all(|p| p.color == CONFETTI_COLORS[0]));
    }

    #[test]
    fn confetti_falls_and_fades_out() {
        let mut piece = ConfettiPiece::burst(0.0, 0.0, &mut constant(0.5)).remove(0);
        assert!(piece.step());
        assert!(piece.y > 0.0);
        let frames = (0..100).take_while(|_| piece.step()).count();
        assert!(frames < 50);
        assert!(!piece.is_visible());
    }
}
