//! Decorative particle bursts.
//!
//! Fully decoupled from the canvas: bursts never read or write the shape list. At most
//! one burst is active; starting a new one cancels and discards the previous one, so
//! animation loops cannot pile up. The owner advances the active burst by calling
//! [`Effects::tick`] once per presented frame.

mod particle;

pub use particle::Particle;

use core::ops::Range;
use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::coords::{pixel_to_ndc, Vec2, Viewport};
use crate::paint::Color;
use crate::render::{draw_vertices, Primitive, RenderSurface};

/// Burst flavour.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BurstKind {
    /// Hot reds and oranges; played when the canvas is cleared.
    Explosion,
    /// Random colors; played when the picture is shown.
    Confetti,
}

/// Spawn parameters shared by every burst.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstConfig {
    pub particle_count: usize,
    /// Pixels per step.
    pub speed: Range<f32>,
    /// Diameter in pixels.
    pub size: Range<f32>,
    pub lifetime_ms: Range<f32>,
    /// Pixels per step², downward.
    pub gravity: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            speed: 2.0..5.0,
            size: 3.0..10.0,
            lifetime_ms: 50.0..1050.0,
            gravity: 0.05,
        }
    }
}

/// A running burst.
#[derive(Debug, Clone)]
pub struct Burst {
    kind: BurstKind,
    particles: Vec<Particle>,
}

impl Burst {
    #[inline]
    pub fn kind(&self) -> BurstKind {
        self.kind
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Owner of the (single) active burst.
pub struct Effects<R = StdRng> {
    config: BurstConfig,
    rng: R,
    active: Option<Burst>,
}

impl Effects<StdRng> {
    pub fn new(config: BurstConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic effects for tests and replays.
    pub fn with_seed(config: BurstConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Effects<R> {
    pub fn with_rng(config: BurstConfig, rng: R) -> Self {
        Self { config, rng, active: None }
    }

    #[inline]
    pub fn active(&self) -> Option<&Burst> {
        self.active.as_ref()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Cancels the active burst, if any, and starts a new one at `origin` (pixels).
    pub fn start(&mut self, kind: BurstKind, origin: Vec2) {
        self.cancel();

        let cfg = &self.config;
        let rng = &mut self.rng;
        let particles = (0..cfg.particle_count)
            .map(|_| {
                let angle = rng.gen_range(0.0..TAU);
                let speed = sample(rng, &cfg.speed);
                let velocity = Vec2::new(angle.cos() * speed, angle.sin() * speed);
                let size = sample(rng, &cfg.size);
                let lifetime = sample(rng, &cfg.lifetime_ms);
                let color = burst_color(rng, kind);
                Particle::new(origin, velocity, size, color, cfg.gravity, lifetime)
            })
            .collect();

        log::debug!("{kind:?} burst started with {} particles", cfg.particle_count);
        self.active = Some(Burst { kind, particles });
    }

    /// Drops the active burst and all of its particles.
    pub fn cancel(&mut self) {
        if let Some(burst) = self.active.take() {
            log::debug!(
                "{:?} burst cancelled with {} particles left",
                burst.kind,
                burst.particles.len()
            );
        }
    }

    /// Advances the active burst one step. Finished bursts are released.
    pub fn tick(&mut self, dt_secs: f32) {
        let Some(burst) = self.active.as_mut() else { return };
        let dt_ms = dt_secs * 1000.0;
        burst.particles.retain_mut(|p| p.step(dt_ms));
        if burst.is_finished() {
            log::debug!("{:?} burst finished", burst.kind);
            self.active = None;
        }
    }

    /// Clears `surface` and draws every live particle as a point.
    ///
    /// Returns the number of particles drawn.
    pub fn render(&self, surface: &mut dyn RenderSurface, viewport: Viewport) -> usize {
        surface.clear();
        let Some(burst) = self.active.as_ref() else { return 0 };

        let mut drawn = 0;
        for p in &burst.particles {
            surface.set_fill_color(p.faded_color());
            surface.set_point_size(p.size);
            match draw_vertices(surface, Primitive::Points, &[pixel_to_ndc(p.position, viewport)]) {
                Ok(()) => drawn += 1,
                Err(e) => log::debug!("particle not drawn: {e}"),
            }
        }
        drawn
    }
}

fn sample<R: Rng>(rng: &mut R, range: &Range<f32>) -> f32 {
    if range.start < range.end { rng.gen_range(range.clone()) } else { range.start }
}

fn burst_color<R: Rng>(rng: &mut R, kind: BurstKind) -> Color {
    match kind {
        BurstKind::Explosion => Color::from_srgb_u8(
            rng.gen_range(200..255),
            rng.gen_range(0..100),
            rng.gen_range(0..50),
            255,
        ),
        BurstKind::Confetti => Color::from_srgb_u8(
            rng.gen_range(0..255),
            rng.gen_range(0..255),
            rng.gen_range(0..255),
            255,
        ),
    }
}
