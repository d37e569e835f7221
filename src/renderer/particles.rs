//! Burst of particles where a seed gets planted
//!
//! Purely visual. Subscribes to the engine through [`EngineHooks`] and never
//! feeds anything back into the simulation.

use glam::Vec2;

use super::surface::{Paint, Surface};
use crate::catalog::Rgb;
use crate::sim::{EngineHooks, Seed};

/// Maximum live particles
pub const MAX_PARTICLES: usize = 256;
/// Particles per planted seed
pub const BURST_COUNT: usize = 12;
const BURST_SPEED: f32 = 120.0;
const LIFE_DECAY_PER_SEC: f32 = 1.5;
/// Fraction of velocity kept after one second
const DRAG_PER_SEC: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    /// 1 at spawn, removed at 0
    pub life: f32,
    pub size: f32,
}

#[derive(Debug, Default)]
pub struct MatchBurst {
    particles: Vec<Particle>,
}

impl MatchBurst {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Ring of particles flying outward from `pos`
    pub fn spawn(&mut self, pos: Vec2, color: Rgb) {
        for i in 0..BURST_COUNT {
            if self.particles.len() >= MAX_PARTICLES {
                // Oldest particles go first
                self.particles.remove(0);
            }
            let theta = i as f32 / BURST_COUNT as f32 * std::f32::consts::TAU;
            let speed = BURST_SPEED * if i % 2 == 0 { 1.0 } else { 0.6 };
            self.particles.push(Particle {
                pos,
                vel: Vec2::new(theta.cos(), theta.sin()) * speed,
                color,
                life: 1.0,
                size: 4.0,
            });
        }
    }

    /// Advance by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let damping = DRAG_PER_SEC.powf(dt);
        for particle in self.particles.iter_mut() {
            particle.pos += particle.vel * dt;
            particle.vel *= damping;
            particle.life -= dt * LIFE_DECAY_PER_SEC;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Draw on top of whatever the render pass painted
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for particle in &self.particles {
            let paint = Paint::solid(particle.color).with_alpha(particle.life.clamp(0.0, 1.0));
            surface.fill_circle(particle.pos, particle.size * particle.life.max(0.25), paint);
        }
    }
}

impl EngineHooks for MatchBurst {
    fn on_seed_matched(&mut self, seed: &Seed) {
        self.spawn(seed.pos, seed.color);
    }
}
