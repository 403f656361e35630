//! Explosion particles

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Particles emitted per destroyed ghost
pub const BURST_COUNT: usize = 24;
/// Life lost per second (life starts at 1.0)
pub const LIFE_DECAY: f32 = 1.4;
/// Fraction of velocity lost per second
pub const DRAG: f32 = 0.9;

/// A particle for visual effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32, // 0-1, decreases over time
    pub size: f32,
}

impl Particle {
    /// Opacity used when drawing
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

/// Emit a radial burst at `at`, dropping the oldest particles beyond `cap`
pub fn burst<R: Rng>(rng: &mut R, at: Vec2, particles: &mut Vec<Particle>, cap: usize) {
    if cap == 0 {
        return;
    }
    for _ in 0..BURST_COUNT {
        let angle = rng.random_range(0.0..TAU);
        let speed: f32 = rng.random_range(0.25..1.0);
        particles.push(Particle {
            pos: at,
            vel: Vec2::from_angle(angle) * speed,
            life: 1.0,
            size: rng.random_range(0.012..0.028),
        });
    }
    if particles.len() > cap {
        let excess = particles.len() - cap;
        particles.drain(..excess);
    }
}

/// Integrate, decay and cull
pub fn update(particles: &mut Vec<Particle>, dt: f32) {
    for p in particles.iter_mut() {
        p.life -= dt * LIFE_DECAY;
        p.pos += p.vel * dt;
        p.vel *= 1.0 - DRAG * dt;
    }
    particles.retain(|p| p.life > 0.0);
}
