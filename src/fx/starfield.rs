//! Parallax starfield
//!
//! Stars never die; they drift down and get recycled at the top.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Stars below this line wrap back to the top
pub const WRAP_BOTTOM: f32 = -1.05;
pub const WRAP_TOP: f32 = 1.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    /// Downward drift (units/s); nearer layers are faster
    pub speed: f32,
    pub size: f32,
    pub alpha: f32,
}

impl Star {
    fn random<R: Rng>(rng: &mut R) -> Self {
        let pos = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
        let layer: f32 = rng.random_range(0.0..1.0);
        Self {
            pos,
            speed: 0.05 + layer * 0.25,
            size: 0.004 + layer * 0.01,
            alpha: 0.5 + layer * 0.5,
        }
    }

    /// Twinkle factor at `time`, in [0.7, 1.0]
    pub fn twinkle(&self, time: f32) -> f32 {
        0.85 + 0.15 * (time * (2.0 + self.speed * 6.0) + self.pos.x * 10.0).sin()
    }
}

/// Fill a starfield of `count` stars
pub fn populate<R: Rng>(rng: &mut R, count: usize) -> Vec<Star> {
    (0..count).map(|_| Star::random(rng)).collect()
}

/// Drift every star and recycle the ones that fell off the bottom
pub fn update<R: Rng>(rng: &mut R, stars: &mut [Star], dt: f32) {
    for s in stars.iter_mut() {
        s.pos.y -= s.speed * dt;
        if s.pos.y < WRAP_BOTTOM {
            s.pos.y = WRAP_TOP;
            s.pos.x = rng.random_range(-1.0..1.0);
            s.alpha = 0.5 + rng.random_range(0.0f32..0.5);
            s.size = 0.004 + rng.random_range(0.0f32..0.01);
        }
    }
}
