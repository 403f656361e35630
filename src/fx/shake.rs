//! Camera shake

use glam::Vec2;
use rand::Rng;

/// Duration of the strongest pulse; strength fades linearly over it
pub const SHAKE_FULL_DURATION: f32 = 0.25;

/// Pulse on losing a life
pub const BREACH_PULSE: (f32, f32) = (0.25, 0.025);
/// Pulse on destroying a ghost
pub const KILL_PULSE: (f32, f32) = (0.15, 0.015);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenShake {
    /// Seconds of shake left
    pub timer: f32,
    pub strength: f32,
    /// Camera offset for the current frame
    pub offset: Vec2,
}

impl ScreenShake {
    /// Replace the current pulse
    pub fn set(&mut self, (timer, strength): (f32, f32)) {
        self.timer = timer;
        self.strength = strength;
    }

    /// Raise the current pulse to at least the given one
    pub fn raise(&mut self, (timer, strength): (f32, f32)) {
        self.timer = self.timer.max(timer);
        self.strength = self.strength.max(strength);
    }

    /// Sample this frame's offset, then decay
    pub fn update<R: Rng>(&mut self, rng: &mut R, dt: f32) {
        if self.timer <= 0.0 {
            self.offset = Vec2::ZERO;
            return;
        }
        let s = self.strength * (self.timer / SHAKE_FULL_DURATION);
        self.offset = if s > 0.0 {
            Vec2::new(rng.random_range(-s..=s), rng.random_range(-s..=s))
        } else {
            Vec2::ZERO
        };
        self.timer = (self.timer - dt).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }
}
