//! Ghost Busters - a small arcade shooter
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (player, bullet, ghost waves, scoring)
//! - `fx`: Cosmetic effects driven by simulation events (particles, stars, shake)
//! - `render`: Render snapshot and backend-agnostic draw list
//! - `input`: Key state mapping and the demo autopilot
//! - `clock`: Time sources and per-frame delta measurement
//! - `settings`: JSON configuration

pub mod clock;
pub mod fx;
pub mod game;
pub mod hud;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
///
/// World units are NDC-like: both axes span [-1, 1].
pub mod consts {
    /// Player turret extents and fixed row
    pub const PLAYER_W: f32 = 0.18;
    pub const PLAYER_H: f32 = 0.06;
    pub const PLAYER_Y: f32 = -0.85;
    /// Horizontal speed (units/s)
    pub const PLAYER_SPEED: f32 = 1.7;

    /// Bullet extents and speed
    pub const BULLET_W: f32 = 0.02;
    pub const BULLET_H: f32 = 0.06;
    pub const BULLET_SPEED: f32 = 2.6;
    /// Bullet is retired once above this line
    pub const BULLET_TOP: f32 = 1.1;
    /// Minimum seconds between shots
    pub const SHOOT_COOLDOWN: f32 = 0.22;

    /// Ghost arena capacity
    pub const MAX_GHOSTS: usize = 8;
    pub const GHOST_W: f32 = 0.10;
    pub const GHOST_H: f32 = 0.10;
    pub const GHOST_SPEED_MIN: f32 = 0.35;
    pub const GHOST_SPEED_MAX: f32 = 0.75;
    /// Vertical step taken on every wall bounce
    pub const GHOST_DROP: f32 = 0.04;
    /// Cosmetic sideways wobble
    pub const GHOST_BOB_AMPLITUDE: f32 = 0.12;
    pub const GHOST_BOB_FREQUENCY: f32 = 2.0;
    /// Spawn bands
    pub const GHOST_SPAWN_X: (f32, f32) = (-0.85, 0.85);
    pub const GHOST_SPAWN_Y: (f32, f32) = (0.20, 0.90);

    /// A ghost whose center is at or below this line has breached
    pub const BREACH_Y: f32 = PLAYER_Y + PLAYER_H * 0.5 + GHOST_H * 0.5;

    /// Scoring and difficulty
    pub const KILL_SCORE: u32 = 10;
    /// Velocity multiplier applied to surviving ghosts after each kill
    pub const RUBBER_BAND: f32 = 1.035;
    pub const INITIAL_LIVES: u8 = 3;
    pub const INITIAL_WAVE: usize = 6;
    pub const WAVE_BASE: usize = 4;
    pub const WAVE_SCORE_DIVISOR: u32 = 20;
    pub const WAVE_SPEED_NORMALIZER: f32 = 100.0;

    /// Background starfield
    pub const STAR_COUNT: usize = 120;
}

/// Clamp a center coordinate so a box of `width` stays inside [-1, 1]
#[inline]
pub fn clamp_to_field(x: f32, width: f32) -> f32 {
    let half = width * 0.5;
    x.clamp(-1.0 + half, 1.0 - half)
}
