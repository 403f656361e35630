//! Read-only view of a frame for whatever draws it
//!
//! Copied out of the simulation and effects state after the frame is
//! stepped, so a renderer never touches live game state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::fx::Effects;
use crate::sim::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GhostSprite {
    pub pos: Vec2,
    pub size: Vec2,
    pub alive: bool,
    pub phase: f32,
}

/// A particle or star: a small square with opacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub pos: Vec2,
    pub size: f32,
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Seconds since launch, for cosmetic animation
    pub time: f32,
    /// Camera offset from screen shake
    pub shake_offset: Vec2,
    pub player_pos: Vec2,
    pub player_size: Vec2,
    /// Brightness boost while the gun is cooling down (1.0..=1.25)
    pub player_pulse: f32,
    pub bullet_pos: Vec2,
    pub bullet_size: Vec2,
    pub bullet_active: bool,
    pub ghosts: Vec<GhostSprite>,
    pub particles: Vec<Dot>,
    /// Stars carry their twinkle in `alpha`
    pub stars: Vec<Dot>,
    pub score: u32,
    pub lives: u8,
    pub game_over: bool,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, fx: &Effects, time: f32) -> Self {
        let cooldown_left = (SHOOT_COOLDOWN - state.shoot_timer).max(0.0);
        Self {
            time,
            shake_offset: fx.shake.offset,
            player_pos: state.player.pos(),
            player_size: state.player.size(),
            player_pulse: 1.0 + 0.25 * cooldown_left / SHOOT_COOLDOWN,
            bullet_pos: state.bullet.pos(),
            bullet_size: state.bullet.size(),
            bullet_active: state.bullet.active,
            ghosts: state
                .ghosts
                .iter()
                .map(|g| GhostSprite {
                    pos: g.pos(),
                    size: g.size(),
                    alive: g.alive,
                    phase: g.phase,
                })
                .collect(),
            particles: fx
                .particles
                .iter()
                .map(|p| Dot {
                    pos: p.pos,
                    size: p.size,
                    alpha: p.alpha(),
                })
                .collect(),
            stars: fx
                .stars
                .iter()
                .map(|s| Dot {
                    pos: s.pos,
                    size: s.size,
                    alpha: s.alpha * s.twinkle(time),
                })
                .collect(),
            score: state.score,
            lives: state.lives,
            game_over: state.is_game_over(),
        }
    }
}
