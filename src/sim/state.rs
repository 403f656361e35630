//! Game state and core simulation types
//!
//! Everything the simulation step reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::wave::spawn_wave;
use crate::clamp_to_field;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives; frozen until restart
    GameOver,
}

/// Discrete things that happened during a tick.
///
/// Consumed by the cosmetic layer (particles, shake) and by logging; the
/// simulation never reads them back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A bullet left the turret
    Shot { pos: Vec2 },
    /// A bullet destroyed a ghost
    GhostDestroyed { pos: Vec2 },
    /// A ghost reached the player's row
    Breach { pos: Vec2 },
    /// Lives reached zero
    GameOver { score: u32 },
    /// A fresh wave replaced the ghost arena
    WaveSpawned { count: usize, speed_scale: f32 },
    /// State was re-initialised from game over
    Restarted,
}

/// The player's turret
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Horizontal center (row is fixed at `PLAYER_Y`)
    pub x: f32,
    /// Horizontal speed (units/s)
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: 0.0,
            speed: PLAYER_SPEED,
        }
    }
}

impl Player {
    /// Move by `axis` (-1 left, +1 right) and keep the turret on screen
    pub fn steer(&mut self, axis: f32, dt: f32) {
        self.x = clamp_to_field(self.x + axis.clamp(-1.0, 1.0) * self.speed * dt, PLAYER_W);
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, PLAYER_Y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(PLAYER_W, PLAYER_H)
    }

    /// Where a new bullet appears
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.x, PLAYER_Y + PLAYER_H * 0.5 + BULLET_H * 0.6)
    }
}

/// The single player projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: -1.5,
            active: false,
        }
    }
}

impl Bullet {
    pub fn fire(&mut self, at: Vec2) {
        self.x = at.x;
        self.y = at.y;
        self.active = true;
    }

    /// Move upward; retire once past the top of the field
    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.y += BULLET_SPEED * dt;
        if self.y > BULLET_TOP {
            self.active = false;
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(BULLET_W, BULLET_H)
    }
}

/// A ghost enemy (one arena slot)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ghost {
    pub x: f32,
    pub y: f32,
    /// Horizontal velocity; the sign is the direction of travel
    pub vx: f32,
    pub alive: bool,
    /// Offset into the wobble/glow cycle
    pub phase: f32,
}

impl Ghost {
    pub fn new(x: f32, y: f32, vx: f32) -> Self {
        Self {
            x,
            y,
            vx,
            alive: true,
            phase: 0.0,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(GHOST_W, GHOST_H)
    }

    /// March sideways; on hitting a wall, clamp to it, turn around and drop.
    ///
    /// Returns true if the ghost bounced this frame.
    pub fn march(&mut self, dt: f32, time: f32) -> bool {
        let bob = (time * GHOST_BOB_FREQUENCY + self.phase).sin() * GHOST_BOB_AMPLITUDE;
        self.x += self.vx * dt + bob * dt;

        let half = GHOST_W * 0.5;
        if self.x + half > 1.0 {
            self.x = 1.0 - half;
            self.vx = -self.vx.abs();
            self.y -= GHOST_DROP;
            true
        } else if self.x - half < -1.0 {
            self.x = -1.0 + half;
            self.vx = self.vx.abs();
            self.y -= GHOST_DROP;
            true
        } else {
            false
        }
    }

    /// Lower edge at or below the top of the player's row
    pub fn has_breached(&self) -> bool {
        self.y <= BREACH_Y
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Wave/restart randomness; continues across restarts
    pub(crate) rng: Pcg32,
    /// Score (multiples of `KILL_SCORE`)
    pub score: u32,
    /// Remaining lives, 0..=INITIAL_LIVES
    pub lives: u8,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    pub bullet: Bullet,
    /// Ghost arena (at most `MAX_GHOSTS`, dead slots kept until the next wave)
    pub ghosts: Vec<Ghost>,
    /// Seconds since the last shot
    pub shoot_timer: f32,
    /// Simulated seconds since (re)start
    pub time: f32,
    /// Waves spawned since (re)start, including the first
    pub wave_index: u32,
}

impl GameState {
    /// Create a new game with the initial wave already spawned
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            lives: INITIAL_LIVES,
            phase: GamePhase::Playing,
            player: Player::default(),
            bullet: Bullet::default(),
            ghosts: Vec::with_capacity(MAX_GHOSTS),
            shoot_timer: 0.0,
            time: 0.0,
            wave_index: 0,
        };
        spawn_wave(&mut state, INITIAL_WAVE, 1.0);
        state
    }

    /// Return to the initial playing state. The RNG is not reseeded.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = INITIAL_LIVES;
        self.phase = GamePhase::Playing;
        self.player = Player::default();
        self.bullet = Bullet::default();
        self.shoot_timer = 0.0;
        self.time = 0.0;
        self.wave_index = 0;
        spawn_wave(self, INITIAL_WAVE, 1.0);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn alive_ghosts(&self) -> impl Iterator<Item = &Ghost> {
        self.ghosts.iter().filter(|g| g.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive_ghosts().count()
    }

    /// Lose one life; returns true if that ended the game
    pub(crate) fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 && self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            return true;
        }
        false
    }
}
