//! Input mapping
//!
//! The host polls its keyboard once per frame into a [`KeyState`]; this
//! module turns that into the simulation's [`TickInput`]. [`Autopilot`]
//! produces the same input from the game state for unattended demo runs.

use crate::consts::*;
use crate::sim::{GameState, TickInput};

/// Raw key-down state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    /// A or Left arrow
    pub left: bool,
    /// D or Right arrow
    pub right: bool,
    /// Space
    pub fire: bool,
    /// R
    pub restart: bool,
    /// Escape
    pub quit: bool,
}

/// Maps key state to simulation input
#[derive(Debug, Clone, Copy, Default)]
pub struct InputMapper;

impl InputMapper {
    pub fn map(&self, keys: &KeyState) -> TickInput {
        let mut move_axis = 0.0;
        if keys.left {
            move_axis -= 1.0;
        }
        if keys.right {
            move_axis += 1.0;
        }
        TickInput {
            move_axis,
            fire: keys.fire,
            restart: keys.restart,
        }
    }
}

/// Plays the game: shadows the most threatening ghost and fires when lined up
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot {
    /// Request a restart on game over
    pub auto_restart: bool,
}

impl Autopilot {
    pub fn new(auto_restart: bool) -> Self {
        Self { auto_restart }
    }

    pub fn input(&self, state: &GameState) -> TickInput {
        if state.is_game_over() {
            return TickInput {
                restart: self.auto_restart,
                ..Default::default()
            };
        }

        // Lowest ghost is closest to breaching
        let target = state
            .alive_ghosts()
            .min_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));

        let Some(ghost) = target else {
            return TickInput::default();
        };

        // Lead the target by the bullet's flight time
        let flight = ((ghost.y - state.player.muzzle().y) / BULLET_SPEED).max(0.0);
        let aim_x = crate::clamp_to_field(ghost.x + ghost.vx * flight, GHOST_W);
        let dx = aim_x - state.player.x;
        let deadzone = BULLET_W;
        let move_axis = if dx > deadzone {
            1.0
        } else if dx < -deadzone {
            -1.0
        } else {
            0.0
        };

        TickInput {
            move_axis,
            fire: dx.abs() < GHOST_W * 0.5,
            restart: false,
        }
    }
}
