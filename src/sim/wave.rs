//! Wave spawning and difficulty progression

use std::f32::consts::TAU;

use rand::Rng;

use super::state::{GameState, Ghost};
use crate::consts::*;

/// Size and speed of the wave that follows a clear
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    pub count: usize,
    pub speed_scale: f32,
}

/// Difficulty for the next wave, non-decreasing in `score`
pub fn next_wave(score: u32) -> WaveParams {
    let count = (WAVE_BASE + (score / WAVE_SCORE_DIVISOR) as usize).min(MAX_GHOSTS);
    let speed_scale = 1.0 + score as f32 / WAVE_SPEED_NORMALIZER;
    WaveParams { count, speed_scale }
}

/// Replace the ghost arena with `count` fresh ghosts (clamped to capacity)
pub fn spawn_wave(state: &mut GameState, count: usize, speed_scale: f32) {
    let count = count.min(MAX_GHOSTS);
    state.ghosts.clear();

    let rng = &mut state.rng;
    for _ in 0..count {
        let x = rng.random_range(GHOST_SPAWN_X.0..GHOST_SPAWN_X.1);
        let y = rng.random_range(GHOST_SPAWN_Y.0..GHOST_SPAWN_Y.1);
        let speed = rng.random_range(GHOST_SPEED_MIN..GHOST_SPEED_MAX) * speed_scale;
        let vx = if rng.random_bool(0.5) { speed } else { -speed };
        let mut ghost = Ghost::new(x, y, vx);
        ghost.phase = rng.random_range(0.0..TAU);
        state.ghosts.push(ghost);
    }

    state.wave_index += 1;
    log::info!(
        "Wave {} spawned: {} ghosts, speed x{:.2}",
        state.wave_index,
        count,
        speed_scale
    );
}
