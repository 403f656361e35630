//! Per-frame simulation step
//!
//! Advances the game state by one measured frame. The timestep is variable:
//! fast movers can skip past a wall or a ghost on very long frames, and this
//! is not guarded against.

use super::collision::overlaps;
use super::state::{GameEvent, GamePhase, GameState};
use super::wave::{next_wave, spawn_wave};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Horizontal intent in [-1, 1]
    pub move_axis: f32,
    /// Fire held (cooldown and single-bullet rules are enforced here)
    pub fire: bool,
    /// Restart request, honoured only on game over
    pub restart: bool,
}

/// Advance the game state by `dt` seconds, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.shoot_timer += dt;

    if state.phase == GamePhase::GameOver {
        if !input.restart {
            return events;
        }
        state.reset();
        log::info!("Game restarted");
        events.push(GameEvent::Restarted);
    }

    // Player and firing
    state.player.steer(input.move_axis, dt);
    if input.fire && !state.bullet.active && state.shoot_timer >= SHOOT_COOLDOWN {
        let muzzle = state.player.muzzle();
        state.bullet.fire(muzzle);
        state.shoot_timer = 0.0;
        events.push(GameEvent::Shot { pos: muzzle });
    }

    state.bullet.advance(dt);

    // Counted before the pass so a cleared wave is replaced on the next frame
    let alive_at_start = state.alive_count();
    let mut ended = false;

    for i in 0..state.ghosts.len() {
        if !state.ghosts[i].alive {
            continue;
        }

        let ghost = &mut state.ghosts[i];
        ghost.march(dt, state.time);

        // Breach wins over a bullet hit on the same frame
        if ghost.has_breached() {
            ghost.alive = false;
            let pos = ghost.pos();
            log::debug!("Ghost breached at x={:.2}", pos.x);
            events.push(GameEvent::Breach { pos });
            ended |= state.lose_life();
            continue;
        }

        if state.bullet.active
            && overlaps(state.bullet.pos(), state.bullet.size(), ghost.pos(), ghost.size())
        {
            ghost.alive = false;
            let pos = ghost.pos();
            state.bullet.active = false;
            state.score += KILL_SCORE;

            for other in state.ghosts.iter_mut().filter(|g| g.alive) {
                other.vx *= RUBBER_BAND;
            }

            log::debug!("Ghost destroyed, score {}", state.score);
            events.push(GameEvent::GhostDestroyed { pos });
        }
    }

    // Reported after the pass: later ghosts may still be shot this frame
    if ended {
        log::info!("Game over with score {}", state.score);
        events.push(GameEvent::GameOver { score: state.score });
    }

    if alive_at_start == 0 && state.phase == GamePhase::Playing {
        let wave = next_wave(state.score);
        spawn_wave(state, wave.count, wave.speed_scale);
        events.push(GameEvent::WaveSpawned {
            count: wave.count,
            speed_scale: wave.speed_scale,
        });
    }

    state.time += dt;
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ghost;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn fire() -> TickInput {
        TickInput {
            fire: true,
            ..Default::default()
        }
    }

    /// A state with a single slow ghost parked away from walls and player
    fn quiet_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.ghosts.clear();
        state.ghosts.push(Ghost::new(0.5, 0.8, 0.0));
        state
    }

    #[test]
    fn test_start_of_game() {
        let state = GameState::new(12345);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.ghosts.len(), 6);
        assert!(state.ghosts.iter().all(|g| g.alive));
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut state = quiet_state(1);
        state.shoot_timer = SHOOT_COOLDOWN;

        let events = tick(&mut state, &fire(), DT);
        assert!(state.bullet.active);
        assert!(matches!(events[0], GameEvent::Shot { .. }));
        let first_y = state.bullet.y;

        // Immediate second request: same single bullet, no new shot
        let events = tick(&mut state, &fire(), DT);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Shot { .. })));
        assert!(state.bullet.active);
        assert!(state.bullet.y > first_y);
    }

    #[test]
    fn test_no_shot_before_cooldown_even_without_bullet() {
        let mut state = quiet_state(1);
        state.shoot_timer = 0.0;
        tick(&mut state, &fire(), DT);
        assert!(!state.bullet.active);
    }

    #[test]
    fn test_bullet_moves_with_player_position() {
        let mut state = quiet_state(1);
        state.shoot_timer = SHOOT_COOLDOWN;
        let input = TickInput {
            move_axis: -1.0,
            fire: true,
            restart: false,
        };
        tick(&mut state, &input, DT);
        assert!(state.player.x < 0.0);
        assert_eq!(state.bullet.x, state.player.x);
    }

    #[test]
    fn test_breach_at_exact_boundary() {
        let mut state = GameState::new(3);
        state.ghosts.clear();
        state.ghosts.push(Ghost::new(0.0, PLAYER_Y + PLAYER_H * 0.5 + GHOST_H * 0.5, 0.0));

        let events = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.lives, 2);
        assert!(!state.ghosts[0].alive);
        assert!(events.iter().any(|e| matches!(e, GameEvent::Breach { .. })));
    }

    #[test]
    fn test_breach_beats_bullet_hit() {
        let mut state = GameState::new(3);
        state.ghosts.clear();
        state.ghosts.push(Ghost::new(0.0, BREACH_Y - 0.01, 0.0));
        state.bullet.fire(glam::Vec2::new(0.0, BREACH_Y - 0.01));

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 0);
        assert!(state.bullet.active);
    }

    #[test]
    fn test_bullet_kill_scores_and_speeds_up_survivors() {
        let mut state = GameState::new(9);
        state.ghosts.clear();
        state.ghosts.push(Ghost::new(0.0, 0.0, 0.0));
        state.ghosts.push(Ghost::new(-0.5, 0.6, 0.4));
        state.bullet.fire(glam::Vec2::new(0.0, -0.02));

        let events = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.score, KILL_SCORE);
        assert!(!state.bullet.active);
        assert!(!state.ghosts[0].alive);
        assert!(state.ghosts[1].alive);
        assert!((state.ghosts[1].vx - 0.4 * RUBBER_BAND).abs() < 1e-6);
        assert!(events.iter().any(|e| matches!(e, GameEvent::GhostDestroyed { .. })));
    }

    #[test]
    fn test_bullet_cannot_pierce() {
        let mut state = GameState::new(9);
        state.ghosts.clear();
        state.ghosts.push(Ghost::new(0.0, 0.0, 0.0));
        state.ghosts.push(Ghost::new(0.0, 0.01, 0.0));
        state.bullet.fire(glam::Vec2::new(0.0, -0.02));

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.score, KILL_SCORE);
        assert_eq!(state.alive_count(), 1);
    }

    #[test]
    fn test_wave_respawns_frame_after_clear() {
        let mut state = GameState::new(11);
        state.score = 50;
        state.ghosts.clear();
        state.ghosts.push(Ghost::new(0.0, 0.0, 0.0));
        state.bullet.fire(glam::Vec2::new(0.0, -0.02));

        // Kill frame: the wave is empty afterwards but not yet replaced
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.score, 60);
        assert_eq!(state.alive_count(), 0);

        let events = tick(&mut state, &TickInput::default(), DT);
        let expected = next_wave(60);
        assert_eq!(expected.count, (4 + 60 / 20).min(8));
        assert_eq!(state.ghosts.len(), expected.count);
        assert_eq!(state.alive_count(), expected.count);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::WaveSpawned { count, speed_scale }
                if *count == expected.count && (*speed_scale - 1.6).abs() < 1e-6
        )));
        for g in &state.ghosts {
            assert!(g.vx.abs() >= GHOST_SPEED_MIN * 1.6 - 1e-5);
        }
    }

    #[test]
    fn test_last_life_ends_game_and_freezes() {
        let mut state = GameState::new(5);
        state.lives = 1;
        state.ghosts.clear();
        state.ghosts.push(Ghost::new(0.0, BREACH_Y, 0.0));
        state.ghosts.push(Ghost::new(0.3, 0.5, 0.5));
        // In flight, well clear of both ghosts
        state.bullet.fire(glam::Vec2::new(-0.6, 0.0));

        let events = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.lives, 0);
        assert!(state.is_game_over());
        assert!(events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })));
        assert!(state.bullet.active);

        let frozen_ghosts = state.ghosts.clone();
        let frozen_player = state.player;
        let frozen_bullet = state.bullet;
        let input = TickInput {
            move_axis: 1.0,
            fire: true,
            restart: false,
        };
        for _ in 0..30 {
            assert!(tick(&mut state, &input, DT).is_empty());
        }
        assert_eq!(state.ghosts, frozen_ghosts);
        assert_eq!(state.player, frozen_player);
        assert_eq!(state.bullet, frozen_bullet);
    }

    #[test]
    fn test_game_over_reports_final_score() {
        let mut state = GameState::new(5);
        state.lives = 1;
        state.ghosts.clear();
        state.ghosts.push(Ghost::new(0.0, BREACH_Y, 0.0));
        state.ghosts.push(Ghost::new(0.5, 0.0, 0.0));
        state.bullet.fire(glam::Vec2::new(0.5, -0.02));

        let events = tick(&mut state, &TickInput::default(), DT);
        assert!(state.is_game_over());
        assert_eq!(state.score, KILL_SCORE);
        assert!(events.iter().any(|e| matches!(e, GameEvent::GhostDestroyed { .. })));

        let over: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::GameOver { score } => Some(*score),
                _ => None,
            })
            .collect();
        assert_eq!(over, vec![KILL_SCORE]);
        assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut state = GameState::new(5);
        state.score = 90;
        state.lives = 1;
        state.ghosts.clear();
        state.ghosts.push(Ghost::new(0.0, BREACH_Y, 0.0));
        tick(&mut state, &TickInput::default(), DT);
        assert!(state.is_game_over());

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let events = tick(&mut state, &restart, DT);
        assert_eq!(events[0], GameEvent::Restarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ghosts.len(), INITIAL_WAVE);
        assert!(!state.bullet.active);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::new(5);
        state.score = 40;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, DT);
        assert_eq!(state.score, 40);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                move_axis: 1.0,
                ..Default::default()
            },
            fire(),
            TickInput {
                move_axis: -0.5,
                fire: true,
                restart: false,
            },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input, DT);
                tick(&mut state2, input, DT);
            }
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.lives, state2.lives);
        assert_eq!(state1.ghosts, state2.ghosts);
        assert_eq!(state1.player, state2.player);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (-1.0f32..=1.0, any::<bool>()).prop_map(|(move_axis, fire)| TickInput {
            move_axis,
            fire,
            restart: false,
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_frame_invariants(
            seed in any::<u64>(),
            frames in prop::collection::vec((arb_input(), 0.001f32..0.05), 1..400),
        ) {
            let mut state = GameState::new(seed);
            let mut prev_lives = state.lives;
            let mut prev_score = state.score;

            for (input, dt) in &frames {
                let timer_before = state.shoot_timer + dt;
                let was_active = state.bullet.active;
                let events = tick(&mut state, input, *dt);

                prop_assert!(state.lives <= INITIAL_LIVES);
                prop_assert!(state.lives <= prev_lives);
                prop_assert_eq!(state.is_game_over(), state.lives == 0);

                let kills = events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::GhostDestroyed { .. }))
                    .count() as u32;
                prop_assert!(kills <= 1);
                prop_assert_eq!(state.score, prev_score + kills * KILL_SCORE);

                let shot = events.iter().any(|e| matches!(e, GameEvent::Shot { .. }));
                if shot {
                    prop_assert!(!was_active);
                    prop_assert!(timer_before >= SHOOT_COOLDOWN);
                }

                prop_assert!(state.ghosts.len() <= MAX_GHOSTS);
                for g in state.alive_ghosts() {
                    prop_assert!(g.x.abs() <= 1.0 - GHOST_W * 0.5);
                }
                prop_assert!(state.player.x.abs() <= 1.0 - PLAYER_W * 0.5);

                prev_lives = state.lives;
                prev_score = state.score;
            }
        }
    }
}
