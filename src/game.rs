//! Frame driver
//!
//! Owns the simulation and effects state and runs one frame at a time:
//! clock → input → simulation step → effects. Rendering and the status line
//! read the result afterwards.

use crate::clock::{Clock, FrameClock};
use crate::fx::{Effects, FxConfig};
use crate::hud;
use crate::input::{InputMapper, KeyState};
use crate::render::{RenderSnapshot, Vertex, build_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// What the host should do after a frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    /// Quit was requested
    pub quit: bool,
    /// Seconds simulated this frame
    pub dt: f32,
    pub events: Vec<GameEvent>,
}

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    pub state: GameState,
    pub fx: Effects,
    settings: Settings,
    mapper: InputMapper,
    frames: FrameClock,
    /// Seconds since launch (drives cosmetic animation)
    elapsed: f32,
}

impl Game {
    pub fn new(seed: u64, settings: Settings) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed),
            fx: Effects::new(seed, FxConfig::from(&settings)),
            settings,
            mapper: InputMapper,
            frames: FrameClock::new(),
            elapsed: 0.0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run one frame from polled keys and the clock
    pub fn frame(&mut self, keys: &KeyState, clock: &impl Clock) -> FrameOutcome {
        if keys.quit {
            log::info!("Quit requested");
            return FrameOutcome {
                quit: true,
                dt: 0.0,
                events: Vec::new(),
            };
        }
        let input = self.mapper.map(keys);
        self.frame_with_input(&input, clock)
    }

    /// Run one frame from already-mapped input (autopilot, replays)
    pub fn frame_with_input(&mut self, input: &TickInput, clock: &impl Clock) -> FrameOutcome {
        let dt = self.settings.clamp_dt(self.frames.delta(clock));
        let events = self.step(input, dt);
        FrameOutcome {
            quit: false,
            dt,
            events,
        }
    }

    /// Advance by an explicit input and delta
    pub fn step(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        let events = tick(&mut self.state, input, dt);
        self.fx.apply(&events);
        self.fx.update(dt, self.state.is_game_over());
        self.elapsed += dt;
        events
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, &self.fx, self.elapsed)
    }

    pub fn draw_list(&self) -> Vec<Vertex> {
        build_frame(&self.snapshot())
    }

    pub fn title(&self) -> String {
        hud::window_title(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::consts::*;
    use crate::sim::Ghost;

    #[test]
    fn test_frame_uses_clock_delta() {
        let clock = ManualClock::new();
        let mut game = Game::new(1, Settings::default());

        let first = game.frame(&KeyState::default(), &clock);
        assert_eq!(first.dt, 0.0);

        clock.advance(0.05);
        let keys = KeyState {
            right: true,
            ..Default::default()
        };
        let out = game.frame(&keys, &clock);
        assert!((out.dt - 0.05).abs() < 1e-6);
        assert!((game.state.player.x - PLAYER_SPEED * 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let clock = ManualClock::new();
        let mut game = Game::new(1, Settings::default());
        game.frame(&KeyState::default(), &clock);
        clock.advance(3.0);
        let out = game.frame(&KeyState::default(), &clock);
        assert_eq!(out.dt, 0.1);
    }

    #[test]
    fn test_quit() {
        let clock = ManualClock::new();
        let mut game = Game::new(1, Settings::default());
        let keys = KeyState {
            quit: true,
            ..Default::default()
        };
        assert!(game.frame(&keys, &clock).quit);
    }

    #[test]
    fn test_kill_reaches_effects() {
        let mut game = Game::new(2, Settings::default());
        game.state.ghosts.clear();
        game.state.ghosts.push(Ghost::new(0.0, 0.0, 0.0));
        game.state.ghosts.push(Ghost::new(0.5, 0.8, 0.0));
        game.state.bullet.fire(glam::Vec2::new(0.0, -0.02));

        let events = game.step(&TickInput::default(), 1.0 / 60.0);
        assert!(events.iter().any(|e| matches!(e, GameEvent::GhostDestroyed { .. })));
        assert!(!game.fx.particles.is_empty());
        assert!(game.fx.shake.is_active());
        assert!(game.title().contains("SCORE: 10"));
        assert!(game.draw_list().len() > 6 * 4);
    }

    #[test]
    fn test_particles_disabled_by_settings() {
        let settings = Settings {
            particles: false,
            ..Default::default()
        };
        let mut game = Game::new(2, settings);
        game.state.ghosts.clear();
        game.state.ghosts.push(Ghost::new(0.0, 0.0, 0.0));
        game.state.bullet.fire(glam::Vec2::new(0.0, -0.02));
        game.step(&TickInput::default(), 1.0 / 60.0);
        assert_eq!(game.state.score, KILL_SCORE);
        assert!(game.fx.particles.is_empty());
    }
}
