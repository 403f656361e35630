//! Ghost Busters entry point
//!
//! The native binary runs a headless demo: the autopilot plays for
//! `demo_seconds` of simulated time and the status line is logged. Hosts
//! with a window drive [`ghost_busters::Game`] themselves.

use std::time::{SystemTime, UNIX_EPOCH};

use ghost_busters::clock::ManualClock;
use ghost_busters::input::Autopilot;
use ghost_busters::sim::GameEvent;
use ghost_busters::{Game, Settings};

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Ghost Busters (headless demo) starting...");

    let settings = Settings::load_or_default();
    let seed = settings.seed.unwrap_or_else(wall_clock_seed);
    let frame_dt = settings.demo_frame_dt.max(1e-4);
    let frames = (settings.demo_seconds.max(0.0) / frame_dt).ceil() as u64;
    let pilot = Autopilot::new(settings.demo_auto_restart);

    let mut game = Game::new(seed, settings);
    let clock = ManualClock::new();
    let mut last_title = String::new();
    let mut games_played = 1u32;

    for frame in 0..frames {
        clock.advance(frame_dt as f64);
        let input = pilot.input(&game.state);
        let outcome = game.frame_with_input(&input, &clock);

        for event in &outcome.events {
            if matches!(event, GameEvent::Restarted) {
                games_played += 1;
            }
        }

        let title = game.title();
        if title != last_title {
            log::debug!("[frame {frame}] {title}");
            last_title = title;
        }

        if game.state.is_game_over() && !game.settings().demo_auto_restart {
            break;
        }
    }

    let snapshot = game.snapshot();
    match serde_json::to_string(&snapshot) {
        Ok(json) => log::trace!("Final snapshot: {json}"),
        Err(e) => log::warn!("Could not serialize final snapshot: {e}"),
    }
    log::info!(
        "Demo finished after {} game(s), {} waves: {}",
        games_played,
        game.state.wave_index,
        game.title()
    );
    println!("{}", game.title());
}
