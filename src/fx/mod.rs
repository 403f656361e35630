//! Cosmetic effects
//!
//! Nothing in here feeds back into gameplay. The simulation reports what
//! happened as [`GameEvent`]s and this module turns them into particles and
//! camera shake, plus the drifting background starfield.

pub mod particles;
pub mod shake;
pub mod starfield;

use rand::SeedableRng;
use rand_pcg::Pcg32;

pub use particles::Particle;
pub use shake::ScreenShake;
pub use starfield::Star;

use crate::consts::STAR_COUNT;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Stream offset so effect randomness never mirrors wave randomness
const FX_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// Which effects are enabled and how many particles may live at once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FxConfig {
    pub max_particles: usize,
    pub star_count: usize,
    pub screen_shake: bool,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            max_particles: particles::BURST_COUNT * 16,
            star_count: STAR_COUNT,
            screen_shake: true,
        }
    }
}

impl From<&Settings> for FxConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            max_particles: settings.max_particles(),
            star_count: if settings.effective_starfield() {
                STAR_COUNT
            } else {
                0
            },
            screen_shake: settings.effective_screen_shake(),
        }
    }
}

/// All cosmetic state for one game
#[derive(Debug, Clone)]
pub struct Effects {
    config: FxConfig,
    rng: Pcg32,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    pub shake: ScreenShake,
}

impl Effects {
    pub fn new(seed: u64, config: FxConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed ^ FX_STREAM);
        let stars = starfield::populate(&mut rng, config.star_count);
        Self {
            config,
            rng,
            particles: Vec::new(),
            stars,
            shake: ScreenShake::default(),
        }
    }

    /// React to this frame's gameplay events
    pub fn apply(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::GhostDestroyed { pos } => {
                    particles::burst(&mut self.rng, pos, &mut self.particles, self.config.max_particles);
                    if self.config.screen_shake {
                        self.shake.raise(shake::KILL_PULSE);
                    }
                }
                GameEvent::Breach { .. } => {
                    if self.config.screen_shake {
                        self.shake.set(shake::BREACH_PULSE);
                    }
                }
                GameEvent::Restarted => {
                    self.particles.clear();
                    self.stars = starfield::populate(&mut self.rng, self.config.star_count);
                }
                GameEvent::Shot { .. } | GameEvent::GameOver { .. } | GameEvent::WaveSpawned { .. } => {}
            }
        }
    }

    /// Advance effects. Particles and stars hold still while `frozen`; shake
    /// always runs out.
    pub fn update(&mut self, dt: f32, frozen: bool) {
        if !frozen {
            particles::update(&mut self.particles, dt);
            starfield::update(&mut self.rng, &mut self.stars, dt);
        }
        self.shake.update(&mut self.rng, dt);
    }
}
