//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep (every motion and cooldown scales by `dt`)
//! - Seeded RNG owned by the state
//! - Stable iteration order (ghost arena index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{Aabb, overlaps};
pub use state::{Bullet, GameEvent, GamePhase, GameState, Ghost, Player};
pub use tick::{TickInput, tick};
pub use wave::{WaveParams, next_wave, spawn_wave};
