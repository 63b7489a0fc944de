//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` is one sixtieth of a second)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod paddle;
pub mod particle;
pub mod stars;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::{bounce_off_paddle, bounce_off_walls, detect_goal};
pub use paddle::{Paddle, Side};
pub use particle::{EffectPool, Particle};
pub use stars::{Star, Starfield};
pub use state::{GameEvent, GameWorld, Overlay, RoundPhase, RoundState, Snapshot, WorldOptions};
pub use tick::{TickInput, advance_round, tick};
