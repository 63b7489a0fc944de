//! Neon Pong - a two-player arcade Pong with neon particle effects
//!
//! Core modules:
//! - `sim`: Deterministic tick-based simulation (entities, round state, collisions)
//! - `driver`: Fixed-rate frame driver tying input, simulation, audio and rendering together
//! - `renderer`: Snapshot-to-draw-command composition and the wgpu pipeline
//! - `audio`: Procedurally synthesised sound cues
//! - `platform`: Collaborator traits and the native winit front end
//! - `settings`: Startup configuration

pub mod audio;
pub mod color;
pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::Rgba;
pub use driver::{FrameDriver, TickOutcome};
pub use error::{PlatformError, SettingsError};
pub use settings::Settings;

/// Game configuration constants
///
/// Distances are canvas pixels, speeds are pixels per tick, durations are ticks.
pub mod consts {
    /// Simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Fixed canvas the arena is laid out on
    pub const ARENA_WIDTH: f32 = 1920.0;
    pub const ARENA_HEIGHT: f32 = 1080.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;
    pub const PADDLE_SPEED: f32 = 10.0;
    pub const PADDLE_MARGIN: f32 = 50.0;
    pub const PADDLE_CORNER_RADIUS: f32 = 12.0;
    /// Number of midpoints kept in a paddle trail
    pub const TRAIL_CAPACITY: usize = 11;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 25.0;
    pub const BALL_GLOW_EXTRA: f32 = 20.0;
    pub const BALL_BASE_SPEED: f32 = 10.0;
    /// Pulse phase advance per tick (radians)
    pub const BALL_PULSE_STEP: f32 = 0.1;
    /// Pulse amplitude added to the glow radius
    pub const BALL_PULSE_AMPLITUDE: f32 = 3.0;

    /// Speed boost when ball hits paddle (multiplicative, horizontal only)
    pub const PADDLE_BOOST: f32 = 1.05;
    /// Offset from paddle centre is divided by this to get added vertical speed
    pub const SPIN_DIVISOR: f32 = 30.0;

    /// Particle bursts
    pub const BURST_SIZE: usize = 15;
    pub const PARTICLE_LIFE: u32 = 30;
    pub const PARTICLE_MIN_SPEED: f32 = 1.0;
    pub const PARTICLE_MAX_SPEED: f32 = 4.0;
    pub const PARTICLE_MIN_SIZE: u32 = 2;
    pub const PARTICLE_MAX_SIZE: u32 = 5;
    pub const PARTICLE_SHRINK: f32 = 0.1;

    /// Round timers
    pub const COUNTDOWN_TICKS: u32 = 3 * TICKS_PER_SECOND;
    pub const GOAL_PAUSE_TICKS: u32 = TICKS_PER_SECOND;
    /// Countdown digit is shown while `timer % TICKS_PER_SECOND` is below this
    pub const COUNTDOWN_BLINK_ON: u32 = TICKS_PER_SECOND / 2;

    /// Background
    pub const STAR_COUNT: usize = 200;
    pub const STAR_MIN_SPEED: f32 = 0.2;
    pub const STAR_MAX_SPEED: f32 = 1.0;
}
