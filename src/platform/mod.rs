//! Platform abstraction layer
//!
//! The frame driver talks to the outside world only through these traits:
//! - [`InputSource`]: held keys and quit requests
//! - [`Pacer`]: fixed-rate tick timing
//! - [`Renderer`]: presenting a snapshot
//!
//! Audio goes through [`crate::audio::CueSink`]. The [`native`] module wires
//! all of them to winit, wgpu and rodio.

pub mod input;
pub mod native;
pub mod pacer;

use std::time::Duration;

use crate::error::PlatformError;
use crate::sim::Snapshot;

pub use input::{Control, KeyState, tick_input};
pub use pacer::FramePacer;

/// Source of player input
pub trait InputSource {
    /// Pull pending platform events into the held-key state
    fn poll(&mut self) -> Result<(), PlatformError>;

    fn is_held(&self, control: Control) -> bool;

    /// Escape was pressed or the window was closed
    fn quit_requested(&self) -> bool;
}

/// Blocks until the next tick is due
pub trait Pacer {
    /// Returns the time elapsed since the previous tick
    fn wait_for_next_tick(&mut self) -> Duration;
}

/// Draws one frame
pub trait Renderer {
    fn present(&mut self, snapshot: &Snapshot<'_>) -> Result<(), PlatformError>;
}
