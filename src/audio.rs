//! Audio cues using rodio
//!
//! Procedurally generated sine blips - no sound files needed. Audio is an
//! optional capability: when no output device can be opened the game runs
//! silently and nothing else changes.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamBuilder};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Headroom so stacked cues don't clip
const CUE_GAIN: f32 = 0.25;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top/bottom wall
    WallHit,
    /// Someone scored
    Score,
}

impl Cue {
    /// Cue that accompanies a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::WallHit => Cue::WallHit,
            GameEvent::PaddleHit { .. } => Cue::PaddleHit,
            GameEvent::Goal { .. } => Cue::Score,
        }
    }

    /// Frequency (Hz) and length of the tone
    pub fn tone(self) -> (f32, Duration) {
        match self {
            Cue::PaddleHit => (400.0, Duration::from_millis(50)),
            Cue::WallHit => (300.0, Duration::from_millis(50)),
            Cue::Score => (200.0, Duration::from_millis(300)),
        }
    }
}

/// Anything that can play a cue, fire-and-forget
pub trait CueSink {
    fn play(&self, cue: Cue);
}

/// Audio manager for the game
pub struct AudioManager {
    stream: OutputStream,
    volume: f32,
}

impl AudioManager {
    /// Open the default output device; `None` (with a warning) if there isn't one
    pub fn new(settings: &Settings) -> Option<Self> {
        match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                stream.log_on_drop(false);
                log::info!("Audio output opened");
                Some(Self {
                    stream,
                    volume: settings.effective_volume(),
                })
            }
            Err(e) => {
                log::warn!("Failed to open audio output - audio disabled: {e}");
                None
            }
        }
    }
}

impl CueSink for AudioManager {
    fn play(&self, cue: Cue) {
        if self.volume <= 0.0 {
            return;
        }

        let (freq, duration) = cue.tone();
        let source = SineWave::new(freq)
            .take_duration(duration)
            .amplify(self.volume * CUE_GAIN);
        self.stream.mixer().add(source);
    }
}
