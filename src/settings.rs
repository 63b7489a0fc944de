//! Game settings
//!
//! Read once at startup from the JSON file named by `NEON_PONG_SETTINGS`.
//! Missing fields fall back to defaults. Settings are never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::sim::WorldOptions;

/// Environment variable holding the path of the settings file
pub const SETTINGS_ENV: &str = "NEON_PONG_SETTINGS";

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    Medium,
    #[default]
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Maximum live particles for this preset (`None` = unbounded)
    pub fn max_particles(&self) -> Option<usize> {
        match self {
            QualityPreset::Low => Some(60),
            QualityPreset::Medium => Some(300),
            QualityPreset::High => None,
        }
    }

    /// Stars in the parallax background
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 50,
            QualityPreset::Medium => 120,
            QualityPreset::High => crate::consts::STAR_COUNT,
        }
    }

    /// Segments used to tessellate a full circle
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 16,
            QualityPreset::Medium => 24,
            QualityPreset::High => 40,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Paddle-hit particle bursts
    pub particles: bool,
    /// Drifting star background
    pub starfield: bool,

    // === Display ===
    pub vsync: bool,
    /// Borderless fullscreen instead of a 1920x1080 window
    pub fullscreen: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    /// Fixed RNG seed for reproducible serves; random when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::High,

            particles: true,
            starfield: true,

            vsync: true,
            fullscreen: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, clamping volumes into range
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Read and parse a settings file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `NEON_PONG_SETTINGS` if set; any failure falls back to defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(Path::new(&path)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Path::new(&path).display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Effective volume for sound cues (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> Option<usize> {
        if !self.particles {
            Some(0)
        } else {
            self.quality.max_particles()
        }
    }

    /// World construction options implied by these settings
    pub fn world_options(&self) -> WorldOptions {
        WorldOptions {
            max_particles: self.max_particles(),
            star_count: if self.starfield {
                self.quality.star_count()
            } else {
                0
            },
        }
    }
}
