//! Game settings
//!
//! Loaded from an optional JSON file. Every field has a default, so a partial
//! file only overrides what it names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{NOMINAL_FPS, PLATFORM_X_MARGIN, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::SettingsError;
use crate::highscores::DEFAULT_HIGH_SCORE_PATH;
use crate::sim::World;

/// Settings file looked up when none is given on the command line
pub const DEFAULT_SETTINGS_PATH: &str = "sky_hopper.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// RNG seed; a clock-derived seed is used when absent
    pub seed: Option<u64>,

    // === Persistence ===
    pub high_score_path: PathBuf,

    // === Headless driver ===
    /// Let the autopilot steer
    pub autopilot: bool,
    /// Stop after this many frames
    pub max_frames: u64,
    /// Restarts allowed after a game over before quitting
    pub restarts: u32,
    /// Frames between HUD log lines (0 = never)
    pub hud_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            seed: None,

            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),

            autopilot: true,
            // Ten minutes of play at the nominal frame rate
            max_frames: 10 * 60 * NOMINAL_FPS as u64,
            restarts: 2,
            hud_interval: NOMINAL_FPS as u64,
        }
    }
}

impl Settings {
    /// Playfield described by these settings
    pub fn world(&self) -> World {
        World::new(self.screen_width, self.screen_height)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("{} ({}). Falling back to defaults.", err, path.display());
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let min_width = (2 * PLATFORM_X_MARGIN) as f32;
        if !(self.screen_width.is_finite() && self.screen_width > min_width) {
            return Err(SettingsError::Invalid(format!(
                "screen_width must exceed {min_width}, got {}",
                self.screen_width
            )));
        }
        if !(self.screen_height.is_finite() && self.screen_height >= 3.0) {
            return Err(SettingsError::Invalid(format!(
                "screen_height must be at least 3, got {}",
                self.screen_height
            )));
        }
        Ok(())
    }
}
