//! Sky Hopper - A vertical platform-hopping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, landings, platform field, camera)
//! - `highscores`: Persisted best score
//! - `settings`: JSON configuration
//! - `frame`: Per-frame snapshot handed to an external renderer
//! - `game`: Frame driver tying input, simulation and persistence together

pub mod error;
pub mod frame;
pub mod game;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use error::{HighScoreError, SettingsError};
pub use frame::FrameSnapshot;
pub use game::{Command, Game};
pub use highscores::{HighScoreFile, HighScoreStore, MemoryHighScores, record_high_score};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate the physics constants are tuned for.
    /// Physics is NOT scaled by frame delta.
    pub const NOMINAL_FPS: u32 = 60;

    /// Default screen dimensions
    pub const SCREEN_WIDTH: f32 = 820.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Half the player sprite height (foot point = y - this)
    pub const PLAYER_HALF_HEIGHT: f32 = 30.0;

    /// Score needed to move from tier 1 to tier 2
    pub const LEVEL_UP_SCORE: u64 = 1000;
    /// Points per landing
    pub const LANDING_SCORE: u64 = 10;
    /// Height units per point of height score
    pub const HEIGHT_PER_POINT: f32 = 5.0;

    /// Camera ease-down per frame while the player is below the follow band
    pub const CAMERA_EASE_STEP: f32 = 5.0;
    /// Player dropping this far below the camera offset ends the run
    pub const GAME_OVER_MARGIN: f32 = 100.0;

    /// Platform centers keep this far from the side walls
    pub const PLATFORM_X_MARGIN: i32 = 50;
    /// Ground platform sits this far below the spawn point
    pub const GROUND_OFFSET: f32 = 50.0;
    /// Gap between the ground and its first neighbours (clamped to the tier's range)
    pub const FIRST_GAP: u32 = 100;
    /// Platforms appended per extension
    pub const PLATFORMS_PER_EXTENSION: usize = 3;

    /// Initial field spans this many screens below the spawn point...
    pub const FILL_BELOW_SCREENS: f32 = 2.0;
    /// ...and this many above it
    pub const FILL_ABOVE_SCREENS: f32 = 3.0;
    /// Platforms further than this many screens below the player are culled
    pub const CULL_SCREENS: f32 = 2.0;
    /// Field is extended while its top is closer than this many screens above the player
    pub const EXTEND_LOOKAHEAD_SCREENS: f32 = 2.0;
}

/// Wrap a horizontal position across the screen edges.
///
/// Positions leaving `[0, width]` are teleported to the opposite edge exactly,
/// not wrapped by modulo.
#[inline]
pub fn wrap_horizontal(x: f32, width: f32) -> f32 {
    if x < 0.0 {
        width
    } else if x > width {
        0.0
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_horizontal() {
        assert_eq!(wrap_horizontal(-0.5, 820.0), 820.0);
        assert_eq!(wrap_horizontal(820.5, 820.0), 0.0);
        assert_eq!(wrap_horizontal(400.0, 820.0), 400.0);
        // Exact edges stay put
        assert_eq!(wrap_horizontal(0.0, 820.0), 0.0);
        assert_eq!(wrap_horizontal(820.0, 820.0), 820.0);
    }
}
