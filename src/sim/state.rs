//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameSession`]; component
//! functions take the parts they need by reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::PlatformField;
use super::tier::{DifficultyTier, TierParams};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Things that happened during a tick, for the driver/HUD to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player bounced off the platform at this field index
    Landed { platform: usize, score: u64 },
    /// Difficulty stepped up
    TierUp { tier: DifficultyTier },
    /// Run ended with this score
    GameOver { score: u64 },
    /// Session reinitialized after a game over
    Restarted,
}

/// Playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl World {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Where the player appears at the start of a run
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new((self.width / 2.0).floor(), self.follow_band())
    }

    /// Distance the camera keeps between its offset and the player (a third of the screen)
    #[inline]
    pub fn follow_band(&self) -> f32 {
        (self.height / 3.0).floor()
    }
}

/// Platform color tag (renderer picks the actual color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformColor {
    Green,
    Blue,
    Red,
    Yellow,
    Purple,
}

impl PlatformColor {
    pub const ALL: [PlatformColor; 5] = [
        PlatformColor::Green,
        PlatformColor::Blue,
        PlatformColor::Red,
        PlatformColor::Yellow,
        PlatformColor::Purple,
    ];
}

/// An axis-aligned platform. Never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
    pub center: Vec2,
    pub color: PlatformColor,
}

impl Platform {
    pub fn new(center: Vec2, width: f32, height: f32, color: PlatformColor) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self {
            left: center.x - half_w,
            bottom: center.y - half_h,
            right: center.x + half_w,
            top: center.y + half_h,
            center,
            color,
        }
    }

    /// Build a platform sized for the given tier
    pub fn for_tier(center: Vec2, params: &TierParams, color: PlatformColor) -> Self {
        Self::new(center, params.platform_width, params.platform_height, color)
    }

    /// Strictly inside the horizontal span
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        self.left < x && x < self.right
    }

    /// Strictly inside the vertical span
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        self.bottom < y && y < self.top
    }
}

/// The player sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity (positive = up)
    pub vel_y: f32,
    /// Horizontal speed from held input
    pub speed_x: f32,
    pub facing_right: bool,
}

impl Player {
    pub fn spawn(world: &World) -> Self {
        Self {
            pos: world.spawn_point(),
            vel_y: 0.0,
            speed_x: 0.0,
            facing_right: true,
        }
    }

    /// Lower edge of the sprite, used for landing tests
    #[inline]
    pub fn foot_y(&self) -> f32 {
        self.pos.y - PLAYER_HALF_HEIGHT
    }
}

/// Score, camera and phase for the current run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub score: u64,
    /// Highest y reached this run; height score only accrues above it
    pub highest_y: f32,
    pub camera_offset_y: f32,
    pub phase: GamePhase,
    /// Best persisted score as of the last game over
    pub high_score: u64,
}

impl SessionState {
    pub fn new(spawn_y: f32) -> Self {
        Self {
            score: 0,
            highest_y: spawn_y,
            camera_offset_y: 0.0,
            phase: GamePhase::Playing,
            high_score: 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Complete simulation state for one game session
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub world: World,
    pub tier: DifficultyTier,
    pub player: Player,
    pub session: SessionState,
    pub field: PlatformField,
    /// Frames simulated since the last (re)start
    pub frame: u64,
}

impl GameSession {
    /// Create a new session on the default screen with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_world(seed, World::default())
    }

    pub fn with_world(seed: u64, world: World) -> Self {
        let player = Player::spawn(&world);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            world,
            tier: DifficultyTier::Tier1,
            player,
            session: SessionState::new(player.pos.y),
            field: PlatformField::new(),
            frame: 0,
        };
        state
            .field
            .initialize(&state.world, player.pos.y, state.tier, &mut state.rng);
        log::info!(
            "New session (seed {}): {} platforms",
            seed,
            state.field.len()
        );
        state
    }

    /// Reinitialize player, score and field to the tier 1 starting layout.
    ///
    /// The RNG keeps running, so the new layout differs from the last one.
    /// The known high score carries over.
    pub fn restart(&mut self) {
        let high_score = self.session.high_score;
        self.tier = DifficultyTier::Tier1;
        self.player = Player::spawn(&self.world);
        self.session = SessionState::new(self.player.pos.y);
        self.session.high_score = high_score;
        self.frame = 0;
        self.field
            .initialize(&self.world, self.player.pos.y, self.tier, &mut self.rng);
        log::info!("Session restarted: {} platforms", self.field.len());
    }

    /// Parameters of the tier currently in effect
    pub fn params(&self) -> TierParams {
        self.tier.params()
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }
}
