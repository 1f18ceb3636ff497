//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no delta-time scaling
//! - Seeded RNG only
//! - Stable platform order (generation order)
//! - No rendering, input-device or file dependencies

pub mod camera;
pub mod collision;
pub mod field;
pub mod physics;
pub mod state;
pub mod tick;
pub mod tier;

pub use collision::{find_landing, resolve_landing};
pub use field::PlatformField;
pub use state::{
    GameEvent, GamePhase, GameSession, Platform, PlatformColor, Player, SessionState, World,
};
pub use tick::{TickInput, tick};
pub use tier::{DifficultyTier, TIER1_PARAMS, TIER2_PARAMS, TierParams};
