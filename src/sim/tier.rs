//! Difficulty tiers
//!
//! Two fixed parameter sets. The session starts on `Tier1` and moves to
//! `Tier2` once, when the score first reaches `LEVEL_UP_SCORE`. A tier change
//! only affects what is generated and simulated afterwards; platforms already
//! in the field keep the size and spacing they were created with.

use serde::{Deserialize, Serialize};

use crate::consts::LEVEL_UP_SCORE;

/// Physics and generation constants for one tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierParams {
    /// Subtracted from vertical velocity every frame
    pub gravity: f32,
    /// Vertical velocity after a landing
    pub jump_impulse: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    /// Inclusive range of vertical gaps between generated platforms
    pub min_gap: u32,
    pub max_gap: u32,
}

pub const TIER1_PARAMS: TierParams = TierParams {
    gravity: 0.4,
    jump_impulse: 18.0,
    move_speed: 5.0,
    platform_width: 100.0,
    platform_height: 30.0,
    min_gap: 80,
    max_gap: 150,
};

pub const TIER2_PARAMS: TierParams = TierParams {
    gravity: 0.5,
    jump_impulse: 17.0,
    move_speed: 6.0,
    platform_width: 90.0,
    platform_height: 30.0,
    min_gap: 110,
    max_gap: 170,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DifficultyTier {
    #[default]
    Tier1,
    Tier2,
}

impl DifficultyTier {
    pub fn params(&self) -> TierParams {
        match self {
            DifficultyTier::Tier1 => TIER1_PARAMS,
            DifficultyTier::Tier2 => TIER2_PARAMS,
        }
    }

    /// Level number shown on the HUD
    pub fn level(&self) -> u8 {
        match self {
            DifficultyTier::Tier1 => 1,
            DifficultyTier::Tier2 => 2,
        }
    }

    /// Tier to use given the current score. Never steps back down.
    pub fn advance(self, score: u64) -> Self {
        match self {
            DifficultyTier::Tier1 if score >= LEVEL_UP_SCORE => DifficultyTier::Tier2,
            other => other,
        }
    }
}
