//! Vertical camera follow
//!
//! Leads instantly while the player climbs, lags with a fixed per-frame glide
//! while the player falls, and never scrolls below the spawn band.

use super::state::World;
use crate::consts::CAMERA_EASE_STEP;

/// Next camera offset for a player at `player_y`
pub fn follow(offset: f32, player_y: f32, world: &World) -> f32 {
    let band = world.follow_band();
    let target = player_y - band;

    let next = if target > offset {
        target
    } else if player_y < offset + band {
        offset - CAMERA_EASE_STEP
    } else {
        offset
    };

    next.max(0.0)
}
