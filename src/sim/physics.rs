//! Per-frame player motion
//!
//! One explicit Euler step per frame. Constants are tuned for `NOMINAL_FPS`
//! and are deliberately not scaled by frame delta.

use super::state::{Player, SessionState, World};
use super::tier::TierParams;
use crate::consts::HEIGHT_PER_POINT;
use crate::wrap_horizontal;

/// Set horizontal speed from held directions.
///
/// Exactly one direction held moves at `move_speed`; none or both stops.
/// Facing only changes while moving.
pub fn steer(player: &mut Player, left: bool, right: bool, move_speed: f32) {
    player.speed_x = match (left, right) {
        (true, false) => {
            player.facing_right = false;
            -move_speed
        }
        (false, true) => {
            player.facing_right = true;
            move_speed
        }
        _ => 0.0,
    };
}

/// Advance the player one frame: horizontal move with wraparound, then gravity.
pub fn step(player: &mut Player, world: &World, params: &TierParams) {
    player.pos.x = wrap_horizontal(player.pos.x + player.speed_x, world.width);

    player.vel_y -= params.gravity;
    player.pos.y += player.vel_y;
}

/// Award height score for climbing above the watermark.
///
/// Each frame's gain is truncated separately, so slow climbs near the apex
/// may earn nothing. Returns the points awarded.
pub fn score_height(session: &mut SessionState, y: f32) -> u64 {
    if y <= session.highest_y {
        return 0;
    }
    let gained = y - session.highest_y;
    session.highest_y = y;
    let points = (gained / HEIGHT_PER_POINT).floor() as u64;
    session.score += points;
    points
}
