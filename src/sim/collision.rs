//! Landing detection and response
//!
//! Only a falling player can land. Platforms are checked in field order and
//! the first one under the player's foot wins, even if another overlapping
//! platform sits closer. Rising players pass through platforms from below.

use super::state::{Platform, Player, SessionState};
use super::tier::TierParams;
use crate::consts::{LANDING_SCORE, PLAYER_HALF_HEIGHT};

/// Index of the first platform the player is landing on, if any.
///
/// Requires `vel_y < 0`. A platform matches when the player's center x is
/// strictly inside its horizontal span and the foot point strictly inside its
/// vertical span.
pub fn find_landing(player: &Player, platforms: &[Platform]) -> Option<usize> {
    if player.vel_y >= 0.0 {
        return None;
    }
    let foot = player.foot_y();
    platforms
        .iter()
        .position(|p| p.spans_x(player.pos.x) && p.spans_y(foot))
}

/// Resolve a landing: snap the foot onto the platform top, bounce with the
/// tier's jump impulse and award `LANDING_SCORE`.
///
/// Returns the index of the platform landed on.
pub fn resolve_landing(
    player: &mut Player,
    session: &mut SessionState,
    platforms: &[Platform],
    params: &TierParams,
) -> Option<usize> {
    let index = find_landing(player, platforms)?;
    player.pos.y = platforms[index].top + PLAYER_HALF_HEIGHT;
    player.vel_y = params.jump_impulse;
    session.score += LANDING_SCORE;
    Some(index)
}
