//! Per-frame simulation tick
//!
//! Order within a frame: steer, physics and height score, landing, tier
//! check, game-over check, field recycle/extend, camera.

use super::camera;
use super::collision::resolve_landing;
use super::physics;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::consts::GAME_OVER_MARGIN;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Restart (only honored after game over)
    pub restart: bool,
    /// Idle/demo mode - autopilot steers
    pub idle_mode: bool,
}

/// Advance the game by one frame, returning what happened.
pub fn tick(state: &mut GameSession, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.session.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
            events.push(GameEvent::Restarted);
        }
        return events;
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }

    let params = state.params();
    physics::steer(&mut state.player, input.left, input.right, params.move_speed);
    physics::step(&mut state.player, &state.world, &params);
    physics::score_height(&mut state.session, state.player.pos.y);

    if let Some(platform) = resolve_landing(
        &mut state.player,
        &mut state.session,
        state.field.platforms(),
        &params,
    ) {
        log::debug!(
            "Landed on platform {} at y={} (score {})",
            platform,
            state.player.pos.y,
            state.session.score
        );
        events.push(GameEvent::Landed {
            platform,
            score: state.session.score,
        });
    }

    let tier = state.tier.advance(state.session.score);
    if tier != state.tier {
        log::info!(
            "Level {} reached at score {}",
            tier.level(),
            state.session.score
        );
        state.tier = tier;
        events.push(GameEvent::TierUp { tier });
    }

    state.frame += 1;

    if state.player.pos.y <= state.session.camera_offset_y - GAME_OVER_MARGIN {
        state.session.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} frames: score {}, level {}",
            state.frame,
            state.session.score,
            state.tier.level()
        );
        events.push(GameEvent::GameOver {
            score: state.session.score,
        });
        return events;
    }

    let y = state.player.pos.y;
    state.field.recycle(&state.world, y);
    state.field.extend(&state.world, y, state.tier, &mut state.rng);
    state.session.camera_offset_y = camera::follow(state.session.camera_offset_y, y, &state.world);

    events
}

/// Demo-mode steering: head for the highest platform the current jump can
/// still reach, staying above the bottom of the screen.
fn autopilot(state: &GameSession, input: &mut TickInput) {
    let player = &state.player;
    let params = state.params();

    let apex = if player.vel_y > 0.0 {
        player.vel_y * player.vel_y / (2.0 * params.gravity)
    } else {
        0.0
    };
    let reach = player.foot_y() + apex;
    let floor = state.session.camera_offset_y;

    let target = state
        .field
        .platforms()
        .iter()
        .filter(|p| p.top <= reach && p.top >= floor)
        .max_by(|a, b| a.top.total_cmp(&b.top));

    input.left = false;
    input.right = false;
    if let Some(target) = target {
        let dx = target.center.x - player.pos.x;
        if dx.abs() > params.move_speed {
            input.left = dx < 0.0;
            input.right = dx > 0.0;
        }
    }
}
