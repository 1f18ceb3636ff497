//! Per-frame view of the game for an external renderer
//!
//! The simulation never draws; each frame the driver hands out a
//! [`FrameSnapshot`] that a renderer (in-process or fed JSON) turns into pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GameSession, Platform};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// All active platforms, in world coordinates
    pub platforms: Vec<Platform>,
    /// Player center, in world coordinates
    pub player: Vec2,
    pub facing_right: bool,
    pub score: u64,
    /// Current height (truncated player y)
    pub height: i64,
    /// 1 or 2
    pub level: u8,
    /// Subtract from world y to get screen y
    pub camera_offset_y: f32,
    pub game_over: bool,
    pub high_score: u64,
}

impl FrameSnapshot {
    pub fn capture(state: &GameSession) -> Self {
        Self {
            platforms: state.field.platforms().to_vec(),
            player: state.player.pos,
            facing_right: state.player.facing_right,
            score: state.session.score,
            height: state.player.pos.y as i64,
            level: state.tier.level(),
            camera_offset_y: state.session.camera_offset_y,
            game_over: state.session.is_game_over(),
            high_score: state.session.high_score,
        }
    }

    /// Platforms at least partly on a screen of the given height
    pub fn visible_platforms(&self, screen_height: f32) -> impl Iterator<Item = &Platform> {
        let offset = self.camera_offset_y;
        self.platforms
            .iter()
            .filter(move |p| p.top - offset > 0.0 && p.bottom - offset < screen_height)
    }

    /// HUD text, one entry per line
    pub fn hud_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Score: {}", self.score),
            format!("Height: {}", self.height),
            format!("Level: {}", self.level),
        ];
        if self.game_over {
            lines.push("GAME OVER".to_string());
            lines.push(format!("Best: {}", self.high_score));
            lines.push(format!("Final score: {}", self.score));
            lines.push(format!("Level: {}", self.level));
            lines.push("Press R to restart".to_string());
        }
        lines
    }
}
