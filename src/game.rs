//! Frame driver
//!
//! Holds the session, the held-input state and the high score store. An
//! external timer calls [`Game::update`] once per display frame; key handlers
//! call [`Game::press`] / [`Game::release`].

use crate::frame::FrameSnapshot;
use crate::highscores::{HighScoreStore, record_high_score};
use crate::sim::{GameEvent, GamePhase, GameSession, TickInput, World, tick};

/// Logical input commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// Only honored after game over
    Restart,
}

/// Game instance holding all state
pub struct Game<S: HighScoreStore> {
    state: GameSession,
    store: S,
    input: TickInput,
    // Track phase to catch the game-over transition
    last_phase: GamePhase,
}

impl<S: HighScoreStore> Game<S> {
    pub fn new(seed: u64, world: World, store: S) -> Self {
        Self {
            state: GameSession::with_world(seed, world),
            store,
            input: TickInput::default(),
            last_phase: GamePhase::Playing,
        }
    }

    pub fn press(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.input.left = true,
            Command::MoveRight => self.input.right = true,
            Command::Restart => self.input.restart = true,
        }
    }

    pub fn release(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.input.left = false,
            Command::MoveRight => self.input.right = false,
            Command::Restart => {}
        }
    }

    /// Let the autopilot steer instead of held keys
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.idle_mode = enabled;
    }

    /// Run one frame of simulation
    pub fn update(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.state, &self.input);

        // Restart is one-shot
        self.input.restart = false;

        let phase = self.state.phase();
        if phase == GamePhase::GameOver && self.last_phase == GamePhase::Playing {
            let best = record_high_score(&mut self.store, self.state.session.score);
            self.state.session.high_score = best;
        }
        self.last_phase = phase;

        events
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state)
    }

    pub fn is_game_over(&self) -> bool {
        self.state.session.is_game_over()
    }

    pub fn session(&self) -> &GameSession {
        &self.state
    }

    /// Direct access for scripted scenarios and tests
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
