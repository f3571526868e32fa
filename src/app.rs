//! Application state for one running game
//!
//! Wraps the session with everything the frame loop needs between frames:
//! elapsed time, the status line, the end-of-game outcome and the quit
//! confirmation.

use std::fs;
use std::path::Path;
use crate::config::Config;
use crate::rules::{self, Direction, MoveOutcome, LOSS_MESSAGE, WIN_MESSAGE};
use crate::session::GameSession;
use crate::timer::GameTimer;
use crate::world::{save_game, GameSnapshot, ItemKind, SaveFileError};

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Won => WIN_MESSAGE,
            Outcome::Lost => LOSS_MESSAGE,
        }
    }
}

pub struct AppState {
    pub session: GameSession,
    pub timer: GameTimer,
    pub config: Config,
    /// Message and seconds left on screen
    status: Option<(String, f64)>,
    /// Set by the first Escape, cleared when its status message expires
    quit_armed: bool,
    outcome: Option<Outcome>,
}

impl AppState {
    pub fn new(start: GameSnapshot, config: Config) -> Self {
        Self {
            session: GameSession::new(start),
            timer: GameTimer::new(),
            config,
            status: None,
            quit_armed: false,
            outcome: None,
        }
    }

    /// Advance clocks by one frame
    pub fn update(&mut self, delta: f64) {
        if self.outcome.is_none() {
            self.timer.update(delta);
        }
        if let Some((_, remaining)) = &mut self.status {
            *remaining -= delta;
            if *remaining <= 0.0 {
                self.status = None;
                self.quit_armed = false;
            }
        }
    }

    pub fn set_status(&mut self, msg: &str) {
        self.status = Some((msg.to_string(), self.config.status_seconds));
    }

    /// Current status line; the end-of-game message shows when nothing else does
    pub fn status(&self) -> Option<&str> {
        match &self.status {
            Some((msg, _)) => Some(msg.as_str()),
            None => self.outcome.map(Outcome::message),
        }
    }

    /// Movement key. Ignored once the game is over.
    pub fn handle_key(&mut self, key: char) {
        let direction = match Direction::from_key(key) {
            Some(direction) => direction,
            None => return,
        };
        if self.outcome.is_some() {
            return;
        }

        let outcome = self.session.update(|s, moves| rules::move_player(s, direction, moves));
        if let MoveOutcome::Moved { picked_up } = outcome {
            self.session.record_move();
            if let Some(kind) = picked_up {
                self.set_status(&format!("Picked up {}", kind));
            }
            self.check_outcome();
        }
    }

    /// Inventory click
    pub fn use_item(&mut self, kind: ItemKind) {
        if self.outcome.is_some() {
            return;
        }
        if self.session.update(|s, _| rules::apply_item(s, kind)).is_some() {
            self.set_status(&format!("Used {}", kind));
        }
    }

    /// Reaching the door wins even if that step used up the last of the player
    fn check_outcome(&mut self) {
        let snapshot = self.session.snapshot();
        let outcome = if rules::has_won(&snapshot) {
            Some(Outcome::Won)
        } else if rules::has_lost(&snapshot) {
            Some(Outcome::Lost)
        } else {
            None
        };
        if let Some(outcome) = outcome {
            log::info!("Game over after {} moves: {}", self.session.moves(), outcome.message());
            self.outcome = Some(outcome);
            self.status = None;
        }
    }

    fn reset_round(&mut self) {
        self.timer.reset();
        self.outcome = None;
        self.quit_armed = false;
    }

    pub fn save_to(&mut self, path: &Path) {
        match save_game(&self.session.snapshot(), path) {
            Ok(()) => {
                log::info!("Saved game to {}", path.display());
                self.set_status(&format!("Saved to {}", path.display()));
            }
            Err(e) => {
                log::error!("Save to {} failed: {}", path.display(), e);
                self.set_status(&format!("Save failed: {}", e));
            }
        }
    }

    /// Load a save file. On failure the current game keeps running.
    pub fn load_from(&mut self, path: &Path) {
        match self.swap_in_file(path) {
            Ok(()) => {
                self.reset_round();
                log::info!("Loaded game from {}", path.display());
                self.set_status(&format!("Loaded {}", path.display()));
            }
            Err(e) => {
                log::error!("Load of {} failed: {}", path.display(), e);
                self.set_status(&format!("Load failed: {}", e));
            }
        }
    }

    /// Read the whole file, then let the session parse and swap
    fn swap_in_file(&mut self, path: &Path) -> Result<(), SaveFileError> {
        let text = fs::read_to_string(path)?;
        self.session.load_from_str(&text)?;
        Ok(())
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.reset_round();
        self.set_status("Restarted");
    }

    /// First call arms and asks for confirmation; a second call while that
    /// message is still up returns true
    pub fn request_quit(&mut self) -> bool {
        if self.quit_armed {
            return true;
        }
        self.quit_armed = true;
        self.set_status("Press Esc again to quit");
        false
    }
}
