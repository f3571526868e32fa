//! Current game state, replaced wholesale on load and restart

use std::sync::Arc;
use crate::save::{self, LoadError};
use crate::world::GameSnapshot;

/// Owns the live snapshot and the snapshot a restart returns to
pub struct GameSession {
    current: Arc<GameSnapshot>,
    start: Arc<GameSnapshot>,
    /// Successful moves since the last load or restart (not saved)
    moves: u32,
}

impl GameSession {
    pub fn new(start: GameSnapshot) -> Self {
        let start = Arc::new(start);
        Self {
            current: Arc::clone(&start),
            start,
            moves: 0,
        }
    }

    /// Shared handle to the current state
    pub fn snapshot(&self) -> Arc<GameSnapshot> {
        Arc::clone(&self.current)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Swap in a complete new state
    pub fn replace(&mut self, snapshot: GameSnapshot) {
        self.current = Arc::new(snapshot);
        self.moves = 0;
    }

    /// Return to the starting state
    pub fn restart(&mut self) {
        self.current = Arc::clone(&self.start);
        self.moves = 0;
    }

    /// Parse a save record and swap it in; on error the session is unchanged
    pub fn load_from_str(&mut self, text: &str) -> Result<(), LoadError> {
        let snapshot = save::deserialize(text)?;
        self.replace(snapshot);
        Ok(())
    }

    /// Modify the current state. Outstanding handles keep the old version.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut GameSnapshot, u32) -> R) -> R {
        let moves = self.moves;
        f(Arc::make_mut(&mut self.current), moves)
    }

    pub fn record_move(&mut self) {
        self.moves += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{create_starting_snapshot, Position};

    #[test]
    fn test_failed_load_leaves_state_untouched() {
        let mut session = GameSession::new(create_starting_snapshot());
        session.update(|s, _| s.player = Position::new(3, 3));
        let before = session.snapshot();

        let bad = "[[Trap()]]\n{}\n{}\n(100, 0, 0)\n(0, 0)\n[1, 1]";
        let err = session.load_from_str(bad).unwrap_err();
        assert!(err.kind.is_lookup());
        assert_eq!(*session.snapshot(), *before);
    }

    #[test]
    fn test_load_replaces_everything() {
        let mut session = GameSession::new(create_starting_snapshot());
        session.record_move();
        session
            .load_from_str("[[Empty(), Door()]]\n{}\n{}\n(5, 6, 7)\n(0, 1)\n[1, 2]")
            .unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.dimensions(), (1, 2));
        assert_eq!(snapshot.player, Position::new(0, 1));
        assert!(snapshot.items.is_empty());
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_update_does_not_touch_outstanding_handles() {
        let mut session = GameSession::new(create_starting_snapshot());
        let held = session.snapshot();
        session.update(|s, _| s.stats.health = 1);
        assert_eq!(held.stats.health, 100);
        assert_eq!(session.snapshot().stats.health, 1);

        session.restart();
        assert_eq!(session.snapshot().stats.health, 100);
    }
}
