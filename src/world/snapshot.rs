//! Complete game state captured as one immutable value

use std::collections::BTreeMap;
use super::{Inventory, Item, ItemKind, Maze, PlayerStats, Position};

/// Everything a save file records
///
/// The session swaps whole snapshots; nothing mutates a snapshot that is
/// currently shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub maze: Maze,
    /// Items still lying on the grid, keyed by their own position
    pub items: BTreeMap<Position, Item>,
    pub inventory: Inventory,
    pub stats: PlayerStats,
    pub player: Position,
}

impl GameSnapshot {
    pub fn dimensions(&self) -> (usize, usize) {
        self.maze.dimensions()
    }

    /// Number of coins the player holds
    pub fn coins(&self) -> usize {
        self.inventory.count(ItemKind::Coin)
    }
}

/// Built-in level used when no start file is configured
pub fn create_starting_snapshot() -> GameSnapshot {
    let rows = [
        "############",
        "#EEEE#EEEEE#",
        "#E##E#E###E#",
        "#E#EEEE#EEE#",
        "#E#E####E#E#",
        "#EEE#LLE#EE#",
        "###E#EEEE#E#",
        "#EEE#E####E#",
        "#E###EEEEEE#",
        "#EEEEE#E##ED",
        "############",
    ];
    // Row strings above are fixed and well-formed
    let maze = match Maze::from_rows(&rows) {
        Ok(maze) => maze,
        Err(e) => unreachable!("built-in level is malformed: {}", e),
    };

    let items = [
        (ItemKind::Coin, 1, 3),
        (ItemKind::Water, 3, 5),
        (ItemKind::Apple, 5, 2),
        (ItemKind::Coin, 7, 5),
        (ItemKind::Honey, 8, 9),
        (ItemKind::Potion, 1, 10),
        (ItemKind::Coin, 9, 3),
    ]
    .into_iter()
    .map(|(kind, row, col)| {
        let pos = Position::new(row, col);
        (pos, Item::new(kind, pos))
    })
    .collect();

    GameSnapshot {
        maze,
        items,
        inventory: Inventory::new(),
        stats: PlayerStats::default(),
        player: Position::new(1, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Tile;

    #[test]
    fn test_starting_level_is_consistent() {
        let snapshot = create_starting_snapshot();
        assert!(snapshot.maze.is_complete());
        assert_eq!(snapshot.maze.tile(snapshot.player), Some(Tile::Empty));
        for (pos, item) in &snapshot.items {
            assert_eq!(*pos, item.position);
            assert_eq!(snapshot.maze.tile(*pos), Some(Tile::Empty));
        }
        assert!(snapshot.maze.tiles().iter().flatten().any(|t| *t == Tile::Door));
    }
}
