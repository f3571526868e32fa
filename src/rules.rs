//! Minimal game rules driven by the front end
//!
//! Movement, pickup, item effects and win/loss checks. Every function works on
//! a snapshot the session hands out for modification.

use crate::world::{GameSnapshot, Item, ItemKind, Tile, MAX_HUNGER, MAX_THIRST};

/// Hunger and thirst rise once every this many moves
pub const MOVES_PER_NEED: u32 = 5;

pub const WIN_MESSAGE: &str = "Congratulations! You have finished the maze!";
pub const LOSS_MESSAGE: &str = "You lose :(";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// w/a/s/d keys
    pub fn from_key(key: char) -> Option<Direction> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// (row, col) delta
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Blocked,
    Moved { picked_up: Option<ItemKind> },
}

/// Try to step the player one cell. `moves` is the count of earlier
/// successful moves.
pub fn move_player(snapshot: &mut GameSnapshot, direction: Direction, moves: u32) -> MoveOutcome {
    let (d_row, d_col) = direction.delta();
    let target = match snapshot.player.offset(d_row, d_col) {
        Some(pos) => pos,
        None => return MoveOutcome::Blocked,
    };
    let tile = match snapshot.maze.tile(target) {
        Some(tile) if !tile.is_blocking() => tile,
        _ => return MoveOutcome::Blocked,
    };

    snapshot.player = target;
    snapshot.stats.change_health(-1);
    if (moves + 1) % MOVES_PER_NEED == 0 {
        snapshot.stats.change_hunger(1);
        snapshot.stats.change_thirst(1);
    }
    if tile == Tile::Lava {
        snapshot.stats.health = 0;
    }

    let picked_up = snapshot.items.remove(&target).map(|item| {
        let kind = item.kind;
        snapshot.inventory.add_item(item);
        kind
    });

    MoveOutcome::Moved { picked_up }
}

/// Use one item of a kind from the inventory. Coins are never used.
pub fn apply_item(snapshot: &mut GameSnapshot, kind: ItemKind) -> Option<Item> {
    if kind == ItemKind::Coin {
        return None;
    }
    let item = snapshot.inventory.remove_item(kind)?;
    let stats = &mut snapshot.stats;
    match kind {
        ItemKind::Potion => stats.change_health(20),
        ItemKind::Water => stats.change_thirst(-5),
        ItemKind::Honey => stats.change_hunger(-5),
        ItemKind::Apple => stats.change_hunger(-1),
        ItemKind::Coin => {}
    }
    Some(item)
}

pub fn has_won(snapshot: &GameSnapshot) -> bool {
    snapshot.maze.tile(snapshot.player) == Some(Tile::Door)
}

pub fn has_lost(snapshot: &GameSnapshot) -> bool {
    let stats = &snapshot.stats;
    stats.health == 0 || stats.hunger >= MAX_HUNGER || stats.thirst >= MAX_THIRST
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{create_starting_snapshot, Inventory, Maze, PlayerStats, Position};
    use std::collections::BTreeMap;

    fn small() -> GameSnapshot {
        let maze = Maze::from_rows(&["#####", "#EEL#", "#E#D#", "#####"]).unwrap();
        let mut items = BTreeMap::new();
        let pos = Position::new(1, 2);
        items.insert(pos, Item::new(ItemKind::Water, pos));
        GameSnapshot {
            maze,
            items,
            inventory: Inventory::new(),
            stats: PlayerStats::default(),
            player: Position::new(1, 1),
        }
    }

    #[test]
    fn test_walls_block() {
        let mut s = small();
        assert_eq!(move_player(&mut s, Direction::Up, 0), MoveOutcome::Blocked);
        assert_eq!(s.player, Position::new(1, 1));
        assert_eq!(s.stats.health, 100);
    }

    #[test]
    fn test_move_picks_up_item() {
        let mut s = small();
        let outcome = move_player(&mut s, Direction::Right, 0);
        assert_eq!(outcome, MoveOutcome::Moved { picked_up: Some(ItemKind::Water) });
        assert!(s.items.is_empty());
        assert_eq!(s.inventory.count(ItemKind::Water), 1);
        assert_eq!(s.stats.health, 99);
    }

    #[test]
    fn test_needs_rise_every_fifth_move() {
        let mut s = small();
        move_player(&mut s, Direction::Down, 3);
        assert_eq!(s.stats.hunger, 0);
        move_player(&mut s, Direction::Up, 4);
        assert_eq!(s.stats.hunger, 1);
        assert_eq!(s.stats.thirst, 1);
    }

    #[test]
    fn test_lava_and_door() {
        let mut s = small();
        s.player = Position::new(1, 2);
        move_player(&mut s, Direction::Right, 0);
        assert!(has_lost(&s));

        let mut s = small();
        s.player = Position::new(1, 3);
        move_player(&mut s, Direction::Down, 0);
        assert!(has_won(&s));
        assert!(!has_lost(&s));
    }

    #[test]
    fn test_apply_item_effects() {
        let mut s = create_starting_snapshot();
        s.stats = PlayerStats { health: 90, hunger: 6, thirst: 3 };
        s.inventory.add_item(Item::new(ItemKind::Potion, Position::new(0, 0)));
        s.inventory.add_item(Item::new(ItemKind::Water, Position::new(0, 0)));
        s.inventory.add_item(Item::new(ItemKind::Coin, Position::new(0, 0)));

        assert!(apply_item(&mut s, ItemKind::Potion).is_some());
        assert_eq!(s.stats.health, 100);
        assert!(apply_item(&mut s, ItemKind::Water).is_some());
        assert_eq!(s.stats.thirst, 0);
        assert!(apply_item(&mut s, ItemKind::Coin).is_none());
        assert_eq!(s.coins(), 1);
        assert!(apply_item(&mut s, ItemKind::Honey).is_none());
    }
}
