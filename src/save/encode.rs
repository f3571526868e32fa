//! Save record writer
//!
//! Output is deterministic: items are ordered by position and inventory kinds
//! by declaration order, so the same state always produces the same bytes.

use std::collections::BTreeMap;
use std::fmt::Display;
use crate::world::{GameSnapshot, Inventory, Item, Maze, PlayerStats, Position};

fn join<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `[[Wall(), Empty()], [Door(), Lava()]]`
pub fn encode_tiles(maze: &Maze) -> String {
    let rows = maze.tiles().iter().map(|row| format!("[{}]", join(row)));
    format!("[{}]", join(rows))
}

/// `{}` or `{(r, c): Kind((r, c)), ...}`
pub fn encode_items(items: &BTreeMap<Position, Item>) -> String {
    let entries = items.iter().map(|(pos, item)| format!("{}: {}", pos, item));
    format!("{{{}}}", join(entries))
}

/// `{}` or `{'Kind': [Kind((r, c)), ...], ...}`
pub fn encode_inventory(inventory: &Inventory) -> String {
    if inventory.is_empty() {
        return "{}".to_string();
    }
    let entries = inventory
        .items()
        .iter()
        .map(|(kind, items)| format!("'{}': [{}]", kind, join(items)));
    format!("{{{}}}", join(entries))
}

/// `(health, hunger, thirst)`
pub fn encode_stats(stats: &PlayerStats) -> String {
    stats.to_string()
}

/// `(row, col)`
pub fn encode_position(position: Position) -> String {
    position.to_string()
}

/// `[rows, cols]`
pub fn encode_dimensions((rows, cols): (usize, usize)) -> String {
    format!("[{}, {}]", rows, cols)
}

/// Write the six-line save record
pub fn serialize(snapshot: &GameSnapshot) -> String {
    [
        encode_tiles(&snapshot.maze),
        encode_items(&snapshot.items),
        encode_inventory(&snapshot.inventory),
        encode_stats(&snapshot.stats),
        encode_position(snapshot.player),
        encode_dimensions(snapshot.dimensions()),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{create_starting_snapshot, ItemKind};

    #[test]
    fn test_encode_tiles() {
        let maze = Maze::from_rows(&["#E", "DL"]).unwrap();
        assert_eq!(encode_tiles(&maze), "[[Wall(), Empty()], [Door(), Lava()]]");
    }

    #[test]
    fn test_empty_collections_encode_as_braces() {
        assert_eq!(encode_items(&BTreeMap::new()), "{}");
        assert_eq!(encode_inventory(&Inventory::new()), "{}");
    }

    #[test]
    fn test_encode_inventory_groups_by_kind() {
        let mut inv = Inventory::new();
        inv.add_item(Item::new(ItemKind::Water, Position::new(3, 5)));
        inv.add_item(Item::new(ItemKind::Coin, Position::new(1, 2)));
        inv.add_item(Item::new(ItemKind::Coin, Position::new(10, 4)));
        assert_eq!(
            encode_inventory(&inv),
            "{'Coin': [Coin((1, 2)), Coin((10, 4))], 'Water': [Water((3, 5))]}"
        );
    }

    #[test]
    fn test_serialize_layout() {
        let snapshot = create_starting_snapshot();
        let text = serialize(&snapshot);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("{(1, 3): Coin((1, 3)), "));
        assert_eq!(lines[2], "{}");
        assert_eq!(lines[3], "(100, 0, 0)");
        assert_eq!(lines[4], "(1, 1)");
        assert_eq!(lines[5], "[11, 12]");
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let snapshot = create_starting_snapshot();
        assert_eq!(serialize(&snapshot), serialize(&snapshot.clone()));
    }
}
