//! Player-owned state: stats and inventory

use std::collections::BTreeMap;
use std::fmt;
use super::{Item, ItemKind};

pub const MAX_HEALTH: u32 = 100;
pub const MAX_HUNGER: u32 = 10;
pub const MAX_THIRST: u32 = 10;

/// Health, hunger and thirst, each clamped to its own bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    pub health: u32,
    pub hunger: u32,
    pub thirst: u32,
}

impl PlayerStats {
    /// Build stats, rejecting any value above its bound
    pub fn checked(health: u32, hunger: u32, thirst: u32) -> Option<Self> {
        if health > MAX_HEALTH || hunger > MAX_HUNGER || thirst > MAX_THIRST {
            return None;
        }
        Some(Self { health, hunger, thirst })
    }

    pub fn change_health(&mut self, delta: i64) {
        self.health = clamp_add(self.health, delta, MAX_HEALTH);
    }

    pub fn change_hunger(&mut self, delta: i64) {
        self.hunger = clamp_add(self.hunger, delta, MAX_HUNGER);
    }

    pub fn change_thirst(&mut self, delta: i64) {
        self.thirst = clamp_add(self.thirst, delta, MAX_THIRST);
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: MAX_HEALTH,
            hunger: 0,
            thirst: 0,
        }
    }
}

impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.health, self.hunger, self.thirst)
    }
}

fn clamp_add(value: u32, delta: i64, max: u32) -> u32 {
    (value as i64 + delta).clamp(0, max as i64) as u32
}

/// Items held by the player, grouped by kind
///
/// Each kind keeps its items in pickup order. Kinds with no items left are
/// dropped from the map so an empty inventory is always an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<ItemKind, Vec<Item>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.entry(item.kind).or_default().push(item);
    }

    /// Take the most recently added item of a kind
    pub fn remove_item(&mut self, kind: ItemKind) -> Option<Item> {
        let list = self.items.get_mut(&kind)?;
        let item = list.pop();
        if list.is_empty() {
            self.items.remove(&kind);
        }
        item
    }

    pub fn items(&self) -> &BTreeMap<ItemKind, Vec<Item>> {
        &self.items
    }

    pub fn count(&self, kind: ItemKind) -> usize {
        self.items.get(&kind).map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Position;

    #[test]
    fn test_stats_bounds() {
        assert!(PlayerStats::checked(100, 10, 10).is_some());
        assert!(PlayerStats::checked(101, 0, 0).is_none());
        assert!(PlayerStats::checked(50, 11, 0).is_none());

        let mut stats = PlayerStats::default();
        stats.change_health(20);
        assert_eq!(stats.health, MAX_HEALTH);
        stats.change_thirst(-5);
        assert_eq!(stats.thirst, 0);
    }

    #[test]
    fn test_inventory_remove_drops_empty_kind() {
        let mut inv = Inventory::new();
        inv.add_item(Item::new(ItemKind::Water, Position::new(1, 1)));
        inv.add_item(Item::new(ItemKind::Water, Position::new(2, 2)));
        assert_eq!(inv.count(ItemKind::Water), 2);

        let taken = inv.remove_item(ItemKind::Water).unwrap();
        assert_eq!(taken.position, Position::new(2, 2));
        inv.remove_item(ItemKind::Water);
        assert!(inv.is_empty());
        assert!(inv.remove_item(ItemKind::Water).is_none());
    }
}
