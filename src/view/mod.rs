//! Drawing surface for the game
//!
//! The app hands a [`ViewFrame`] to a [`View`] once per frame and gets back at
//! most one [`ViewEvent`]: a movement key, a click on an inventory row or a
//! file command.

mod level;
mod panels;
mod screen;

pub use level::*;
pub use panels::*;
pub use screen::*;

use crate::world::{GameSnapshot, Inventory, ItemKind};

/// Everything a view needs to draw one frame
pub struct ViewFrame<'a> {
    pub snapshot: &'a GameSnapshot,
    /// Elapsed time, already formatted
    pub timer: &'a str,
    pub status: Option<&'a str>,
}

/// File and game commands bound to shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Save,
    Load,
    Restart,
    Quit,
}

impl Command {
    /// Ctrl shortcut letter
    pub fn from_ctrl_key(key: char) -> Option<Command> {
        match key.to_ascii_lowercase() {
            's' => Some(Command::Save),
            'o' => Some(Command::Load),
            'r' => Some(Command::Restart),
            _ => None,
        }
    }

    pub fn shortcut(self) -> &'static str {
        match self {
            Command::Save => "Ctrl+S",
            Command::Load => "Ctrl+O",
            Command::Restart => "Ctrl+R",
            Command::Quit => "Esc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    Key(char),
    InventoryClick(ItemKind),
    Command(Command),
}

/// A drawing surface driven by the frame loop
pub trait View {
    fn draw(&mut self, frame: &ViewFrame) -> Option<ViewEvent>;
}

/// Inventory rows shown in the panel: usable kinds only, in kind order
pub fn inventory_rows(inventory: &Inventory) -> Vec<(ItemKind, usize)> {
    inventory
        .items()
        .iter()
        .filter(|(kind, _)| **kind != ItemKind::Coin)
        .map(|(kind, items)| (*kind, items.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Item, Position};

    #[test]
    fn test_inventory_rows_skip_coins() {
        let mut inventory = Inventory::new();
        let pos = Position::new(0, 0);
        inventory.add_item(Item::new(ItemKind::Potion, pos));
        inventory.add_item(Item::new(ItemKind::Coin, pos));
        inventory.add_item(Item::new(ItemKind::Water, pos));
        inventory.add_item(Item::new(ItemKind::Water, pos));

        assert_eq!(
            inventory_rows(&inventory),
            vec![(ItemKind::Water, 2), (ItemKind::Potion, 1)]
        );
        assert!(inventory_rows(&Inventory::new()).is_empty());
    }

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(Command::from_ctrl_key('S'), Some(Command::Save));
        assert_eq!(Command::from_ctrl_key('o'), Some(Command::Load));
        assert_eq!(Command::from_ctrl_key('r'), Some(Command::Restart));
        assert_eq!(Command::from_ctrl_key('q'), None);
    }
}
