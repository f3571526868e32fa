//! Tile and item types for the maze grid
//!
//! Pure data structures with minimal behavior.
//! Both sets are closed: every tag a save file may contain is listed in `ALL`.

use std::fmt;

/// Grid coordinate (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring position, or None if the step leaves the non-negative quadrant
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Empty,
    Lava,
    Door,
}

impl Tile {
    pub const ALL: [Tile; 4] = [Tile::Wall, Tile::Empty, Tile::Lava, Tile::Door];

    /// Single-character code used when building maze rows
    pub fn code(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Empty => 'E',
            Tile::Lava => 'L',
            Tile::Door => 'D',
        }
    }

    pub fn from_code(code: char) -> Option<Tile> {
        Tile::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// Type name as written in save files (without the trailing `()`)
    pub fn tag(self) -> &'static str {
        match self {
            Tile::Wall => "Wall",
            Tile::Empty => "Empty",
            Tile::Lava => "Lava",
            Tile::Door => "Door",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Tile> {
        Tile::ALL.iter().copied().find(|t| t.tag() == tag)
    }

    /// Walls are the only tile the player cannot enter
    pub fn is_blocking(self) -> bool {
        self == Tile::Wall
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}()", self.tag())
    }
}

/// Kinds of collectible items
///
/// Declaration order is also the order kinds are listed in the inventory line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKind {
    Coin,
    Water,
    Honey,
    Apple,
    Potion,
}

impl ItemKind {
    pub const ALL: [ItemKind; 5] = [
        ItemKind::Coin,
        ItemKind::Water,
        ItemKind::Honey,
        ItemKind::Apple,
        ItemKind::Potion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Coin => "Coin",
            ItemKind::Water => "Water",
            ItemKind::Honey => "Honey",
            ItemKind::Apple => "Apple",
            ItemKind::Potion => "Potion",
        }
    }

    pub fn from_name(name: &str) -> Option<ItemKind> {
        ItemKind::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Short letter drawn on top of the entity marker
    pub fn letter(self) -> char {
        match self {
            ItemKind::Coin => 'C',
            ItemKind::Water => 'W',
            ItemKind::Honey => 'H',
            ItemKind::Apple => 'A',
            ItemKind::Potion => 'M',
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An item placed at a grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub kind: ItemKind,
    pub position: Position,
}

impl Item {
    pub fn new(kind: ItemKind, position: Position) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.position)
    }
}
