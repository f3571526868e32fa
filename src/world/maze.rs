//! Maze grid with declared dimensions

use std::fmt;
use super::{Position, Tile};

/// Reasons a row cannot be appended to a maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    UnknownCode(char),
    WrongWidth { row: usize, expected: usize, found: usize },
    TooManyRows { expected: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::UnknownCode(c) => write!(f, "unknown tile code {:?}", c),
            MazeError::WrongWidth { row, expected, found } => {
                write!(f, "row {} has {} tiles, expected {}", row, found, expected)
            }
            MazeError::TooManyRows { expected } => write!(f, "more than {} rows", expected),
        }
    }
}

/// Grid of tiles. Every row is exactly `cols` wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    tiles: Vec<Vec<Tile>>,
}

impl Maze {
    /// Empty maze expecting `rows` rows of `cols` tiles
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            tiles: Vec::new(),
        }
    }

    /// Build a complete maze from rows of tile codes
    pub fn from_rows(rows: &[&str]) -> Result<Self, MazeError> {
        let cols = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut maze = Maze::new(rows.len(), cols);
        for row in rows {
            maze.add_row(row)?;
        }
        Ok(maze)
    }

    /// Append a row given as tile codes
    pub fn add_row(&mut self, codes: &str) -> Result<(), MazeError> {
        let row = codes
            .chars()
            .map(|c| Tile::from_code(c).ok_or(MazeError::UnknownCode(c)))
            .collect::<Result<Vec<_>, _>>()?;
        self.push_row(row)
    }

    /// Append a row of already-decoded tiles
    pub fn push_row(&mut self, row: Vec<Tile>) -> Result<(), MazeError> {
        if self.tiles.len() == self.rows {
            return Err(MazeError::TooManyRows { expected: self.rows });
        }
        if row.len() != self.cols {
            return Err(MazeError::WrongWidth {
                row: self.tiles.len(),
                expected: self.cols,
                found: row.len(),
            });
        }
        self.tiles.push(row);
        Ok(())
    }

    /// True once all declared rows are present
    pub fn is_complete(&self) -> bool {
        self.tiles.len() == self.rows
    }

    /// (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.tiles.get(pos.row)?.get(pos.col).copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let maze = Maze::from_rows(&["###", "#ED", "###"]).unwrap();
        assert_eq!(maze.dimensions(), (3, 3));
        assert!(maze.is_complete());
        assert_eq!(maze.tile(Position::new(1, 2)), Some(Tile::Door));
        assert_eq!(maze.tile(Position::new(3, 0)), None);
    }

    #[test]
    fn test_row_width_enforced() {
        let mut maze = Maze::new(2, 3);
        assert_eq!(
            maze.add_row("##"),
            Err(MazeError::WrongWidth { row: 0, expected: 3, found: 2 })
        );
        maze.add_row("#E#").unwrap();
        assert!(!maze.is_complete());
        maze.add_row("#L#").unwrap();
        assert_eq!(maze.add_row("###"), Err(MazeError::TooManyRows { expected: 2 }));
    }

    #[test]
    fn test_unknown_code() {
        let mut maze = Maze::new(1, 2);
        assert_eq!(maze.add_row("#?"), Err(MazeError::UnknownCode('?')));
    }
}
