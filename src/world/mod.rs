//! World module - maze grid, items and player state
//!
//! Plain value types for one game of MazeRunner:
//! - Tiles and items from closed tag sets
//! - Player stats and inventory
//! - Whole-game snapshots with file load/save

mod tiles;
mod player;
mod maze;
mod snapshot;
mod level;

pub use tiles::*;
pub use player::*;
pub use maze::*;
pub use snapshot::*;
pub use level::*;
