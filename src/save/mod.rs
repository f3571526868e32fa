//! Plain-text save record
//!
//! A save is six lines, one per field, in this order:
//!
//! ```text
//! [[Wall(), Empty()], [Door(), Lava()]]      tiles
//! {(1, 1): Coin((1, 1))}                     items on the grid
//! {'Coin': [Coin((0, 2))]}                   inventory
//! (100, 0, 0)                                health, hunger, thirst
//! (1, 1)                                     player position
//! [2, 2]                                     rows, columns
//! ```
//!
//! Empty item maps and inventories are written as `{}`.

mod error;
mod lexer;
mod resolve;
mod encode;
mod decode;

pub use error::*;
pub use encode::*;
pub use decode::*;
