//! Save file loading and saving
//!
//! Uses the six-line text record from `crate::save` for human-readable saves.

use std::fs;
use std::path::Path;
use crate::save::{self, LoadError};
use super::GameSnapshot;

/// Error type for save file access
#[derive(Debug)]
pub enum SaveFileError {
    IoError(std::io::Error),
    ParseError(LoadError),
}

impl From<std::io::Error> for SaveFileError {
    fn from(e: std::io::Error) -> Self {
        SaveFileError::IoError(e)
    }
}

impl From<LoadError> for SaveFileError {
    fn from(e: LoadError) -> Self {
        SaveFileError::ParseError(e)
    }
}

impl std::fmt::Display for SaveFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveFileError::IoError(e) => write!(f, "IO error: {}", e),
            SaveFileError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

/// Load a game from a save file
pub fn load_game<P: AsRef<Path>>(path: P) -> Result<GameSnapshot, SaveFileError> {
    let contents = fs::read_to_string(path)?;
    Ok(save::deserialize(&contents)?)
}

/// Write a game to a save file, replacing any existing file
pub fn save_game<P: AsRef<Path>>(snapshot: &GameSnapshot, path: P) -> Result<(), SaveFileError> {
    let contents = save::serialize(snapshot);
    fs::write(path, contents)?;
    Ok(())
}
