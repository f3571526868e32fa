//! Load errors with the offending line and field

use std::fmt;

/// The six fields of a save record, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Tiles,
    Items,
    Inventory,
    Stats,
    Position,
    Dimensions,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Tiles,
        Field::Items,
        Field::Inventory,
        Field::Stats,
        Field::Position,
        Field::Dimensions,
    ];

    /// 1-based line number of this field in a save file
    pub fn line(self) -> usize {
        self as usize + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Tiles => "tiles",
            Field::Items => "items",
            Field::Inventory => "inventory",
            Field::Stats => "player stats",
            Field::Position => "player position",
            Field::Dimensions => "dimensions",
        }
    }
}

/// What went wrong while reading a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The file ended before this field
    MissingLine,
    /// Non-blank content after the last field
    ExtraLine,
    /// Text does not have the expected shape
    Syntax { column: usize, message: String },
    /// Tile tag outside the closed tile set
    UnknownTile(String),
    /// Item type outside the closed item set
    UnknownItem(String),
    /// Well-formed text describing an impossible state
    Invalid(String),
}

impl LoadErrorKind {
    /// True for unrecognised tile or item tags
    #[cfg(test)]
    pub fn is_lookup(&self) -> bool {
        matches!(self, LoadErrorKind::UnknownTile(_) | LoadErrorKind::UnknownItem(_))
    }
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadErrorKind::MissingLine => write!(f, "line is missing"),
            LoadErrorKind::ExtraLine => write!(f, "unexpected extra line"),
            LoadErrorKind::Syntax { column, message } => write!(f, "column {}: {}", column, message),
            LoadErrorKind::UnknownTile(tag) => write!(f, "unknown tile '{}()'", tag),
            LoadErrorKind::UnknownItem(name) => write!(f, "unknown item type '{}'", name),
            LoadErrorKind::Invalid(message) => write!(f, "{}", message),
        }
    }
}

/// Failure to load a save record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    /// 1-based line in the save text
    pub line: usize,
    /// None for lines past the end of the record
    pub field: Option<Field>,
    pub kind: LoadErrorKind,
}

impl LoadError {
    pub fn new(field: Field, kind: LoadErrorKind) -> Self {
        Self {
            line: field.line(),
            field: Some(field),
            kind,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "line {} ({}): {}", self.line, field.name(), self.kind),
            None => write!(f, "line {}: {}", self.line, self.kind),
        }
    }
}
