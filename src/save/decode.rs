//! Save record reader
//!
//! Each line is tokenized and read with a small recursive-descent parser, so
//! integers of any width are accepted. The whole record is parsed into a fresh
//! snapshot before anything is returned: a load either yields a complete
//! snapshot or a `LoadError` naming the first bad line.

use std::collections::BTreeMap;
use crate::world::{
    GameSnapshot, Inventory, Item, ItemKind, Maze, PlayerStats, Position, Tile,
};
use super::lexer::{TokenKind, TokenStream};
use super::resolve::{read_position, resolve_item};
use super::{Field, LoadError, LoadErrorKind};

/// Literal used for an empty item map or inventory
const EMPTY_MAP: &str = "{}";

fn read_tile(stream: &mut TokenStream) -> Result<Tile, LoadErrorKind> {
    let tag = stream.expect_ident()?;
    let tile = Tile::from_tag(&tag).ok_or(LoadErrorKind::UnknownTile(tag))?;
    stream.expect(TokenKind::LParen)?;
    stream.expect(TokenKind::RParen)?;
    Ok(tile)
}

/// Parse the tile grid without checking it against the dimensions
pub fn parse_tiles(line: &str) -> Result<Vec<Vec<Tile>>, LoadErrorKind> {
    let mut stream = TokenStream::new(line)?;
    stream.expect(TokenKind::LBracket)?;
    let grid = stream.list(TokenKind::RBracket, |s| {
        s.expect(TokenKind::LBracket)?;
        s.list(TokenKind::RBracket, read_tile)
    })?;
    stream.finish()?;
    Ok(grid)
}

/// Parse the item map; `{}` is empty
pub fn parse_items(line: &str) -> Result<BTreeMap<Position, Item>, LoadErrorKind> {
    let mut items = BTreeMap::new();
    if line.trim() == EMPTY_MAP {
        return Ok(items);
    }

    let mut stream = TokenStream::new(line)?;
    stream.expect(TokenKind::LBrace)?;
    let entries = stream.list(TokenKind::RBrace, |s| {
        let key = read_position(s)?;
        s.expect(TokenKind::Colon)?;
        let item = resolve_item(s)?;
        Ok((key, item))
    })?;
    stream.finish()?;

    for (key, item) in entries {
        if key != item.position {
            return Err(LoadErrorKind::Invalid(format!(
                "item {} is stored under key {}",
                item, key
            )));
        }
        if items.insert(key, item).is_some() {
            return Err(LoadErrorKind::Invalid(format!("two items at {}", key)));
        }
    }
    Ok(items)
}

/// Parse the inventory; `{}` is empty
pub fn parse_inventory(line: &str) -> Result<Inventory, LoadErrorKind> {
    let mut inventory = Inventory::new();
    if line.trim() == EMPTY_MAP {
        return Ok(inventory);
    }

    let mut stream = TokenStream::new(line)?;
    stream.expect(TokenKind::LBrace)?;
    let groups = stream.list(TokenKind::RBrace, |s| {
        let name = s.expect_str()?;
        let kind = ItemKind::from_name(&name).ok_or(LoadErrorKind::UnknownItem(name))?;
        s.expect(TokenKind::Colon)?;
        s.expect(TokenKind::LBracket)?;
        let items = s.list(TokenKind::RBracket, resolve_item)?;
        Ok((kind, items))
    })?;
    stream.finish()?;

    for (kind, items) in groups {
        for item in items {
            if item.kind != kind {
                return Err(LoadErrorKind::Invalid(format!(
                    "{} listed under '{}'",
                    item, kind
                )));
            }
            inventory.add_item(item);
        }
    }
    Ok(inventory)
}

/// Parse `(health, hunger, thirst)`
pub fn parse_stats(line: &str) -> Result<PlayerStats, LoadErrorKind> {
    let mut stream = TokenStream::new(line)?;
    stream.expect(TokenKind::LParen)?;
    let health = stream.expect_u32()?;
    stream.expect(TokenKind::Comma)?;
    let hunger = stream.expect_u32()?;
    stream.expect(TokenKind::Comma)?;
    let thirst = stream.expect_u32()?;
    stream.expect(TokenKind::RParen)?;
    stream.finish()?;

    PlayerStats::checked(health, hunger, thirst).ok_or_else(|| {
        LoadErrorKind::Invalid(format!(
            "stats ({}, {}, {}) out of range",
            health, hunger, thirst
        ))
    })
}

/// Parse `(row, col)`
pub fn parse_position(line: &str) -> Result<Position, LoadErrorKind> {
    let mut stream = TokenStream::new(line)?;
    let position = read_position(&mut stream)?;
    stream.finish()?;
    Ok(position)
}

/// Parse `[rows, cols]`
pub fn parse_dimensions(line: &str) -> Result<(usize, usize), LoadErrorKind> {
    let mut stream = TokenStream::new(line)?;
    stream.expect(TokenKind::LBracket)?;
    let rows = stream.expect_usize()?;
    stream.expect(TokenKind::Comma)?;
    let cols = stream.expect_usize()?;
    stream.expect(TokenKind::RBracket)?;
    stream.finish()?;
    Ok((rows, cols))
}

/// Append decoded rows to a maze of the declared size
fn build_maze(grid: Vec<Vec<Tile>>, (rows, cols): (usize, usize)) -> Result<Maze, LoadErrorKind> {
    if grid.len() != rows {
        return Err(LoadErrorKind::Invalid(format!(
            "expected {} rows, found {}",
            rows,
            grid.len()
        )));
    }
    let mut maze = Maze::new(rows, cols);
    for row in grid {
        maze.push_row(row)
            .map_err(|e| LoadErrorKind::Invalid(e.to_string()))?;
    }
    Ok(maze)
}

/// Read a six-line save record into a new snapshot
pub fn deserialize(text: &str) -> Result<GameSnapshot, LoadError> {
    let mut lines = text.lines();
    let mut fields = [""; 6];
    for (slot, field) in fields.iter_mut().zip(Field::ALL) {
        *slot = lines
            .next()
            .ok_or_else(|| LoadError::new(field, LoadErrorKind::MissingLine))?;
    }
    // Trailing blank lines are tolerated, anything else is not
    for (offset, extra) in lines.enumerate() {
        if !extra.trim().is_empty() {
            return Err(LoadError {
                line: Field::ALL.len() + offset + 1,
                field: None,
                kind: LoadErrorKind::ExtraLine,
            });
        }
    }

    let at = |field: Field| move |kind: LoadErrorKind| LoadError::new(field, kind);

    let grid = parse_tiles(fields[0]).map_err(at(Field::Tiles))?;
    let items = parse_items(fields[1]).map_err(at(Field::Items))?;
    let inventory = parse_inventory(fields[2]).map_err(at(Field::Inventory))?;
    let stats = parse_stats(fields[3]).map_err(at(Field::Stats))?;
    let player = parse_position(fields[4]).map_err(at(Field::Position))?;
    let dimensions = parse_dimensions(fields[5]).map_err(at(Field::Dimensions))?;

    let maze = build_maze(grid, dimensions).map_err(at(Field::Tiles))?;

    if let Some(item) = items.values().find(|item| !maze.contains(item.position)) {
        return Err(LoadError::new(
            Field::Items,
            LoadErrorKind::Invalid(format!("{} lies outside the maze", item)),
        ));
    }
    if !maze.contains(player) {
        return Err(LoadError::new(
            Field::Position,
            LoadErrorKind::Invalid(format!(
                "player at {} lies outside the {}x{} maze",
                player, dimensions.0, dimensions.1
            )),
        ));
    }

    Ok(GameSnapshot {
        maze,
        items,
        inventory,
        stats,
        player,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::{encode_tiles, serialize};
    use crate::world::create_starting_snapshot;

    /// A save written by hand in the exact layout the game produces
    const SAVE: &str = "[[Wall(), Wall(), Wall()], [Wall(), Empty(), Door()], [Wall(), Lava(), Wall()]]\n\
        {(1, 1): Coin((1, 1))}\n\
        {'Coin': [Coin((0, 2)), Coin((2, 2))], 'Potion': [Potion((1, 2))]}\n\
        (87, 3, 10)\n\
        (1, 2)\n\
        [3, 3]";

    fn with_line(index: usize, replacement: &str) -> String {
        SAVE.lines()
            .enumerate()
            .map(|(i, l)| if i == index { replacement } else { l })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_deserialize_hand_written_save() {
        let snapshot = deserialize(SAVE).unwrap();
        assert_eq!(snapshot.dimensions(), (3, 3));
        assert_eq!(snapshot.maze.tile(Position::new(1, 2)), Some(Tile::Door));
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.inventory.count(ItemKind::Coin), 2);
        assert_eq!(snapshot.inventory.count(ItemKind::Potion), 1);
        assert_eq!(snapshot.stats, PlayerStats { health: 87, hunger: 3, thirst: 10 });
        assert_eq!(snapshot.player, Position::new(1, 2));
    }

    #[test]
    fn test_round_trip() {
        let mut snapshot = create_starting_snapshot();
        snapshot.inventory.add_item(Item::new(ItemKind::Honey, Position::new(4, 11)));
        snapshot.inventory.add_item(Item::new(ItemKind::Coin, Position::new(0, 0)));
        snapshot.stats = PlayerStats { health: 42, hunger: 7, thirst: 1 };
        snapshot.player = Position::new(9, 10);

        let text = serialize(&snapshot);
        let loaded = deserialize(&text).unwrap();
        assert_eq!(loaded, snapshot);
        assert_eq!(serialize(&loaded), text);
    }

    #[test]
    fn test_every_tile_round_trips() {
        let row: Vec<String> = Tile::ALL.iter().map(|t| t.code().to_string()).collect();
        let maze = Maze::from_rows(&[row.concat().as_str()]).unwrap();
        let line = encode_tiles(&maze);
        assert_eq!(parse_tiles(&line).unwrap(), vec![Tile::ALL.to_vec()]);
    }

    #[test]
    fn test_empty_collections() {
        assert!(parse_items("{}").unwrap().is_empty());
        assert!(parse_inventory("{}").unwrap().is_empty());
        assert!(parse_inventory(" {} ").unwrap().is_empty());
    }

    #[test]
    fn test_multi_digit_values() {
        assert_eq!(parse_dimensions("[12, 34]"), Ok((12, 34)));
        assert_eq!(parse_position("(10, 7)"), Ok(Position::new(10, 7)));
        assert_eq!(
            parse_stats("(100, 10, 0)"),
            Ok(PlayerStats { health: 100, hunger: 10, thirst: 0 })
        );
    }

    #[test]
    fn test_unknown_tile_is_lookup_failure() {
        let err = deserialize(&with_line(0, "[[Wall(), Trap()]]")).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.field, Some(Field::Tiles));
        assert_eq!(err.kind, LoadErrorKind::UnknownTile("Trap".to_string()));
    }

    #[test]
    fn test_unknown_item_is_lookup_failure() {
        let err = deserialize(&with_line(1, "{(1, 1): Gem((1, 1))}")).unwrap_err();
        assert_eq!(err.field, Some(Field::Items));
        assert!(err.kind.is_lookup());

        let err = deserialize(&with_line(2, "{'Gem': [Gem((1, 1))]}")).unwrap_err();
        assert_eq!(err.field, Some(Field::Inventory));
        assert!(err.kind.is_lookup());
    }

    #[test]
    fn test_missing_and_extra_lines() {
        let truncated: String = SAVE.lines().take(4).collect::<Vec<_>>().join("\n");
        let err = deserialize(&truncated).unwrap_err();
        assert_eq!(err.line, 5);
        assert_eq!(err.kind, LoadErrorKind::MissingLine);

        let padded = format!("{}\n\n\n", SAVE);
        assert!(deserialize(&padded).is_ok());

        let extra = format!("{}\n\n[1, 1]", SAVE);
        let err = deserialize(&extra).unwrap_err();
        assert_eq!(err.line, 8);
        assert_eq!(err.field, None);
    }

    #[test]
    fn test_grid_must_match_dimensions() {
        let err = deserialize(&with_line(5, "[4, 3]")).unwrap_err();
        assert_eq!(err.field, Some(Field::Tiles));

        let err = deserialize(&with_line(5, "[3, 4]")).unwrap_err();
        assert_eq!(err.field, Some(Field::Tiles));
        assert!(matches!(err.kind, LoadErrorKind::Invalid(_)));
    }

    #[test]
    fn test_huge_declared_rows_rejected_without_allocating() {
        for dims in ["[18446744073709551615, 1]", "[4000000000000000000, 1]", "[100000000, 1]"] {
            let text = format!("[[Empty()]]\n{{}}\n{{}}\n(100, 0, 0)\n(0, 0)\n{}", dims);
            let err = deserialize(&text).unwrap_err();
            assert_eq!(err.field, Some(Field::Tiles));
            assert!(matches!(err.kind, LoadErrorKind::Invalid(ref msg) if msg.ends_with("found 1")));
        }
    }

    #[test]
    fn test_inconsistent_records_rejected() {
        let err = deserialize(&with_line(1, "{(0, 1): Coin((1, 1))}")).unwrap_err();
        assert_eq!(err.field, Some(Field::Items));

        let err = deserialize(&with_line(2, "{'Coin': [Water((1, 1))]}")).unwrap_err();
        assert_eq!(err.field, Some(Field::Inventory));

        let err = deserialize(&with_line(3, "(101, 0, 0)")).unwrap_err();
        assert_eq!(err.field, Some(Field::Stats));

        let err = deserialize(&with_line(4, "(3, 0)")).unwrap_err();
        assert_eq!(err.field, Some(Field::Position));

        let err = deserialize(&with_line(1, "{(5, 5): Coin((5, 5))}")).unwrap_err();
        assert_eq!(err.field, Some(Field::Items));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(parse_stats("(1, 2)"), Err(LoadErrorKind::Syntax { .. })));
        assert!(matches!(parse_dimensions("[3, 3"), Err(LoadErrorKind::Syntax { .. })));
        assert!(matches!(parse_position("(1, 2) (3, 4)"), Err(LoadErrorKind::Syntax { .. })));
        assert!(matches!(parse_items("{(1, 1) Coin((1, 1))}"), Err(LoadErrorKind::Syntax { .. })));
    }
}
