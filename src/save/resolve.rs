//! Item token resolution shared by the item map and inventory lines

use crate::world::{Item, ItemKind, Position};
use super::lexer::{TokenKind, TokenStream};
use super::LoadErrorKind;

/// Read a `(row, col)` pair
pub fn read_position(stream: &mut TokenStream) -> Result<Position, LoadErrorKind> {
    stream.expect(TokenKind::LParen)?;
    let row = stream.expect_usize()?;
    stream.expect(TokenKind::Comma)?;
    let col = stream.expect_usize()?;
    stream.expect(TokenKind::RParen)?;
    Ok(Position::new(row, col))
}

/// Read `Kind((row, col))` and build the item it names
pub fn resolve_item(stream: &mut TokenStream) -> Result<Item, LoadErrorKind> {
    let name = stream.expect_ident()?;
    let kind = ItemKind::from_name(&name).ok_or(LoadErrorKind::UnknownItem(name))?;
    stream.expect(TokenKind::LParen)?;
    let position = read_position(stream)?;
    stream.expect(TokenKind::RParen)?;
    Ok(Item::new(kind, position))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Resolve a standalone item token such as `Honey((4, 11))`
    fn resolve_item_str(text: &str) -> Result<Item, LoadErrorKind> {
        let mut stream = TokenStream::new(text)?;
        let item = resolve_item(&mut stream)?;
        stream.finish()?;
        Ok(item)
    }

    #[test]
    fn test_every_kind_resolves_with_position() {
        for kind in ItemKind::ALL {
            let item = Item::new(kind, Position::new(13, 205));
            assert_eq!(resolve_item_str(&item.to_string()), Ok(item));
        }
    }

    #[test]
    fn test_unknown_kind_is_lookup_failure() {
        let err = resolve_item_str("Sword((1, 1))").unwrap_err();
        assert_eq!(err, LoadErrorKind::UnknownItem("Sword".to_string()));
    }

    #[test]
    fn test_malformed_position() {
        assert!(matches!(resolve_item_str("Coin((1 1))"), Err(LoadErrorKind::Syntax { .. })));
        assert!(matches!(resolve_item_str("Coin(1, 1)"), Err(LoadErrorKind::Syntax { .. })));
        assert!(matches!(resolve_item_str("Coin((1, 1)) extra"), Err(LoadErrorKind::Syntax { .. })));
    }
}
