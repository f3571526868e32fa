//! Maze grid drawing

use macroquad::prelude::*;
use crate::ui::{draw_text_centered, Rect};
use crate::world::{GameSnapshot, ItemKind, Tile};

pub const PLAYER_COLOR: Color = Color::new(0.2, 0.85, 0.95, 1.0);

pub fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Wall => Color::from_rgba(60, 60, 70, 255),
        Tile::Empty => Color::from_rgba(200, 200, 190, 255),
        Tile::Lava => Color::from_rgba(220, 70, 30, 255),
        Tile::Door => Color::from_rgba(140, 90, 40, 255),
    }
}

pub fn item_color(kind: ItemKind) -> Color {
    match kind {
        ItemKind::Coin => Color::from_rgba(240, 200, 40, 255),
        ItemKind::Water => Color::from_rgba(60, 130, 230, 255),
        ItemKind::Honey => Color::from_rgba(230, 150, 30, 255),
        ItemKind::Apple => Color::from_rgba(200, 40, 50, 255),
        ItemKind::Potion => Color::from_rgba(160, 70, 200, 255),
    }
}

/// Square cell size and top-left origin that fit a grid centered in `rect`
pub fn cell_layout(rect: &Rect, rows: usize, cols: usize) -> (f32, f32, f32) {
    if rows == 0 || cols == 0 {
        return (0.0, rect.x, rect.y);
    }
    let cell = (rect.w / cols as f32).min(rect.h / rows as f32).floor();
    let x = (rect.x + (rect.w - cell * cols as f32) * 0.5).round();
    let y = (rect.y + (rect.h - cell * rows as f32) * 0.5).round();
    (cell, x, y)
}

fn draw_marker(cell_rect: &Rect, color: Color, letter: char) {
    let cx = cell_rect.x + cell_rect.w * 0.5;
    let cy = cell_rect.y + cell_rect.h * 0.5;
    draw_circle(cx, cy, cell_rect.w * 0.38, color);
    let font_size = (cell_rect.h * 0.6).max(8.0);
    draw_text_centered(&letter.to_string(), cell_rect, font_size, BLACK);
}

/// Draw tiles, then items, then the player
pub fn draw_level(rect: Rect, snapshot: &GameSnapshot) {
    let (rows, cols) = snapshot.dimensions();
    let (cell, origin_x, origin_y) = cell_layout(&rect, rows, cols);
    if cell < 1.0 {
        return;
    }
    let cell_rect = |row: usize, col: usize| {
        Rect::new(origin_x + col as f32 * cell, origin_y + row as f32 * cell, cell, cell)
    };

    for (row, tiles) in snapshot.maze.tiles().iter().enumerate() {
        for (col, tile) in tiles.iter().enumerate() {
            let r = cell_rect(row, col);
            draw_rectangle(r.x, r.y, r.w, r.h, tile_color(*tile));
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, Color::from_rgba(40, 40, 45, 255));
        }
    }

    for item in snapshot.items.values() {
        let r = cell_rect(item.position.row, item.position.col);
        draw_marker(&r, item_color(item.kind), item.kind.letter());
    }

    let r = cell_rect(snapshot.player.row, snapshot.player.col);
    draw_marker(&r, PLAYER_COLOR, 'P');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_layout_centers_grid() {
        let rect = Rect::new(0.0, 0.0, 400.0, 200.0);
        let (cell, x, y) = cell_layout(&rect, 10, 10);
        assert_eq!(cell, 20.0);
        assert_eq!(x, 100.0);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn test_cell_layout_empty_grid() {
        let rect = Rect::new(5.0, 5.0, 100.0, 100.0);
        assert_eq!(cell_layout(&rect, 0, 3), (0.0, 5.0, 5.0));
    }
}
