//! Basic UI widgets

use macroquad::prelude::*;
use super::{Rect, UiContext};

/// Accent color used for headings and highlights
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.9, 0.9, 0.9, 1.0);
pub const MUTED_COLOR: Color = Color::new(0.6, 0.6, 0.65, 1.0);
pub const PANEL_BG: Color = Color::new(0.12, 0.12, 0.14, 1.0);

/// Draw text centered in a rect - rounded to integer pixels for crisp rendering
pub fn draw_text_centered(text: &str, rect: &Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let x = (rect.x + (rect.w - dims.width) * 0.5).round();
    let y = (rect.y + (rect.h + dims.height) * 0.5).round();
    draw_text(text, x, y, font_size, color);
}

/// Draw a panel background with an optional heading, returns the content rect
pub fn draw_panel(rect: Rect, title: Option<&str>) -> Rect {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, PANEL_BG);
    match title {
        Some(title) => {
            let heading = rect.slice_top(28.0);
            draw_text_centered(title, &heading, 18.0, ACCENT_COLOR);
            rect.remaining_after_top(28.0).inset(6.0)
        }
        None => rect.inset(6.0),
    }
}

/// Draw a flat labelled button with a background fill, returns true if clicked
pub fn text_button(ctx: &mut UiContext, rect: Rect, label: &str, fill: Color, tooltip: &str) -> bool {
    let hovered = ctx.mouse.inside(&rect);
    let clicked = ctx.mouse.clicked(&rect);

    if hovered && !tooltip.is_empty() {
        ctx.set_tooltip(tooltip);
    }

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    if hovered {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, WHITE);
    }
    draw_text_centered(label, &rect, 16.0, BLACK);

    clicked
}
