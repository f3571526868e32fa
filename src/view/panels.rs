//! Side panels: stats, inventory and the controls strip

use macroquad::prelude::*;
use crate::ui::{draw_panel, text_button, Rect, UiContext, MUTED_COLOR, TEXT_COLOR};
use crate::world::{GameSnapshot, ItemKind, MAX_HEALTH, MAX_HUNGER, MAX_THIRST};
use super::{inventory_rows, item_color, Command};

const ROW_HEIGHT: f32 = 24.0;
const ROW_GAP: f32 = 4.0;

fn draw_value_row(rect: &Rect, label: &str, value: &str) {
    let baseline = (rect.y + rect.h * 0.5 + 5.0).round();
    draw_text(label, rect.x, baseline, 16.0, MUTED_COLOR);
    let dims = measure_text(value, None, 16, 1.0);
    draw_text(value, (rect.right() - dims.width).round(), baseline, 16.0, TEXT_COLOR);
}

/// HP, hunger, thirst and coin count
pub fn draw_stats(rect: Rect, snapshot: &GameSnapshot) {
    let content = draw_panel(rect, Some("Stats"));
    let stats = &snapshot.stats;
    let rows = [
        ("HP", format!("{}/{}", stats.health, MAX_HEALTH)),
        ("Hunger", format!("{}/{}", stats.hunger, MAX_HUNGER)),
        ("Thirst", format!("{}/{}", stats.thirst, MAX_THIRST)),
        ("Coins", snapshot.coins().to_string()),
    ];
    let mut y = content.y;
    for (label, value) in rows.iter() {
        draw_value_row(&Rect::new(content.x, y, content.w, ROW_HEIGHT), label, value);
        y += ROW_HEIGHT;
    }
}

/// One clickable row per usable item kind, returns the clicked kind
pub fn draw_inventory(ctx: &mut UiContext, rect: Rect, snapshot: &GameSnapshot) -> Option<ItemKind> {
    let content = draw_panel(rect, Some("Inventory"));
    let rows = inventory_rows(&snapshot.inventory);
    if rows.is_empty() {
        draw_text("(empty)", content.x, content.y + 16.0, 16.0, MUTED_COLOR);
        return None;
    }

    let mut clicked = None;
    let mut y = content.y;
    for (kind, count) in rows {
        let row = Rect::new(content.x, y, content.w, ROW_HEIGHT);
        let label = format!("{}: {}", kind, count);
        if text_button(ctx, row, &label, item_color(kind), "Click to use") {
            clicked = Some(kind);
        }
        y += ROW_HEIGHT + ROW_GAP;
    }
    clicked
}

/// Timer, status line and shortcut hints
pub fn draw_controls(rect: Rect, timer: &str, status: Option<&str>) {
    let content = draw_panel(rect, None);
    let baseline = (content.y + content.h * 0.5 + 5.0).round();
    draw_text(&format!("Time: {}", timer), content.x, baseline, 16.0, TEXT_COLOR);

    if let Some(status) = status {
        draw_text(status, content.x + 140.0, baseline, 16.0, YELLOW);
    }

    let hints = shortcut_hints();
    let dims = measure_text(&hints, None, 14, 1.0);
    if dims.width < content.w - 480.0 {
        draw_text(&hints, (content.right() - dims.width).round(), baseline, 14.0, MUTED_COLOR);
    }
}

/// e.g. `WASD move | Ctrl+S save | ... | Esc quit`
pub fn shortcut_hints() -> String {
    let commands = [
        (Command::Save, "save"),
        (Command::Load, "load"),
        (Command::Restart, "restart"),
        (Command::Quit, "quit"),
    ];
    let mut hints = vec!["WASD move".to_string()];
    hints.extend(commands.iter().map(|(command, label)| format!("{} {}", command.shortcut(), label)));
    hints.join(" | ")
}
