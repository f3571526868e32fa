//! macroquad implementation of the game view

use macroquad::prelude::*;
use crate::ui::{MouseState, Rect, UiContext};
use super::{draw_controls, draw_inventory, draw_level, draw_stats, Command, View, ViewEvent, ViewFrame};

const SIDE_WIDTH: f32 = 220.0;
const CONTROLS_HEIGHT: f32 = 40.0;
const STATS_HEIGHT: f32 = 140.0;
const GAP: f32 = 6.0;

/// Fills the whole window: grid on the left, stats and inventory on the
/// right, controls strip along the bottom
pub struct ScreenView {
    ctx: UiContext,
    last_left_down: bool,
}

impl ScreenView {
    pub fn new() -> Self {
        Self {
            ctx: UiContext::new(),
            last_left_down: false,
        }
    }

    /// Keyboard events for this frame. Typed characters are drained every
    /// frame so held Ctrl combos never leak into movement.
    fn poll_keys(&self) -> Option<ViewEvent> {
        let ctrl = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
        let mut typed = None;
        while let Some(c) = get_char_pressed() {
            if typed.is_none() && !ctrl && !c.is_control() {
                typed = Some(c);
            }
        }

        if is_key_pressed(KeyCode::Escape) {
            return Some(ViewEvent::Command(Command::Quit));
        }
        if ctrl {
            let shortcuts = [(KeyCode::S, 's'), (KeyCode::O, 'o'), (KeyCode::R, 'r')];
            return shortcuts
                .iter()
                .find(|(code, _)| is_key_pressed(*code))
                .and_then(|(_, key)| Command::from_ctrl_key(*key))
                .map(ViewEvent::Command);
        }
        typed.map(ViewEvent::Key)
    }
}

impl Default for ScreenView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ScreenView {
    fn draw(&mut self, frame: &ViewFrame) -> Option<ViewEvent> {
        let mouse = MouseState::poll(self.last_left_down);
        self.last_left_down = mouse.left_down;
        self.ctx.begin_frame(mouse);

        clear_background(Color::from_rgba(30, 30, 35, 255));

        let screen = Rect::new(0.0, 0.0, screen_width(), screen_height());
        let main = Rect::new(screen.x, screen.y, screen.w, screen.h - CONTROLS_HEIGHT);
        let controls = Rect::new(screen.x, main.bottom(), screen.w, CONTROLS_HEIGHT);
        let grid = main.slice_left(main.w - SIDE_WIDTH).inset(GAP);
        let side = main.remaining_after_left(main.w - SIDE_WIDTH).inset(GAP);
        let stats = side.slice_top(STATS_HEIGHT);
        let inventory = side.remaining_after_top(STATS_HEIGHT + GAP);

        draw_level(grid, frame.snapshot);
        draw_stats(stats, frame.snapshot);
        let clicked = draw_inventory(&mut self.ctx, inventory, frame.snapshot);
        draw_controls(controls, frame.timer, frame.status);
        self.ctx.draw_tooltip();

        let keys = self.poll_keys();
        clicked.map(ViewEvent::InventoryClick).or(keys)
    }
}
