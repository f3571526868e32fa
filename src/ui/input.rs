//! Input state for UI interaction

use super::Rect;
use macroquad::prelude::*;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
}

impl MouseState {
    /// Poll macroquad for this frame's mouse state
    pub fn poll(last_left_down: bool) -> Self {
        let (x, y) = mouse_position();
        let left_down = is_mouse_button_down(MouseButton::Left);
        Self {
            x,
            y,
            left_down,
            left_pressed: left_down && !last_left_down,
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
#[derive(Default)]
pub struct UiContext {
    pub mouse: MouseState,
    /// Text of the hovered widget's hint, drawn at end of frame
    pub tooltip: Option<(String, f32, f32)>,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.tooltip = None;
    }

    /// Set tooltip to show (call from widget when hovered)
    pub fn set_tooltip(&mut self, text: &str) {
        self.tooltip = Some((text.to_string(), self.mouse.x, self.mouse.y));
    }

    /// Draw the tooltip if one is pending (call at end of frame)
    pub fn draw_tooltip(&self) {
        if let Some((text, tx, ty)) = &self.tooltip {
            let padding = 6.0;
            let font_size = 14.0;
            let dims = measure_text(text, None, font_size as u16, 1.0);

            let box_w = dims.width + padding * 2.0;
            let box_h = dims.height + padding * 2.0;

            // Below and to the right of the cursor, kept on screen
            let x = (tx + 12.0).min(screen_width() - box_w - 4.0);
            let y = ty + 20.0;

            draw_rectangle(x, y, box_w, box_h, Color::from_rgba(30, 30, 35, 240));
            draw_rectangle_lines(x, y, box_w, box_h, 1.0, Color::from_rgba(80, 80, 90, 255));
            draw_text(text, x + padding, y + padding + dims.height - 2.0, font_size, WHITE);
        }
    }
}
