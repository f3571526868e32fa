//! Immediate-mode UI helpers on top of macroquad
//!
//! Screen rectangles, per-frame mouse state and a few widgets.

mod input;
mod widgets;

pub use input::*;
pub use widgets::*;

/// Screen-space rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Strip of `height` along the top edge
    pub fn slice_top(&self, height: f32) -> Rect {
        Rect::new(self.x, self.y, self.w, height.min(self.h))
    }

    /// What is left below `slice_top(height)`
    pub fn remaining_after_top(&self, height: f32) -> Rect {
        let height = height.min(self.h);
        Rect::new(self.x, self.y + height, self.w, self.h - height)
    }

    /// Strip of `width` along the left edge
    pub fn slice_left(&self, width: f32) -> Rect {
        Rect::new(self.x, self.y, width.min(self.w), self.h)
    }

    /// What is left right of `slice_left(width)`
    pub fn remaining_after_left(&self, width: f32) -> Rect {
        let width = width.min(self.w);
        Rect::new(self.x + width, self.y, self.w - width, self.h)
    }

    /// Shrink by `pad` on every side
    pub fn inset(&self, pad: f32) -> Rect {
        Rect::new(
            self.x + pad,
            self.y + pad,
            (self.w - pad * 2.0).max(0.0),
            (self.h - pad * 2.0).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_partition_rect() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        let top = r.slice_top(15.0);
        let rest = r.remaining_after_top(15.0);
        assert_eq!(top.h + rest.h, r.h);
        assert_eq!(rest.y, 35.0);

        let left = r.slice_left(200.0);
        assert_eq!(left.w, 100.0);
        assert_eq!(r.remaining_after_left(200.0).w, 0.0);
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(0.0, 9.9));
        assert!(!r.contains(10.0, 5.0));
    }
}
