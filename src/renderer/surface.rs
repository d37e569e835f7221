//! Drawing surface abstraction
//!
//! The render pass only talks to [`Surface`], so the same pass paints a
//! browser canvas or a vertex mesh.

use glam::Vec2;

use crate::catalog::Rgb;

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
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

    /// Square of side `size` centered on `center`
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Grow by `amount` on every side
    pub fn inflate(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.w + amount * 2.0,
            self.h + amount * 2.0,
        )
    }
}

/// Fill/stroke style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub alpha: f32,
    /// Shadow blur radius, 0 for none
    pub glow: f32,
}

impl Paint {
    pub const fn solid(color: Rgb) -> Self {
        Self {
            color,
            alpha: 1.0,
            glow: 0.0,
        }
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    pub const fn with_glow(self, glow: f32) -> Self {
        Self { glow, ..self }
    }

    /// CSS `rgba()` string for canvas styles
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.color.r, self.color.g, self.color.b, self.alpha
        )
    }
}

/// A 2D drawing target
pub trait Surface {
    /// Erase everything in `[0, width) x [0, height)`
    fn clear(&mut self, width: f32, height: f32);
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, paint: Paint);
    fn stroke_round_rect(&mut self, rect: Rect, radius: f32, line_width: f32, paint: Paint);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, paint: Paint);
    /// Blit `source` (atlas pixels) into `dest` (surface pixels)
    fn draw_sprite(&mut self, source: Rect, dest: Rect);
    /// Single text glyph with its baseline-left at `at`
    fn draw_glyph(&mut self, glyph: char, at: Vec2, size: f32, paint: Paint);
}
