//! Headless surface that tessellates draw calls into triangles
//!
//! Used on native targets and in tests. Sprites and glyphs cannot be
//! tessellated without a texture, so they are recorded as commands instead.

use glam::Vec2;

use super::shapes;
use super::surface::{Paint, Rect, Surface};
use super::vertex::Vertex;

const CIRCLE_SEGMENTS: u32 = 24;

/// A recorded sprite blit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteQuad {
    pub source: Rect,
    pub dest: Rect,
}

/// A recorded text glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRun {
    pub glyph: char,
    pub at: Vec2,
    pub size: f32,
    pub paint: Paint,
}

#[derive(Debug, Default)]
pub struct MeshSurface {
    pub vertices: Vec<Vertex>,
    pub sprites: Vec<SpriteQuad>,
    pub glyphs: Vec<GlyphRun>,
    /// Size passed to the last `clear`
    pub size: (f32, f32),
    /// Number of draw calls since the last clear
    pub draw_calls: usize,
}

impl MeshSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw vertex bytes, ready for a GPU vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Shadow halo drawn under glowing shapes
    fn glow(&mut self, rect: Rect, radius: f32, paint: Paint) {
        if paint.glow > 0.0 {
            let halo = paint.color.to_rgba(paint.alpha * 0.5);
            self.vertices.extend(shapes::round_rect(
                rect.inflate(paint.glow / 2.0),
                radius + paint.glow / 2.0,
                halo,
            ));
        }
    }
}

impl Surface for MeshSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.vertices.clear();
        self.sprites.clear();
        self.glyphs.clear();
        self.size = (width, height);
        self.draw_calls = 0;
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, paint: Paint) {
        self.draw_calls += 1;
        self.glow(rect, radius, paint);
        self.vertices
            .extend(shapes::round_rect(rect, radius, paint.color.to_rgba(paint.alpha)));
    }

    fn stroke_round_rect(&mut self, rect: Rect, radius: f32, line_width: f32, paint: Paint) {
        self.draw_calls += 1;
        self.vertices.extend(shapes::round_rect_stroke(
            rect,
            radius,
            line_width,
            paint.color.to_rgba(paint.alpha),
        ));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        self.draw_calls += 1;
        self.vertices.extend(shapes::circle(
            center,
            radius,
            paint.color.to_rgba(paint.alpha),
            CIRCLE_SEGMENTS,
        ));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, paint: Paint) {
        self.draw_calls += 1;
        self.vertices.extend(shapes::ring(
            center,
            radius - line_width / 2.0,
            radius + line_width / 2.0,
            paint.color.to_rgba(paint.alpha),
            CIRCLE_SEGMENTS,
        ));
    }

    fn draw_sprite(&mut self, source: Rect, dest: Rect) {
        self.draw_calls += 1;
        self.sprites.push(SpriteQuad { source, dest });
    }

    fn draw_glyph(&mut self, glyph: char, at: Vec2, size: f32, paint: Paint) {
        self.draw_calls += 1;
        self.glyphs.push(GlyphRun {
            glyph,
            at,
            size,
            paint,
        });
    }
}
