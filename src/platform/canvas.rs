//! Canvas 2D surface for the browser

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::renderer::{Paint, Rect, Surface};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// Seed sprite sheet, if one has loaded
    sprites: Option<HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx, sprites: None }
    }

    pub fn set_sprites(&mut self, image: HtmlImageElement) {
        self.sprites = Some(image);
    }

    fn round_rect_path(&self, rect: Rect, radius: f32) {
        let r = radius.min(rect.w / 2.0).min(rect.h / 2.0) as f64;
        let (x, y, w, h) = (rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + r, y);
        ctx.arc_to(x + w, y, x + w, y + h, r).ok();
        ctx.arc_to(x + w, y + h, x, y + h, r).ok();
        ctx.arc_to(x, y + h, x, y, r).ok();
        ctx.arc_to(x, y, x + w, y, r).ok();
        ctx.close_path();
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius.max(0.0) as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
    }

    fn apply_fill(&self, paint: Paint) {
        self.ctx.set_fill_style_str(&paint.css());
        if paint.glow > 0.0 {
            self.ctx.set_shadow_blur(paint.glow as f64);
            self.ctx.set_shadow_color(&Paint { alpha: 1.0, ..paint }.css());
        }
    }

    fn reset_shadow(&self) {
        self.ctx.set_shadow_blur(0.0);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, paint: Paint) {
        self.round_rect_path(rect, radius);
        self.apply_fill(paint);
        self.ctx.fill();
        self.reset_shadow();
    }

    fn stroke_round_rect(&mut self, rect: Rect, radius: f32, line_width: f32, paint: Paint) {
        self.round_rect_path(rect, radius);
        self.ctx.set_stroke_style_str(&paint.css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        self.circle_path(center, radius);
        self.apply_fill(paint);
        self.ctx.fill();
        self.reset_shadow();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, paint: Paint) {
        self.circle_path(center, radius);
        self.ctx.set_stroke_style_str(&paint.css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn draw_sprite(&mut self, source: Rect, dest: Rect) {
        let Some(image) = &self.sprites else { return };
        self.ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                source.x as f64,
                source.y as f64,
                source.w as f64,
                source.h as f64,
                dest.x as f64,
                dest.y as f64,
                dest.w as f64,
                dest.h as f64,
            )
            .ok();
    }

    fn draw_glyph(&mut self, glyph: char, at: Vec2, size: f32, paint: Paint) {
        self.ctx.set_fill_style_str(&paint.css());
        self.ctx.set_font(&format!("{}px Arial", size));
        self.ctx
            .fill_text(&glyph.to_string(), at.x as f64, at.y as f64)
            .ok();
    }
}
