//! Render pass: paints beds and seeds for one frame
//!
//! A pure function of the level state. It takes `&LevelState`, so it cannot
//! change the simulation.

use glam::Vec2;

use super::atlas::SpriteAtlas;
use super::surface::{Paint, Rect, Surface};
use crate::catalog::palette;
use crate::sim::LevelState;

pub const BED_CORNER_RADIUS: f32 = 20.0;
pub const SEED_DRAW_RADIUS: f32 = 20.0;
pub const SEED_DRAG_RADIUS: f32 = 25.0;
pub const SPRITE_SIZE: f32 = 60.0;
pub const WILDCARD_GLYPH: char = '★';
const GLYPH_SIZE: f32 = 12.0;

/// Paint one frame of `state` onto `surface`
pub fn render<S: Surface + ?Sized>(
    state: &LevelState,
    width: f32,
    height: f32,
    atlas: Option<&SpriteAtlas>,
    highlighted_bed: Option<u32>,
    surface: &mut S,
) {
    surface.clear(width, height);

    for bed in &state.beds {
        let lit = highlighted_bed == Some(bed.id);
        let rect = Rect::new(bed.pos.x, bed.pos.y, bed.width, bed.height);
        let base = Paint::solid(bed.color);

        let fill = if lit {
            base.with_alpha(0.3).with_glow(20.0)
        } else {
            base.with_alpha(0.2)
        };
        surface.fill_round_rect(rect, BED_CORNER_RADIUS, fill);

        let (line_width, alpha) = if lit { (4.0, 0.8) } else { (2.0, 0.5) };
        surface.stroke_round_rect(rect, BED_CORNER_RADIUS, line_width, base.with_alpha(alpha));
    }

    for seed in state.seeds.iter().filter(|s| !s.matched) {
        let dragged = state.dragged == Some(seed.id);

        if let Some(atlas) = atlas {
            let slice = atlas.slice_index(seed.color, seed.wildcard);
            surface.draw_sprite(atlas.source_rect(slice), Rect::centered(seed.pos, SPRITE_SIZE));
            continue;
        }

        let radius = if dragged {
            SEED_DRAG_RADIUS
        } else {
            SEED_DRAW_RADIUS
        };
        surface.fill_circle(seed.pos, radius, Paint::solid(seed.color));

        if seed.wildcard {
            surface.stroke_circle(seed.pos, radius, 2.0, Paint::solid(palette::WILDCARD));
            surface.draw_glyph(
                WILDCARD_GLYPH,
                seed.pos + Vec2::new(-5.0, 4.0),
                GLYPH_SIZE,
                Paint::solid(palette::BLACK),
            );
        }
    }
}
