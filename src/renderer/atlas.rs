//! Seed sprite atlas: one horizontal strip of equally sized slices

use super::surface::Rect;
use crate::catalog::{Rgb, palette};

#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAtlas {
    /// Atlas image size in pixels
    pub width: f32,
    pub height: f32,
    slice_count: usize,
    color_slices: Vec<(Rgb, usize)>,
    wildcard_slice: usize,
}

impl SpriteAtlas {
    /// One slice per color in order, followed by the wildcard slice
    pub fn strip(width: f32, height: f32, colors: &[Rgb]) -> Self {
        Self {
            width,
            height,
            slice_count: colors.len() + 1,
            color_slices: colors.iter().enumerate().map(|(i, &c)| (c, i)).collect(),
            wildcard_slice: colors.len(),
        }
    }

    /// Layout of the shipped seed sheet: red, blue, yellow, green, star
    pub fn builtin(width: f32, height: f32) -> Self {
        use palette::*;
        Self::strip(width, height, &[RED, BLUE, YELLOW, GREEN])
    }

    pub fn slice_count(&self) -> usize {
        self.slice_count
    }

    /// Slice for a seed; colors missing from the sheet fall back to slice 0
    pub fn slice_index(&self, color: Rgb, wildcard: bool) -> usize {
        if wildcard {
            return self.wildcard_slice;
        }
        self.color_slices
            .iter()
            .find(|(c, _)| *c == color)
            .map_or(0, |&(_, i)| i)
    }

    /// Source rectangle of a slice in atlas pixels
    pub fn source_rect(&self, index: usize) -> Rect {
        let slice_w = self.width / self.slice_count as f32;
        Rect::new(index as f32 * slice_w, 0.0, slice_w, self.height)
    }
}
