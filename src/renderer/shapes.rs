//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::surface::Rect;
use super::vertex::Vertex;

/// Segments per rounded corner
pub const CORNER_SEGMENTS: u32 = 6;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let points: Vec<Vec2> = (0..segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * TAU;
            center + Vec2::new(theta.cos(), theta.sin()) * (inner_radius + outer_radius) / 2.0
        })
        .collect();
    closed_stroke(&points, outer_radius - inner_radius, color)
}

/// Outline of a rounded rectangle, clockwise from the top-left corner
pub fn round_rect_outline(rect: Rect, radius: f32) -> Vec<Vec2> {
    let r = radius.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
    // Corner centers with the angle each quarter-arc starts at
    let corners = [
        (Vec2::new(rect.x + r, rect.y + r), PI),
        (Vec2::new(rect.x + rect.w - r, rect.y + r), -FRAC_PI_2),
        (Vec2::new(rect.x + rect.w - r, rect.y + rect.h - r), 0.0),
        (Vec2::new(rect.x + r, rect.y + rect.h - r), FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS as usize + 1));
    for (center, start) in corners {
        for i in 0..=CORNER_SEGMENTS {
            let theta = start + (i as f32 / CORNER_SEGMENTS as f32) * FRAC_PI_2;
            points.push(center + Vec2::new(theta.cos(), theta.sin()) * r);
        }
    }
    points
}

/// Generate vertices for a filled rounded rectangle
pub fn round_rect(rect: Rect, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let outline = round_rect_outline(rect, radius);
    let center = rect.center();
    let mut vertices = Vec::with_capacity(outline.len() * 3);

    for i in 0..outline.len() {
        let a = outline[i];
        let b = outline[(i + 1) % outline.len()];
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Generate vertices for a rounded rectangle border centered on its edge
pub fn round_rect_stroke(rect: Rect, radius: f32, line_width: f32, color: [f32; 4]) -> Vec<Vertex> {
    closed_stroke(&round_rect_outline(rect, radius), line_width, color)
}

/// Thick closed polyline: one quad per edge
fn closed_stroke(points: &[Vec2], line_width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = line_width / 2.0;
    let mut vertices = Vec::with_capacity(points.len() * 6);

    for i in 0..points.len() {
        let p1 = points[i];
        let p2 = points[(i + 1) % points.len()];

        let dir = (p2 - p1).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x) * half;

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}
