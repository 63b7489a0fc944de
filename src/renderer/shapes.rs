//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in canvas pixel coordinates.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec2;

use super::font;
use super::scene::DrawCommand;
use super::vertex::Vertex;
use crate::Rgba;

/// Generate vertices for an axis-aligned rectangle
pub fn quad(pos: Vec2, size: Vec2, color: Rgba) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    vec![
        Vertex::colored(x0, y0, color),
        Vertex::colored(x1, y0, color),
        Vertex::colored(x0, y1, color),
        Vertex::colored(x0, y1, color),
        Vertex::colored(x1, y0, color),
        Vertex::colored(x1, y1, color),
    ]
}

/// Generate vertices for a filled pie slice from `start` to `end` (radians)
pub fn fan(
    center: Vec2,
    radius: f32,
    start: f32,
    end: f32,
    color: Rgba,
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(1);
    let span = end - start;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = start + (i as f32 / segments as f32) * span;
        let theta2 = start + ((i + 1) as f32 / segments as f32) * span;

        // Triangle from center to edge
        vertices.push(Vertex::colored(center.x, center.y, color));
        vertices.push(Vertex::colored(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::colored(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Rgba, segments: u32) -> Vec<Vertex> {
    fan(center, radius, 0.0, TAU, color, segments)
}

/// Generate vertices for a band between two radii from `start` to `end`
pub fn ring_arc(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    start: f32,
    end: f32,
    color: Rgba,
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(1);
    let span = end - start;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = start + (i as f32 / segments as f32) * span;
        let theta2 = start + ((i + 1) as f32 / segments as f32) * span;
        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::colored(inner1.x, inner1.y, color));
        vertices.push(Vertex::colored(outer1.x, outer1.y, color));
        vertices.push(Vertex::colored(inner2.x, inner2.y, color));

        vertices.push(Vertex::colored(inner2.x, inner2.y, color));
        vertices.push(Vertex::colored(outer1.x, outer1.y, color));
        vertices.push(Vertex::colored(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: Rgba,
    segments: u32,
) -> Vec<Vertex> {
    ring_arc(center, inner_radius, outer_radius, 0.0, TAU, color, segments)
}

/// Corner centres and start angles (y grows downward), clockwise from top-left
fn corners(pos: Vec2, size: Vec2, r: f32) -> [(Vec2, f32); 4] {
    [
        (Vec2::new(pos.x + r, pos.y + r), PI),
        (Vec2::new(pos.x + size.x - r, pos.y + r), PI + FRAC_PI_2),
        (Vec2::new(pos.x + size.x - r, pos.y + size.y - r), 0.0),
        (Vec2::new(pos.x + r, pos.y + size.y - r), FRAC_PI_2),
    ]
}

/// Generate vertices for a filled rectangle with rounded corners.
///
/// Built from three non-overlapping bands plus four corner fans so
/// translucent colours blend evenly.
pub fn rounded_rect(
    pos: Vec2,
    size: Vec2,
    radius: f32,
    color: Rgba,
    corner_segments: u32,
) -> Vec<Vertex> {
    let r = radius.clamp(0.0, size.x.min(size.y) / 2.0);
    if r == 0.0 {
        return quad(pos, size, color);
    }

    let mut vertices = Vec::new();
    // Middle band, full width
    vertices.extend(quad(
        Vec2::new(pos.x, pos.y + r),
        Vec2::new(size.x, size.y - 2.0 * r),
        color,
    ));
    // Top and bottom bands between the corners
    vertices.extend(quad(Vec2::new(pos.x + r, pos.y), Vec2::new(size.x - 2.0 * r, r), color));
    vertices.extend(quad(
        Vec2::new(pos.x + r, pos.y + size.y - r),
        Vec2::new(size.x - 2.0 * r, r),
        color,
    ));

    for (center, start) in corners(pos, size, r) {
        vertices.extend(fan(center, r, start, start + FRAC_PI_2, color, corner_segments));
    }

    vertices
}

/// Generate vertices for the outline of a rounded rectangle, `thickness` pixels inward
pub fn rounded_rect_outline(
    pos: Vec2,
    size: Vec2,
    radius: f32,
    thickness: f32,
    color: Rgba,
    corner_segments: u32,
) -> Vec<Vertex> {
    let r = radius.clamp(0.0, size.x.min(size.y) / 2.0);
    let t = thickness.min(size.x.min(size.y) / 2.0);
    let mut vertices = Vec::new();

    // Straight edges between the corners
    vertices.extend(quad(Vec2::new(pos.x + r, pos.y), Vec2::new(size.x - 2.0 * r, t), color));
    vertices.extend(quad(
        Vec2::new(pos.x + r, pos.y + size.y - t),
        Vec2::new(size.x - 2.0 * r, t),
        color,
    ));

    let side_top = pos.y + r.max(t);
    let side_height = size.y - 2.0 * r.max(t);
    vertices.extend(quad(Vec2::new(pos.x, side_top), Vec2::new(t, side_height), color));
    vertices.extend(quad(
        Vec2::new(pos.x + size.x - t, side_top),
        Vec2::new(t, side_height),
        color,
    ));

    if r > 0.0 {
        for (center, start) in corners(pos, size, r) {
            vertices.extend(ring_arc(
                center,
                (r - t).max(0.0),
                r,
                start,
                start + FRAC_PI_2,
                color,
                corner_segments,
            ));
        }
    }

    vertices
}

/// Tessellate a frame of draw commands into one triangle list
pub fn tessellate(commands: &[DrawCommand], circle_segments: u32) -> Vec<Vertex> {
    let corner_segments = (circle_segments / 4).max(2);
    let mut vertices = Vec::with_capacity(commands.len() * 3 * circle_segments as usize);

    for command in commands {
        match command {
            DrawCommand::Rect {
                pos,
                size,
                corner_radius,
                color,
                stroke: None,
            } => vertices.extend(rounded_rect(
                *pos,
                *size,
                *corner_radius,
                *color,
                corner_segments,
            )),
            DrawCommand::Rect {
                pos,
                size,
                corner_radius,
                color,
                stroke: Some(width),
            } => vertices.extend(rounded_rect_outline(
                *pos,
                *size,
                *corner_radius,
                *width,
                *color,
                corner_segments,
            )),
            DrawCommand::Circle {
                center,
                radius,
                color,
                stroke: None,
            } => vertices.extend(circle(
                *center,
                *radius,
                *color,
                segments_for(*radius, circle_segments),
            )),
            DrawCommand::Circle {
                center,
                radius,
                color,
                stroke: Some(width),
            } => vertices.extend(ring(
                *center,
                (radius - width).max(0.0),
                *radius,
                *color,
                segments_for(*radius, circle_segments),
            )),
            DrawCommand::Point { pos, color } => vertices.extend(quad(*pos, Vec2::ONE, *color)),
            DrawCommand::Text {
                text,
                pos,
                size,
                color,
            } => {
                for (cell_pos, cell_size) in font::layout(text, *pos, *size) {
                    vertices.extend(quad(cell_pos, cell_size, *color));
                }
            }
        }
    }

    vertices
}

/// Small circles (particles, trail dots) don't need the full segment count
fn segments_for(radius: f32, max_segments: u32) -> u32 {
    if radius < 6.0 {
        (max_segments / 4).max(6)
    } else {
        max_segments
    }
}
