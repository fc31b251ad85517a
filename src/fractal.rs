/*
 * Fractal Module
 *
 * Builds the outline of a Koch snowflake. Coordinates are in screen space
 * (y grows downwards). The outline starts as an equilateral triangle and
 * every refinement pass replaces each edge with a Koch bump, so a depth-d
 * outline holds 3 * 4^d points. The polygon is closed implicitly: the last
 * point connects back to the first.
 */

use nannou::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Ordered, implicitly closed polygon
pub type Outline = Vec<Vec2>;

/// Equilateral triangle of side `size` whose centroid sits at `center`,
/// first vertex straight above the centroid.
pub fn seed_triangle(center: Vec2, size: f32) -> Outline {
    let inscribed_radius = 3.0_f32.sqrt() / 6.0 * size;
    let height = 3.0_f32.sqrt() / 2.0 * size;
    let vertex_offset = height - inscribed_radius;

    let top = vec2(center.x, center.y - vertex_offset);
    let right = vec2(top.x + size / 2.0, top.y + height);
    let left = vec2(right.x - size, right.y);

    vec![top, right, left]
}

/// Replace the edge `start -> end` with the five points of a Koch bump.
///
/// The tip direction comes from `atan(dy / dx)` with the sign flipped for
/// leftward edges, so the bump points outward for a clockwise outline.
/// Vertical edges use a quarter turn for the angle.
pub fn koch_bump(start: Vec2, end: Vec2) -> [Vec2; 5] {
    let delta = end - start;
    let segment_length = delta.length() / 3.0;
    let segment_center = start + delta / 2.0;
    let tip_height = 3.0_f32.sqrt() / 2.0 * segment_length;

    let angle = if delta.x == 0.0 {
        FRAC_PI_2
    } else {
        (delta.y / delta.x).atan()
    };
    let sign = if delta.x < 0.0 { -1.0 } else { 1.0 };

    let tip = segment_center + vec2(angle.sin(), -angle.cos()) * sign * tip_height;

    [start, start + delta / 3.0, tip, end - delta / 3.0, end]
}

/// One refinement pass: every edge (wrapping last to first) becomes a bump.
/// The closing point of each bump is dropped since it starts the next edge.
pub fn refine(points: &[Vec2]) -> Outline {
    let mut refined = Vec::with_capacity(points.len() * 4);

    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        refined.extend_from_slice(&koch_bump(start, end)[..4]);
    }

    refined
}

/// Koch snowflake outline centred on `center` after `depth` refinement passes.
pub fn generate(center: Vec2, size: f32, depth: u32) -> Outline {
    (0..depth).fold(seed_triangle(center, size), |points, _| refine(&points))
}

/// Radius of the circle that contains the outline at any depth.
pub fn bounding_radius(size: f32) -> f32 {
    size * 3.0_f32.sqrt() / 3.0
}
