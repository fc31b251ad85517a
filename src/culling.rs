/*
 * Culling Module
 *
 * Snowflakes wrap well outside the window, so a good share of the
 * population is off-screen at any time. Only snowflakes whose bounding
 * circle touches the screen are handed to the renderer.
 */

use nannou::prelude::*;

use crate::snowflake::Snowflake;

/// Whether a circle at `center` with `radius` overlaps the screen rectangle `[0, size]`
pub fn circle_on_screen(center: Vec2, radius: f32, size: Vec2) -> bool {
    center.x + radius >= 0.0
        && center.x - radius <= size.x
        && center.y + radius >= 0.0
        && center.y - radius <= size.y
}

// Indices of visible snowflakes, in collection (draw) order
pub fn visible_snowflakes(snowflakes: &[Snowflake], screen_size: Vec2) -> Vec<usize> {
    snowflakes
        .iter()
        .enumerate()
        .filter(|(_, snowflake)| {
            circle_on_screen(snowflake.position, snowflake.sprite().radius, screen_size)
        })
        .map(|(i, _)| i)
        .collect()
}
