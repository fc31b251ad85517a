/*
 * Renderer Module
 *
 * This module draws the snowfall. Each snowflake's sprite is drawn with a
 * fill and an outline, translated to its position and rotated by its angle;
 * the outline itself is never recomputed. Snowflakes are drawn in collection
 * order, so larger ones land on top.
 *
 * Snowflakes flagged for debug also show their bounding circle and a motion
 * arrow, and with debug enabled a panel lists frame metrics.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::culling;
use crate::debug::DebugInfo;
use crate::snowflake::Snowflake;
use crate::viewport::Viewport;

const BACKGROUND: (u8, u8, u8) = (200, 200, 200);

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let (r, g, b) = BACKGROUND;
    draw.background().color(rgb(r, g, b));

    let simulation = &model.simulation;
    let snowflakes = simulation.snowflakes();
    let viewport = &model.viewport;

    let visible = culling::visible_snowflakes(snowflakes, simulation.screen_size());

    for &i in &visible {
        draw_snowflake(&draw, &snowflakes[i], viewport);
    }

    for i in debug_snowflakes(snowflakes, &visible) {
        draw_snowflake_debug(&draw, &snowflakes[i], viewport);
    }

    if simulation.debug_enabled() {
        let info = DebugInfo { visible_snowflakes: visible.len(), ..model.debug_info.clone() };
        draw_debug_info(&draw, &info, viewport.rect(), snowflakes.len(), simulation.global_wind().velocity);
    }

    draw.to_frame(app, &frame).unwrap();
}

/// Visible snowflakes that carry the debug flag, in draw order
pub fn debug_snowflakes(snowflakes: &[Snowflake], visible: &[usize]) -> Vec<usize> {
    visible.iter().copied().filter(|&i| snowflakes[i].debug).collect()
}

fn draw_snowflake(draw: &Draw, snowflake: &Snowflake, viewport: &Viewport) {
    let sprite = snowflake.sprite();
    let center = viewport.to_draw(snowflake.position);
    // Screen space is y-down, so the angle flips with the axis
    let angle = -snowflake.theta;
    let points = sprite.points.iter().map(|&p| Viewport::flip(p));

    draw.polygon()
        .color(sprite.fill_color)
        .points(points.clone())
        .xy(center)
        .rotate(angle);

    draw.polyline()
        .weight(1.0)
        .color(sprite.stroke_color)
        .points_closed(points)
        .xy(center)
        .rotate(angle);
}

fn draw_snowflake_debug(draw: &Draw, snowflake: &Snowflake, viewport: &Viewport) {
    let center = viewport.to_draw(snowflake.position);
    let extent = snowflake.sprite().extent();

    // Bounding circle
    draw.ellipse()
        .xy(center)
        .w_h(extent, extent)
        .no_fill()
        .stroke(BLUE)
        .stroke_weight(1.0);

    // Motion: fall/sway velocity plus local wind
    let motion = Viewport::flip(snowflake.velocity + snowflake.wind.velocity);
    draw.arrow()
        .start(center)
        .end(center + motion * 0.25)
        .color(RED)
        .stroke_weight(1.5);
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &Draw,
    debug_info: &DebugInfo,
    window_rect: Rect,
    snowflakes_len: usize,
    wind: Vec2,
) {
    let lines = debug_info.lines(snowflakes_len, wind);

    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 240.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 90.0, y)
            .w(panel_width - margin)
            .left_justify()
            .color(WHITE)
            .font_size(14);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParams;
    use crate::snowflake::SnowflakeSettings;

    fn flake(debug: bool) -> Snowflake {
        let settings = SnowflakeSettings {
            location: vec2(100.0, 100.0),
            size: 20.0,
            fall_speed: 60.0,
            rotational_speed: 1.0,
            direction: 0.0,
            depth: 1,
            blueness: 0,
        };
        let mut snowflake =
            Snowflake::new(0, settings, vec2(800.0, 600.0), &SimulationParams::default()).unwrap();
        snowflake.debug = debug;
        snowflake
    }

    #[test]
    fn debug_drawing_follows_each_snowflake_flag() {
        let snowflakes = vec![flake(true), flake(false), flake(true), flake(true)];

        assert_eq!(debug_snowflakes(&snowflakes, &[0, 1, 2]), vec![0, 2]);
        assert!(debug_snowflakes(&snowflakes, &[1]).is_empty());
    }
}
