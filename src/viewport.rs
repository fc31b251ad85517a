/*
 * Viewport Module
 *
 * The simulation works in screen space: origin at the top-left corner,
 * y growing downwards. nannou draws with the origin at the window centre and
 * y growing upwards. The viewport converts between the two for a window of
 * fixed size.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: vec2(width, height) }
    }

    // Convert a point from screen space to draw space
    pub fn to_draw(&self, point: Vec2) -> Vec2 {
        let rect = self.rect();
        vec2(rect.left() + point.x, rect.top() - point.y)
    }

    // Convert a point from draw space to screen space
    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        let rect = self.rect();
        vec2(point.x - rect.left(), rect.top() - point.y)
    }

    /// Flip a screen-space offset (sprite outline point) into draw space
    pub fn flip(offset: Vec2) -> Vec2 {
        vec2(offset.x, -offset.y)
    }

    /// Window rectangle matching the viewport size, centred on the origin
    pub fn rect(&self) -> Rect {
        Rect::from_w_h(self.size.x, self.size.y)
    }
}
