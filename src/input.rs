/*
 * Input Module
 *
 * This module turns nannou window events into simulation input:
 * - Dragging with the left button blows wind in the drag direction
 * - Releasing the button calms the global wind
 * - W randomizes every snowflake's wind
 * - D toggles debug drawing
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::simulation::Command;

pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::W => Some(Command::RandomizeWind),
        Key::D => Some(Command::ToggleDebug),
        _ => None,
    }
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let screen_pos = model.viewport.to_screen(pos);
    model.simulation.handle_mouse_move(screen_pos);
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        let screen_pos = model.viewport.to_screen(app.mouse.position());
        model.simulation.handle_mouse_down(screen_pos);
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.simulation.handle_mouse_up();
    }
}

// Key released event handler
pub fn key_released(_app: &App, model: &mut Model, key: Key) {
    if let Some(command) = command_for_key(key) {
        model.simulation.handle_command(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_wind_and_debug_keys() {
        assert_eq!(command_for_key(Key::W), Some(Command::RandomizeWind));
        assert_eq!(command_for_key(Key::D), Some(Command::ToggleDebug));
        assert_eq!(command_for_key(Key::Space), None);
    }
}
