/*
 * Koch Winter
 *
 * Koch snowflakes of random size and detail drift down the window, swaying
 * as they rotate and wrapping around the edges. Drag the mouse to blow wind,
 * press W for random gusts and D for debug drawing.
 */

use koch_winter::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    nannou::app(app::model).update(app::update).run();
}
