/*
 * Application Module
 *
 * This module defines the nannou model for the snowfall and the per-frame
 * update. Wall-clock frame time feeds a spawn accumulator so that spawn
 * chances are rolled once per spawn interval regardless of frame rate, then
 * the whole population advances by the frame time.
 */

use log::{debug, info};
use nannou::prelude::*;
use std::time::Duration;

use crate::debug::DebugInfo;
use crate::input;
use crate::params::SimulationParams;
use crate::renderer;
use crate::simulation::Simulation;
use crate::viewport::Viewport;

/// Turns frame durations into milliseconds and whole spawn intervals
#[derive(Clone, Debug)]
pub struct SpawnClock {
    pub accumulator_ms: f32,
    pub interval_ms: f32,
    pub max_frame_ms: f32,
}

impl SpawnClock {
    pub fn new(params: &SimulationParams) -> Self {
        Self {
            accumulator_ms: 0.0,
            interval_ms: params.spawn_interval_ms,
            max_frame_ms: params.max_frame_ms,
        }
    }

    /// Returns the clamped frame time in ms and how many spawn ticks are due
    pub fn tick(&mut self, elapsed: Duration) -> (f32, u32) {
        let frame_ms = (elapsed.as_secs_f32() * 1000.0).min(self.max_frame_ms);
        self.accumulator_ms += frame_ms;

        let mut ticks = 0;
        while self.accumulator_ms >= self.interval_ms {
            self.accumulator_ms -= self.interval_ms;
            ticks += 1;
        }

        (frame_ms, ticks)
    }
}

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub viewport: Viewport,
    pub spawn_clock: SpawnClock,
    pub debug_info: DebugInfo,
}

impl Model {
    pub fn new(simulation: Simulation) -> Self {
        let size = simulation.screen_size();
        let spawn_clock = SpawnClock::new(simulation.params());

        Self {
            simulation,
            viewport: Viewport::new(size.x, size.y),
            spawn_clock,
            debug_info: DebugInfo::default(),
        }
    }

    // Run the spawn ticks due for `elapsed`, then advance every snowflake
    pub fn step(&mut self, elapsed: Duration) {
        let (frame_ms, ticks) = self.spawn_clock.tick(elapsed);

        for _ in 0..ticks {
            if self.simulation.spawn_tick() {
                self.debug_info.total_spawned += 1;
            }
        }
        self.simulation.advance(frame_ms);

        self.debug_info.spawn_ticks_per_frame = ticks;
        self.debug_info.frame_time = elapsed;
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = SimulationParams::default();
    let (width, height) = (params.window_width, params.window_height);

    app.new_window()
        .title("Koch Winter")
        .size(width, height)
        .resizable(false)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .key_released(input::key_released)
        .build()
        .expect("Failed to create window");

    let simulation = Simulation::new(params, vec2(width as f32, height as f32))
        .expect("Default simulation parameters are invalid");

    info!("window {}x{} open", width, height);
    Model::new(simulation)
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.step(update.since_last);
    model.debug_info.fps = app.fps();

    debug!(
        "frame {:.2} ms: {} snowflakes, {} spawn ticks",
        update.since_last.as_secs_f64() * 1000.0,
        model.simulation.snowflakes().len(),
        model.debug_info.spawn_ticks_per_frame
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(seed: u64) -> Model {
        let simulation =
            Simulation::with_seed(SimulationParams::default(), vec2(800.0, 600.0), seed).unwrap();
        Model::new(simulation)
    }

    #[test]
    fn spawn_clock_counts_whole_intervals() {
        let mut clock = SpawnClock::new(&SimulationParams::default());

        let (frame_ms, ticks) = clock.tick(Duration::from_millis(25));
        assert!((frame_ms - 25.0).abs() < 1e-3);
        assert_eq!(ticks, 2);
        assert!((clock.accumulator_ms - 5.0).abs() < 1e-3);

        let (_, ticks) = clock.tick(Duration::from_millis(4));
        assert_eq!(ticks, 0);
        let (_, ticks) = clock.tick(Duration::from_millis(2));
        assert_eq!(ticks, 1);
    }

    #[test]
    fn spawn_clock_clamps_stalled_frames() {
        let mut clock = SpawnClock::new(&SimulationParams::default());

        let (frame_ms, ticks) = clock.tick(Duration::from_secs(10));
        assert_eq!(frame_ms, 250.0);
        assert_eq!(ticks, 25);
    }

    #[test]
    fn stepping_fills_population_up_to_cap() {
        let mut model = model(99);
        for _ in 0..20_000 {
            model.step(Duration::from_millis(16));
        }

        let snowflakes = model.simulation.snowflakes();
        assert_eq!(snowflakes.len(), 200);
        assert_eq!(model.debug_info.total_spawned, 200);
        assert!(snowflakes.windows(2).all(|pair| pair[0].size() <= pair[1].size()));
    }
}
