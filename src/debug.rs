/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that collects per-frame metrics
 * shown in the debug overlay:
 * - FPS (frames per second)
 * - Frame time
 * - Spawn ticks run this frame
 * - Total and visible snowflakes
 */

use nannou::prelude::*;
use std::time::Duration;

// Debug information to display
#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub spawn_ticks_per_frame: u32,
    pub total_spawned: u64,
    pub visible_snowflakes: usize,
}

impl DebugInfo {
    pub fn lines(&self, snowflakes: usize, wind: Vec2) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Snowflakes: {} ({} visible)", snowflakes, self.visible_snowflakes),
            format!("Spawned: {} (+{} ticks)", self.total_spawned, self.spawn_ticks_per_frame),
            format!("Wind: ({:.1}, {:.1})", wind.x, wind.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_report_population_and_wind() {
        let info = DebugInfo {
            fps: 59.94,
            frame_time: Duration::from_millis(16),
            visible_snowflakes: 12,
            ..Default::default()
        };

        let lines = info.lines(40, vec2(2.0, -3.3));
        assert_eq!(lines[0], "FPS: 59.9");
        assert_eq!(lines[1], "Frame time: 16.00 ms");
        assert_eq!(lines[2], "Snowflakes: 40 (12 visible)");
        assert_eq!(lines[4], "Wind: (2.0, -3.3)");
    }
}
