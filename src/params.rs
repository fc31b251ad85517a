/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that holds the tuning
 * constants of the snowfall: population cap, spawn odds, wind behaviour,
 * wrap margins and window size. Ranges are exposed so validation and any
 * caller share a single definition.
 */

use nannou::prelude::*;

use crate::error::{Result, SnowfallError};

// Parameters for the snowfall simulation
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    // Population
    pub max_snowflakes: usize,
    pub spawn_chance_percent: u32,
    pub spawn_interval_ms: f32,
    pub spawn_height: f32,

    // Shape selection
    pub depth_mean_offset: f32,
    pub simple_depth_chance_percent: u32,
    pub max_depth_retries: u32,

    // Wind
    pub wind_damping: f32,
    pub wind_epsilon: f32,
    pub drag_wind_scale: f32,
    pub random_wind_limit: f32,

    // Wrap: a snowflake past `wrap_margin` beyond an edge jumps back by screen + `wrap_jump`
    pub wrap_margin: f32,
    pub wrap_jump: f32,

    // Frame loop
    pub max_frame_ms: f32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            max_snowflakes: 200,
            spawn_chance_percent: 2,
            spawn_interval_ms: 10.0,
            spawn_height: -50.0,
            depth_mean_offset: 1.85,
            simple_depth_chance_percent: 40,
            max_depth_retries: 100,
            wind_damping: 0.001,
            wind_epsilon: 0.001,
            drag_wind_scale: 2.0,
            random_wind_limit: 250.0,
            wrap_margin: 100.0,
            wrap_jump: 150.0,
            max_frame_ms: 250.0,
            window_width: 800,
            window_height: 600,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<()> {
        check("max_snowflakes", self.max_snowflakes, Self::get_max_snowflakes_range())?;
        check("spawn_chance_percent", self.spawn_chance_percent, Self::get_percent_range())?;
        check(
            "simple_depth_chance_percent",
            self.simple_depth_chance_percent,
            Self::get_percent_range(),
        )?;
        check("wind_damping", self.wind_damping, Self::get_damping_range())?;

        if !(self.spawn_interval_ms > 0.0) {
            return Err(invalid("spawn_interval_ms must be positive"));
        }
        if !(self.max_frame_ms >= self.spawn_interval_ms) {
            return Err(invalid("max_frame_ms must be at least spawn_interval_ms"));
        }
        if !(self.wind_epsilon >= 0.0) || !(self.random_wind_limit >= 0.0) {
            return Err(invalid("wind_epsilon and random_wind_limit must be non-negative"));
        }
        if !(self.wrap_margin >= 0.0) || !(self.wrap_jump > self.wrap_margin) {
            return Err(invalid("wrap_jump must exceed a non-negative wrap_margin"));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(invalid("window dimensions must be non-zero"));
        }

        Ok(())
    }

    pub fn get_max_snowflakes_range() -> std::ops::RangeInclusive<usize> {
        1..=10_000
    }

    pub fn get_percent_range() -> std::ops::RangeInclusive<u32> {
        0..=100
    }

    pub fn get_damping_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }
}

/// Screen dimensions must each be at least one pixel
pub fn check_screen_size(size: Vec2) -> Result<()> {
    if size.x >= 1.0 && size.y >= 1.0 {
        Ok(())
    } else {
        Err(SnowfallError::InvalidScreenSize { width: size.x, height: size.y })
    }
}

fn check<T: PartialOrd + std::fmt::Debug>(
    name: &str,
    value: T,
    range: std::ops::RangeInclusive<T>,
) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(invalid(&format!("{name} = {value:?} outside {range:?}")))
    }
}

fn invalid(message: &str) -> SnowfallError {
    SnowfallError::InvalidParams(message.to_string())
}
