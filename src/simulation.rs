/*
 * Simulation Module
 *
 * This module owns the snowfall: the population of snowflakes kept in
 * ascending size order (so larger flakes draw on top), the global wind fed
 * by mouse drags, and the debug flag. It knows nothing about windows or
 * drawing; the nannou app drives it through `spawn_tick`, `advance` and the
 * input methods.
 */

use log::{debug, info, trace, warn};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::params::{check_screen_size, SimulationParams};
use crate::random_normal;
use crate::snowflake::{Snowflake, SnowflakeSettings};
use crate::wind::Wind;
use crate::MAX_DEPTH;

/// Key commands understood by the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    RandomizeWind,
    ToggleDebug,
}

pub struct Simulation {
    snowflakes: Vec<Snowflake>,
    params: SimulationParams,
    screen_size: Vec2,
    global_wind: Wind,
    debug_enabled: bool,
    mouse_down: bool,
    previous_mouse: Option<Vec2>,
    newest_id: Option<u64>,
    next_id: u64,
    rng: StdRng,
}

impl Simulation {
    /// Simulation seeded from OS entropy
    pub fn new(params: SimulationParams, screen_size: Vec2) -> Result<Self> {
        Self::with_rng(params, screen_size, StdRng::from_entropy())
    }

    /// Simulation with a reproducible random sequence
    pub fn with_seed(params: SimulationParams, screen_size: Vec2, seed: u64) -> Result<Self> {
        Self::with_rng(params, screen_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: SimulationParams, screen_size: Vec2, rng: StdRng) -> Result<Self> {
        params.validate()?;
        check_screen_size(screen_size)?;

        info!(
            "snowfall ready: {}x{} screen, up to {} snowflakes",
            screen_size.x, screen_size.y, params.max_snowflakes
        );

        Ok(Self {
            snowflakes: Vec::with_capacity(params.max_snowflakes),
            params,
            screen_size,
            global_wind: Wind::CALM,
            debug_enabled: false,
            mouse_down: false,
            previous_mouse: None,
            newest_id: None,
            next_id: 0,
            rng,
        })
    }

    pub fn snowflakes(&self) -> &[Snowflake] {
        &self.snowflakes
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    pub fn global_wind(&self) -> Wind {
        self.global_wind
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.mouse_down
    }

    /// Maybe add one snowflake. Returns true if one was spawned.
    pub fn spawn_tick(&mut self) -> bool {
        if self.snowflakes.len() >= self.params.max_snowflakes {
            return false;
        }
        if self.rng.gen_range(0..100) >= self.params.spawn_chance_percent {
            return false;
        }

        let settings = self.roll_settings();
        let id = self.next_id;
        let mut snowflake = match Snowflake::new(id, settings, self.screen_size, &self.params) {
            Ok(snowflake) => snowflake,
            Err(err) => {
                warn!("skipping spawn: {err}");
                return false;
            }
        };

        if let Some(wind) = self.newest_wind() {
            snowflake.wind = wind;
        }
        snowflake.debug = self.debug_enabled;

        debug!(
            "spawned snowflake {id}: size {} depth {} at x {}",
            settings.size, settings.depth, settings.location.x
        );

        self.next_id += 1;
        self.newest_id = Some(id);
        self.insert_ordered(snowflake);
        true
    }

    fn roll_settings(&mut self) -> SnowflakeSettings {
        let width = (self.screen_size.x as i32).max(1);
        let location = vec2(self.rng.gen_range(0..width) as f32, self.params.spawn_height);
        let size: i32 = self.rng.gen_range(0..40) + 10;
        let fall_speed: i32 = self.rng.gen_range(0..70) + 50;
        let rotational_speed: i32 = self.rng.gen_range(0..3) + 1;
        // Yields -1 or 0, never +1. Kept as observed.
        let direction: i32 = self.rng.gen_range(0..2) - 1;
        let depth = self.roll_depth(size as f32);
        let blueness: u8 = self.rng.gen_range(0..20);

        SnowflakeSettings {
            location,
            size: size as f32,
            fall_speed: fall_speed as f32,
            rotational_speed: rotational_speed as f32,
            direction: direction as f32,
            depth,
            blueness,
        }
    }

    // Normal-biased depth, redrawn while out of range or too detailed for a
    // small flake, then nudged towards depth 1.
    fn roll_depth(&mut self, size: f32) -> u32 {
        let max_depth = MAX_DEPTH as i32;
        let rejected = |depth: i32| (size < 40.0 && depth > 1) || depth < 0 || depth > max_depth;

        let mut depth = self.draw_depth();
        let mut retries = 0;
        while rejected(depth) {
            if retries >= self.params.max_depth_retries {
                let ceiling = if size < 40.0 { 1 } else { max_depth };
                warn!("depth sampling gave up after {retries} retries, clamping {depth}");
                depth = depth.clamp(0, ceiling);
                break;
            }
            depth = self.draw_depth();
            retries += 1;
        }

        if depth > 1 && self.rng.gen_range(0..100) < self.params.simple_depth_chance_percent {
            depth = 1;
        }

        depth as u32
    }

    fn draw_depth(&mut self) -> i32 {
        (random_normal::sample(&mut self.rng) + self.params.depth_mean_offset).floor() as i32
    }

    fn newest_wind(&self) -> Option<Wind> {
        let id = self.newest_id?;
        self.snowflakes.iter().find(|s| s.id == id).map(|s| s.wind)
    }

    // Insert before the first strictly larger snowflake, so equal sizes keep
    // insertion order.
    fn insert_ordered(&mut self, snowflake: Snowflake) {
        let index = self
            .snowflakes
            .iter()
            .position(|existing| existing.size() > snowflake.size())
            .unwrap_or(self.snowflakes.len());
        self.snowflakes.insert(index, snowflake);
    }

    /// Move every snowflake forward by `dt_ms` milliseconds
    pub fn advance(&mut self, dt_ms: f32) {
        self.global_wind.damp(self.params.wind_damping, self.params.wind_epsilon);

        for snowflake in &mut self.snowflakes {
            snowflake.update(dt_ms, &mut self.rng);
        }

        trace!("advanced {} snowflakes by {dt_ms:.2} ms", self.snowflakes.len());
    }

    /// Button pressed with the cursor at `position` (screen space)
    pub fn handle_mouse_down(&mut self, position: Vec2) {
        self.mouse_down = true;
        self.previous_mouse = Some(position);
    }

    /// Mouse moved to `position` (screen space)
    pub fn handle_mouse_move(&mut self, position: Vec2) {
        if !self.mouse_down {
            return;
        }
        if let Some(previous) = self.previous_mouse {
            let delta = position - previous;
            if delta.length_squared() > 0.0 {
                self.handle_mouse_drag(delta);
            }
        }
        self.previous_mouse = Some(position);
    }

    /// Drag by `delta` pixels: strengthen the global wind and hand it to every snowflake
    pub fn handle_mouse_drag(&mut self, delta: Vec2) {
        self.global_wind.push(delta * self.params.drag_wind_scale);
        self.broadcast_wind();
    }

    // Existing snowflakes keep the wind they last received
    pub fn handle_mouse_up(&mut self) {
        self.mouse_down = false;
        self.previous_mouse = None;
        self.global_wind = Wind::CALM;
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::RandomizeWind => {
                let limit = self.params.random_wind_limit;
                for snowflake in &mut self.snowflakes {
                    snowflake.wind = Wind::random(&mut self.rng, limit);
                }
                info!("randomized wind for {} snowflakes", self.snowflakes.len());
            }
            Command::ToggleDebug => {
                self.debug_enabled = !self.debug_enabled;
                for snowflake in &mut self.snowflakes {
                    snowflake.debug = self.debug_enabled;
                }
                info!("debug {}", if self.debug_enabled { "on" } else { "off" });
            }
        }
    }

    fn broadcast_wind(&mut self) {
        let wind = self.global_wind;
        for snowflake in &mut self.snowflakes {
            snowflake.wind = wind;
        }
    }
}
