/*
 * Snowflake Module
 *
 * This module defines the Snowflake struct and its motion model.
 * Each snowflake:
 * 1. Falls at a fixed speed chosen at spawn
 * 2. Sways sideways following the sine of its rotation angle
 * 3. Drifts with its own copy of the wind, which slowly dies down
 * 4. Wraps to the opposite edge once it is well outside the screen
 *
 * The fractal outline is generated once, around the origin, and kept as a
 * sprite. Drawing only translates and rotates it.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::error::{Result, SnowfallError};
use crate::fractal;
use crate::params::{check_screen_size, SimulationParams};
use crate::wind::Wind;
use crate::MAX_DEPTH;

/// Precomputed drawing data: outline around the origin plus colours
#[derive(Clone, Debug)]
pub struct Sprite {
    pub points: Vec<Vec2>,
    pub fill_color: Rgb<u8>,
    pub stroke_color: Rgb<u8>,
    pub radius: f32,
}

impl Sprite {
    fn new(size: f32, depth: u32, blueness: u8) -> Self {
        Self {
            points: fractal::generate(Vec2::ZERO, size, depth),
            fill_color: rgb(255 - blueness, 255 - blueness, 255),
            stroke_color: rgb(0, 0, 0),
            radius: fractal::bounding_radius(size),
        }
    }

    /// Side length of the square buffer the sprite fits in
    pub fn extent(&self) -> f32 {
        self.radius * 2.0
    }
}

/// Creation-time attributes of a snowflake
#[derive(Clone, Copy, Debug)]
pub struct SnowflakeSettings {
    pub location: Vec2,
    pub size: f32,
    pub fall_speed: f32,
    pub rotational_speed: f32,
    pub direction: f32,
    pub depth: u32,
    pub blueness: u8,
}

// Motion tuning copied out of the simulation parameters
#[derive(Clone, Copy, Debug)]
struct Motion {
    damping: f32,
    epsilon: f32,
    wrap_margin: f32,
    wrap_jump: f32,
}

#[derive(Clone, Debug)]
pub struct Snowflake {
    pub id: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub wind: Wind,
    pub theta: f32,
    pub debug: bool,
    size: f32,
    depth: u32,
    rotational_speed: f32,
    direction: f32,
    screen_size: Vec2,
    motion: Motion,
    sprite: Sprite,
}

impl Snowflake {
    pub fn new(
        id: u64,
        settings: SnowflakeSettings,
        screen_size: Vec2,
        params: &SimulationParams,
    ) -> Result<Self> {
        if !settings.size.is_finite() || settings.size <= 0.0 {
            return Err(SnowfallError::InvalidSize(settings.size));
        }
        if settings.depth > MAX_DEPTH {
            return Err(SnowfallError::DepthOutOfRange { depth: settings.depth, max: MAX_DEPTH });
        }
        check_screen_size(screen_size)?;

        let theta: f32 = 0.0;

        Ok(Self {
            id,
            position: settings.location,
            velocity: vec2(theta.sin() * settings.direction, settings.fall_speed),
            wind: Wind::CALM,
            theta,
            debug: false,
            size: settings.size,
            depth: settings.depth,
            rotational_speed: settings.rotational_speed,
            direction: settings.direction,
            screen_size,
            motion: Motion {
                damping: params.wind_damping,
                epsilon: params.wind_epsilon,
                wrap_margin: params.wrap_margin,
                wrap_jump: params.wrap_jump,
            },
            sprite: Sprite::new(settings.size, settings.depth, settings.blueness),
        })
    }

    // Advance the snowflake by `dt_ms` milliseconds
    pub fn update<R: Rng + ?Sized>(&mut self, dt_ms: f32, rng: &mut R) {
        let seconds = dt_ms / 1000.0;

        self.wind.damp(self.motion.damping, self.motion.epsilon);

        // Jitter is drawn every tick, even for a zero-length one
        let jitter: f32 = rng.gen();
        self.theta += (self.rotational_speed + self.wind.velocity.y / 200.0 + jitter) * seconds;

        self.velocity.x = 100.0 * self.theta.sin() * self.direction;

        let offset = seconds * (self.velocity + self.wind.velocity) * self.size / 50.0;
        self.position += offset + self.wrap_offset();
    }

    // Jump back across the screen once past the margin on either axis
    fn wrap_offset(&self) -> Vec2 {
        let margin = self.motion.wrap_margin;
        let axis = |position: f32, extent: f32| {
            if position > extent + margin {
                -(extent + self.motion.wrap_jump)
            } else if position < -margin {
                extent + self.motion.wrap_jump
            } else {
                0.0
            }
        };

        vec2(
            axis(self.position.x, self.screen_size.x),
            axis(self.position.y, self.screen_size.y),
        )
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn rotational_speed(&self) -> f32 {
        self.rotational_speed
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Sprite outline moved to the current position and rotation
    pub fn world_outline(&self) -> Vec<Vec2> {
        let (sin, cos) = self.theta.sin_cos();
        self.sprite
            .points
            .iter()
            .map(|p| vec2(p.x * cos - p.y * sin, p.x * sin + p.y * cos) + self.position)
            .collect()
    }
}
