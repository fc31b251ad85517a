/*
 * Wind Module
 *
 * A 2D velocity bias that decays a little every tick. The simulation holds
 * the global wind produced by mouse drags; every snowflake holds its own
 * copy that is overwritten on broadcast and then decays on its own.
 */

use nannou::prelude::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Wind {
    pub velocity: Vec2,
}

impl Wind {
    pub const CALM: Wind = Wind { velocity: Vec2::ZERO };

    pub fn new(x: f32, y: f32) -> Self {
        Self { velocity: vec2(x, y) }
    }

    /// Uniformly random wind in `[-limit, limit]` on both axes
    pub fn random<R: Rng + ?Sized>(rng: &mut R, limit: f32) -> Self {
        Self::new(rng.gen_range(-limit..=limit), rng.gen_range(-limit..=limit))
    }

    // Each component above `epsilon` loses `damping` of itself. Not scaled
    // by frame time, so the decay rate follows the frame rate.
    pub fn damp(&mut self, damping: f32, epsilon: f32) {
        if self.velocity.x.abs() > epsilon {
            self.velocity.x -= self.velocity.x * damping;
        }
        if self.velocity.y.abs() > epsilon {
            self.velocity.y -= self.velocity.y * damping;
        }
    }

    pub fn push(&mut self, delta: Vec2) {
        self.velocity += delta;
    }

    pub fn is_calm(&self) -> bool {
        self.velocity == Vec2::ZERO
    }
}
