/*
 * Koch Winter - Module Definitions
 *
 * This file defines the module structure for the snowfall screensaver.
 * The simulation core (fractal, snowflake, wind, simulation) is free of any
 * window state; the nannou modules (app, input, renderer, viewport) wrap it.
 */

// Re-export key components for easier access
pub use app::Model;
pub use error::SnowfallError;
pub use params::SimulationParams;
pub use simulation::{Command, Simulation};
pub use snowflake::{Snowflake, SnowflakeSettings};
pub use wind::Wind;

// Define modules
pub mod app;
pub mod culling;
pub mod debug;
pub mod error;
pub mod fractal;
pub mod input;
pub mod params;
pub mod random_normal;
pub mod renderer;
pub mod simulation;
pub mod snowflake;
pub mod viewport;
pub mod wind;

// Constants
pub const MAX_DEPTH: u32 = 3;
