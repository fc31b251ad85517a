/*
 * Error Module
 *
 * Construction-time validation errors. Nothing in the per-frame path fails:
 * degenerate geometry and sampling fallbacks are handled where they occur.
 */

use thiserror::Error;

/// Errors raised when building snowflakes or the simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnowfallError {
    /// Snowflake size is not a positive finite number
    #[error("invalid snowflake size: {0}")]
    InvalidSize(f32),

    /// Fractal depth exceeds the supported maximum
    #[error("fractal depth {depth} out of range (max {max})")]
    DepthOutOfRange { depth: u32, max: u32 },

    /// Screen dimensions must both be positive
    #[error("invalid screen size: {width}x{height}")]
    InvalidScreenSize { width: f32, height: f32 },

    /// A simulation parameter is outside its allowed range
    #[error("invalid simulation parameter: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, SnowfallError>;
