//! Ball Pit - a bouncing-ball animation toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, bouncing, session state)
//! - `render`: Drawing-surface boundary and the canvas 2D adapter
//! - `config`: Spawn and threshold tuning

pub mod config;
pub mod render;
pub mod sim;

pub use config::SimConfig;
pub use sim::{Ball, Bounds, Phase, Session, SpawnRequest, SpawnSource};

/// Default tuning constants
pub mod consts {
    /// Ball count at which the session freezes
    pub const BALL_LIMIT: usize = 100;
    /// Balls seeded on session start and on restart
    pub const SEED_COUNT: usize = 20;

    /// Ball radius range (logical units), half-open
    pub const RADIUS_MIN: f32 = 10.0;
    pub const RADIUS_MAX: f32 = 25.0;

    /// Velocity component magnitude range (units per tick), half-open
    pub const SPEED_MIN: f32 = 1.0;
    pub const SPEED_MAX: f32 = 3.0;

    /// Acceleration component magnitude range (units per tick²), half-open.
    /// Small relative to SPEED_* so accelerating balls ramp up gradually.
    pub const ACCEL_MIN: f32 = 0.02;
    pub const ACCEL_MAX: f32 = 0.10;

    /// Fixed saturation/lightness for ball colors (hue is randomized)
    pub const COLOR_SATURATION: f32 = 100.0;
    pub const COLOR_LIGHTNESS: f32 = 50.0;

    /// Resize debounce window in milliseconds (host-side)
    pub const RESIZE_DEBOUNCE_MS: i32 = 80;
}
