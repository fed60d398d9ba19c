//! Spawn and threshold tuning
//!
//! Everything the session samples or checks against lives here so the
//! thresholds are configuration rather than scattered magic numbers.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning knobs for a session. All ranges are half-open `[min, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Ball count at which the session transitions to `Phase::Over`
    pub ball_limit: usize,
    /// Balls spawned on session start and on restart
    pub seed_count: usize,
    /// Ball radius range in logical units
    pub radius_range: (f32, f32),
    /// Velocity component magnitude range, units per tick
    pub speed_range: (f32, f32),
    /// Acceleration component magnitude range, units per tick²
    pub accel_range: (f32, f32),
    /// Fixed saturation for ball colors (percent)
    pub saturation: f32,
    /// Fixed lightness for ball colors (percent)
    pub lightness: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ball_limit: BALL_LIMIT,
            seed_count: SEED_COUNT,
            radius_range: (RADIUS_MIN, RADIUS_MAX),
            speed_range: (SPEED_MIN, SPEED_MAX),
            accel_range: (ACCEL_MIN, ACCEL_MAX),
            saturation: COLOR_SATURATION,
            lightness: COLOR_LIGHTNESS,
        }
    }
}
