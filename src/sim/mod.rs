//! Deterministic simulation module
//!
//! All animation logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Stable iteration order (insertion order is draw order)
//! - No rendering or platform dependencies beyond the `DrawSurface` trait

pub mod ball;
pub mod spawn;
pub mod state;

pub use ball::{Ball, BallKind, Bounds, Hsl};
pub use spawn::{spawn_at, spawn_random};
pub use state::{Phase, Session, SpawnRequest, SpawnSource};
