//! Ball factory
//!
//! All randomness flows through the session's seeded RNG. Every ball is
//! clamped into bounds before it is handed back, so a spawn at a click near
//! the surface edge still starts fully on-surface.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::ball::{Ball, BallKind, Bounds, Hsl};
use crate::config::SimConfig;

/// Spawn a ball at a random on-surface position, 50/50 Simple vs
/// Accelerating.
pub fn spawn_random(rng: &mut Pcg32, config: &SimConfig, bounds: Bounds) -> Ball {
    let accelerating = rng.random_bool(0.5);
    make_ball(rng, config, bounds, None, accelerating)
}

/// Spawn a ball at the given position (e.g. from a pointer event).
///
/// Kind is 50/50 unless `force_accelerating` is set; touch-originated spawns
/// force the Accelerating kind.
pub fn spawn_at(
    rng: &mut Pcg32,
    config: &SimConfig,
    bounds: Bounds,
    pos: Vec2,
    force_accelerating: bool,
) -> Ball {
    let accelerating = force_accelerating || rng.random_bool(0.5);
    make_ball(rng, config, bounds, Some(pos), accelerating)
}

fn make_ball(
    rng: &mut Pcg32,
    config: &SimConfig,
    bounds: Bounds,
    pos: Option<Vec2>,
    accelerating: bool,
) -> Ball {
    let radius = rng.random_range(config.radius_range.0..config.radius_range.1);

    let pos = pos.unwrap_or_else(|| {
        Vec2::new(
            sample_coord(rng, radius, bounds.width),
            sample_coord(rng, radius, bounds.height),
        )
    });

    let vel = Vec2::new(
        sample_signed(rng, config.speed_range),
        sample_signed(rng, config.speed_range),
    );

    let kind = if accelerating {
        BallKind::Accelerating {
            accel: Vec2::new(
                sample_signed(rng, config.accel_range),
                sample_signed(rng, config.accel_range),
            ),
        }
    } else {
        BallKind::Simple
    };

    let color = Hsl {
        hue: rng.random_range(0.0..360.0),
        saturation: config.saturation,
        lightness: config.lightness,
    };

    let mut ball = Ball {
        pos,
        vel,
        radius,
        color,
        kind,
    };
    ball.clamp_to_bounds(bounds);
    ball
}

/// Uniform coordinate keeping the ball fully inside one dimension. Falls
/// back to the midpoint when the dimension cannot fit the ball.
fn sample_coord(rng: &mut Pcg32, radius: f32, dim: f32) -> f32 {
    let (lo, hi) = (radius, dim - radius);
    if lo < hi {
        rng.random_range(lo..hi)
    } else {
        dim / 2.0
    }
}

/// Magnitude uniform in `range` with an independent random sign.
fn sample_signed(rng: &mut Pcg32, range: (f32, f32)) -> f32 {
    let mag = rng.random_range(range.0..range.1);
    if rng.random_bool(0.5) { mag } else { -mag }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_random_spawn_is_on_surface() {
        let mut rng = rng();
        let config = SimConfig::default();
        let bounds = Bounds::new(400.0, 300.0);
        for _ in 0..100 {
            let ball = spawn_random(&mut rng, &config, bounds);
            assert!(ball.pos.x >= ball.radius && ball.pos.x <= bounds.width - ball.radius);
            assert!(ball.pos.y >= ball.radius && ball.pos.y <= bounds.height - ball.radius);
            assert!(ball.radius >= 10.0 && ball.radius < 25.0);
            assert!(ball.vel.x.abs() >= 1.0 && ball.vel.x.abs() < 3.0);
            assert!(ball.vel.y.abs() >= 1.0 && ball.vel.y.abs() < 3.0);
            assert!(ball.color.hue >= 0.0 && ball.color.hue < 360.0);
        }
    }

    #[test]
    fn test_both_kinds_appear() {
        let mut rng = rng();
        let config = SimConfig::default();
        let bounds = Bounds::new(400.0, 300.0);
        let balls: Vec<_> = (0..100)
            .map(|_| spawn_random(&mut rng, &config, bounds))
            .collect();
        assert!(balls.iter().any(|b| b.kind == BallKind::Simple));
        assert!(
            balls
                .iter()
                .any(|b| matches!(b.kind, BallKind::Accelerating { .. }))
        );
    }

    #[test]
    fn test_spawn_at_clamps_offscreen_click() {
        let mut rng = rng();
        let config = SimConfig::default();
        let bounds = Bounds::new(400.0, 300.0);
        let ball = spawn_at(&mut rng, &config, bounds, Vec2::new(399.0, -20.0), false);
        assert!(ball.pos.x <= bounds.width - ball.radius);
        assert_eq!(ball.pos.y, ball.radius);
    }

    #[test]
    fn test_touch_spawn_forces_accelerating() {
        let mut rng = rng();
        let config = SimConfig::default();
        let bounds = Bounds::new(400.0, 300.0);
        for _ in 0..20 {
            let ball = spawn_at(&mut rng, &config, bounds, Vec2::new(200.0, 150.0), true);
            assert!(matches!(ball.kind, BallKind::Accelerating { .. }));
        }
    }

    #[test]
    fn test_accelerating_accel_in_range() {
        let mut rng = rng();
        let config = SimConfig::default();
        let bounds = Bounds::new(400.0, 300.0);
        for _ in 0..50 {
            let ball = spawn_at(&mut rng, &config, bounds, Vec2::new(200.0, 150.0), true);
            if let BallKind::Accelerating { accel } = ball.kind {
                assert!(accel.x.abs() >= 0.02 && accel.x.abs() < 0.10);
                assert!(accel.y.abs() >= 0.02 && accel.y.abs() < 0.10);
            }
        }
    }
}
