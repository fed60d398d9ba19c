//! Session state and the play/game-over machine
//!
//! The session owns the ball collection, the bounds, and the seeded RNG.
//! It is pure with respect to the platform: drawing goes through the
//! `DrawSurface` boundary and the host drives `tick` from its frame
//! scheduler.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::{Ball, Bounds};
use super::spawn;
use crate::config::SimConfig;
use crate::render::DrawSurface;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Balls move and spawns are accepted
    Playing,
    /// Ball limit reached; motion frozen until restart
    Over,
}

/// Where a point-spawn came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSource {
    Click,
    Touch,
}

/// A normalized spawn trigger from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnRequest {
    /// Randomized on-surface placement
    Random,
    /// Placement at pointer coordinates, in logical surface units
    PointAt { x: f32, y: f32, source: SpawnSource },
}

/// One running animation session
#[derive(Debug)]
pub struct Session {
    config: SimConfig,
    rng: Pcg32,
    balls: Vec<Ball>,
    bounds: Bounds,
    phase: Phase,
}

impl Session {
    /// Create a session and seed the initial batch of balls.
    pub fn new(config: SimConfig, bounds: Bounds, seed: u64) -> Self {
        let mut session = Self {
            rng: Pcg32::seed_from_u64(seed),
            balls: Vec::new(),
            bounds,
            phase: Phase::Playing,
            config,
        };
        session.seed_balls();
        log::info!(
            "session started: seed {}, {} balls, limit {}",
            seed,
            session.balls.len(),
            session.config.ball_limit
        );
        session
    }

    fn seed_balls(&mut self) {
        for _ in 0..self.config.seed_count {
            let ball = spawn::spawn_random(&mut self.rng, &self.config, self.bounds);
            self.balls.push(ball);
        }
    }

    /// Handle a spawn trigger.
    ///
    /// Ignored once the session is Over. The spawn that brings the count up
    /// to the ball limit is the last one admitted; it also flips the phase
    /// to Over, so nothing past the limit ever enters the collection.
    pub fn spawn(&mut self, request: SpawnRequest) {
        if self.phase == Phase::Over {
            return;
        }

        let ball = match request {
            SpawnRequest::Random => spawn::spawn_random(&mut self.rng, &self.config, self.bounds),
            SpawnRequest::PointAt { x, y, source } => spawn::spawn_at(
                &mut self.rng,
                &self.config,
                self.bounds,
                Vec2::new(x, y),
                source == SpawnSource::Touch,
            ),
        };
        self.balls.push(ball);

        if self.balls.len() >= self.config.ball_limit {
            self.phase = Phase::Over;
            log::info!("ball limit {} reached, game over", self.config.ball_limit);
        }
    }

    /// Remove every ball. Ignored while Over (the control is disabled).
    pub fn clear_balls(&mut self) {
        if self.phase == Phase::Over {
            return;
        }
        self.balls.clear();
    }

    /// Over → Playing: drop everything and reseed the initial batch.
    /// Ignored unless the session is actually Over.
    pub fn restart(&mut self) {
        if self.phase != Phase::Over {
            return;
        }
        self.balls.clear();
        self.phase = Phase::Playing;
        self.seed_balls();
        log::info!("restarted with {} balls", self.balls.len());
    }

    /// Host notification that the surface was resized (already debounced).
    /// Every ball is clamped back inside the new bounds.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        for ball in &mut self.balls {
            ball.clamp_to_bounds(bounds);
        }
        log::debug!("bounds now {}x{}", bounds.width, bounds.height);
    }

    /// One frame: clear the surface, then update (unless frozen) and draw
    /// every ball in insertion order.
    pub fn tick(&mut self, surface: &mut impl DrawSurface) {
        surface.clear();
        let frozen = self.phase == Phase::Over;
        for ball in &mut self.balls {
            if !frozen {
                ball.update(self.bounds);
            }
            ball.draw(surface);
        }
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ball::Hsl;

    /// Test double for the drawing boundary: records every call.
    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        circles: Vec<(f32, f32, f32)>,
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
            self.circles.clear();
        }

        fn fill_circle(&mut self, x: f32, y: f32, radius: f32, _color: Hsl) {
            self.circles.push((x, y, radius));
        }
    }

    fn session() -> Session {
        Session::new(SimConfig::default(), Bounds::new(400.0, 300.0), 7)
    }

    #[test]
    fn test_start_seeds_initial_batch() {
        let s = session();
        assert_eq!(s.ball_count(), 20);
        assert_eq!(s.phase(), Phase::Playing);
    }

    #[test]
    fn test_spawn_adds_exactly_one() {
        let mut s = session();
        s.spawn(SpawnRequest::Random);
        assert_eq!(s.ball_count(), 21);
        s.spawn(SpawnRequest::PointAt {
            x: 50.0,
            y: 50.0,
            source: SpawnSource::Click,
        });
        assert_eq!(s.ball_count(), 22);
    }

    #[test]
    fn test_limit_freezes_session() {
        let mut s = session();
        // 20 seeded; spawn up to 99 total
        while s.ball_count() < 99 {
            s.spawn(SpawnRequest::Random);
        }
        assert_eq!(s.phase(), Phase::Playing);

        // the 100th spawn is admitted and trips the limit
        s.spawn(SpawnRequest::Random);
        assert_eq!(s.ball_count(), 100);
        assert_eq!(s.phase(), Phase::Over);

        // further spawns are silently ignored
        s.spawn(SpawnRequest::Random);
        s.spawn(SpawnRequest::PointAt {
            x: 10.0,
            y: 10.0,
            source: SpawnSource::Touch,
        });
        assert_eq!(s.ball_count(), 100);
    }

    #[test]
    fn test_restart_reseeds_and_resumes() {
        let mut s = session();
        while s.phase() == Phase::Playing {
            s.spawn(SpawnRequest::Random);
        }
        assert_eq!(s.ball_count(), 100);

        s.restart();
        assert_eq!(s.ball_count(), 20);
        assert_eq!(s.phase(), Phase::Playing);
    }

    #[test]
    fn test_restart_noop_while_playing() {
        let mut s = session();
        s.spawn(SpawnRequest::Random);
        s.restart();
        assert_eq!(s.ball_count(), 21);
        assert_eq!(s.phase(), Phase::Playing);
    }

    #[test]
    fn test_clear_empties_while_playing() {
        let mut s = session();
        s.clear_balls();
        assert_eq!(s.ball_count(), 0);
        assert_eq!(s.phase(), Phase::Playing);
    }

    #[test]
    fn test_clear_noop_while_over() {
        let mut s = session();
        while s.phase() == Phase::Playing {
            s.spawn(SpawnRequest::Random);
        }
        s.clear_balls();
        assert_eq!(s.ball_count(), 100);
    }

    #[test]
    fn test_tick_clears_then_draws_in_order() {
        let mut s = session();
        let mut surface = RecordingSurface::default();
        s.tick(&mut surface);
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles.len(), 20);
        let radii: Vec<f32> = surface.circles.iter().map(|c| c.2).collect();
        let expected: Vec<f32> = s.balls().iter().map(|b| b.radius).collect();
        assert_eq!(radii, expected);
    }

    #[test]
    fn test_over_freezes_motion_but_keeps_drawing() {
        let mut s = session();
        while s.phase() == Phase::Playing {
            s.spawn(SpawnRequest::Random);
        }
        let before: Vec<_> = s.balls().iter().map(|b| b.pos).collect();

        let mut surface = RecordingSurface::default();
        s.tick(&mut surface);

        let after: Vec<_> = s.balls().iter().map(|b| b.pos).collect();
        assert_eq!(before, after);
        assert_eq!(surface.circles.len(), 100);
    }

    #[test]
    fn test_playing_tick_moves_balls() {
        let mut s = session();
        let before: Vec<_> = s.balls().iter().map(|b| b.pos).collect();
        let mut surface = RecordingSurface::default();
        s.tick(&mut surface);
        let after: Vec<_> = s.balls().iter().map(|b| b.pos).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_resize_clamps_every_ball() {
        let mut s = session();
        let shrunk = Bounds::new(120.0, 90.0);
        s.set_bounds(shrunk);
        for ball in s.balls() {
            assert!(ball.pos.x >= ball.radius);
            assert!(ball.pos.x <= shrunk.width - ball.radius);
            assert!(ball.pos.y >= ball.radius);
            assert!(ball.pos.y <= shrunk.height - ball.radius);
        }
    }

    #[test]
    fn test_spawn_to_limit_from_empty() {
        let config = SimConfig {
            seed_count: 0,
            ..Default::default()
        };
        let mut s = Session::new(config, Bounds::new(400.0, 300.0), 7);
        for _ in 0..99 {
            s.spawn(SpawnRequest::Random);
        }
        assert_eq!(s.ball_count(), 99);
        assert_eq!(s.phase(), Phase::Playing);

        s.spawn(SpawnRequest::Random);
        assert_eq!(s.ball_count(), 100);
        assert_eq!(s.phase(), Phase::Over);

        s.spawn(SpawnRequest::Random);
        assert_eq!(s.ball_count(), 100);
    }

    #[test]
    fn test_limit_is_configurable() {
        let config = SimConfig {
            ball_limit: 25,
            ..Default::default()
        };
        let mut s = Session::new(config, Bounds::new(400.0, 300.0), 7);
        while s.phase() == Phase::Playing {
            s.spawn(SpawnRequest::Random);
        }
        assert_eq!(s.ball_count(), 25);
    }
}
