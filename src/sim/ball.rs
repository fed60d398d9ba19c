//! Ball entity and kinematics
//!
//! Positions and sizes are in logical surface units. One `update` call is
//! one tick; velocities are per-tick, not per-second.

use glam::Vec2;

use crate::render::DrawSurface;

/// Logical drawing-surface size, supplied by the host and subject to change
/// between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// HSL color, fixed at ball creation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub hue: f32,
    /// Saturation percent
    pub saturation: f32,
    /// Lightness percent
    pub lightness: f32,
}

impl Hsl {
    /// CSS color string, e.g. `hsl(212, 100%, 50%)`
    pub fn to_css(&self) -> String {
        format!(
            "hsl({:.0}, {:.0}%, {:.0}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Kinematics variant. Accelerating balls add a constant per-tick velocity
/// delta before integrating; there is no speed cap, so they ramp up for as
/// long as they live.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallKind {
    Simple,
    Accelerating { accel: Vec2 },
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Hsl,
    pub kind: BallKind,
}

impl Ball {
    /// Advance one tick: integrate, then reflect off the walls.
    ///
    /// Per axis the far bound is checked first; at most one bounce per axis
    /// per tick. A bounce clamps the ball to the exact tangent point and
    /// flips that axis's velocity sign, leaving the magnitude untouched.
    pub fn update(&mut self, bounds: Bounds) {
        if let BallKind::Accelerating { accel } = self.kind {
            self.vel += accel;
        }
        self.pos += self.vel;

        if self.pos.x + self.radius > bounds.width {
            self.pos.x = bounds.width - self.radius;
            self.vel.x = -self.vel.x;
        } else if self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
            self.vel.x = -self.vel.x;
        }

        if self.pos.y + self.radius > bounds.height {
            self.pos.y = bounds.height - self.radius;
            self.vel.y = -self.vel.y;
        } else if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y;
        }
    }

    /// Force the ball fully inside `bounds` without touching velocity.
    ///
    /// Used after a resize and on spawn. A dimension smaller than the ball's
    /// diameter has no valid band, so the ball sits at that dimension's
    /// midpoint instead.
    pub fn clamp_to_bounds(&mut self, bounds: Bounds) {
        self.pos.x = clamp_axis(self.pos.x, self.radius, bounds.width);
        self.pos.y = clamp_axis(self.pos.y, self.radius, bounds.height);
    }

    /// Draw the ball as a filled circle. No state mutation.
    pub fn draw(&self, surface: &mut impl DrawSurface) {
        surface.fill_circle(self.pos.x, self.pos.y, self.radius, self.color);
    }
}

/// Clamp one coordinate into `[radius, dim - radius]`, falling back to the
/// midpoint when the band is inverted.
fn clamp_axis(v: f32, radius: f32, dim: f32) -> f32 {
    let (lo, hi) = (radius, dim - radius);
    if lo > hi { dim / 2.0 } else { v.clamp(lo, hi) }
}
