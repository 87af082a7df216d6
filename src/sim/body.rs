//! Entity kinematics
//!
//! Bodies carry a position, a velocity and a fixed box size. Integration is
//! plain explicit Euler; input movement is a direct positional nudge with no
//! acceleration or friction, and bounds are enforced by clamping.

use glam::Vec2;

use crate::Rect;

/// A moving axis-aligned body (top-left anchored, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Bottom edge y
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Apply constant downward acceleration, then move vertically
    pub fn fall(&mut self, gravity: f32, dt: f32) {
        self.vel.y += gravity * dt;
        self.pos.y += self.vel.y * dt;
    }

    /// Constant-velocity step
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Direct input movement along `dir` (components in -1..=1)
    pub fn nudge(&mut self, dir: Vec2, speed: f32) {
        self.pos += dir * speed;
    }

    /// Clamp the left edge into `[min, max]`
    pub fn clamp_x(&mut self, min: f32, max: f32) {
        self.pos.x = self.pos.x.clamp(min, max.max(min));
    }

    /// Keep the whole box inside `[0, area]` on both axes
    pub fn clamp_within(&mut self, area: Vec2) {
        let max = (area - self.size).max(Vec2::ZERO);
        self.pos = self.pos.clamp(Vec2::ZERO, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fall_integrates_velocity_first() {
        let mut body = Body::new(Vec2::new(0.0, 100.0), Vec2::new(10.0, 10.0));
        body.fall(0.2, 1.0);
        assert!((body.vel.y - 0.2).abs() < 1e-6);
        assert!((body.pos.y - 100.2).abs() < 1e-4);

        body.fall(0.2, 1.0);
        assert!((body.vel.y - 0.4).abs() < 1e-6);
        assert!((body.pos.y - 100.6).abs() < 1e-4);
    }

    #[test]
    fn test_clamp_is_not_a_bounce() {
        let mut body = Body::new(Vec2::new(348.0, 0.0), Vec2::new(50.0, 70.0));
        body.vel.x = 3.0;
        body.nudge(Vec2::X, 4.0);
        body.clamp_x(0.0, 350.0);
        assert_eq!(body.pos.x, 350.0);
        assert_eq!(body.vel.x, 3.0);

        body.nudge(Vec2::NEG_X, 400.0);
        body.clamp_x(0.0, 350.0);
        assert_eq!(body.pos.x, 0.0);
    }

    #[test]
    fn test_clamp_within_keeps_box_inside() {
        let mut body = Body::new(Vec2::new(790.0, -5.0), Vec2::new(50.0, 80.0));
        body.clamp_within(Vec2::new(800.0, 600.0));
        assert_eq!(body.pos, Vec2::new(750.0, 0.0));
    }

    #[test]
    fn test_advance_constant_velocity() {
        let mut body = Body::new(Vec2::ZERO, Vec2::ONE);
        body.vel = Vec2::new(0.0, 200.0);
        body.advance(0.5);
        assert_eq!(body.pos, Vec2::new(0.0, 100.0));
    }
}
