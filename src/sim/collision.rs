//! Collision detection and response for axis-aligned boxes
//!
//! Two modes sit on top of the same overlap test:
//! - one-way platform landing, gated on the body descending
//! - symmetric hits that fire once and then disarm the hazard

use super::body::Body;
use crate::Rect;

/// Strict AABB intersection: there must be no gap on either axis.
/// Boxes that only share an edge do not overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
}

/// One-way landing check.
///
/// Counts only while the body is descending, its bottom edge lies strictly
/// inside the platform's vertical span, and its horizontal centre lies
/// strictly inside the platform's horizontal span. Rising bodies pass
/// through from below.
pub fn lands_on(body: &Body, platform: &Rect) -> bool {
    if body.vel.y <= 0.0 {
        return false;
    }
    let center_x = body.center_x();
    let bottom = body.bottom();
    let (min, max) = (platform.min(), platform.max());
    center_x > min.x && center_x < max.x && bottom > min.y && bottom < max.y
}

/// Launch the body upward. Applied on every frame the landing condition
/// holds, not only on first contact.
#[inline]
pub fn bounce(body: &mut Body, jump_power: f32) {
    body.vel.y = -jump_power;
}

/// Symmetric hit. Returns true exactly once per armed hazard: on overlap the
/// hazard is disarmed so later frames cannot hit again.
pub fn hit_once(target: &Rect, hazard: &Rect, armed: &mut bool) -> bool {
    if *armed && overlaps(target, hazard) {
        *armed = false;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_requires_all_axes() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&a, &rect(5.0, 5.0, 10.0, 10.0)));
        // Gap on x only
        assert!(!overlaps(&a, &rect(11.0, 5.0, 10.0, 10.0)));
        // Gap on y only
        assert!(!overlaps(&a, &rect(5.0, 11.0, 10.0, 10.0)));
        // Shared edge
        assert!(!overlaps(&a, &rect(10.0, 0.0, 10.0, 10.0)));
        // Containment
        assert!(overlaps(&a, &rect(2.0, 2.0, 1.0, 1.0)));
    }

    #[test]
    fn test_landing_needs_descent() {
        let platform = rect(100.0, 453.0, 68.0, 14.0);
        let mut body = Body::new(Vec2::new(110.0, 388.0), Vec2::new(50.0, 70.0));

        body.vel.y = 1.0;
        assert!(lands_on(&body, &platform));

        body.vel.y = -5.0;
        assert!(!lands_on(&body, &platform), "rising bodies pass through");

        body.vel.y = 0.0;
        assert!(!lands_on(&body, &platform));
    }

    #[test]
    fn test_landing_uses_center_and_feet() {
        let platform = rect(100.0, 453.0, 68.0, 14.0);
        let mut body = Body::new(Vec2::new(110.0, 388.0), Vec2::new(50.0, 70.0));
        body.vel.y = 2.0;

        // Centre just past the right edge
        body.pos.x = 168.0 - 25.0;
        assert!(!lands_on(&body, &platform));

        // Feet above the platform top
        body.pos.x = 110.0;
        body.pos.y = 453.0 - 70.0;
        assert!(!lands_on(&body, &platform));

        // Feet below the platform bottom
        body.pos.y = 467.0 - 70.0 + 1.0;
        assert!(!lands_on(&body, &platform));
    }

    /// The bounce is deliberately re-entrant: it fires on every frame the
    /// descending body overlaps, not just the first.
    #[test]
    fn test_bounce_retriggers_every_qualifying_frame() {
        let platform = rect(100.0, 453.0, 68.0, 14.0);
        let mut body = Body::new(Vec2::new(110.0, 388.0), Vec2::new(50.0, 70.0));

        for _ in 0..3 {
            body.vel.y = 0.5;
            assert!(lands_on(&body, &platform));
            bounce(&mut body, 11.0);
            assert_eq!(body.vel.y, -11.0);
        }
    }

    #[test]
    fn test_hit_once_disarms() {
        let player = rect(0.0, 0.0, 50.0, 80.0);
        let hazard = rect(20.0, 40.0, 50.0, 80.0);
        let mut armed = true;

        assert!(hit_once(&player, &hazard, &mut armed));
        assert!(!armed);
        assert!(!hit_once(&player, &hazard, &mut armed));
    }
}
