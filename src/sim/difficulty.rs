//! Difficulty controller
//!
//! Pure functions of score (jumper) or survival time (dodge). Difficulty only
//! ever tightens: fewer platforms, faster obstacles, shorter spawn intervals.

use crate::tuning::{DodgeTuning, JumperTuning};

/// Number of platform slots allowed to be live at `score`:
/// `max(min, total - floor(score / threshold))`, never above `total`.
pub fn active_count(score: u64, total: usize, min: usize, threshold: u64) -> usize {
    let retired = if threshold == 0 {
        0
    } else {
        usize::try_from(score / threshold).unwrap_or(usize::MAX)
    };
    total.saturating_sub(retired).max(min.min(total))
}

/// [`active_count`] with the jumper's tuning
pub fn jumper_active_count(score: u64, tuning: &JumperTuning) -> usize {
    active_count(
        score,
        tuning.slot_count,
        tuning.min_platforms,
        tuning.difficulty_threshold,
    )
}

/// Dodge difficulty at a given survival time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DodgeLevel {
    /// `1 + k1 * t`, shown on the HUD
    pub multiplier: f32,
    /// Obstacle speed in px/s
    pub speed: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
}

impl DodgeLevel {
    pub fn at(elapsed: f32, tuning: &DodgeTuning) -> Self {
        let t = elapsed.max(0.0);
        let multiplier = 1.0 + tuning.speed_ramp * t;
        Self {
            multiplier,
            speed: tuning.base_speed * multiplier,
            spawn_interval: tuning.base_spawn_interval / (1.0 + tuning.spawn_ramp * t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_active_count_thresholds() {
        let t = JumperTuning::default();
        assert_eq!(jumper_active_count(0, &t), 10);
        assert_eq!(jumper_active_count(99, &t), 10);
        assert_eq!(jumper_active_count(100, &t), 9);
        assert_eq!(jumper_active_count(550, &t), 5);
        assert_eq!(jumper_active_count(600, &t), 4);
        assert_eq!(jumper_active_count(10_000, &t), 4);
        assert_eq!(jumper_active_count(u64::MAX, &t), 4);
    }

    #[test]
    fn test_active_count_degenerate_inputs() {
        assert_eq!(active_count(500, 10, 4, 0), 10);
        assert_eq!(active_count(500, 3, 4, 100), 3);
    }

    #[test]
    fn test_dodge_level_after_five_seconds() {
        let t = DodgeTuning::default();
        let level = DodgeLevel::at(5.0, &t);
        assert!((level.multiplier - 2.0).abs() < 1e-5);
        assert!((level.speed - 2.0 * t.base_speed).abs() < 1e-3);
        assert!((level.spawn_interval - t.base_spawn_interval / 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_dodge_level_at_start() {
        let t = DodgeTuning::default();
        let level = DodgeLevel::at(0.0, &t);
        assert_eq!(level.multiplier, 1.0);
        assert_eq!(level.speed, t.base_speed);
        assert_eq!(level.spawn_interval, t.base_spawn_interval);
    }

    proptest! {
        #[test]
        fn prop_active_count_monotone(s1 in 0u64..5_000, ds in 0u64..5_000) {
            let t = JumperTuning::default();
            let s2 = s1 + ds;
            prop_assert!(jumper_active_count(s1, &t) >= jumper_active_count(s2, &t));
            prop_assert!(jumper_active_count(s2, &t) >= t.min_platforms);
        }

        #[test]
        fn prop_dodge_ramp_monotone(t1 in 0.0f32..600.0, dt in 0.0f32..600.0) {
            let tuning = DodgeTuning::default();
            let a = DodgeLevel::at(t1, &tuning);
            let b = DodgeLevel::at(t1 + dt, &tuning);
            prop_assert!(a.speed <= b.speed);
            prop_assert!(a.spawn_interval >= b.spawn_interval);
        }
    }
}
