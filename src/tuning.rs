//! Data-driven game balance
//!
//! Every knob defaults to the matching constant in [`crate::consts`] and can be
//! overridden from the settings file.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{dodge, jumper};

/// Platform jumper balance (per-frame units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumperTuning {
    pub viewport: Vec2,
    pub slot_count: usize,
    pub platform_spacing: f32,
    pub platform_size: Vec2,
    pub player_size: Vec2,
    pub gravity: f32,
    pub jump_power: f32,
    pub move_speed: f32,
    pub left_bound: f32,
    pub right_bound: f32,
    pub camera_threshold: f32,
    pub points_per_platform: u64,
    pub difficulty_threshold: u64,
    pub min_platforms: usize,
}

impl Default for JumperTuning {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(jumper::VIEWPORT_WIDTH, jumper::VIEWPORT_HEIGHT),
            slot_count: jumper::SLOT_COUNT,
            platform_spacing: jumper::PLATFORM_SPACING,
            platform_size: Vec2::new(jumper::PLATFORM_WIDTH, jumper::PLATFORM_HEIGHT),
            player_size: Vec2::new(jumper::PLAYER_WIDTH, jumper::PLAYER_HEIGHT),
            gravity: jumper::GRAVITY,
            jump_power: jumper::JUMP_POWER,
            move_speed: jumper::MOVE_SPEED,
            left_bound: jumper::LEFT_BOUND,
            right_bound: jumper::RIGHT_BOUND,
            camera_threshold: jumper::CAMERA_THRESHOLD,
            points_per_platform: jumper::POINTS_PER_PLATFORM,
            difficulty_threshold: jumper::DIFFICULTY_THRESHOLD,
            min_platforms: jumper::MIN_PLATFORMS,
        }
    }
}

impl JumperTuning {
    /// Rightmost x a freshly placed platform may take
    pub fn platform_x_max(&self) -> f32 {
        (self.right_bound - self.platform_size.x).max(0.0)
    }
}

/// Lane dodger balance (seconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DodgeTuning {
    pub viewport: Vec2,
    pub player_size: Vec2,
    pub player_speed: f32,
    pub vertical_factor: f32,
    pub initial_health: u8,
    pub obstacle_size: Vec2,
    pub obstacle_capacity: usize,
    pub despawn_margin: f32,
    pub lane_count: usize,
    pub base_speed: f32,
    pub base_spawn_interval: f32,
    pub speed_ramp: f32,
    pub spawn_ramp: f32,
    pub score_rate: f32,
}

impl Default for DodgeTuning {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(dodge::VIEWPORT_WIDTH, dodge::VIEWPORT_HEIGHT),
            player_size: Vec2::new(dodge::PLAYER_WIDTH, dodge::PLAYER_HEIGHT),
            player_speed: dodge::PLAYER_SPEED,
            vertical_factor: dodge::VERTICAL_FACTOR,
            initial_health: dodge::INITIAL_HEALTH,
            obstacle_size: Vec2::new(dodge::OBSTACLE_WIDTH, dodge::OBSTACLE_HEIGHT),
            obstacle_capacity: dodge::OBSTACLE_CAPACITY,
            despawn_margin: dodge::DESPAWN_MARGIN,
            lane_count: dodge::LANE_COUNT,
            base_speed: dodge::BASE_SPEED,
            base_spawn_interval: dodge::BASE_SPAWN_INTERVAL,
            speed_ramp: dodge::SPEED_RAMP,
            spawn_ramp: dodge::SPAWN_RAMP,
            score_rate: dodge::SCORE_RATE,
        }
    }
}

impl DodgeTuning {
    /// Horizontal centre of `lane`, lanes evenly dividing the viewport
    pub fn lane_center(&self, lane: usize) -> f32 {
        let lanes = self.lane_count.max(1) as f32;
        self.viewport.x * (2 * lane + 1) as f32 / (2.0 * lanes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_centers_match_classic_layout() {
        let t = DodgeTuning::default();
        assert!((t.lane_center(0) - 800.0 / 6.0).abs() < 1e-3);
        assert!((t.lane_center(1) - 400.0).abs() < 1e-3);
        assert!((t.lane_center(2) - 800.0 * 5.0 / 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t: JumperTuning = serde_json::from_str(r#"{ "min_platforms": 2 }"#).unwrap();
        assert_eq!(t.min_platforms, 2);
        assert_eq!(t.slot_count, jumper::SLOT_COUNT);
        assert_eq!(t.platform_x_max(), 350.0 - 68.0);
    }
}
