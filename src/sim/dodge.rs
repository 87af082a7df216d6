//! Lane-dodging driving game
//!
//! Obstacles drop down one of a few lanes at a speed that ramps with survival
//! time, while the spawn interval shrinks. Physics runs in seconds.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::Body;
use super::collision::hit_once;
use super::difficulty::DodgeLevel;
use super::session::{Game, Hud, TickOutcome};
use crate::platform::FrameInput;
use crate::tuning::DodgeTuning;

/// Distance of the player spawn above the viewport bottom
const PLAYER_START_OFFSET: f32 = 100.0;

/// One obstacle slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub body: Body,
    pub lane: usize,
    /// Moving and able to hit. Cleared on despawn and after a hit.
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct DodgeState {
    pub tuning: DodgeTuning,
    pub player: Body,
    pub health: u8,
    /// Fixed-capacity obstacle slots
    pub obstacles: Vec<Obstacle>,
    /// Seconds until the next spawn
    pub spawn_timer: f32,
    /// Seconds survived this session
    pub elapsed: f32,
    pub level: DodgeLevel,
    pub score: u64,
    /// Fractional points not yet added to `score`
    score_carry: f32,
    rng: Pcg32,
}

impl DodgeState {
    pub fn new(seed: u64, tuning: DodgeTuning) -> Self {
        let empty = Obstacle {
            body: Body::new(Vec2::ZERO, tuning.obstacle_size),
            lane: 0,
            active: false,
        };
        let mut state = Self {
            player: Body::new(Vec2::ZERO, tuning.player_size),
            health: tuning.initial_health,
            obstacles: vec![empty; tuning.obstacle_capacity],
            spawn_timer: 0.0,
            elapsed: 0.0,
            level: DodgeLevel::at(0.0, &tuning),
            score: 0,
            score_carry: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };
        state.reset();
        state
    }

    pub fn reset(&mut self) {
        let v = self.tuning.viewport;
        let start = Vec2::new(
            v.x / 2.0 - self.tuning.player_size.x / 2.0,
            v.y - PLAYER_START_OFFSET,
        );
        self.player = Body::new(start, self.tuning.player_size);
        self.player.clamp_within(v);
        self.health = self.tuning.initial_health;
        for obstacle in &mut self.obstacles {
            obstacle.active = false;
        }
        // First obstacle arrives on the first tick
        self.spawn_timer = 0.0;
        self.elapsed = 0.0;
        self.level = DodgeLevel::at(0.0, &self.tuning);
        self.score = 0;
        self.score_carry = 0.0;
    }

    pub fn active_obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter().filter(|o| o.active)
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, input: &FrameInput, dt: f32) -> TickOutcome {
        self.level = DodgeLevel::at(self.elapsed, &self.tuning);

        let axis = input.axis();
        let dir = Vec2::new(axis.x, axis.y * self.tuning.vertical_factor);
        self.player.nudge(dir, self.tuning.player_speed * dt);
        self.player.clamp_within(self.tuning.viewport);

        self.spawn_timer -= dt;
        if self.spawn_timer <= 0.0 {
            self.spawn();
            self.spawn_timer = self.level.spawn_interval;
        }

        let despawn_y = self.tuning.viewport.y + self.tuning.despawn_margin;
        for obstacle in self.obstacles.iter_mut().filter(|o| o.active) {
            obstacle.body.vel.y = self.level.speed;
            obstacle.body.advance(dt);
            if obstacle.body.pos.y > despawn_y {
                obstacle.active = false;
            }
        }

        let player = self.player.bounds();
        for obstacle in &mut self.obstacles {
            let bounds = obstacle.body.bounds();
            if hit_once(&player, &bounds, &mut obstacle.active) {
                self.health = self.health.saturating_sub(1);
                log::debug!("Hit in lane {}, health {}", obstacle.lane, self.health);
            }
        }

        self.elapsed += dt;
        self.score_carry += self.tuning.score_rate * self.level.multiplier * dt;
        let whole = self.score_carry.floor();
        self.score += whole as u64;
        self.score_carry -= whole;

        if self.health == 0 {
            log::info!("Wrecked after {:.1}s with score {}", self.elapsed, self.score);
            TickOutcome::Over
        } else {
            TickOutcome::Continue
        }
    }

    /// Drop a new obstacle into a random lane, just above the top edge
    fn spawn(&mut self) {
        let Some(index) = self.obstacles.iter().position(|o| !o.active) else {
            log::debug!("Obstacle pool full, skipping spawn");
            return;
        };
        let lane = self.rng.random_range(0..self.tuning.lane_count.max(1));
        let size = self.tuning.obstacle_size;
        let mut body = Body::new(
            Vec2::new(self.tuning.lane_center(lane) - size.x / 2.0, -size.y),
            size,
        );
        body.vel.y = self.level.speed;
        self.obstacles[index] = Obstacle {
            body,
            lane,
            active: true,
        };
    }
}

impl Game for DodgeState {
    fn title(&self) -> &'static str {
        "CAR DODGE"
    }

    fn viewport(&self) -> Vec2 {
        self.tuning.viewport
    }

    fn reset(&mut self) {
        DodgeState::reset(self);
    }

    fn update(&mut self, input: &FrameInput, dt: f32) -> TickOutcome {
        self.step(input, dt)
    }

    fn score(&self) -> u64 {
        self.score
    }

    fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            health: Some(self.health),
            elapsed: Some(self.elapsed),
            multiplier: Some(self.level.multiplier),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;

    fn state() -> DodgeState {
        DodgeState::new(4242, DodgeTuning::default())
    }

    #[test]
    fn test_first_tick_spawns_in_a_lane() {
        let mut s = state();
        s.step(&FrameInput::default(), FRAME_DT);
        let spawned: Vec<&Obstacle> = s.active_obstacles().collect();
        assert_eq!(spawned.len(), 1);

        let o = spawned[0];
        assert!(o.lane < 3);
        let center = o.body.pos.x + o.body.size.x / 2.0;
        assert!((center - s.tuning.lane_center(o.lane)).abs() < 1e-3);
        assert!((s.spawn_timer - s.tuning.base_spawn_interval).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_countdown() {
        let mut s = state();
        let input = FrameInput::default();
        s.step(&input, 0.1);
        assert_eq!(s.active_obstacles().count(), 1);
        // Not due yet
        s.step(&input, 0.5);
        assert_eq!(s.active_obstacles().count(), 1);
        // 1.5s interval elapses
        s.step(&input, 1.0);
        assert_eq!(s.active_obstacles().count(), 2);
    }

    #[test]
    fn test_speed_ramps_with_time() {
        let mut s = state();
        s.elapsed = 5.0;
        s.step(&FrameInput::default(), FRAME_DT);
        assert!((s.level.multiplier - 2.0).abs() < 1e-5);
        assert!((s.level.speed - 400.0).abs() < 1e-3);
        let o = s.active_obstacles().next().unwrap();
        assert!((o.body.vel.y - 400.0).abs() < 1e-3);
        assert!((s.spawn_timer - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_hit_damages_once_and_neutralizes() {
        let mut s = state();
        let input = FrameInput::default();
        s.spawn_timer = 100.0;
        s.obstacles[0] = Obstacle {
            body: Body::new(s.player.pos, s.tuning.obstacle_size),
            lane: 1,
            active: true,
        };

        s.step(&input, FRAME_DT);
        assert_eq!(s.health, 2);
        assert!(!s.obstacles[0].active);

        let parked = s.obstacles[0].body.pos;
        s.step(&input, FRAME_DT);
        assert_eq!(s.health, 2);
        assert_eq!(s.obstacles[0].body.pos, parked, "neutralized obstacles stop moving");
    }

    #[test]
    fn test_zero_health_ends_game() {
        let mut s = state();
        s.spawn_timer = 100.0;
        s.health = 1;
        s.obstacles[0] = Obstacle {
            body: Body::new(s.player.pos, s.tuning.obstacle_size),
            lane: 1,
            active: true,
        };
        assert_eq!(s.step(&FrameInput::default(), FRAME_DT), TickOutcome::Over);
        assert_eq!(s.health, 0);
    }

    #[test]
    fn test_offscreen_obstacles_despawn() {
        let mut s = state();
        s.spawn_timer = 100.0;
        s.obstacles[3] = Obstacle {
            body: Body::new(Vec2::new(0.0, 699.0), s.tuning.obstacle_size),
            lane: 0,
            active: true,
        };
        s.step(&FrameInput::default(), 0.1);
        assert!(!s.obstacles[3].active);
    }

    #[test]
    fn test_full_pool_skips_spawn() {
        let mut s = state();
        for (i, o) in s.obstacles.iter_mut().enumerate() {
            o.active = true;
            o.body.pos = Vec2::new(0.0, -1000.0 - i as f32);
        }
        s.step(&FrameInput::default(), FRAME_DT);
        assert_eq!(s.active_obstacles().count(), s.tuning.obstacle_capacity);
    }

    #[test]
    fn test_score_accrues_fractionally() {
        let mut s = state();
        s.spawn_timer = 1000.0;
        for _ in 0..60 {
            s.step(&FrameInput::default(), FRAME_DT);
        }
        // Roughly 10 points/s at a multiplier that has crept just above 1
        assert!((10..=11).contains(&s.score), "score {}", s.score);
    }

    #[test]
    fn test_player_clamped_inside_viewport() {
        let mut s = state();
        s.spawn_timer = 1000.0;
        let input = FrameInput {
            right: true,
            down: true,
            ..Default::default()
        };
        for _ in 0..200 {
            s.step(&input, FRAME_DT);
        }
        assert_eq!(s.player.pos, Vec2::new(750.0, 520.0));
    }
}
