//! Vertical platform jumper
//!
//! Physics runs in per-frame units: one call to [`JumperState::step`] is one
//! frame at the target rate, whatever the wall-clock delta was.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::Body;
use super::collision::{bounce, lands_on};
use super::difficulty::jumper_active_count;
use super::pool::PlatformPool;
use super::session::{Game, Hud, TickOutcome};
use crate::consts::jumper::{PLAYER_START_OFFSET, START_PLATFORM_OFFSET};
use crate::platform::FrameInput;
use crate::tuning::JumperTuning;

#[derive(Debug, Clone)]
pub struct JumperState {
    pub tuning: JumperTuning,
    pub player: Body,
    pub pool: PlatformPool,
    pub score: u64,
    /// Frames simulated this session
    pub frame: u64,
    rng: Pcg32,
}

impl JumperState {
    pub fn new(seed: u64, tuning: JumperTuning) -> Self {
        let mut state = Self {
            player: Body::new(Vec2::ZERO, tuning.player_size),
            pool: PlatformPool::from_tuning(&tuning),
            score: 0,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };
        state.reset();
        state
    }

    /// Player spawn point: horizontally centred, above the start platform
    pub fn player_start(&self) -> Vec2 {
        let v = self.tuning.viewport;
        Vec2::new(v.x / 2.0, v.y - PLAYER_START_OFFSET)
    }

    /// Start platform, centred under the player spawn
    pub fn start_platform(&self) -> Vec2 {
        let v = self.tuning.viewport;
        Vec2::new(
            v.x / 2.0 - self.tuning.platform_size.x / 2.0,
            v.y - START_PLATFORM_OFFSET,
        )
    }

    /// Reinitialise the pool, player and score for a new session
    pub fn reset(&mut self) {
        let start = self.start_platform();
        self.pool.reset(&mut self.rng, Some(start));
        self.player = Body::new(self.player_start(), self.tuning.player_size);
        self.score = 0;
        self.frame = 0;
        self.apply_difficulty();
    }

    /// Advance one frame
    pub fn step(&mut self, input: &FrameInput) -> TickOutcome {
        self.frame += 1;
        let t = &self.tuning;

        // Horizontal input is a direct nudge, then clamp
        self.player.nudge(Vec2::new(input.axis().x, 0.0), t.move_speed);
        self.player.clamp_x(t.left_bound, t.right_bound);

        self.player.fall(t.gravity, 1.0);

        if self.land() {
            self.apply_difficulty();
        }

        if self.player.pos.y > self.tuning.viewport.y {
            log::info!("Fell off at frame {} with score {}", self.frame, self.score);
            return TickOutcome::Over;
        }

        self.follow_camera();
        self.pool.recycle(&mut self.rng);
        TickOutcome::Continue
    }

    /// Bounce off every qualifying platform. Returns true if points were
    /// awarded this frame.
    fn land(&mut self) -> bool {
        let mut scored = false;
        for i in 0..self.pool.capacity() {
            if !self.pool.slots()[i].active {
                continue;
            }
            if lands_on(&self.player, &self.pool.bounds(i)) {
                bounce(&mut self.player, self.tuning.jump_power);
                if self.pool.mark_scored(i) {
                    self.score += self.tuning.points_per_platform;
                    scored = true;
                }
            }
        }
        scored
    }

    /// Pin the player at the camera threshold and scroll the platforms by
    /// the player's upward speed instead
    fn follow_camera(&mut self) {
        if self.player.pos.y < self.tuning.camera_threshold {
            self.player.pos.y = self.tuning.camera_threshold;
            self.pool.scroll((-self.player.vel.y).max(0.0));
        }
    }

    fn apply_difficulty(&mut self) {
        let target = jumper_active_count(self.score, &self.tuning);
        let retired = self.pool.limit_active(target);
        if retired > 0 {
            log::debug!(
                "Score {}: retired {} platform(s), {} remain",
                self.score,
                retired,
                self.pool.active_count()
            );
        }
    }
}

impl Game for JumperState {
    fn title(&self) -> &'static str {
        "DOODLE JUMP"
    }

    fn viewport(&self) -> Vec2 {
        self.tuning.viewport
    }

    fn reset(&mut self) {
        JumperState::reset(self);
    }

    /// Fixed-step game: `dt` is ignored, every call is one frame
    fn update(&mut self, input: &FrameInput, _dt: f32) -> TickOutcome {
        self.step(input)
    }

    fn score(&self) -> u64 {
        self.score
    }

    fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            ..Default::default()
        }
    }
}
