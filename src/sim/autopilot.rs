//! Idle/demo mode - the computer plays
//!
//! Produces the input a player would for the current frame. Used by the
//! attract-mode runner; menus are dismissed and finished games restarted.

use glam::Vec2;

use super::dodge::DodgeState;
use super::jumper::JumperState;
use super::scene::Scene;
use super::session::{Game, Session};
use crate::platform::FrameInput;

/// Horizontal slack before the jumper bothers steering
const STEER_DEADZONE: f32 = 4.0;

/// Steering for a game in the `Playing` scene
pub trait Autopilot {
    fn steer(&self) -> FrameInput;
}

/// Input for the session's current scene
pub fn attract_input<G: Game + Autopilot>(session: &Session<G>) -> FrameInput {
    match session.scene() {
        Scene::Menu | Scene::GameOver => FrameInput {
            confirm: true,
            ..Default::default()
        },
        Scene::Paused => FrameInput {
            pause: true,
            ..Default::default()
        },
        Scene::Playing => session.game().steer(),
    }
}

fn toward(current: f32, target: f32, deadzone: f32) -> (bool, bool) {
    let delta = target - current;
    (delta < -deadzone, delta > deadzone)
}

impl Autopilot for JumperState {
    /// Head for the nearest live platform below the player's feet
    fn steer(&self) -> FrameInput {
        let feet = self.player.bottom();
        let target = self
            .pool
            .active_indices()
            .map(|i| self.pool.bounds(i))
            .filter(|r| r.pos.y >= feet)
            .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|r| r.center().x)
            .unwrap_or(self.tuning.viewport.x / 2.0);

        let (left, right) = toward(self.player.center_x(), target, STEER_DEADZONE);
        FrameInput {
            left,
            right,
            ..Default::default()
        }
    }
}

impl Autopilot for DodgeState {
    /// Move to the lane whose nearest incoming obstacle is furthest away,
    /// hugging the bottom of the screen
    fn steer(&self) -> FrameInput {
        let top = self.player.pos.y;
        let clearance = |lane: usize| {
            self.active_obstacles()
                .filter(|o| o.lane == lane && o.body.pos.y < top + self.player.size.y)
                .map(|o| top - o.body.bottom())
                .reduce(f32::min)
                .unwrap_or(f32::INFINITY)
        };

        let best_lane = (0..self.tuning.lane_count.max(1))
            .max_by(|&a, &b| clearance(a).total_cmp(&clearance(b)))
            .unwrap_or(0);

        let target = self.tuning.lane_center(best_lane);
        let deadzone = self.tuning.player_speed / 120.0;
        let (left, right) = toward(self.player.center_x(), target, deadzone);
        FrameInput {
            left,
            right,
            down: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScore;
    use crate::sim::dodge::Obstacle;
    use crate::sim::body::Body;
    use crate::tuning::{DodgeTuning, JumperTuning};

    #[test]
    fn test_menu_and_game_over_confirm() {
        let dir = tempfile::tempdir().unwrap();
        let game = JumperState::new(1, JumperTuning::default());
        let session = Session::new(game, HighScore::load(dir.path().join("hs.txt")));
        assert!(attract_input(&session).confirm);
    }

    #[test]
    fn test_jumper_steers_to_platform_below() {
        let s = JumperState::new(3, JumperTuning::default());
        // Feet start at 458: slot 8 (y=480) is the only platform below them
        let target = s.pool.bounds(8).center().x;
        let input = s.steer();
        assert_eq!(
            (input.left, input.right),
            toward(s.player.center_x(), target, STEER_DEADZONE)
        );
    }

    #[test]
    fn test_jumper_falls_back_to_screen_center() {
        let mut s = JumperState::new(3, JumperTuning::default());
        s.pool.scroll(-2000.0);
        s.player.pos.x = 300.0;
        assert!(s.steer().left);
        s.player.pos.x = 50.0;
        assert!(s.steer().right);
    }

    #[test]
    fn test_dodge_leaves_blocked_lane() {
        let mut s = DodgeState::new(5, DodgeTuning::default());
        // Obstacle bearing down on the middle lane, where the player starts
        s.obstacles[0] = Obstacle {
            body: Body::new(Vec2::new(375.0, 300.0), s.tuning.obstacle_size),
            lane: 1,
            active: true,
        };
        let input = s.steer();
        assert!(input.left || input.right);
        assert!(input.down);
    }

    #[test]
    fn test_attract_mode_plays_full_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let game = DodgeState::new(9, DodgeTuning::default());
        let mut session = Session::new(game, HighScore::load(dir.path().join("hs.txt")));
        let mut saw_playing = false;
        for _ in 0..60 * 60 {
            let input = attract_input(&session);
            session.tick(&input, crate::consts::FRAME_DT);
            saw_playing |= session.scene() == Scene::Playing;
        }
        assert!(saw_playing);
        assert!(!session.quit_requested());
    }
}
