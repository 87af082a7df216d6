//! Frame-loop wiring shared by both games
//!
//! Each tick: translate input into scene requests, commit the pending
//! transition (the only place the scene changes), then run the game update
//! if and only if the scene is `Playing`. A game that ends requests the
//! game-over transition, which is committed at the next tick's commit point.

use glam::Vec2;

use super::scene::{Scene, SceneAction, SceneMachine, Transition};
use crate::highscores::HighScore;
use crate::platform::FrameInput;
use crate::ui::{ButtonAction, Layout, hit_test};

/// Result of one game update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The player died or fell off the screen
    Over,
}

/// Scalar values for the HUD and overlays
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hud {
    pub score: u64,
    pub high_score: u64,
    pub health: Option<u8>,
    /// Seconds survived
    pub elapsed: Option<f32>,
    /// Difficulty multiplier
    pub multiplier: Option<f32>,
    /// The last finished session set a new best
    pub new_record: bool,
}

/// A game the session can drive
pub trait Game {
    fn title(&self) -> &'static str;
    fn viewport(&self) -> Vec2;
    /// Fresh player, obstacles and score
    fn reset(&mut self);
    fn update(&mut self, input: &FrameInput, dt: f32) -> TickOutcome;
    fn score(&self) -> u64;
    /// Game-specific HUD values; high score fields are filled by the session
    fn hud(&self) -> Hud;
}

pub struct Session<G: Game> {
    game: G,
    scene: SceneMachine,
    high_score: HighScore,
    layout: Layout,
    new_record: bool,
    quit: bool,
}

impl<G: Game> Session<G> {
    pub fn new(game: G, high_score: HighScore) -> Self {
        let layout = Layout::for_viewport(game.viewport());
        log::info!("{} ready, high score {}", game.title(), high_score.best());
        Self {
            game,
            scene: SceneMachine::new(),
            high_score,
            layout,
            new_record: false,
            quit: false,
        }
    }

    #[inline]
    pub fn game(&self) -> &G {
        &self.game
    }

    #[inline]
    pub fn scene(&self) -> Scene {
        self.scene.current()
    }

    #[inline]
    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// An EXIT button or cancel-from-menu was used
    #[inline]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn hud(&self) -> Hud {
        Hud {
            high_score: self.high_score.best(),
            new_record: self.new_record,
            ..self.game.hud()
        }
    }

    /// Latch a scene change; see [`SceneMachine::request`]
    pub fn request(&mut self, action: SceneAction) -> bool {
        self.scene.request(action)
    }

    /// The commit point. Applies the pending transition and its side effects:
    /// starting a game resets it, ending one records the high score.
    pub fn commit(&mut self) -> Option<Transition> {
        let transition = self.scene.commit()?;
        if transition.action.resets_session() {
            self.game.reset();
            self.new_record = false;
        }
        if transition.action == SceneAction::End {
            self.new_record = self.high_score.submit(self.game.score());
        }
        Some(transition)
    }

    /// Map this frame's controls to scene requests
    pub fn handle_input(&mut self, input: &FrameInput) {
        let scene = self.scene();
        let button = hit_test(self.layout.buttons(scene), input);
        if button == Some(ButtonAction::Exit) {
            self.quit = true;
            return;
        }

        match scene {
            Scene::Menu => {
                if input.confirm || button == Some(ButtonAction::Play) {
                    self.request(SceneAction::Start);
                } else if input.cancel {
                    self.quit = true;
                }
            }
            Scene::Playing => {
                if input.pause {
                    self.request(SceneAction::Pause);
                }
            }
            Scene::Paused => {
                if input.pause || button == Some(ButtonAction::Resume) {
                    self.request(SceneAction::Resume);
                } else if input.cancel {
                    self.request(SceneAction::Cancel);
                }
            }
            Scene::GameOver => {
                if input.confirm || button == Some(ButtonAction::PlayAgain) {
                    self.request(SceneAction::Restart);
                } else if input.cancel {
                    self.request(SceneAction::Cancel);
                }
            }
        }
    }

    /// One fixed step of the frame loop
    pub fn tick(&mut self, input: &FrameInput, dt: f32) {
        self.handle_input(input);
        self.commit();

        if self.scene.is_playing() && self.game.update(input, dt) == TickOutcome::Over {
            self.request(SceneAction::End);
        }
    }
}
