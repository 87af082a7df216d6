//! Button layout and pointer hit-testing
//!
//! Buttons are 120x50 and centred horizontally. Positions are the same for
//! both games; only the viewport width changes.

use glam::Vec2;

use crate::platform::FrameInput;
use crate::sim::Scene;
use crate::{Rect, centered_rect};

pub const BUTTON_WIDTH: f32 = 120.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

const PLAY_Y: f32 = 170.0;
const RESUME_Y: f32 = 200.0;
const PAUSE_EXIT_Y: f32 = 330.0;
const PLAY_AGAIN_Y: f32 = 350.0;
const GAME_OVER_EXIT_Y: f32 = 410.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Play,
    Resume,
    PlayAgain,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub action: ButtonAction,
}

impl Button {
    fn centered(viewport: Vec2, y: f32, label: &'static str, action: ButtonAction) -> Self {
        Self {
            label,
            rect: centered_rect(viewport.x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
            action,
        }
    }
}

/// Buttons for every scene
#[derive(Debug, Clone)]
pub struct Layout {
    menu: [Button; 1],
    paused: [Button; 2],
    game_over: [Button; 2],
}

impl Layout {
    pub fn for_viewport(viewport: Vec2) -> Self {
        use ButtonAction::*;
        Self {
            menu: [Button::centered(viewport, PLAY_Y, "PLAY", Play)],
            paused: [
                Button::centered(viewport, RESUME_Y, "RESUME", Resume),
                Button::centered(viewport, PAUSE_EXIT_Y, "EXIT", Exit),
            ],
            game_over: [
                Button::centered(viewport, PLAY_AGAIN_Y, "PLAY AGAIN", PlayAgain),
                Button::centered(viewport, GAME_OVER_EXIT_Y, "EXIT", Exit),
            ],
        }
    }

    pub fn buttons(&self, scene: Scene) -> &[Button] {
        match scene {
            Scene::Menu => &self.menu,
            Scene::Playing => &[],
            Scene::Paused => &self.paused,
            Scene::GameOver => &self.game_over,
        }
    }
}

/// Action of the button the pointer went down on this frame, if any
pub fn hit_test(buttons: &[Button], input: &FrameInput) -> Option<ButtonAction> {
    buttons
        .iter()
        .find(|b| input.pressed_in(&b.rect))
        .map(|b| b.action)
}
