//! Frame builder: session state in, draw list out
//!
//! Entities are drawn only while `Playing`; `Paused` and `GameOver` show
//! static overlays on top of the HUD.

use glam::Vec2;

use super::draw_list::{DrawCmd, DrawList, Sprite, TextStyle};
use crate::Rect;
use crate::platform::FrameInput;
use crate::sim::{DodgeState, Game, Hud, JumperState, Scene, Session};

/// Per-game sprite drawing and menu copy
pub trait DrawEntities {
    fn draw_entities(&self, list: &mut DrawList);
    fn subtitle(&self) -> &'static str;
    fn controls(&self) -> &'static str;
}

impl DrawEntities for JumperState {
    fn draw_entities(&self, list: &mut DrawList) {
        for i in self.pool.active_indices() {
            list.sprite(Sprite::Platform, self.pool.bounds(i));
        }
        // Player on top of platforms
        list.sprite(Sprite::Player, self.player.bounds());
    }

    fn subtitle(&self) -> &'static str {
        "Jump to the top!"
    }

    fn controls(&self) -> &'static str {
        "Left/Right to move\nSPACE to pause"
    }
}

impl DrawEntities for DodgeState {
    fn draw_entities(&self, list: &mut DrawList) {
        list.sprite(Sprite::Player, self.player.bounds());
        for obstacle in self.active_obstacles() {
            list.sprite(Sprite::Obstacle, obstacle.body.bounds());
        }
    }

    fn subtitle(&self) -> &'static str {
        "Avoid incoming cars to survive!"
    }

    fn controls(&self) -> &'static str {
        "Arrows to move\nSPACE to pause"
    }
}

/// Build the draw list for the session's current scene
pub fn build_frame<G: Game + DrawEntities>(session: &Session<G>, input: &FrameInput) -> DrawList {
    let game = session.game();
    let viewport = game.viewport();
    let mid = viewport.x / 2.0;
    let hud = session.hud();
    let scene = session.scene();

    let mut list = DrawList::new();
    list.sprite(Sprite::Background, Rect::new(Vec2::ZERO, viewport));

    match scene {
        Scene::Menu => {
            list.centered_text(game.title(), mid, 40.0, 52, TextStyle::Title);
            list.centered_text(game.subtitle(), mid, 110.0, 16, TextStyle::Secondary);
            list.text("Controls:", Vec2::new(20.0, 280.0), 14, TextStyle::Title);
            list.text(game.controls(), Vec2::new(20.0, 310.0), 12, TextStyle::Secondary);
            list.text("Best Score", Vec2::new(20.0, viewport.y - 83.0), 14, TextStyle::Title);
            list.text(
                hud.high_score.to_string(),
                Vec2::new(20.0, viewport.y - 63.0),
                32,
                TextStyle::Highlight,
            );
        }
        Scene::Playing => {
            game.draw_entities(&mut list);
            draw_hud(&mut list, &hud, viewport);
        }
        Scene::Paused => {
            draw_hud(&mut list, &hud, viewport);
            list.overlay(180);
            list.centered_text("PAUSED", mid, 80.0, 50, TextStyle::Highlight);
            list.centered_text("Click to Resume", mid, 280.0, 12, TextStyle::Secondary);
        }
        Scene::GameOver => {
            list.overlay(200);
            list.centered_text("GAME OVER", mid, 50.0, 50, TextStyle::Danger);
            list.centered_text("Your Score", mid, 130.0, 16, TextStyle::Secondary);
            list.centered_text(hud.score.to_string(), mid, 160.0, 48, TextStyle::Highlight);
            list.centered_text("Best Score", mid, 250.0, 16, TextStyle::Secondary);
            list.centered_text(hud.high_score.to_string(), mid, 275.0, 36, TextStyle::Title);
            if hud.new_record {
                list.centered_text("NEW HIGH SCORE!", mid, 225.0, 18, TextStyle::Title);
            }
            if let Some(elapsed) = hud.elapsed {
                list.centered_text(
                    format!("Survived: {elapsed:.1} seconds"),
                    mid,
                    315.0,
                    16,
                    TextStyle::Secondary,
                );
            }
        }
    }

    for button in session.layout().buttons(scene) {
        list.cmds.push(DrawCmd::Button {
            label: button.label,
            rect: button.rect,
            hovered: input.hovering(&button.rect),
        });
    }

    list
}

fn draw_hud(list: &mut DrawList, hud: &Hud, viewport: Vec2) {
    list.text(hud.score.to_string(), Vec2::new(10.0, 10.0), 24, TextStyle::Title);
    list.text("SCORE", Vec2::new(10.0, 40.0), 12, TextStyle::Secondary);

    if let Some(health) = hud.health {
        let bar = "\u{2588}".repeat(health as usize);
        list.text(format!("Health: {bar}"), Vec2::new(10.0, 60.0), 20, TextStyle::Title);
    }
    if let Some(elapsed) = hud.elapsed {
        list.text(format!("Time: {elapsed:.1}s"), Vec2::new(10.0, 90.0), 20, TextStyle::Highlight);
    }
    if let Some(multiplier) = hud.multiplier {
        list.text(
            format!("Difficulty: {multiplier:.1}x"),
            Vec2::new(viewport.x - 220.0, 10.0),
            18,
            TextStyle::Danger,
        );
    }
}
