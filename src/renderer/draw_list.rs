//! Draw commands

use glam::Vec2;

use crate::Rect;

/// Textured sprites the backend knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Platform,
    Player,
    Obstacle,
}

/// Text colour roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Body,
    Secondary,
    Highlight,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    /// `pos.x` is the horizontal centre
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Sprite {
        sprite: Sprite,
        rect: Rect,
    },
    Text {
        text: String,
        pos: Vec2,
        size: u32,
        style: TextStyle,
        align: Align,
    },
    Button {
        label: &'static str,
        rect: Rect,
        hovered: bool,
    },
    /// Full-screen dimming layer
    Overlay {
        alpha: u8,
    },
}

/// One frame's worth of draw commands, in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprite(&mut self, sprite: Sprite, rect: Rect) {
        self.cmds.push(DrawCmd::Sprite { sprite, rect });
    }

    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, size: u32, style: TextStyle) {
        self.cmds.push(DrawCmd::Text {
            text: text.into(),
            pos,
            size,
            style,
            align: Align::Left,
        });
    }

    /// Text centred on `x`
    pub fn centered_text(&mut self, text: impl Into<String>, x: f32, y: f32, size: u32, style: TextStyle) {
        self.cmds.push(DrawCmd::Text {
            text: text.into(),
            pos: Vec2::new(x, y),
            size,
            style,
            align: Align::Center,
        });
    }

    pub fn overlay(&mut self, alpha: u8) {
        self.cmds.push(DrawCmd::Overlay { alpha });
    }
}
