//! Per-frame input snapshot
//!
//! The window layer translates key and pointer events into one of these per
//! frame. Held controls stay set while the key is down; edge controls are set
//! only on the frame the key or button went down.

use glam::Vec2;

use crate::Rect;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    // Held
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,

    // Edge-triggered
    /// Toggle pause (Space)
    pub pause: bool,
    /// Start / play again (Enter)
    pub confirm: bool,
    /// Back to menu, or quit from the menu (Escape)
    pub cancel: bool,

    /// Pointer position in viewport coordinates, if known
    pub pointer: Option<Vec2>,
    /// Primary pointer button went down this frame
    pub pointer_pressed: bool,
}

impl FrameInput {
    /// Movement direction from the held keys; opposing keys cancel out
    pub fn axis(&self) -> Vec2 {
        let x = self.right as i8 - self.left as i8;
        let y = self.down as i8 - self.up as i8;
        Vec2::new(x as f32, y as f32)
    }

    /// Pointer went down inside `rect` this frame
    pub fn pressed_in(&self, rect: &Rect) -> bool {
        self.pointer_pressed && self.hovering(rect)
    }

    pub fn hovering(&self, rect: &Rect) -> bool {
        self.pointer.is_some_and(|p| rect.contains(p))
    }

    /// Drop one-shot inputs once they have been consumed by a tick
    pub fn clear_edges(&mut self) {
        self.pause = false;
        self.confirm = false;
        self.cancel = false;
        self.pointer_pressed = false;
    }
}
