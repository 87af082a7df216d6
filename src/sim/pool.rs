//! Scrolling and recycling engine
//!
//! Platforms live in a fixed-capacity slot pool in camera space. The camera
//! only follows the player upward: scrolling moves every active slot down the
//! screen, and a slot that falls past the bottom edge is reused one spacing
//! unit above the topmost live slot. Retired slots are parked off-screen and
//! are never scrolled, recycled, or used as the spacing reference.

use glam::Vec2;
use rand::Rng;

use crate::Rect;
use crate::tuning::JumperTuning;

/// Where retired slots are parked
pub const PARKED_Y: f32 = -1.0e6;

/// One fixed-index platform slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Top-left corner in camera space
    pub pos: Vec2,
    /// Live slot (retired slots stay parked for the rest of the session)
    pub active: bool,
    /// Points already awarded for landing here
    pub scored: bool,
}

impl Slot {
    const PARKED: Slot = Slot {
        pos: Vec2::new(0.0, PARKED_Y),
        active: false,
        scored: false,
    };
}

/// Fixed-capacity platform pool
#[derive(Debug, Clone)]
pub struct PlatformPool {
    slots: Vec<Slot>,
    size: Vec2,
    spacing: f32,
    x_max: f32,
    /// Slots below this y are off-screen
    bottom: f32,
}

impl PlatformPool {
    pub fn new(capacity: usize, size: Vec2, spacing: f32, x_max: f32, bottom: f32) -> Self {
        Self {
            slots: vec![Slot::PARKED; capacity],
            size,
            spacing,
            x_max,
            bottom,
        }
    }

    pub fn from_tuning(tuning: &JumperTuning) -> Self {
        Self::new(
            tuning.slot_count,
            tuning.platform_size,
            tuning.platform_spacing,
            tuning.platform_x_max(),
            tuning.viewport.y,
        )
    }

    /// Lay out a fresh ladder: slot `i` at `y = i * spacing` with a random x,
    /// every slot live and unscored. `start`, when given, replaces the last
    /// slot so the player has something to land on.
    pub fn reset<R: Rng>(&mut self, rng: &mut R, start: Option<Vec2>) {
        let spacing = self.spacing;
        let x_max = self.x_max;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = Slot {
                pos: Vec2::new(rng.random_range(0.0..=x_max), i as f32 * spacing),
                active: true,
                scored: false,
            };
        }
        if let (Some(pos), Some(last)) = (start, self.slots.last_mut()) {
            last.pos = pos;
        }
    }

    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn platform_size(&self) -> Vec2 {
        self.size
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    /// Indices of live slots, in slot order
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, _)| i)
    }

    pub fn bounds(&self, index: usize) -> Rect {
        Rect::new(self.slots[index].pos, self.size)
    }

    /// Flag a slot as scored; true only the first time
    pub fn mark_scored(&mut self, index: usize) -> bool {
        let slot = &mut self.slots[index];
        if slot.active && !slot.scored {
            slot.scored = true;
            true
        } else {
            false
        }
    }

    /// Smallest y among live slots other than `exclude`
    pub fn topmost_y(&self, exclude: Option<usize>) -> Option<f32> {
        self.slots
            .iter()
            .enumerate()
            .filter(|&(i, s)| s.active && Some(i) != exclude)
            .map(|(_, s)| s.pos.y)
            .reduce(f32::min)
    }

    /// Camera scroll: move every live slot down the screen by `dy`
    pub fn scroll(&mut self, dy: f32) {
        for slot in self.slots.iter_mut().filter(|s| s.active) {
            slot.pos.y += dy;
        }
    }

    /// Reuse every live slot that fell below the bottom edge. Each one is
    /// moved one spacing unit above the topmost other live slot, gets a new
    /// random x and loses its scored flag. Returns how many were recycled.
    pub fn recycle<R: Rng>(&mut self, rng: &mut R) -> usize {
        let mut recycled = 0;
        for i in 0..self.slots.len() {
            let slot = self.slots[i];
            if !slot.active || slot.pos.y <= self.bottom {
                continue;
            }
            let top = self.topmost_y(Some(i)).unwrap_or(0.0);
            let new_y = top - self.spacing;
            log::debug!("Recycling slot {} from y={:.1} to y={:.1}", i, slot.pos.y, new_y);
            self.slots[i] = Slot {
                pos: Vec2::new(rng.random_range(0.0..=self.x_max), new_y),
                active: true,
                scored: false,
            };
            recycled += 1;
        }
        recycled
    }

    /// Retire the highest-indexed live slots until at most `target` remain.
    /// Never re-enables a slot. Returns how many were retired.
    pub fn limit_active(&mut self, target: usize) -> usize {
        let mut excess = self.active_count().saturating_sub(target);
        let mut retired = 0;
        for slot in self.slots.iter_mut().rev() {
            if excess == 0 {
                break;
            }
            if slot.active {
                *slot = Slot::PARKED;
                excess -= 1;
                retired += 1;
            }
        }
        retired
    }
}
