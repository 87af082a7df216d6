//! Sky Dodge - two single-screen arcade games
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, scrolling, scenes)
//! - `renderer`: Backend-agnostic draw list built from the session each frame
//! - `platform`: Input, storage, timing and asset seams
//! - `highscores`: Single-scalar high score persistence
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use highscores::HighScore;
pub use settings::{GameKind, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the frame loop
    pub const FRAME_RATE: f32 = 60.0;
    /// One frame at the target rate
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Platform jumper. Physics runs in per-frame units.
    pub mod jumper {
        pub const VIEWPORT_WIDTH: f32 = 400.0;
        pub const VIEWPORT_HEIGHT: f32 = 533.0;

        /// Slots in the platform pool
        pub const SLOT_COUNT: usize = 10;
        /// Vertical spacing between consecutive slots
        pub const PLATFORM_SPACING: f32 = 60.0;
        pub const PLATFORM_WIDTH: f32 = 68.0;
        pub const PLATFORM_HEIGHT: f32 = 14.0;

        pub const PLAYER_WIDTH: f32 = 50.0;
        pub const PLAYER_HEIGHT: f32 = 70.0;
        /// Player start height above the viewport bottom
        pub const PLAYER_START_OFFSET: f32 = 145.0;
        /// Start platform height above the viewport bottom
        pub const START_PLATFORM_OFFSET: f32 = 80.0;

        pub const GRAVITY: f32 = 0.2;
        pub const JUMP_POWER: f32 = 11.0;
        pub const MOVE_SPEED: f32 = 4.0;
        pub const LEFT_BOUND: f32 = 0.0;
        pub const RIGHT_BOUND: f32 = 350.0;
        /// Camera scrolls once the player rises above this y
        pub const CAMERA_THRESHOLD: f32 = 200.0;

        pub const POINTS_PER_PLATFORM: u64 = 10;
        /// Points needed to retire one more platform slot
        pub const DIFFICULTY_THRESHOLD: u64 = 100;
        pub const MIN_PLATFORMS: usize = 4;
    }

    /// Lane dodger. Physics runs in seconds.
    pub mod dodge {
        pub const VIEWPORT_WIDTH: f32 = 800.0;
        pub const VIEWPORT_HEIGHT: f32 = 600.0;

        pub const PLAYER_WIDTH: f32 = 50.0;
        pub const PLAYER_HEIGHT: f32 = 80.0;
        /// Pixels per second
        pub const PLAYER_SPEED: f32 = 400.0;
        /// Vertical movement runs at this fraction of the horizontal speed
        pub const VERTICAL_FACTOR: f32 = 0.5;
        pub const INITIAL_HEALTH: u8 = 3;

        pub const OBSTACLE_WIDTH: f32 = 50.0;
        pub const OBSTACLE_HEIGHT: f32 = 80.0;
        pub const OBSTACLE_CAPACITY: usize = 16;
        /// Obstacles despawn this far below the viewport
        pub const DESPAWN_MARGIN: f32 = 100.0;
        pub const LANE_COUNT: usize = 3;

        pub const BASE_SPEED: f32 = 200.0;
        pub const BASE_SPAWN_INTERVAL: f32 = 1.5;
        /// Speed ramp per second survived
        pub const SPEED_RAMP: f32 = 0.2;
        /// Spawn-rate ramp per second survived
        pub const SPAWN_RAMP: f32 = 0.1;
        /// Points per second at multiplier 1.0
        pub const SCORE_RATE: f32 = 10.0;
    }
}

/// Axis-aligned rectangle given by its top-left corner and size (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Point containment, inclusive of the top-left edge and exclusive of the bottom-right
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.pos.x && point.x < max.x && point.y >= self.pos.y && point.y < max.y
    }
}

/// Rect of width `width` centred horizontally in a viewport of `viewport_width`
#[inline]
pub fn centered_rect(viewport_width: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(
        Vec2::new((viewport_width - width) / 2.0, y),
        Vec2::new(width, height),
    )
}
