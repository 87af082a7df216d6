//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies beyond the input snapshot and the
//!   high-score file touched on game over

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod difficulty;
pub mod dodge;
pub mod jumper;
pub mod pool;
pub mod scene;
pub mod session;

pub use autopilot::{Autopilot, attract_input};
pub use body::Body;
pub use collision::{bounce, hit_once, lands_on, overlaps};
pub use difficulty::{DodgeLevel, active_count, jumper_active_count};
pub use dodge::{DodgeState, Obstacle};
pub use jumper::JumperState;
pub use pool::{PlatformPool, Slot};
pub use scene::{Scene, SceneAction, SceneMachine, Transition, next_scene};
pub use session::{Game, Hud, Session, TickOutcome};
