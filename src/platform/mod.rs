//! Platform abstraction layer
//!
//! The seams between the simulation and the outside world:
//! - Input: per-frame control snapshot
//! - Storage: small text files (high scores, settings)
//! - Time: fixed-timestep accumulator
//! - Assets: manifest verification at startup

pub mod assets;
pub mod input;
pub mod storage;
pub mod time;

pub use input::FrameInput;
pub use time::FixedStep;
