//! Backend-agnostic rendering
//!
//! The simulation never draws. Each frame the session is turned into a
//! [`DrawList`] of sprites, text and buttons in viewport coordinates, and a
//! [`RenderSurface`] (window backend, or the headless logger) consumes it.

pub mod draw_list;
pub mod frame;
pub mod surface;

pub use draw_list::{Align, DrawCmd, DrawList, Sprite, TextStyle};
pub use frame::{DrawEntities, build_frame};
pub use surface::{LogSurface, RenderSurface};
