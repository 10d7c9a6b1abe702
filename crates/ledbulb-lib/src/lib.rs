//! Ledbulb — a circular LED indicator control, software-rendered.
//!
//! The indicator owns its color, on/off state, and blink timer; the host
//! supplies geometry, repaint scheduling, and a surface to present frames on.

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod host;
pub mod indicator;
pub mod layout;
pub mod render;
pub mod surface;
pub mod timer;

pub use error::LedError;
