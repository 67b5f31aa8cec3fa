//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod camera;
mod enemies;
mod gameplay;
mod render;
mod time;

pub use camera::*;
pub use enemies::*;
pub use gameplay::*;
pub use render::*;
pub use time::*;
