//! First-person grid raycaster: a labyrinth session with a key, a locked
//! exit, and chasing agents, driven one step at a time by a host.

pub mod autopilot;
pub mod camera;
pub mod components;
pub mod config;
pub mod constants;
pub mod engine;
pub mod events;
pub mod grid;
pub mod input;
pub mod pathfinding;
pub mod player;
pub mod raycaster;
pub mod render;
pub mod spawning;
pub mod stage;
pub mod systems;
pub mod tile;

pub use config::{Difficulty, DifficultyLevel, DifficultyTable};
pub use engine::{FrameOutput, GameEngine, GameMode, Notification};
pub use input::InputSnapshot;
