//! Game systems organized by domain.
//!
//! This module contains the per-step game logic, split into focused submodules:
//! - `ai`: Agent state machine and chase behavior
//! - `combat`: Hitscan attack, damage, and death handling
//! - `movement`: Collision-aware movement for the player and agents
//! - `rendering`: Sprite collection for the compositor
//! - `triggers`: Key pickup and exit checks

pub mod ai;
pub mod combat;
pub mod movement;
pub mod rendering;
pub mod triggers;

// Re-export commonly used items
pub use ai::update_agents;
pub use combat::{damage_agent, living_agents, player_attack, remove_dead_agents};
pub use movement::{can_occupy, move_player, slide_move, step_toward};
pub use rendering::{collect_sprites, SpriteKind, SpriteRecord};
pub use triggers::{check_pickup, reached_exit, update_exit_lock};
