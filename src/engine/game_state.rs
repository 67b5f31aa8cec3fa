//! Core game state - owns the simulation data for one session.

use crate::config::Difficulty;
use crate::grid::{cell_center, Grid};
use crate::player::Player;
use crate::stage::Stage;
use crate::tile::TileType;

use glam::Vec2;
use hecs::World;

use super::initialization;

/// Core game state - owns all simulation data.
pub struct GameState {
    /// Agents live here as entities
    pub world: World,

    /// Working copy of the stage layout
    pub grid: Grid,

    /// Template the session was built from
    pub stage: &'static Stage,

    pub player: Player,

    /// Set once the player carries the key
    pub exit_unlocked: bool,
}

impl GameState {
    pub fn new(stage: &'static Stage, difficulty: Difficulty) -> Self {
        let (world, grid, player) = initialization::init_world(stage, &difficulty);

        Self {
            world,
            grid,
            stage,
            player,
            exit_unlocked: false,
        }
    }

    /// Where to draw the key, while it is still on the floor.
    pub fn pickup_position(&self) -> Option<Vec2> {
        let (x, y) = self.stage.key;
        (self.grid.classify(x, y) == TileType::Pickup).then(|| cell_center(self.stage.key))
    }
}
