//! World initialization - builds the grid, the viewpoint and the agents.

use crate::config::Difficulty;
use crate::grid::Grid;
use crate::player::Player;
use crate::spawning;
use crate::stage::Stage;

use hecs::World;
use tracing::info;

/// Fresh session contents for a stage: a working copy of its layout, the
/// player at the start cell and one agent per spawn slot the difficulty allows.
pub fn init_world(stage: &Stage, difficulty: &Difficulty) -> (World, Grid, Player) {
    let grid = Grid::from_stage(stage);
    let player = Player::new(stage.player_start, difficulty.player_hp);

    let mut world = World::new();
    let agents = spawning::spawn_agents(&mut world, stage, difficulty);

    info!(
        stage = stage.name,
        agents = agents.len(),
        player_hp = difficulty.player_hp,
        "world initialized"
    );

    (world, grid, player)
}
