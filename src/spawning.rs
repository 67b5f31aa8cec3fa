//! Data-driven agent spawning.
//!
//! Every agent in a session shares one [`AgentDef`] derived from the chosen
//! difficulty; only the spawn cell differs.

use crate::components::{Attackable, ChaseAI, Health, HitFlash, Melee, Position, Speed};
use crate::config::Difficulty;
use crate::constants::MONSTER_HP;
use crate::stage::Stage;
use hecs::{Entity, World};

/// Definition of an agent - all the data needed to spawn one
#[derive(Debug, Clone, Copy)]
pub struct AgentDef {
    pub health: i32,
    pub speed_mult: f32,
    pub melee_damage: i32,
    pub detection_range: f32,
}

impl AgentDef {
    pub fn from_difficulty(difficulty: &Difficulty) -> Self {
        Self {
            health: MONSTER_HP,
            speed_mult: difficulty.speed_mult,
            melee_damage: difficulty.melee_damage,
            detection_range: difficulty.detection_range,
        }
    }

    /// Spawn this agent at the centre of the given cell
    pub fn spawn(&self, world: &mut World, x: i32, y: i32) -> Entity {
        world.spawn((
            Position::at_cell(x, y),
            ChaseAI::new(self.detection_range),
            Health::new(self.health),
            Speed(self.speed_mult),
            Melee::new(self.melee_damage),
            HitFlash::default(),
            Attackable,
        ))
    }
}

/// Spawn agents on the first `difficulty.monsters` cells of the stage's
/// spawn list, in order.
pub fn spawn_agents(world: &mut World, stage: &Stage, difficulty: &Difficulty) -> Vec<Entity> {
    let def = AgentDef::from_difficulty(difficulty);
    if difficulty.monsters > stage.spawns.len() {
        tracing::warn!(
            requested = difficulty.monsters,
            available = stage.spawns.len(),
            "more agents requested than spawn cells"
        );
    }

    stage
        .spawns
        .iter()
        .take(difficulty.monsters)
        .map(|&(x, y)| def.spawn(world, x, y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::THE_LABYRINTH;

    #[test]
    fn test_spawns_difficulty_prefix_in_order() {
        let mut world = World::new();
        let agents = spawn_agents(&mut world, &THE_LABYRINTH, &Difficulty::HARD);
        assert_eq!(agents.len(), 6);

        for (entity, &(x, y)) in agents.iter().zip(THE_LABYRINTH.spawns) {
            let pos = world.get::<&Position>(*entity).unwrap();
            assert_eq!(pos.0, glam::Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
        }
    }

    #[test]
    fn test_count_is_capped_by_spawn_list() {
        let mut world = World::new();
        let greedy = Difficulty {
            monsters: 50,
            ..Difficulty::EXTREME
        };
        let agents = spawn_agents(&mut world, &THE_LABYRINTH, &greedy);
        assert_eq!(agents.len(), THE_LABYRINTH.spawns.len());
    }

    #[test]
    fn test_difficulty_parameters_are_bound() {
        let mut world = World::new();
        let agents = spawn_agents(&mut world, &THE_LABYRINTH, &Difficulty::EXTREME);
        let ai = world.get::<&ChaseAI>(agents[0]).unwrap();
        assert_eq!(ai.detection_range, 16.0);
        let melee = world.get::<&Melee>(agents[0]).unwrap();
        assert_eq!(melee.damage, 25);
        let speed = world.get::<&Speed>(agents[0]).unwrap();
        assert_eq!(speed.0, 1.5);
    }
}
