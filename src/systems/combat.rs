//! Combat system functions.

use crate::components::{Attackable, ChaseAI, Corpse, Health, HitFlash, Melee, Position, Speed};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::grid::Grid;
use crate::player::Player;
use crate::raycaster::cast_ray;
use hecs::{Entity, World};
use tracing::{debug, warn};

/// Fire the player's hit-scan attack along the facing ray.
///
/// Does nothing while the cooldown runs. Otherwise restarts the cooldown and
/// damages the nearest living agent that lies in front of the player, within
/// range, close enough to the ray, and not behind a wall. Returns the agent
/// that was hit.
pub fn player_attack(
    world: &mut World,
    grid: &Grid,
    player: &mut Player,
    exit_unlocked: bool,
    events: &mut EventQueue,
) -> Option<Entity> {
    if player.shoot_cooldown > 0.0 {
        return None;
    }
    player.shoot_cooldown = SHOOT_COOLDOWN;

    let facing = player.facing();
    let wall_dist = cast_ray(grid, player.position, player.angle, exit_unlocked);

    let mut closest: Option<(Entity, f32)> = None;
    for (id, (pos, health, _)) in world.query::<(&Position, &Health, &Attackable)>().iter() {
        if health.is_dead() {
            continue;
        }

        let offset = pos.0 - player.position;
        let dist = offset.length();
        if dist > SHOOT_RANGE {
            continue;
        }

        // Behind the player
        let along = offset.dot(facing);
        if along < 0.0 {
            continue;
        }

        let perp_dist = (offset - facing * along).length();
        if perp_dist > MONSTER_RADIUS + MONSTER_HIT_MARGIN {
            continue;
        }

        if dist > wall_dist + SHOOT_WALL_TOLERANCE {
            continue;
        }

        if closest.map(|(_, best)| dist < best).unwrap_or(true) {
            closest = Some((id, dist));
        }
    }

    let (target, _) = closest?;
    damage_agent(world, target, SHOOT_DAMAGE, events);
    Some(target)
}

/// Apply damage to an agent and start its hit flash.
pub fn damage_agent(world: &mut World, agent: Entity, amount: i32, events: &mut EventQueue) {
    let Ok((health, flash)) = world.query_one_mut::<(&mut Health, &mut HitFlash)>(agent) else {
        return;
    };
    if health.is_dead() {
        return;
    }

    health.apply_damage(amount);
    flash.0 = MONSTER_HIT_FLASH;
    events.push(GameEvent::AgentHit {
        agent,
        damage: amount,
        remaining: health.current,
    });
}

/// Components that make an agent act, fight and render
type LiveAgent = (ChaseAI, Melee, Speed, Attackable, Health, HitFlash);

/// Turn agents whose health reached zero into inert corpses.
///
/// Strips every `LiveAgent` component, leaving only the position and a
/// [`Corpse`] marker.
pub fn remove_dead_agents(world: &mut World, events: &mut EventQueue) {
    let mut dead = Vec::new();

    for (id, (pos, health)) in world.query::<(&Position, &Health)>().iter() {
        if health.is_dead() {
            dead.push((id, (pos.0.x, pos.0.y)));
        }
    }

    for (id, position) in dead {
        debug!(?id, ?position, "agent died");
        events.push(GameEvent::AgentDied {
            agent: id,
            position,
        });

        if let Err(err) = world.remove::<LiveAgent>(id) {
            // Partially built entity; at least stop it from dying again
            warn!(?id, %err, "dead agent missing live components");
            world.remove_one::<Health>(id).ok();
        }
        if let Err(err) = world.insert_one(id, Corpse) {
            warn!(?id, %err, "could not mark corpse");
        }
    }
}

/// Number of agents still alive.
pub fn living_agents(world: &World) -> usize {
    world.query::<(&Health, &Attackable)>().iter().count()
}
