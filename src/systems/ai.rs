//! Agent perception and behaviour.
//!
//! Each living agent runs an Idle → Chasing ⇄ Attacking state machine. Idle
//! agents watch for the player; chasing agents follow an A* route that is
//! refreshed on a fixed frame cadence; attacking agents swing on cooldown.

use hecs::{Entity, World};
use tracing::debug;

use crate::components::{AIState, ChaseAI, HitFlash, Melee, Position, Speed};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::grid::{cell_center, cell_of, Grid};
use crate::pathfinding::{find_path, has_line_of_sight};
use crate::player::Player;
use crate::systems::movement::step_toward;

/// Run one step of behaviour for every living agent.
pub fn update_agents(
    world: &mut World,
    grid: &Grid,
    player: &mut Player,
    dt: f32,
    exit_unlocked: bool,
    events: &mut EventQueue,
) {
    puffin::profile_function!();

    for (entity, (pos, ai, speed, melee, flash)) in world.query_mut::<(
        &mut Position,
        &mut ChaseAI,
        &Speed,
        &mut Melee,
        &mut HitFlash,
    )>() {
        flash.0 = (flash.0 - dt).max(0.0);
        melee.cooldown = (melee.cooldown - dt).max(0.0);

        let previous = ai.state;
        let dist = pos.0.distance(player.position);

        match ai.state {
            AIState::Idle => {
                if dist <= ai.detection_range && has_line_of_sight(grid, pos.0, player.position) {
                    ai.state = AIState::Chasing;
                    ai.path_timer = 0;
                }
            }
            AIState::Chasing => {
                chase(entity, pos, ai, speed.0, grid, player, dt, exit_unlocked);

                if dist < MONSTER_MELEE_RANGE {
                    ai.state = AIState::Attacking;
                }
                if dist > ai.detection_range * CHASE_GIVE_UP_FACTOR
                    && !has_line_of_sight(grid, pos.0, player.position)
                {
                    ai.state = AIState::Idle;
                }
            }
            AIState::Attacking => {
                if melee.cooldown <= 0.0 && dist < MONSTER_MELEE_RANGE {
                    player.take_damage(melee.damage);
                    melee.cooldown = MONSTER_MELEE_CD;
                    events.push(GameEvent::PlayerDamaged {
                        attacker: entity,
                        damage: melee.damage,
                        remaining: player.health.current,
                    });
                }
                if dist >= MONSTER_MELEE_RANGE + MONSTER_MELEE_HYSTERESIS {
                    ai.state = AIState::Chasing;
                    ai.path_timer = 0;
                }
            }
        }

        if ai.state != previous {
            debug!(?entity, from = ?previous, to = ?ai.state, dist, "agent state changed");
            events.push(GameEvent::AIStateChanged {
                entity,
                new_state: ai.state,
            });
        }
    }
}

/// Refresh the route when due, then advance toward its head waypoint.
#[allow(clippy::too_many_arguments)]
fn chase(
    entity: Entity,
    pos: &mut Position,
    ai: &mut ChaseAI,
    speed_mult: f32,
    grid: &Grid,
    player: &Player,
    dt: f32,
    exit_unlocked: bool,
) {
    if ai.path_timer <= 0 || ai.path.is_empty() {
        let path = find_path(grid, cell_of(pos.0), cell_of(player.position), exit_unlocked);
        debug!(?entity, waypoints = path.len(), "path recomputed");
        ai.path = path.into();
        ai.path_timer = MONSTER_ASTAR_INTERVAL;
    } else {
        ai.path_timer -= 1;
    }

    let Some(&waypoint) = ai.path.front() else {
        return;
    };

    let target = cell_center(waypoint);
    if pos.0.distance(target) < WAYPOINT_ARRIVAL_RADIUS {
        ai.path.pop_front();
    } else {
        let step = MONSTER_BASE_SPEED * speed_mult * dt;
        pos.0 = step_toward(grid, pos.0, target, step, exit_unlocked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawning::AgentDef;
    use glam::Vec2;

    fn corridor() -> Grid {
        Grid::from_ascii(&[
            "##########################",
            "#........................#",
            "##########################",
        ])
    }

    fn agent_def(detection_range: f32, speed_mult: f32) -> AgentDef {
        AgentDef {
            health: MONSTER_HP,
            speed_mult,
            melee_damage: 10,
            detection_range,
        }
    }

    fn state_of(world: &World, entity: Entity) -> AIState {
        world.get::<&ChaseAI>(entity).unwrap().state
    }

    #[test]
    fn test_idle_until_player_within_detection_range() {
        let grid = corridor();
        let mut world = World::new();
        let agent = agent_def(8.0, 1.0).spawn(&mut world, 1, 1);
        let mut player = Player::new((11, 1), 100);
        let mut events = EventQueue::new();

        // Player walks toward the agent half a cell per step
        let mut chased_at = None;
        for _ in 0..10 {
            update_agents(&mut world, &grid, &mut player, 0.016, false, &mut events);
            let dist = player.position.distance(Vec2::new(1.5, 1.5));
            if state_of(&world, agent) == AIState::Chasing {
                chased_at = Some(dist);
                break;
            }
            assert!(dist > 8.0);
            player.position.x -= 0.5;
        }

        let dist = chased_at.expect("agent should start chasing");
        assert!(dist <= 8.0);
        assert!(dist > 7.0);
    }

    #[test]
    fn test_detection_boundary_does_not_flap() {
        let grid = corridor();
        let mut world = World::new();
        // Stationary agent so only the player's distance matters
        let agent = agent_def(8.0, 0.0).spawn(&mut world, 1, 1);
        let mut player = Player::new((9, 1), 100);
        let mut events = EventQueue::new();

        // Exactly at the boundary with line of sight
        update_agents(&mut world, &grid, &mut player, 0.016, false, &mut events);
        assert_eq!(state_of(&world, agent), AIState::Chasing);

        // Just outside detection but inside the give-up radius
        player.position.x = 1.5 + 8.0 * 1.2;
        for _ in 0..20 {
            update_agents(&mut world, &grid, &mut player, 0.016, false, &mut events);
            assert_eq!(state_of(&world, agent), AIState::Chasing);
        }

        let transitions = events
            .iter()
            .filter(|e| matches!(e, GameEvent::AIStateChanged { .. }))
            .count();
        assert_eq!(transitions, 1);
    }

    #[test]
    fn test_idle_agent_ignores_player_beyond_range() {
        let grid = corridor();
        let mut world = World::new();
        let agent = agent_def(8.0, 0.0).spawn(&mut world, 1, 1);
        let mut player = Player::new((1, 1), 100);
        player.position.x = 1.5 + 8.0 * 1.2;
        let mut events = EventQueue::new();

        for _ in 0..20 {
            update_agents(&mut world, &grid, &mut player, 0.016, false, &mut events);
            assert_eq!(state_of(&world, agent), AIState::Idle);
        }
        assert!(events.is_empty());
    }

    #[test]
    fn test_walls_hide_player() {
        let grid = Grid::from_ascii(&["#######", "#..#..#", "#######"]);
        let mut world = World::new();
        let agent = agent_def(8.0, 1.0).spawn(&mut world, 1, 1);
        let mut player = Player::new((5, 1), 100);
        let mut events = EventQueue::new();

        update_agents(&mut world, &grid, &mut player, 0.016, false, &mut events);
        assert_eq!(state_of(&world, agent), AIState::Idle);
    }

    #[test]
    fn test_chasing_agent_closes_distance() {
        let grid = corridor();
        let mut world = World::new();
        let agent = agent_def(8.0, 1.0).spawn(&mut world, 1, 1);
        let mut player = Player::new((6, 1), 100);
        let mut events = EventQueue::new();

        for _ in 0..60 {
            update_agents(&mut world, &grid, &mut player, 0.05, false, &mut events);
        }

        let pos = world.get::<&Position>(agent).unwrap().0;
        assert!(pos.distance(player.position) < 4.5);
        assert_ne!(state_of(&world, agent), AIState::Idle);
    }

    #[test]
    fn test_melee_respects_cooldown() {
        let grid = corridor();
        let mut world = World::new();
        let agent = agent_def(8.0, 0.0).spawn(&mut world, 1, 1);
        let mut player = Player::new((1, 1), 100);
        player.position.x = 2.0;
        let mut events = EventQueue::new();

        // Idle -> Chasing -> Attacking -> first swing
        for _ in 0..3 {
            update_agents(&mut world, &grid, &mut player, 0.1, false, &mut events);
        }
        assert_eq!(state_of(&world, agent), AIState::Attacking);
        assert_eq!(player.health.current, 90);
        assert_eq!(player.damage_flash, PLAYER_DAMAGE_FLASH);

        // Cooldown blocks the next swings
        for _ in 0..10 {
            update_agents(&mut world, &grid, &mut player, 0.1, false, &mut events);
        }
        assert_eq!(player.health.current, 90);

        for _ in 0..6 {
            update_agents(&mut world, &grid, &mut player, 0.1, false, &mut events);
        }
        assert_eq!(player.health.current, 80);
    }

    #[test]
    fn test_attack_falls_back_to_chase_past_hysteresis() {
        let grid = corridor();
        let mut world = World::new();
        let agent = agent_def(8.0, 0.0).spawn(&mut world, 1, 1);
        let mut player = Player::new((1, 1), 100);
        player.position.x = 2.0;
        let mut events = EventQueue::new();

        for _ in 0..3 {
            update_agents(&mut world, &grid, &mut player, 0.1, false, &mut events);
        }
        assert_eq!(state_of(&world, agent), AIState::Attacking);

        // Beyond melee range but within the hysteresis band: keep attacking
        player.position.x = 1.5 + 1.0;
        update_agents(&mut world, &grid, &mut player, 0.1, false, &mut events);
        assert_eq!(state_of(&world, agent), AIState::Attacking);

        player.position.x = 1.5 + 1.2;
        update_agents(&mut world, &grid, &mut player, 0.1, false, &mut events);
        assert_eq!(state_of(&world, agent), AIState::Chasing);
        assert_eq!(world.get::<&ChaseAI>(agent).unwrap().path_timer, 0);
    }

    #[test]
    fn test_unreachable_player_leaves_agent_in_place() {
        // Player visible through a locked exit the agent cannot path through
        let grid = Grid::from_ascii(&["#######", "#..E..#", "#######"]);
        let mut world = World::new();
        let agent = agent_def(8.0, 1.0).spawn(&mut world, 1, 1);
        let mut player = Player::new((5, 1), 100);
        let mut events = EventQueue::new();

        for _ in 0..5 {
            update_agents(&mut world, &grid, &mut player, 0.05, false, &mut events);
        }
        assert_eq!(state_of(&world, agent), AIState::Chasing);
        let pos = world.get::<&Position>(agent).unwrap().0;
        assert_eq!(pos, Vec2::new(1.5, 1.5));
    }

    #[test]
    fn test_gives_up_only_when_far_and_unseen() {
        // Corridor turning south at x = 8
        let grid = Grid::from_ascii(&[
            "##########",
            "#........#",
            "########.#",
            "########.#",
            "########.#",
            "########.#",
            "##########",
        ]);
        let mut world = World::new();
        // Stationary agent at the corner; give-up radius is 3.0
        let agent = agent_def(2.0, 0.0).spawn(&mut world, 7, 1);
        let mut player = Player::new((8, 1), 100);
        let mut events = EventQueue::new();

        update_agents(&mut world, &grid, &mut player, 0.016, false, &mut events);
        assert_eq!(state_of(&world, agent), AIState::Chasing);

        // Around the corner but close
        player.position = Vec2::new(8.5, 3.5);
        for _ in 0..5 {
            update_agents(&mut world, &grid, &mut player, 0.016, false, &mut events);
            assert_eq!(state_of(&world, agent), AIState::Chasing);
        }

        // Far down the corridor but still in sight
        player.position = Vec2::new(2.5, 1.5);
        for _ in 0..5 {
            update_agents(&mut world, &grid, &mut player, 0.016, false, &mut events);
            assert_eq!(state_of(&world, agent), AIState::Chasing);
        }

        // Far and around the corner
        player.position = Vec2::new(8.5, 5.5);
        update_agents(&mut world, &grid, &mut player, 0.016, false, &mut events);
        assert_eq!(state_of(&world, agent), AIState::Idle);
    }

    #[test]
    fn test_path_recomputes_on_cadence() {
        let grid = corridor();
        let mut world = World::new();
        // Stationary, so the head waypoint is never reached
        let agent = agent_def(8.0, 0.0).spawn(&mut world, 1, 1);
        let mut player = Player::new((4, 1), 100);
        let mut events = EventQueue::new();

        let mut timers = Vec::new();
        for _ in 0..34 {
            update_agents(&mut world, &grid, &mut player, 0.016, false, &mut events);
            timers.push(world.get::<&ChaseAI>(agent).unwrap().path_timer);
        }

        let mut expected = vec![0];
        expected.extend((0..=MONSTER_ASTAR_INTERVAL).rev());
        expected.extend([MONSTER_ASTAR_INTERVAL, MONSTER_ASTAR_INTERVAL - 1]);
        assert_eq!(timers, expected);
        assert!(!world.get::<&ChaseAI>(agent).unwrap().path.is_empty());
    }

    #[test]
    fn test_empty_path_recomputes_every_step() {
        let grid = Grid::from_ascii(&["#######", "#..E..#", "#######"]);
        let mut world = World::new();
        let agent = agent_def(8.0, 1.0).spawn(&mut world, 1, 1);
        let mut player = Player::new((5, 1), 100);
        let mut events = EventQueue::new();

        update_agents(&mut world, &grid, &mut player, 0.016, false, &mut events);
        for _ in 0..5 {
            update_agents(&mut world, &grid, &mut player, 0.016, false, &mut events);
            let ai = world.get::<&ChaseAI>(agent).unwrap();
            assert!(ai.path.is_empty());
            assert_eq!(ai.path_timer, MONSTER_ASTAR_INTERVAL);
        }
    }
}
