//! Scripted driver that plays a session through the normal input path.
//!
//! Walks the A* route to the key, then to the exit, and turns to shoot any
//! agent that gets within engagement range with a clear line of sight. The
//! headless binary uses it to exercise full sessions without a human.

use std::collections::VecDeque;
use std::f32::consts::{PI, TAU};

use glam::Vec2;
use tracing::debug;

use crate::components::{Attackable, Health, Position};
use crate::constants::{MONSTER_ASTAR_INTERVAL, MOUSE_LOOK_SENS, WAYPOINT_ARRIVAL_RADIUS};
use crate::engine::GameState;
use crate::grid::{cell_center, cell_of};
use crate::input::InputSnapshot;
use crate::pathfinding::{find_path, has_line_of_sight};

/// Agents closer than this are engaged before walking on
const ENGAGE_RANGE: f32 = 6.0;
/// Facing error (radians) below which the driver walks or fires
const AIM_TOLERANCE: f32 = 0.05;
const WALK_TOLERANCE: f32 = 0.35;

#[derive(Debug, Default)]
pub struct Autopilot {
    route: VecDeque<(i32, i32)>,
    goal: Option<(i32, i32)>,
    replan_timer: i32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce this step's input for the given session.
    pub fn drive(&mut self, state: &GameState) -> InputSnapshot {
        let mut input = InputSnapshot::new();
        let player = &state.player;

        if let Some(target) = nearest_threat(state) {
            let error = angle_error(player.angle, target - player.position);
            input.mouse_delta.x = error / MOUSE_LOOK_SENS;
            input.fire = error.abs() < AIM_TOLERANCE && player.shoot_cooldown <= 0.0;
            return input;
        }

        let goal = if player.has_key {
            state.stage.exit
        } else {
            state.stage.key
        };

        if self.goal != Some(goal) || self.route.is_empty() || self.replan_timer <= 0 {
            let from = cell_of(player.position);
            self.route = find_path(&state.grid, from, goal, state.exit_unlocked).into();
            self.goal = Some(goal);
            self.replan_timer = MONSTER_ASTAR_INTERVAL;
            debug!(?from, ?goal, len = self.route.len(), "autopilot replanned");
        } else {
            self.replan_timer -= 1;
        }

        while let Some(&next) = self.route.front() {
            if player.position.distance(cell_center(next)) < WAYPOINT_ARRIVAL_RADIUS {
                self.route.pop_front();
            } else {
                break;
            }
        }

        let target = match self.route.front() {
            Some(&cell) => cell_center(cell),
            None => cell_center(goal),
        };

        let error = angle_error(player.angle, target - player.position);
        input.mouse_delta.x = error / MOUSE_LOOK_SENS;
        input.forward = error.abs() < WALK_TOLERANCE;
        input
    }
}

/// Closest living agent the player could shoot at right now.
fn nearest_threat(state: &GameState) -> Option<Vec2> {
    let origin = state.player.position;

    state
        .world
        .query::<(&Position, &Health, &Attackable)>()
        .iter()
        .filter(|(_, (_, health, _))| !health.is_dead())
        .map(|(_, (pos, _, _))| pos.0)
        .filter(|pos| pos.distance(origin) < ENGAGE_RANGE)
        .filter(|pos| has_line_of_sight(&state.grid, origin, *pos))
        .min_by(|a, b| a.distance_squared(origin).total_cmp(&b.distance_squared(origin)))
}

/// Signed turn from `angle` to face along `offset`, in [-PI, PI).
fn angle_error(angle: f32, offset: Vec2) -> f32 {
    let desired = offset.y.atan2(offset.x);
    (desired - angle + PI).rem_euclid(TAU) - PI
}
