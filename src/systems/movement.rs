//! Continuous movement against the grid.
//!
//! The viewpoint is a square of half-extent [`PLAYER_RADIUS`] that slides
//! along walls; agents are points that move each axis independently.

use crate::constants::{PLAYER_RADIUS, PLAYER_SPEED};
use crate::grid::{cell_of, Grid};
use crate::input::InputSnapshot;
use crate::player::Player;
use glam::Vec2;

/// Whether a square of half-extent `radius` centred on `pos` overlaps no
/// blocking cell.
pub fn can_occupy(grid: &Grid, pos: Vec2, radius: f32, exit_unlocked: bool) -> bool {
    let corners = [
        Vec2::new(pos.x - radius, pos.y - radius),
        Vec2::new(pos.x + radius, pos.y - radius),
        Vec2::new(pos.x - radius, pos.y + radius),
        Vec2::new(pos.x + radius, pos.y + radius),
    ];
    corners
        .iter()
        .all(|&corner| !grid.is_blocking_at(corner, exit_unlocked))
}

/// Resolve a displacement with wall sliding: the full move, else X alone,
/// else Y alone, else stay put.
pub fn slide_move(grid: &Grid, pos: Vec2, delta: Vec2, radius: f32, exit_unlocked: bool) -> Vec2 {
    if delta == Vec2::ZERO {
        return pos;
    }

    let candidates = [
        pos + delta,
        Vec2::new(pos.x + delta.x, pos.y),
        Vec2::new(pos.x, pos.y + delta.y),
    ];
    candidates
        .into_iter()
        .find(|&candidate| can_occupy(grid, candidate, radius, exit_unlocked))
        .unwrap_or(pos)
}

/// Apply this step's turning and movement input to the viewpoint.
pub fn move_player(
    player: &mut Player,
    grid: &Grid,
    input: &InputSnapshot,
    dt: f32,
    exit_unlocked: bool,
) {
    player.turn(input.turn_delta(dt));

    let mut dir = input.move_vector(player.angle);
    let magnitude = dir.length();
    if magnitude > 1.0 {
        dir /= magnitude;
    }

    let delta = dir * PLAYER_SPEED * dt;
    player.position = slide_move(grid, player.position, delta, PLAYER_RADIUS, exit_unlocked);
}

/// Move a point agent `distance` toward `target`, each axis applied only
/// when the cell it would enter on that axis is open.
pub fn step_toward(grid: &Grid, pos: Vec2, target: Vec2, distance: f32, exit_unlocked: bool) -> Vec2 {
    let offset = target - pos;
    let length = offset.length();
    if length <= f32::EPSILON {
        return pos;
    }

    let next = pos + offset / length * distance;
    let mut result = pos;

    let (_, row) = cell_of(result);
    if !grid.is_blocking(next.x.floor() as i32, row, exit_unlocked) {
        result.x = next.x;
    }
    let (col, _) = cell_of(result);
    if !grid.is_blocking(col, next.y.floor() as i32, exit_unlocked) {
        result.y = next.y;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_room() -> Grid {
        Grid::from_ascii(&[
            "#####",
            "#...#",
            "#.#.#",
            "#...#",
            "#####",
        ])
    }

    #[test]
    fn test_free_move_is_accepted_whole() {
        let grid = corner_room();
        let pos = Vec2::new(1.5, 1.5);
        let moved = slide_move(&grid, pos, Vec2::new(0.1, 0.1), PLAYER_RADIUS, false);
        assert!((moved - Vec2::new(1.6, 1.6)).length() < 1e-6);
    }

    #[test]
    fn test_diagonal_into_wall_slides_along_open_axis() {
        // North wall above; moving up-right keeps only the X part
        let grid = corner_room();
        let pos = Vec2::new(1.5, 1.3);
        let moved = slide_move(&grid, pos, Vec2::new(0.2, -0.2), PLAYER_RADIUS, false);
        assert!((moved.x - 1.7).abs() < 1e-6);
        assert_eq!(moved.y, 1.3);
    }

    #[test]
    fn test_diagonal_into_pillar_corner_slides() {
        // Pillar at (2,2); heading down-right from near its north-west corner
        let grid = corner_room();
        let pos = Vec2::new(1.7, 1.5);
        let moved = slide_move(&grid, pos, Vec2::new(0.1, 0.3), PLAYER_RADIUS, false);
        // Y move would push the lower-right corner into the pillar
        assert!(!can_occupy(&grid, pos + Vec2::new(0.1, 0.3), PLAYER_RADIUS, false));
        assert!((moved.x - 1.8).abs() < 1e-6);
        assert_eq!(moved.y, 1.5);
    }

    #[test]
    fn test_both_axes_blocked_leaves_position() {
        let grid = corner_room();
        let pos = Vec2::new(1.3, 1.3);
        let moved = slide_move(&grid, pos, Vec2::new(-0.2, -0.2), PLAYER_RADIUS, false);
        assert_eq!(moved, pos);
    }

    #[test]
    fn test_locked_exit_blocks_until_unlocked() {
        let grid = Grid::from_ascii(&["#####", "#..E#", "#####"]);
        let pos = Vec2::new(2.6, 1.5);
        let blocked = slide_move(&grid, pos, Vec2::new(0.3, 0.0), PLAYER_RADIUS, false);
        assert_eq!(blocked, pos);
        let open = slide_move(&grid, pos, Vec2::new(0.3, 0.0), PLAYER_RADIUS, true);
        assert!((open.x - 2.9).abs() < 1e-6);
    }

    #[test]
    fn test_diagonal_input_is_not_faster() {
        let grid = Grid::from_ascii(&["#########", "#.......#", "#.......#", "#.......#", "#########"]);
        let mut player = Player::new((3, 2), 100);
        let input = InputSnapshot {
            forward: true,
            strafe_right: true,
            ..Default::default()
        };
        let before = player.position;
        move_player(&mut player, &grid, &input, 0.1, false);
        let travelled = (player.position - before).length();
        assert!((travelled - PLAYER_SPEED * 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_agent_step_axis_separated() {
        let grid = corner_room();
        let pos = Vec2::new(1.9, 1.5);
        let next = step_toward(&grid, pos, Vec2::new(2.5, 2.5), 0.8, false);
        // X step would land in cell (2,1) which is open
        assert!(next.x > 2.0);
        // Y step from the new column 2 would enter the pillar at (2,2)
        assert_eq!(next.y, 1.5);
    }

    #[test]
    fn test_agent_stops_at_target() {
        let grid = corner_room();
        let pos = Vec2::new(1.5, 1.5);
        assert_eq!(step_toward(&grid, pos, pos, 0.3, false), pos);
    }
}
