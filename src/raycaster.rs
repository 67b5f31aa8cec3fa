//! DDA ray casting against the grid.
//!
//! Every frame the depth buffer is rebuilt from the current viewpoint: one ray
//! per screen column, stepped cell by cell until it enters a blocking cell.
//! The same traversal backs the single-ray query used for hit-scan attacks.

use crate::camera::Camera;
use crate::constants::*;
use crate::grid::Grid;
use crate::tile::TileType;
use glam::Vec2;

/// Which family of grid lines the ray crossed on its final step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitSide {
    /// Crossed a vertical line (x changed); the face points east/west
    X,
    /// Crossed a horizontal line (y changed); the face points north/south
    Y,
}

/// Result of stepping a single ray through the grid.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Distance in units of the ray direction's length, floored at [`MIN_WALL_DISTANCE`]
    pub distance: f32,
    pub side: HitSide,
    pub tile: TileType,
    /// False when the step budget ran out before a blocking cell was entered
    pub hit: bool,
    pub steps: usize,
}

impl RayHit {
    /// Fractional position of the hit along the struck face, in [0, 1).
    pub fn wall_x(&self, origin: Vec2, dir: Vec2) -> f32 {
        let along = match self.side {
            HitSide::X => origin.y + self.distance * dir.y,
            HitSide::Y => origin.x + self.distance * dir.x,
        };
        along - along.floor()
    }
}

/// Per-column record consumed by the compositor.
#[derive(Debug, Clone, Copy)]
pub struct WallHit {
    /// Perpendicular distance to the camera plane
    pub distance: f32,
    /// Texture coordinate across the struck face
    pub wall_x: f32,
    pub side: HitSide,
    pub tile: TileType,
}

impl Default for WallHit {
    fn default() -> Self {
        Self {
            distance: MIN_WALL_DISTANCE,
            wall_x: 0.0,
            side: HitSide::X,
            tile: TileType::Wall,
        }
    }
}

/// Step a ray from `origin` along `dir` until it enters a blocking cell.
///
/// The returned distance is measured in multiples of `dir`: for a unit
/// direction it is the Euclidean length, for a camera column ray it is the
/// perpendicular distance to the camera plane.
pub fn cast(grid: &Grid, origin: Vec2, dir: Vec2, exit_unlocked: bool) -> RayHit {
    let mut map_x = origin.x.floor() as i32;
    let mut map_y = origin.y.floor() as i32;

    let delta_x = if dir.x == 0.0 { RAY_DELTA_INFINITY } else { (1.0 / dir.x).abs() };
    let delta_y = if dir.y == 0.0 { RAY_DELTA_INFINITY } else { (1.0 / dir.y).abs() };

    let (step_x, mut side_x) = if dir.x < 0.0 {
        (-1, (origin.x - map_x as f32) * delta_x)
    } else {
        (1, (map_x as f32 + 1.0 - origin.x) * delta_x)
    };
    let (step_y, mut side_y) = if dir.y < 0.0 {
        (-1, (origin.y - map_y as f32) * delta_y)
    } else {
        (1, (map_y as f32 + 1.0 - origin.y) * delta_y)
    };

    let budget = grid.ray_step_budget();
    let mut side = HitSide::X;
    let mut tile = TileType::Wall;
    let mut hit = false;
    let mut steps = 0;

    while !hit && steps < budget {
        if side_x < side_y {
            side_x += delta_x;
            map_x += step_x;
            side = HitSide::X;
        } else {
            side_y += delta_y;
            map_y += step_y;
            side = HitSide::Y;
        }
        steps += 1;

        tile = grid.classify(map_x, map_y);
        hit = tile.is_blocking(exit_unlocked);
    }

    // The accumulator has already advanced past the struck line by one increment
    let distance = match side {
        HitSide::X => side_x - delta_x,
        HitSide::Y => side_y - delta_y,
    };

    RayHit {
        distance: distance.max(MIN_WALL_DISTANCE),
        side,
        tile,
        hit,
        steps,
    }
}

/// Distance from `origin` to the nearest blocking surface along `angle`.
pub fn cast_ray(grid: &Grid, origin: Vec2, angle: f32, exit_unlocked: bool) -> f32 {
    cast(grid, origin, Vec2::from_angle(angle), exit_unlocked).distance
}

/// One [`WallHit`] per screen column; storage is reused across frames.
pub struct DepthBuffer {
    hits: Vec<WallHit>,
}

impl DepthBuffer {
    pub fn new(width: usize) -> Self {
        Self {
            hits: vec![WallHit::default(); width],
        }
    }

    pub fn width(&self) -> usize {
        self.hits.len()
    }

    pub fn hits(&self) -> &[WallHit] {
        &self.hits
    }

    /// Wall distance at a column; columns off the buffer report zero depth.
    pub fn depth(&self, column: usize) -> f32 {
        self.hits.get(column).map(|h| h.distance).unwrap_or(0.0)
    }

    /// Overwrite every column from the given camera.
    pub fn build(&mut self, grid: &Grid, camera: &Camera, exit_unlocked: bool) {
        puffin::profile_function!();

        let width = self.hits.len();
        for (column, slot) in self.hits.iter_mut().enumerate() {
            let dir = camera.column_ray(column, width);
            let ray = cast(grid, camera.position, dir, exit_unlocked);
            *slot = WallHit {
                distance: ray.distance,
                wall_x: ray.wall_x(camera.position, dir),
                side: ray.side,
                tile: ray.tile,
            };
        }
    }
}
