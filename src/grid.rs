use crate::stage::Stage;
use crate::tile::TileType;
use glam::Vec2;

/// Cell containing a continuous world position.
pub fn cell_of(pos: Vec2) -> (i32, i32) {
    (pos.x.floor() as i32, pos.y.floor() as i32)
}

/// Centre of a cell in world units.
pub fn cell_center((x, y): (i32, i32)) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// The session's working copy of a stage layout.
///
/// Cloned from an immutable [`Stage`] template at session start; the only
/// mutation afterwards is consuming the key pickup.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileType>,
}

impl Grid {
    pub fn from_stage(stage: &Stage) -> Self {
        Self::from_ascii(stage.layout)
    }

    /// Build a grid from layout rows. Short rows are padded with wall.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut tiles = vec![TileType::Wall; width * height];

        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                tiles[y * width + x] = TileType::from_glyph(glyph);
            }
        }

        Self { width, height, tiles }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&TileType> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(&self.tiles[y as usize * self.width + x as usize])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut TileType> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(&mut self.tiles[y as usize * self.width + x as usize])
    }

    /// Classification of a cell; anything outside the map is wall.
    pub fn classify(&self, x: i32, y: i32) -> TileType {
        self.get(x, y).copied().unwrap_or(TileType::Wall)
    }

    pub fn is_blocking(&self, x: i32, y: i32, exit_unlocked: bool) -> bool {
        self.classify(x, y).is_blocking(exit_unlocked)
    }

    /// Whether the cell containing `pos` blocks movement.
    pub fn is_blocking_at(&self, pos: Vec2, exit_unlocked: bool) -> bool {
        let (x, y) = cell_of(pos);
        self.is_blocking(x, y, exit_unlocked)
    }

    /// Whether the cell stops agent sight. Outside the map counts as wall.
    pub fn blocks_vision(&self, x: i32, y: i32) -> bool {
        self.classify(x, y).blocks_vision()
    }

    /// Turn a pickup cell into floor. Returns true only on the first call.
    pub fn consume_pickup(&mut self, x: i32, y: i32) -> bool {
        match self.get_mut(x, y) {
            Some(tile) if *tile == TileType::Pickup => {
                *tile = TileType::Floor;
                true
            }
            _ => false,
        }
    }

    /// Upper bound on DDA steps before a ray is abandoned.
    pub fn ray_step_budget(&self) -> usize {
        self.width + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::THE_LABYRINTH;

    #[test]
    fn test_out_of_bounds_is_wall() {
        let grid = Grid::from_ascii(&["...", "...", "..."]);
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (-5, 99), (i32::MIN, i32::MAX)] {
            assert_eq!(grid.classify(x, y), TileType::Wall);
            assert!(grid.is_blocking(x, y, false));
            assert!(grid.is_blocking(x, y, true));
        }
    }

    #[test]
    fn test_exit_respects_lock() {
        let grid = Grid::from_ascii(&["#E#"]);
        assert!(grid.is_blocking(1, 0, false));
        assert!(!grid.is_blocking(1, 0, true));
    }

    #[test]
    fn test_only_walls_block_vision() {
        let grid = Grid::from_ascii(&["#EK."]);
        assert!(grid.blocks_vision(0, 0));
        assert!(!grid.blocks_vision(1, 0));
        assert!(!grid.blocks_vision(2, 0));
        assert!(!grid.blocks_vision(3, 0));
        assert!(grid.blocks_vision(4, 0));
    }

    #[test]
    fn test_consume_pickup_is_idempotent() {
        let mut grid = Grid::from_ascii(&[".K."]);
        assert!(grid.consume_pickup(1, 0));
        assert_eq!(grid.classify(1, 0), TileType::Floor);
        assert!(!grid.consume_pickup(1, 0));
        assert!(!grid.consume_pickup(0, 0));
        assert!(!grid.consume_pickup(-1, 0));
    }

    #[test]
    fn test_stage_clone_leaves_template_untouched() {
        let mut grid = Grid::from_stage(&THE_LABYRINTH);
        let (kx, ky) = THE_LABYRINTH.key;
        assert!(grid.consume_pickup(kx, ky));

        let fresh = Grid::from_stage(&THE_LABYRINTH);
        assert_eq!(fresh.classify(kx, ky), TileType::Pickup);
    }

    #[test]
    fn test_short_rows_are_padded_with_wall() {
        let grid = Grid::from_ascii(&["....", ".."]);
        assert_eq!(grid.width, 4);
        assert_eq!(grid.classify(3, 1), TileType::Wall);
    }
}
