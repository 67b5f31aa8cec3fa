/// Classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    Floor,
    Wall,
    /// Exit door; solid until the session unlocks it
    LockedExit,
    /// Key pickup; becomes floor once collected
    Pickup,
}

impl TileType {
    /// Parse an authored layout glyph. Unknown glyphs are walls.
    pub fn from_glyph(glyph: char) -> Self {
        match glyph {
            '.' | ' ' => TileType::Floor,
            'E' => TileType::LockedExit,
            'K' => TileType::Pickup,
            _ => TileType::Wall,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            TileType::Floor => '.',
            TileType::Wall => '#',
            TileType::LockedExit => 'E',
            TileType::Pickup => 'K',
        }
    }

    /// Whether this cell stops movement and rays given the exit lock state.
    pub fn is_blocking(&self, exit_unlocked: bool) -> bool {
        match self {
            TileType::Wall => true,
            TileType::LockedExit => !exit_unlocked,
            TileType::Floor | TileType::Pickup => false,
        }
    }

    /// Only solid walls block agent perception; the exit door is see-through for AI.
    pub fn blocks_vision(&self) -> bool {
        matches!(self, TileType::Wall)
    }
}
