//! Authored stage templates.
//!
//! A stage is static data: the ASCII layout the grid is cloned from at session
//! start, the ordered agent spawn list, and the fixed player/exit/key cells.
//! Layout glyphs: `#` wall, `.` floor, `E` locked exit, `K` key pickup.

/// An authored, immutable stage template.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub layout: &'static [&'static str],
    /// Agent spawn cells in priority order; difficulty takes a prefix
    pub spawns: &'static [(i32, i32)],
    pub player_start: (i32, i32),
    pub exit: (i32, i32),
    pub key: (i32, i32),
}

impl Stage {
    pub fn columns(&self) -> usize {
        self.layout.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn rows(&self) -> usize {
        self.layout.len()
    }
}

const LABYRINTH_LAYOUT: [&str; 24] = [
    "########################",
    "#.....#...............E#",
    "#.###.#.#############.##",
    "#.#...#.............#..#",
    "#.#.#######.#.#####.##.#",
    "#.#.......#.#.....#....#",
    "#.#######.#.#####.####.#",
    "#.......#.#.....#....#.#",
    "#######.#.#####.####.#.#",
    "#.....#.......#....#.#.#",
    "#.###.#######.#.##.#...#",
    "#.#.........#.#.#..###.#",
    "#.#.#######.#...#.#....#",
    "#...#.....#.###.#.####.#",
    "###.#.###.#...#......#.#",
    "#...#.#...###.######.#.#",
    "#.###.#.###........#.#.#",
    "#.#...#.....######.#...#",
    "#.#.#####.#.#....#.###.#",
    "#...#...#.#...#......#.#",
    "###.#.#.#.###.#.####.#.#",
    "#.....#.....#...#....K.#",
    "#.#########.###.#.####.#",
    "########################",
];

const LABYRINTH_SPAWNS: [(i32, i32); 10] = [
    (5, 7),   // central-left
    (9, 3),   // top-centre
    (13, 7),  // central crossroads
    (5, 13),  // mid-left
    (11, 11), // maze centre
    (17, 9),  // right-centre
    (3, 19),  // bottom-left
    (9, 17),  // bottom-centre
    (15, 16), // bottom-centre-right
    (19, 21), // guards the key
];

/// Stage 1.
pub const THE_LABYRINTH: Stage = Stage {
    name: "The Labyrinth",
    layout: &LABYRINTH_LAYOUT,
    spawns: &LABYRINTH_SPAWNS,
    player_start: (1, 1),
    exit: (22, 1),
    key: (21, 21),
};
