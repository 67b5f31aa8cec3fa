//! Agent stats and AI tuning constants.

/// Agent health (never regenerates)
pub const MONSTER_HP: i32 = 50;
/// Radius used when testing the player's attack ray against an agent
pub const MONSTER_RADIUS: f32 = 0.4;
/// Extra slack added to the radius for attack hits
pub const MONSTER_HIT_MARGIN: f32 = 0.1;
/// Distance at which an agent can strike the player
pub const MONSTER_MELEE_RANGE: f32 = 0.9;
/// Extra distance the player must open before an attacking agent resumes the chase
pub const MONSTER_MELEE_HYSTERESIS: f32 = 0.2;
/// Seconds between melee strikes
pub const MONSTER_MELEE_CD: f32 = 1.5;
/// Agent walk speed in cells per second, before the difficulty multiplier
pub const MONSTER_BASE_SPEED: f32 = 1.8;
/// Seconds an agent flashes after being hit
pub const MONSTER_HIT_FLASH: f32 = 0.15;

/// Steps between A* recomputes while chasing
pub const MONSTER_ASTAR_INTERVAL: i32 = 30;
/// Node expansions allowed per A* search
pub const ASTAR_MAX_ITERATIONS: usize = 600;
/// Distance to a waypoint centre that counts as reached
pub const WAYPOINT_ARRIVAL_RADIUS: f32 = 0.15;
/// A chasing agent gives up beyond this multiple of its detection range (without sight)
pub const CHASE_GIVE_UP_FACTOR: f32 = 1.5;
/// Spacing between line-of-sight samples, in cells
pub const LOS_STEP: f32 = 0.25;
