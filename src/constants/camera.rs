//! Camera and projection constants.

/// Horizontal field of view (60 degrees)
pub const FOV: f32 = std::f32::consts::FRAC_PI_3;
/// Half of the horizontal field of view
pub const HALF_FOV: f32 = FOV / 2.0;
/// Sprites at or nearer than this camera depth are treated as behind the viewpoint
pub const SPRITE_NEAR_PLANE: f32 = 0.1;
/// Smallest perpendicular wall distance reported by the ray caster
pub const MIN_WALL_DISTANCE: f32 = 0.001;
/// Stand-in for "never crosses a grid line on this axis"
pub const RAY_DELTA_INFINITY: f32 = 1e30;
