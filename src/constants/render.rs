//! Frame compositor constants (resolution, palette, fog, textures).

/// Width of the frame buffer in pixels (one ray per column)
pub const RENDER_W: usize = 480;
/// Height of the frame buffer in pixels
pub const RENDER_H: usize = 270;

/// Ceiling colour (#222)
pub const CEILING_COLOR: [u8; 3] = [34, 34, 34];
/// Floor colour (#444)
pub const FLOOR_COLOR: [u8; 3] = [68, 68, 68];
/// Wall shade when a vertical grid line (x side) was struck
pub const WALL_SHADE_X_SIDE: u8 = 170;
/// Wall shade when a horizontal grid line (y side) was struck
pub const WALL_SHADE_Y_SIDE: u8 = 136;
/// Locked exit door colour
pub const EXIT_DOOR_COLOR: [u8; 3] = [85, 51, 17];

/// Brick texture rows per wall height
pub const BRICK_TEXTURE_ROWS: u32 = 64;
/// Texture rows per brick course
pub const BRICK_ROW_HEIGHT: u32 = 8;
/// Bricks across one wall face
pub const BRICKS_PER_FACE: f32 = 16.0;
/// Fraction of a brick width drawn as mortar
pub const MORTAR_WIDTH: f32 = 0.06;
/// Brightness multiplier for mortar pixels
pub const MORTAR_DARKEN: f32 = 0.55;

/// Distance where fog starts
pub const FOG_START: f32 = 4.0;
/// Distance where fog fully replaces the colour
pub const FOG_END: f32 = 14.0;
/// Fog colour (#111)
pub const FOG_COLOR: [u8; 3] = [17, 17, 17];

/// Sprite texels with alpha below this are transparent
pub const SPRITE_ALPHA_THRESHOLD: u8 = 128;
/// Additive tint applied to an agent sprite while it flashes
pub const HIT_TINT: [u8; 3] = [120, 40, 40];

/// Full-screen colour shown when the player is hurt
pub const DAMAGE_FLASH_COLOR: [u8; 3] = [200, 0, 0];
/// Opacity per second of remaining damage flash
pub const DAMAGE_FLASH_RATE: f32 = 1.5;
/// Maximum opacity of the damage flash overlay
pub const DAMAGE_FLASH_MAX_ALPHA: f32 = 0.5;

/// Agent sprite size
pub const MONSTER_SPRITE_W: u32 = 32;
pub const MONSTER_SPRITE_H: u32 = 64;
/// Key sprite size
pub const KEY_SPRITE_W: u32 = 32;
pub const KEY_SPRITE_H: u32 = 32;
