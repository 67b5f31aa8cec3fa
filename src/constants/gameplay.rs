//! Core gameplay constants (player movement, attack, triggers).

/// Player walk speed in cells per second
pub const PLAYER_SPEED: f32 = 3.5;
/// Keyboard turn speed in radians per second
pub const PLAYER_TURN_SPEED: f32 = 2.5;
/// Half-extent of the player's collision square
pub const PLAYER_RADIUS: f32 = 0.25;
/// Radians turned per pixel of touch drag
pub const TOUCH_LOOK_SENS: f32 = 0.008;
/// Radians turned per pixel of mouse motion
pub const MOUSE_LOOK_SENS: f32 = 0.002;

/// Damage dealt by one player attack
pub const SHOOT_DAMAGE: i32 = 25;
/// Seconds between player attacks
pub const SHOOT_COOLDOWN: f32 = 0.4;
/// Maximum hit-scan range in cells
pub const SHOOT_RANGE: f32 = 15.0;
/// Extra slack when comparing a target against the wall distance along the attack ray
pub const SHOOT_WALL_TOLERANCE: f32 = 0.5;

/// Seconds the screen flashes red after the player is hurt
pub const PLAYER_DAMAGE_FLASH: f32 = 0.3;
/// Distance from the exit centre that counts as reaching it
pub const EXIT_TRIGGER_RADIUS: f32 = 1.2;

/// Notification shown when the key is collected
pub const KEY_NOTIFICATION: &str = "KEY COLLECTED!";
/// How long the key notification stays up (milliseconds)
pub const KEY_NOTIFICATION_MS: u64 = 3000;
