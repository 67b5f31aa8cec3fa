//! The viewpoint: the player's position, facing and vital state.

use crate::camera::Camera;
use crate::components::Health;
use crate::constants::*;
use crate::grid::cell_center;
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    /// Facing in radians, kept in [0, 2π)
    pub angle: f32,
    pub health: Health,
    pub has_key: bool,
    pub shoot_cooldown: f32,
    pub damage_flash: f32,
}

/// What a HUD needs to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudSnapshot {
    pub health: i32,
    pub max_health: i32,
    pub health_fraction: f32,
    pub has_key: bool,
}

impl Player {
    /// Spawn at the centre of `start` facing east.
    pub fn new(start: (i32, i32), max_hp: i32) -> Self {
        Self {
            position: cell_center(start),
            angle: 0.0,
            health: Health::new(max_hp),
            has_key: false,
            shoot_cooldown: 0.0,
            damage_flash: 0.0,
        }
    }

    pub fn facing(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    pub fn camera(&self) -> Camera {
        Camera::new(self.position, self.angle)
    }

    pub fn turn(&mut self, delta: f32) {
        self.angle = (self.angle + delta).rem_euclid(TAU);
    }

    /// Apply a hit and start the damage flash. Returns true when health
    /// reached zero.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health.current = (self.health.current - amount).max(0);
        self.damage_flash = PLAYER_DAMAGE_FLASH;
        self.health.is_dead()
    }

    pub fn tick_timers(&mut self, dt: f32) {
        self.shoot_cooldown = (self.shoot_cooldown - dt).max(0.0);
        self.damage_flash = (self.damage_flash - dt).max(0.0);
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            health: self.health.current,
            max_health: self.health.max,
            health_fraction: self.health.percentage(),
            has_key: self.has_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_wraps_into_range() {
        let mut player = Player::new((1, 1), 100);
        player.turn(-0.5);
        assert!((player.angle - (TAU - 0.5)).abs() < 1e-5);
        player.turn(1.0);
        assert!((player.angle - 0.5).abs() < 1e-5);
        player.turn(3.0 * TAU);
        assert!(player.angle >= 0.0 && player.angle < TAU);
    }

    #[test]
    fn test_damage_clamps_and_flashes() {
        let mut player = Player::new((1, 1), 30);
        assert!(!player.take_damage(12));
        assert_eq!(player.damage_flash, PLAYER_DAMAGE_FLASH);
        assert!(player.take_damage(25));
        assert_eq!(player.health.current, 0);

        let hud = player.hud();
        assert_eq!(hud.health, 0);
        assert_eq!(hud.max_health, 30);
        assert_eq!(hud.health_fraction, 0.0);
    }

    #[test]
    fn test_timers_stop_at_zero() {
        let mut player = Player::new((1, 1), 100);
        player.shoot_cooldown = SHOOT_COOLDOWN;
        player.damage_flash = 0.05;
        player.tick_timers(0.1);
        assert!((player.shoot_cooldown - (SHOOT_COOLDOWN - 0.1)).abs() < 1e-6);
        assert_eq!(player.damage_flash, 0.0);
    }

    #[test]
    fn test_spawns_at_cell_centre_facing_east() {
        let player = Player::new((1, 1), 100);
        assert_eq!(player.position, Vec2::new(1.5, 1.5));
        assert!((player.facing() - Vec2::X).length() < 1e-6);
    }
}
