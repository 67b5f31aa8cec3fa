//! Input snapshot handed to the engine once per step.
//!
//! Hosts fill this from whatever devices they own (keyboard, mouse, touch
//! joystick, scripted autopilot). The engine only ever sees the reduced
//! form: a turn amount and a desired move direction.

use crate::constants::{MOUSE_LOOK_SENS, PLAYER_TURN_SPEED, TOUCH_LOOK_SENS};
use glam::Vec2;

/// Per-step input state
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    /// Virtual joystick; y negative is forward, x positive strafes right
    pub joystick: Vec2,
    /// Touch drag accumulated since the last step, in pixels
    pub look_delta: Vec2,
    /// Pointer-lock mouse motion accumulated since the last step, in pixels
    pub mouse_delta: Vec2,
    /// Single-shot fire request
    pub fire: bool,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Angle change for this step, in radians.
    pub fn turn_delta(&self, dt: f32) -> f32 {
        let mut delta = 0.0;
        if self.turn_left {
            delta -= PLAYER_TURN_SPEED * dt;
        }
        if self.turn_right {
            delta += PLAYER_TURN_SPEED * dt;
        }
        delta += self.mouse_delta.x * MOUSE_LOOK_SENS;
        delta += self.look_delta.x * TOUCH_LOOK_SENS;
        delta
    }

    /// Desired move direction for a viewpoint facing `angle`, before
    /// normalization and speed scaling.
    pub fn move_vector(&self, angle: f32) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        let mut dir = Vec2::ZERO;

        if self.forward {
            dir += Vec2::new(cos, sin);
        }
        if self.back {
            dir -= Vec2::new(cos, sin);
        }
        if self.strafe_left {
            dir += Vec2::new(sin, -cos);
        }
        if self.strafe_right {
            dir += Vec2::new(-sin, cos);
        }

        let joy = self.joystick;
        if joy != Vec2::ZERO {
            dir += Vec2::new(cos * -joy.y + sin * joy.x, sin * -joy.y - cos * joy.x);
        }

        dir
    }

    /// Drop the one-shot parts after a step consumed them.
    pub fn clear_single_shot(&mut self) {
        self.fire = false;
        self.look_delta = Vec2::ZERO;
        self.mouse_delta = Vec2::ZERO;
    }
}
