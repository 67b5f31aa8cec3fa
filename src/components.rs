use glam::Vec2;
use std::collections::VecDeque;

/// Position component - continuous world coordinates in cell units
#[derive(Debug, Clone, Copy)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Centre of a grid cell
    pub fn at_cell(x: i32, y: i32) -> Self {
        Self::new(x as f32 + 0.5, y as f32 + 0.5)
    }
}

/// Health component
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
        }
    }

    pub fn percentage(&self) -> f32 {
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    /// Subtract damage, clamping at zero. Returns true when this hit was lethal.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        if self.current <= 0 {
            return false;
        }
        self.current = (self.current - amount).max(0);
        self.current == 0
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// AI perception/combat state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AIState {
    #[default]
    Idle,
    Chasing,
    Attacking,
}

/// Chase AI component - tracks state and the cached route toward the player
#[derive(Debug, Clone)]
pub struct ChaseAI {
    pub state: AIState,
    pub detection_range: f32,
    /// Remaining waypoints, head first
    pub path: VecDeque<(i32, i32)>,
    /// Frames until the next forced path recompute
    pub path_timer: i32,
}

impl ChaseAI {
    pub fn new(detection_range: f32) -> Self {
        Self {
            state: AIState::Idle,
            detection_range,
            path: VecDeque::new(),
            path_timer: 0,
        }
    }
}

/// Movement speed multiplier bound from the difficulty at spawn
#[derive(Debug, Clone, Copy)]
pub struct Speed(pub f32);

/// Melee attack component
#[derive(Debug, Clone, Copy)]
pub struct Melee {
    pub damage: i32,
    /// Seconds until the next swing is allowed
    pub cooldown: f32,
}

impl Melee {
    pub fn new(damage: i32) -> Self {
        Self { damage, cooldown: 0.0 }
    }
}

/// Seconds remaining on the "just hit" tint
#[derive(Debug, Clone, Copy, Default)]
pub struct HitFlash(pub f32);

/// Marker for entities the player's attack can damage
#[derive(Debug, Clone, Copy)]
pub struct Attackable;

/// Marker left on an agent once its health reaches zero
#[derive(Debug, Clone, Copy)]
pub struct Corpse;
