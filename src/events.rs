//! Game event system for decoupled communication between systems.
//!
//! Systems push events during a step; the engine drains them at the end of
//! the step to drive logging, notifications and session outcome.

use crate::components::AIState;
use hecs::Entity;

/// Game events that systems can emit
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The viewpoint picked up the key
    KeyCollected { cell: (i32, i32) },
    /// Show a transient message to the player
    Notification { text: &'static str, duration_ms: u64 },
    /// An agent's melee swing connected
    PlayerDamaged { attacker: Entity, damage: i32, remaining: i32 },
    /// The player's attack hit an agent
    AgentHit { agent: Entity, damage: i32, remaining: i32 },
    /// An agent's health reached zero
    AgentDied { agent: Entity, position: (f32, f32) },
    /// An agent changed behaviour state
    AIStateChanged { entity: Entity, new_state: AIState },
    /// The viewpoint reached the exit carrying the key
    Won,
    /// The viewpoint's health reached zero
    Lost,
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }
}
