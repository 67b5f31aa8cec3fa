//! Game engine - owns the session and exposes a step-driven API to hosts.
//!
//! The engine handles:
//! - Session lifecycle (menu, start, retry, win/lose)
//! - Simulation advancement
//! - Event processing
//! - Producing the frame and HUD data for the host
//!
//! Hosts only handle presenting the frame and feeding input.

mod game_state;
pub mod initialization;
mod simulation;

pub use game_state::GameState;
pub use simulation::*;

use crate::config::{DifficultyLevel, DifficultyTable};
use crate::constants::{RENDER_H, RENDER_W};
use crate::events::{EventQueue, GameEvent};
use crate::input::InputSnapshot;
use crate::player::HudSnapshot;
use crate::raycaster::DepthBuffer;
use crate::render::{Compositor, SpriteTextures};
use crate::stage::{Stage, THE_LABYRINTH};
use crate::systems::rendering::collect_sprites;

use image::RgbaImage;
use rand::Rng;
use tracing::{debug, info};

/// Session mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// No session running
    Menu,
    Playing,
    Won,
    Lost,
}

/// A message the host should show for a while
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub text: &'static str,
    pub duration_ms: u64,
}

/// Result of a step - everything the host needs to present it
pub struct FrameOutput<'a> {
    pub frame: &'a RgbaImage,
    pub hud: Option<HudSnapshot>,
    pub mode: GameMode,
    pub notifications: Vec<Notification>,
}

/// The game engine - owns all game state and simulation logic.
pub struct GameEngine {
    pub mode: GameMode,

    pub difficulty_table: DifficultyTable,

    /// Level used by the current or most recent session
    pub level: DifficultyLevel,

    /// Session state - None on the menu
    pub state: Option<GameState>,

    pub events: EventQueue,

    stage: &'static Stage,
    depth: DepthBuffer,
    compositor: Compositor,
}

impl GameEngine {
    /// Create an engine sitting on the menu.
    pub fn new(difficulty_table: DifficultyTable, rng: &mut impl Rng) -> Self {
        Self {
            mode: GameMode::Menu,
            difficulty_table,
            level: DifficultyLevel::default(),
            state: None,
            events: EventQueue::new(),
            stage: &THE_LABYRINTH,
            depth: DepthBuffer::new(RENDER_W),
            compositor: Compositor::new(
                RENDER_W as u32,
                RENDER_H as u32,
                SpriteTextures::generate(rng),
            ),
        }
    }

    /// Start a fresh session at the given difficulty.
    pub fn start(&mut self, level: DifficultyLevel) {
        let difficulty = self.difficulty_table.get(level);
        info!(%level, stage = self.stage.name, "starting session");

        self.level = level;
        self.state = Some(GameState::new(self.stage, difficulty));
        self.events = EventQueue::new();
        self.mode = GameMode::Playing;
    }

    /// Restart with the same difficulty.
    pub fn retry(&mut self) {
        self.start(self.level);
    }

    /// Drop the session and return to the menu.
    pub fn go_to_menu(&mut self) {
        self.state = None;
        self.mode = GameMode::Menu;
    }

    pub fn hud(&self) -> Option<HudSnapshot> {
        self.state.as_ref().map(|s| s.player.hud())
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &RgbaImage {
        self.compositor.frame()
    }

    /// Run one step and render it.
    ///
    /// Outside [`GameMode::Playing`] nothing is simulated or redrawn; the
    /// output just reports the mode. The input's single-shot fields are
    /// cleared once consumed.
    pub fn advance(&mut self, dt: f32, input: &mut InputSnapshot) -> FrameOutput<'_> {
        puffin::profile_function!();

        let mut notifications = Vec::new();

        if self.mode == GameMode::Playing {
            if let Some(state) = self.state.as_mut() {
                let outcome = simulation::step(state, input, dt, &mut self.events);
                input.clear_single_shot();

                match outcome {
                    StepOutcome::Continue => {
                        let camera = state.player.camera();
                        self.depth.build(&state.grid, &camera, state.exit_unlocked);
                        let sprites =
                            collect_sprites(&state.world, state.player.position, state.pickup_position());
                        self.compositor
                            .render(&self.depth, &camera, &sprites, state.player.damage_flash);
                    }
                    StepOutcome::Won => self.mode = GameMode::Won,
                    StepOutcome::Lost => self.mode = GameMode::Lost,
                }
            }
            notifications = self.process_events();
        }

        FrameOutput {
            frame: self.compositor.frame(),
            hud: self.hud(),
            mode: self.mode,
            notifications,
        }
    }

    /// Drain this step's events into logs and host notifications.
    fn process_events(&mut self) -> Vec<Notification> {
        let mut notifications = Vec::new();

        for event in self.events.drain() {
            match event {
                GameEvent::Notification { text, duration_ms } => {
                    notifications.push(Notification { text, duration_ms });
                }
                GameEvent::KeyCollected { cell } => {
                    debug!(?cell, "key pickup processed");
                }
                GameEvent::PlayerDamaged {
                    attacker,
                    damage,
                    remaining,
                } => {
                    debug!(?attacker, damage, remaining, "player hit");
                }
                GameEvent::AgentHit {
                    agent,
                    damage,
                    remaining,
                } => {
                    debug!(?agent, damage, remaining, "agent hit");
                }
                GameEvent::AgentDied { agent, position } => {
                    info!(?agent, ?position, "agent killed");
                }
                GameEvent::AIStateChanged { .. } => {}
                GameEvent::Won => info!(level = %self.level, "session won"),
                GameEvent::Lost => info!(level = %self.level, "session lost"),
            }
        }

        notifications
    }
}
