//! One simulation step, in a fixed order: exit lock, player, agents,
//! player attack, then corpse cleanup.

use crate::constants::MAX_STEP_DT;
use crate::events::{EventQueue, GameEvent};
use crate::input::InputSnapshot;
use crate::systems::{ai, combat, movement, triggers};

use super::GameState;

/// How a step ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Won,
    Lost,
}

/// Clamp a host-supplied delta so a stall never becomes one huge step.
pub fn clamp_dt(dt: f32) -> f32 {
    dt.clamp(0.0, MAX_STEP_DT)
}

/// Advance the session by `dt` seconds.
///
/// Stops early on the first terminal outcome: a win skips the agent update,
/// a loss skips the player's attack.
pub fn step(
    state: &mut GameState,
    input: &InputSnapshot,
    dt: f32,
    events: &mut EventQueue,
) -> StepOutcome {
    puffin::profile_function!();
    let dt = clamp_dt(dt);

    triggers::update_exit_lock(&state.player, &mut state.exit_unlocked);

    {
        puffin::profile_scope!("player");
        movement::move_player(&mut state.player, &state.grid, input, dt, state.exit_unlocked);
        triggers::check_pickup(&mut state.grid, &mut state.player, events);
        if triggers::reached_exit(&state.player, state.stage.exit) {
            events.push(GameEvent::Won);
            return StepOutcome::Won;
        }
        state.player.tick_timers(dt);
    }

    ai::update_agents(
        &mut state.world,
        &state.grid,
        &mut state.player,
        dt,
        state.exit_unlocked,
        events,
    );
    if state.player.health.is_dead() {
        events.push(GameEvent::Lost);
        return StepOutcome::Lost;
    }

    if input.fire {
        combat::player_attack(
            &mut state.world,
            &state.grid,
            &mut state.player,
            state.exit_unlocked,
            events,
        );
    }

    combat::remove_dead_agents(&mut state.world, events);

    StepOutcome::Continue
}
