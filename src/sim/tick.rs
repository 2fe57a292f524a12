//! Per-frame simulation tick
//!
//! Core game loop that advances the runner by one host frame.

use super::state::{GameEvent, GamePhase, GameState, InputEvent};
use crate::consts::AUTOPILOT_LEAD_TIME;
use crate::effective_dt;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start or restart the run
    pub activate: bool,
    /// Jump (ignored unless playing and grounded)
    pub jump: bool,
    /// Attract/demo mode - the game plays itself
    pub autopilot: bool,
}

impl TickInput {
    /// Input for one press of the single start/jump trigger
    pub fn trigger(phase: GamePhase) -> Self {
        match InputEvent::for_trigger(phase) {
            InputEvent::ActivateOrRestart => Self {
                activate: true,
                ..Default::default()
            },
            InputEvent::JumpRequested => Self {
                jump: true,
                ..Default::default()
            },
        }
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    let dt = effective_dt(dt);

    let mut input = input.clone();
    if input.autopilot {
        match state.phase {
            GamePhase::Start => input.activate = true,
            GamePhase::Playing => {
                // Jump so the apex lines up with the obstacle's arrival
                let z = state.obstacle.approach_position;
                let lead = state.speed() * AUTOPILOT_LEAD_TIME;
                if z < 0.0 && -z <= lead && state.player.is_grounded() {
                    input.jump = true;
                }
            }
            GamePhase::Dead => {}
        }
    }

    let was_playing = state.phase == GamePhase::Playing;
    if input.activate {
        state.activate();
    }
    if input.jump {
        state.request_jump();
    }

    state.time_ticks += 1;

    let playing = state.phase == GamePhase::Playing;
    let dead = state.phase == GamePhase::Dead;

    let player = state
        .player
        .update(dt, state.jump_requested, playing, dead, &state.tuning);
    if player.launched {
        state.events.push(GameEvent::Jumped);
    }
    if player.landed {
        state.jump_requested = false;
        log::trace!("Landed at tick {}", state.time_ticks);
        state.events.push(GameEvent::Landed);
    }

    let speed = state.speed();
    let obstacle = state.obstacle.update(
        dt,
        speed,
        &state.player,
        playing,
        dead,
        &state.tuning,
        &mut state.rng,
    );
    if let Some(z) = obstacle.recycled_to {
        log::debug!("Obstacle recycled to z={z:.2}");
        state.events.push(GameEvent::ObstacleRecycled { z });
    }
    if obstacle.collided {
        state.crash();
    }

    // Time before the activating press never counts toward the new run
    if was_playing && state.phase == GamePhase::Playing {
        state.score += u64::from(state.score_timer.advance(dt));
    }
}
