//! Host-facing frame driver
//!
//! Wraps an optional `GameState` behind the two things a host actually does:
//! feed it frame deltas and forward presses of the single trigger. Frames are
//! split into fixed `SIM_DT` substeps so physics does not depend on refresh rate.

use crate::consts::{MAX_FRAME_DT, MAX_PENDING_EVENTS, MAX_SUBSTEPS, SIM_DT};
use crate::effective_dt;
use crate::sim::{FrameView, GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

#[derive(Debug, Default)]
pub struct Session {
    state: Option<GameState>,
    accumulator: f32,
    input: TickInput,
    events: Vec<GameEvent>,
}

impl Session {
    /// A session with no game yet; input is ignored until `begin`
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, seed: u64, tuning: Tuning) {
        log::info!("Session begins with seed {seed}");
        self.state = Some(GameState::with_tuning(seed, tuning));
        self.accumulator = 0.0;
        self.input = TickInput {
            autopilot: self.input.autopilot,
            ..Default::default()
        };
        self.events.clear();
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn phase(&self) -> Option<GamePhase> {
        self.state.as_ref().map(|s| s.phase)
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
    }

    /// One press of the start/jump trigger, consumed on the next substep
    pub fn trigger(&mut self) {
        let Some(state) = self.state.as_ref() else {
            log::debug!("Trigger ignored: no session");
            return;
        };
        let press = TickInput::trigger(state.phase);
        self.input.activate |= press.activate;
        self.input.jump |= press.jump;
    }

    /// Advance by one rendered frame; returns the number of substeps run
    pub fn frame(&mut self, dt: f32) -> u32 {
        let Some(state) = self.state.as_mut() else {
            return 0;
        };
        self.accumulator += effective_dt(dt).min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, &self.input, SIM_DT);
            self.events.extend(state.events.iter().cloned());
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.activate = false;
            self.input.jump = false;
        }
        if self.events.len() > MAX_PENDING_EVENTS {
            let overflow = self.events.len() - MAX_PENDING_EVENTS;
            self.events.drain(..overflow);
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }

    /// Events raised since the last drain; hosts should drain every frame,
    /// only the newest MAX_PENDING_EVENTS are kept otherwise
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn view(&self) -> Option<FrameView> {
        self.state.as_ref().map(GameState::view)
    }
}
